//! Display formatting for event time spans.
//!
//! Produces the short date-range strings shown next to event titles in a
//! rendered calendar list: `"5. März"`, `"1.-3. Januar"`,
//! `"30. Januar - 2. Februar"`, or the numeric forms `"5.03."`,
//! `"1.-3.01."`, `"30.01.-2.02."`.

use serde::{Deserialize, Serialize};

use crate::EventTimeSpan;
use crate::consts::MONTH_NAMES_DE;
use crate::types::Month;

/// How the month part of a formatted span is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    /// Month name from the configured name table, e.g. `5. März`
    #[default]
    Name,
    /// Zero-padded one-based month number, e.g. `5.03.`
    Numeric,
}

/// An immutable table of 12 month names, indexed by zero-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNames([&'static str; 12]);

impl MonthNames {
    /// The German month names the formatter ships with.
    pub const GERMAN: Self = Self(MONTH_NAMES_DE);

    /// Creates a table from 12 names, January first.
    pub const fn new(names: [&'static str; 12]) -> Self {
        Self(names)
    }

    /// Returns the name for the given month.
    pub const fn get(&self, month: Month) -> &'static str {
        self.0[month.index() as usize]
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::GERMAN
    }
}

/// Configuration for [`format_date_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Month rendering style
    pub month_style: MonthStyle,
    /// When true, an end instant at exactly 00:00 is treated as the
    /// exclusive end-of-day marker of an all-day event and pulled back to
    /// the last day the event actually covers.
    pub apply_midnight_rollback: bool,
    /// Name table used by [`MonthStyle::Name`]
    pub month_names: MonthNames,
}

impl FormatOptions {
    /// Creates options with the given style and rollback setting, using the
    /// default month-name table.
    pub const fn new(month_style: MonthStyle, apply_midnight_rollback: bool) -> Self {
        Self {
            month_style,
            apply_midnight_rollback,
            month_names: MonthNames::GERMAN,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new(MonthStyle::Name, true)
    }
}

/// Formats the date or date range of an event for display.
///
/// `None` means the event carries no time data and yields the empty string.
/// The output covers three shapes, chosen in this priority order: a
/// cross-month range, a same-month range, or a single day.
///
/// Pure function over its input; the same span and options always produce
/// the same string.
pub fn format_date_string(span: Option<&EventTimeSpan>, options: &FormatOptions) -> String {
    let Some(span) = span else {
        return String::new();
    };

    let start = span.start();
    let mut end = span.end();
    if options.apply_midnight_rollback && end.is_midnight() {
        // An all-day event ending "at midnight of day D" covers up to day
        // D-1. At the calendar minimum there is no previous day; the span
        // then starts and ends on the same instant and the single-day shape
        // comes out either way.
        if let Some(previous) = end.previous_day() {
            end = previous;
        }
    }

    let start_day = start.day().get();
    let start_month = start.month();
    let end_day = end.day().get();
    let end_month = end.month();

    if start_month != end_month {
        format_cross_month(start_day, start_month, end_day, end_month, options)
    } else if start_day != end_day {
        format_same_month(start_day, end_day, end_month, options)
    } else {
        format_single_day(start_day, start_month, options)
    }
}

impl EventTimeSpan {
    /// Formats this span for display.
    /// Shorthand for [`format_date_string`] with a present span.
    pub fn format_date(&self, options: &FormatOptions) -> String {
        format_date_string(Some(self), options)
    }
}

fn format_single_day(day: u8, month: Month, options: &FormatOptions) -> String {
    format!("{}{}", format_day(day), format_month(month, options))
}

fn format_same_month(day1: u8, day2: u8, month: Month, options: &FormatOptions) -> String {
    format!(
        "{}-{}{}",
        format_day(day1),
        format_day(day2),
        format_month(month, options)
    )
}

fn format_cross_month(
    day1: u8,
    month1: Month,
    day2: u8,
    month2: Month,
    options: &FormatOptions,
) -> String {
    // The name style separates the halves with a spaced dash; the numeric
    // style packs them tight.
    let separator = match options.month_style {
        MonthStyle::Name => " - ",
        MonthStyle::Numeric => "-",
    };
    format!(
        "{}{}{separator}{}{}",
        format_day(day1),
        format_month(month1, options),
        format_day(day2),
        format_month(month2, options)
    )
}

fn format_day(day: u8) -> String {
    format!("{day}.")
}

fn format_month(month: Month, options: &FormatOptions) -> String {
    match options.month_style {
        MonthStyle::Name => format!(" {}", options.month_names.get(month)),
        MonthStyle::Numeric => format!("{:02}.", month.number()),
    }
}
