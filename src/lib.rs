mod consts;
mod format;
mod prelude;
mod span;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use format::{FormatOptions, MonthNames, MonthStyle, format_date_string};
pub use span::{EventTimeSpan, SpanError};
pub use types::{Day, Hour, Minute, Month, Year};

use crate::prelude::*;
use std::str::FromStr;
use types::days_in_month;

/// A single point on the event calendar with minute precision.
/// All components are validated at construction, so every value of this type
/// names a real calendar minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{:04}-{:02}-{:02}T{:02}:{:02}",
    "year.get()",
    "month.number()",
    "day.get()",
    "hour.get()",
    "minute.get()"
)]
pub struct EventInstant {
    year: Year,
    month: Month,
    day: Day,
    hour: Hour,
    minute: Minute,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid instant format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", MAX_MONTH_INDEX)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month index {month} in year {year}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Empty instant string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl EventInstant {
    /// Creates a new instant from already validated components
    pub const fn new(year: Year, month: Month, day: Day, hour: Hour, minute: Minute) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Creates an instant from raw calendar fields as a feed delivers them:
    /// zero-based month index, one-based day of month.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that fails validation.
    pub fn from_parts(
        year: u16,
        month_index: u8,
        day: u8,
        hour: u8,
        minute: u8,
    ) -> Result<Self, ParseError> {
        let year_v = Year::new(year)?;
        let month_v = Month::new(month_index)?;
        let day_v = Day::new(day, year, month_index)?;
        let hour_v = Hour::new(hour)?;
        let minute_v = Minute::new(minute)?;
        Ok(Self::new(year_v, month_v, day_v, hour_v, minute_v))
    }

    /// Returns the year component
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the month component (zero-based index)
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> Day {
        self.day
    }

    /// Returns the hour component
    pub const fn hour(&self) -> Hour {
        self.hour
    }

    /// Returns the minute component
    pub const fn minute(&self) -> Minute {
        self.minute
    }

    /// Converts to raw calendar fields: (year, `month_index`, day, hour, minute)
    pub const fn to_parts(&self) -> (u16, u8, u8, u8, u8) {
        (
            self.year.get(),
            self.month.index(),
            self.day.get(),
            self.hour.get(),
            self.minute.get(),
        )
    }

    /// True when the instant lands exactly on local midnight, the
    /// conventional exclusive end-of-day marker for all-day events.
    pub const fn is_midnight(&self) -> bool {
        self.hour.get() == 0 && self.minute.get() == 0
    }

    /// The same time of day one calendar day earlier.
    /// Returns `None` at the calendar minimum (0001-01-01).
    pub fn previous_day(self) -> Option<Self> {
        let (py, pm, pd) = prev_day(self.year.get(), self.month.index(), self.day.get())?;
        let year = Year::new(py).ok()?;
        let month = Month::new(pm).ok()?;
        let day = Day::new(pd, py, pm).ok()?;
        Some(Self::new(year, month, day, self.hour, self.minute))
    }
}

// --- helpers for day arithmetic ---
fn prev_month(year: u16, month_index: u8) -> Option<(u16, u8)> {
    debug_assert!(month_index <= MAX_MONTH_INDEX);
    if month_index == JANUARY_INDEX {
        if year <= MIN_YEAR {
            None
        } else {
            Some((year - 1, DECEMBER_INDEX))
        }
    } else {
        Some((year, month_index - 1))
    }
}

fn prev_day(year: u16, month_index: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day > MIN_DAY {
        Some((year, month_index, day - 1))
    } else {
        // roll to last day of previous month (respects MIN_YEAR limit)
        prev_month(year, month_index).map(|(py, pm)| (py, pm, days_in_month(py, pm)))
    }
}

impl FromStr for EventInstant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strict ISO form: YYYY-MM-DDTHH:MM with a single time designator
        let designator_count = trimmed.matches(TIME_DESIGNATOR).count();
        if designator_count != 1 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected one '{TIME_DESIGNATOR}' designator, found {designator_count}: {s}"
            )));
        }
        let (date_str, time_str) = trimmed
            .split_once(TIME_DESIGNATOR)
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;

        let date_parts: Vec<&str> = date_str.split(DATE_SEPARATOR).map(|p| p.trim()).collect();
        if date_parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY-MM-DD before '{TIME_DESIGNATOR}': {date_str}"
            )));
        }
        let time_parts: Vec<&str> = time_str.split(TIME_SEPARATOR).map(|p| p.trim()).collect();
        if time_parts.len() != 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected HH{TIME_SEPARATOR}MM after '{TIME_DESIGNATOR}': {time_str}"
            )));
        }

        // Parse components - InvalidFormat if not numeric
        let year_u16 = Self::parse_u16(date_parts[0])?;
        let month_u8 = Self::parse_u8(date_parts[1])?;
        let day_u8 = Self::parse_u8(date_parts[2])?;
        let hour_u8 = Self::parse_u8(time_parts[0])?;
        let minute_u8 = Self::parse_u8(time_parts[1])?;

        // Validate and convert; the text form carries one-based months
        let year = Year::new(year_u16)?;
        let month = Month::from_number(month_u8)?;
        let day = Day::new(day_u8, year_u16, month.index())?;
        let hour = Hour::new(hour_u8)?;
        let minute = Minute::new(minute_u8)?;

        Ok(Self::new(year, month, day, hour, minute))
    }
}

impl EventInstant {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u16, u8, u8, u8, u8)> for EventInstant {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1, value.2, value.3, value.4)
    }
}

impl serde::Serialize for EventInstant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EventInstant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::instant;

    #[test]
    fn test_from_parts() {
        let i = EventInstant::from_parts(2024, 2, 5, 14, 30).unwrap();
        assert_eq!(i.year().get(), 2024);
        assert_eq!(i.month().index(), 2);
        assert_eq!(i.month().number(), 3);
        assert_eq!(i.day().get(), 5);
        assert_eq!(i.hour().get(), 14);
        assert_eq!(i.minute().get(), 30);
    }

    #[test]
    fn test_from_parts_invalid_month_index() {
        let result = EventInstant::from_parts(2024, 12, 5, 0, 0);
        assert!(matches!(result, Err(ParseError::InvalidMonth(12))));

        let result = EventInstant::from_parts(2024, 255, 5, 0, 0);
        assert!(matches!(result, Err(ParseError::InvalidMonth(255))));
    }

    #[test]
    fn test_from_parts_invalid_day() {
        // February 30th does not exist
        let result = EventInstant::from_parts(2024, 1, 30, 0, 0);
        assert!(matches!(result, Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_from_parts_invalid_time() {
        let result = EventInstant::from_parts(2024, 0, 1, 24, 0);
        assert!(matches!(result, Err(ParseError::InvalidHour(24))));

        let result = EventInstant::from_parts(2024, 0, 1, 0, 60);
        assert!(matches!(result, Err(ParseError::InvalidMinute(60))));
    }

    #[test]
    fn test_to_parts_round_trip() {
        let i = instant(2024, 2, 5, 14, 30);
        let parts = i.to_parts();
        assert_eq!(parts, (2024, 2, 5, 14, 30));
        let restored = EventInstant::try_from(parts).unwrap();
        assert_eq!(i, restored);
    }

    #[test]
    fn test_display_one_based_month() {
        // Month index 2 renders as "03" in the text form
        let i = instant(2024, 2, 5, 14, 30);
        assert_eq!(i.to_string(), "2024-03-05T14:30");

        let i = instant(800, 0, 1, 0, 0);
        assert_eq!(i.to_string(), "0800-01-01T00:00");
    }

    #[test]
    fn test_parse_valid() {
        let i = "2024-03-05T14:30".parse::<EventInstant>().unwrap();
        assert_eq!(i, instant(2024, 2, 5, 14, 30));
    }

    #[test]
    fn test_parse_display_round_trip() {
        for text in ["2024-03-05T14:30", "0001-01-01T00:00", "9999-12-31T23:59"] {
            let i = text.parse::<EventInstant>().unwrap();
            assert_eq!(i.to_string(), text);
        }
    }

    #[test]
    fn test_parse_with_whitespace() {
        let i = " 2024-03-05T14:30 ".parse::<EventInstant>().unwrap();
        assert_eq!(i, instant(2024, 2, 5, 14, 30));
    }

    #[test]
    fn test_parse_empty() {
        let result = "".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));

        let result = "   ".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_missing_time() {
        let result = "2024-03-05".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_bad_shapes() {
        // Too few date components
        let result = "2024-03T14:30".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        // Too many date components
        let result = "2024-03-05-06T14:30".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        // Missing minutes
        let result = "2024-03-05T14".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        // Two designators
        let result = "2024-03-05T14:30T00".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_bad_tokens() {
        let result = "20XX-03-05T14:30".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "2024-03-05T1a:30".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_validates_components() {
        // Month 13 in one-based text form
        let result = "2024-13-05T14:30".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidMonth(13))));

        // Month 0 in one-based text form
        let result = "2024-00-05T14:30".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidMonth(0))));

        // Invalid day for February
        let result = "2023-02-29T14:30".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidDay { .. })));

        // Invalid time fields
        let result = "2024-03-05T24:00".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidHour(24))));
        let result = "2024-03-05T14:60".parse::<EventInstant>();
        assert!(matches!(result, Err(ParseError::InvalidMinute(60))));
    }

    #[test]
    fn test_is_midnight() {
        assert!(instant(2024, 2, 5, 0, 0).is_midnight());
        assert!(!instant(2024, 2, 5, 0, 1).is_midnight());
        assert!(!instant(2024, 2, 5, 1, 0).is_midnight());
        assert!(!instant(2024, 2, 5, 23, 59).is_midnight());
    }

    #[test]
    fn test_previous_day_mid_month() {
        let i = instant(2024, 2, 5, 0, 0);
        let prev = i.previous_day().unwrap();
        assert_eq!(prev, instant(2024, 2, 4, 0, 0));
    }

    #[test]
    fn test_previous_day_keeps_time_of_day() {
        let i = instant(2024, 2, 5, 14, 30);
        let prev = i.previous_day().unwrap();
        assert_eq!(prev.to_parts(), (2024, 2, 4, 14, 30));
    }

    #[test]
    fn test_previous_day_month_boundary() {
        struct TestCase {
            from: (u16, u8, u8),
            to: (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                from: (2024, 2, 1),
                to: (2024, 1, 29),
                description: "1 March rolls to 29 February in a leap year",
            },
            TestCase {
                from: (2023, 2, 1),
                to: (2023, 1, 28),
                description: "1 March rolls to 28 February in a non-leap year",
            },
            TestCase {
                from: (2024, 4, 1),
                to: (2024, 3, 30),
                description: "1 May rolls to 30 April",
            },
            TestCase {
                from: (2024, 0, 1),
                to: (2023, 11, 31),
                description: "1 January rolls to 31 December of the previous year",
            },
        ];

        for case in &cases {
            let (fy, fm, fd) = case.from;
            let (ty, tm, td) = case.to;
            let prev = instant(fy, fm, fd, 0, 0).previous_day();
            assert_eq!(
                prev,
                Some(instant(ty, tm, td, 0, 0)),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_previous_day_at_calendar_minimum() {
        let i = instant(1, 0, 1, 0, 0);
        assert_eq!(i.previous_day(), None);
    }

    #[test]
    fn test_ordering() {
        let a = instant(2024, 2, 5, 14, 30);
        let b = instant(2024, 2, 5, 14, 31);
        let c = instant(2024, 2, 6, 0, 0);
        let d = instant(2024, 3, 1, 0, 0);
        let e = instant(2025, 0, 1, 0, 0);

        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
        assert!(d < e);
        assert_eq!(a, instant(2024, 2, 5, 14, 30));
    }

    #[test]
    fn test_serde_string_format() {
        let i = instant(2024, 2, 5, 14, 30);
        let json = serde_json::to_string(&i).unwrap();
        assert_eq!(json, r#""2024-03-05T14:30""#);

        let parsed: EventInstant = serde_json::from_str(&json).unwrap();
        assert_eq!(i, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Invalid month (13) should be rejected
        let result: Result<EventInstant, _> = serde_json::from_str(r#""2024-13-05T14:30""#);
        assert!(result.is_err());

        // Invalid day for February should be rejected
        let result: Result<EventInstant, _> = serde_json::from_str(r#""2023-02-29T00:00""#);
        assert!(result.is_err());

        // Invalid hour should be rejected
        let result: Result<EventInstant, _> = serde_json::from_str(r#""2024-03-05T25:00""#);
        assert!(result.is_err());

        // Valid values should succeed
        let result: Result<EventInstant, _> = serde_json::from_str(r#""2024-02-29T00:00""#);
        assert!(result.is_ok());
    }
}
