use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{EventInstant, ParseError, SPAN_SEPARATOR, prelude::*};

/// The start and end instants of a calendar event (inclusive on both sides).
/// The start must be less than or equal to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct EventTimeSpan {
    start: EventInstant,
    end: EventInstant,
}

/// Error type for event time span operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Start instant is after end instant.
    #[error("Invalid time span: start ({start}) is after end ({end})")]
    InvalidSpan {
        start: EventInstant,
        end: EventInstant,
    },

    /// Error parsing an instant component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid span format.
    #[error("Invalid span format: {0}")]
    InvalidFormat(String),
}

impl EventTimeSpan {
    /// Creates a new time span with validation.
    ///
    /// # Errors
    /// Returns `SpanError::InvalidSpan` if start > end.
    pub fn new(start: EventInstant, end: EventInstant) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start instant of the span
    pub const fn start(&self) -> EventInstant {
        self.start
    }

    /// Returns the end instant of the span
    pub const fn end(&self) -> EventInstant {
        self.end
    }

    /// Returns both start and end instants as a tuple
    pub const fn instants(&self) -> (EventInstant, EventInstant) {
        (self.start, self.end)
    }

    /// Checks if the span contains a given instant (inclusive bounds)
    pub fn contains(&self, instant: &EventInstant) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// Checks if this span overlaps with another span
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Creates a span from raw calendar fields for both instants:
    /// (year, `month_index`, day, hour, minute) each, zero-based months.
    ///
    /// # Errors
    /// Returns `SpanError` if either instant is invalid or start > end.
    pub fn from_parts(
        start: (u16, u8, u8, u8, u8),
        end: (u16, u8, u8, u8, u8),
    ) -> Result<Self, SpanError> {
        let start = EventInstant::try_from(start)?;
        let end = EventInstant::try_from(end)?;
        Self::new(start, end)
    }
}

impl FromStr for EventTimeSpan {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 extended format: use SPAN_SEPARATOR to separate start/end
        let separator_count = trimmed.matches(SPAN_SEPARATOR).count();

        match separator_count {
            0 => Err(SpanError::InvalidFormat(format!(
                "No span separator found (expected '{SPAN_SEPARATOR}'): {s}"
            ))),
            1 => {
                let pos = trimmed.find(SPAN_SEPARATOR).ok_or_else(|| {
                    SpanError::InvalidFormat(format!(
                        "Separator '{SPAN_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let start_str = trimmed[..pos].trim();
                let end_str = trimmed[pos + 1..].trim();

                let start = start_str.parse::<EventInstant>()?;
                let end = end_str.parse::<EventInstant>()?;

                Self::new(start, end)
            }
            _ => Err(SpanError::InvalidFormat(format!(
                "Too many '{SPAN_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for EventTimeSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EventTimeSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
