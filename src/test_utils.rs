//! Shared constructor helpers for tests.

use crate::{EventInstant, EventTimeSpan};

/// Builds an instant from raw fields, panicking on invalid test data.
pub(crate) fn instant(year: u16, month_index: u8, day: u8, hour: u8, minute: u8) -> EventInstant {
    EventInstant::from_parts(year, month_index, day, hour, minute)
        .unwrap_or_else(|e| panic!("invalid test instant: {e}"))
}

/// Builds a span from raw fields for both instants, panicking on invalid test data.
pub(crate) fn span(start: (u16, u8, u8, u8, u8), end: (u16, u8, u8, u8, u8)) -> EventTimeSpan {
    EventTimeSpan::from_parts(start, end).unwrap_or_else(|e| panic!("invalid test span: {e}"))
}
