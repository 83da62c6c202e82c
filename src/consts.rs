/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid zero-based month index (December)
pub const MAX_MONTH_INDEX: u8 = 11;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Maximum valid hour
pub const MAX_HOUR: u8 = 23;

/// Maximum valid minute
pub const MAX_MINUTE: u8 = 59;

/// Zero-based index for January
pub const JANUARY_INDEX: u8 = 0;
/// Zero-based index for February
pub const FEBRUARY_INDEX: u8 = 1;
/// Zero-based index for December
pub const DECEMBER_INDEX: u8 = 11;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month, indexed by zero-based month index.
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month names used by the display formatter's name style.
/// Indexed by zero-based month index (January = 0).
pub const MONTH_NAMES_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between date and time components (ISO 8601 format)
pub const TIME_DESIGNATOR: char = 'T';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between the start and end of a span (ISO 8601 extended format)
pub const SPAN_SEPARATOR: char = '/';
