/// Number of months in a year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Month index for January (months are 0-based)
pub const JANUARY: u32 = 0;
/// Month index for February
pub const FEBRUARY: u32 = 1;
/// Month index for July, the last month of the odd-short half of the year
pub const JULY: u32 = 6;
/// Month index for December
pub const DECEMBER: u32 = 11;

/// First day of month
pub const MIN_DAY: u32 = 1;
/// Days in February for non-leap years
pub const FEBRUARY_DAYS: u32 = 28;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;
/// Days in April, June, September and November
pub const SHORT_MONTH_DAYS: u32 = 30;
/// Days in the remaining months
pub const LONG_MONTH_DAYS: u32 = 31;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Hour of day that dates are normalized to before day arithmetic.
/// Noon never coincides with a daylight-saving transition.
pub const RESET_HOUR: u32 = 12;

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Days in a week; day-of-week values run `0..DAYS_PER_WEEK` starting at Sunday
pub const DAYS_PER_WEEK: u8 = 7;

/// Icon shown on the previous-month control when none is configured
pub const DEFAULT_PREVIOUS_MONTH_ICON: &str = "images/datepicker/prev_month.png";
/// Icon shown on the next-month control when none is configured
pub const DEFAULT_NEXT_MONTH_ICON: &str = "images/datepicker/next_month.png";

/// Short month names used by the default locale
pub const ENGLISH_SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
