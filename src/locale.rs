use serde::{Deserialize, Serialize};

use crate::consts::{ENGLISH_SHORT_MONTHS, MONTHS_PER_YEAR};
use crate::types::DayOfWeek;
use crate::CalendarError;

/// Locale data the selector and calendar helpers consume.
///
/// Fields left out of a serialized locale fall back to the English defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    first_day_of_week: DayOfWeek,
    weekend_start: DayOfWeek,
    weekend_end: DayOfWeek,
    short_month_names: [String; MONTHS_PER_YEAR as usize],
}

impl Locale {
    pub const fn new(
        first_day_of_week: DayOfWeek,
        weekend_start: DayOfWeek,
        weekend_end: DayOfWeek,
        short_month_names: [String; MONTHS_PER_YEAR as usize],
    ) -> Self {
        Self {
            first_day_of_week,
            weekend_start,
            weekend_end,
            short_month_names,
        }
    }

    pub const fn first_day_of_week(&self) -> DayOfWeek {
        self.first_day_of_week
    }

    pub const fn weekend_start(&self) -> DayOfWeek {
        self.weekend_start
    }

    pub const fn weekend_end(&self) -> DayOfWeek {
        self.weekend_end
    }

    pub const fn short_month_names(&self) -> &[String; MONTHS_PER_YEAR as usize] {
        &self.short_month_names
    }

    /// Short name of a 0-based month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the index is not 0-11.
    pub fn short_month_name(&self, month: u32) -> Result<&str, CalendarError> {
        usize::try_from(month)
            .ok()
            .and_then(|index| self.short_month_names.get(index))
            .map(String::as_str)
            .ok_or(CalendarError::InvalidMonth(month))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            first_day_of_week: DayOfWeek::SUNDAY,
            weekend_start: DayOfWeek::SATURDAY,
            weekend_end: DayOfWeek::SUNDAY,
            short_month_names: ENGLISH_SHORT_MONTHS.map(str::to_owned),
        }
    }
}
