use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_NEXT_MONTH_ICON, DEFAULT_PREVIOUS_MONTH_ICON};
use crate::types::CalendarDate;

/// Settings for a [`MonthSelector`](crate::MonthSelector).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Earliest selectable date
    pub minimum: CalendarDate,
    /// Latest selectable date
    pub maximum: CalendarDate,
    #[serde(default = "default_previous_month_icon")]
    pub previous_month_icon: String,
    #[serde(default = "default_next_month_icon")]
    pub next_month_icon: String,
}

impl SelectorConfig {
    /// Creates a config with the default navigation icons
    pub fn new(minimum: CalendarDate, maximum: CalendarDate) -> Self {
        Self {
            minimum,
            maximum,
            previous_month_icon: default_previous_month_icon(),
            next_month_icon: default_next_month_icon(),
        }
    }
}

fn default_previous_month_icon() -> String {
    DEFAULT_PREVIOUS_MONTH_ICON.to_owned()
}

fn default_next_month_icon() -> String {
    DEFAULT_NEXT_MONTH_ICON.to_owned()
}
