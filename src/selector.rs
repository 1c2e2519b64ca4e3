use log::{debug, trace};

use crate::calendar::{add_days_to_date, add_months_to_date, get_days_between};
use crate::config::SelectorConfig;
use crate::consts::{DEFAULT_NEXT_MONTH_ICON, DEFAULT_PREVIOUS_MONTH_ICON};
use crate::locale::Locale;
use crate::model::{CalendarModel, MonthModel};
use crate::types::CalendarDate;
use crate::CalendarError;

/// Error type for month selector operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Minimum date is after maximum date.
    #[error("Invalid selector range: minimum ({minimum}) is after maximum ({maximum})")]
    InvalidRange {
        minimum: CalendarDate,
        maximum: CalendarDate,
    },

    /// Selected year index is not in the year list.
    #[error("No year at index {index} (list has {len} entries)")]
    UnknownYearIndex { index: usize, len: usize },

    /// Selected month index is not in the month list.
    #[error("No month at index {index} (list has {len} entries)")]
    UnknownMonthIndex { index: usize, len: usize },

    /// Date arithmetic failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// A selection list as shown by the rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListControl {
    items:    Vec<String>,
    selected: Option<usize>,
}

impl ListControl {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A list can take a selection once it has been populated
    pub fn is_ready(&self) -> bool {
        !self.items.is_empty()
    }

    fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = None;
    }

    fn push(&mut self, item: String) {
        self.items.push(item);
    }

    /// Selects `index` if it is populated; returns whether it was.
    fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }
}

/// A previous/next month button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationControl {
    icon:    String,
    enabled: bool,
}

impl NavigationControl {
    fn new(icon: String) -> Self {
        Self {
            icon,
            enabled: false,
        }
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Whether pressing the control would move the displayed month
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Month/year header of a date picker, bounded by a minimum and maximum date.
///
/// The selector owns its month model and refreshes itself after every shift
/// it requests. The rendering surface reads the controls and forwards user
/// input to the `navigate_*` and `select_*` handlers.
#[derive(Debug)]
pub struct MonthSelector<M = CalendarModel> {
    model:        M,
    locale:       Locale,
    minimum:      CalendarDate,
    maximum:      CalendarDate,
    month_offset: u32,
    months:       ListControl,
    years:        ListControl,
    previous:     NavigationControl,
    next:         NavigationControl,
}

impl<M: MonthModel> MonthSelector<M> {
    /// Creates a selector with the default navigation icons.
    ///
    /// # Errors
    /// Returns `SelectorError::InvalidRange` if `minimum` is after `maximum`.
    pub fn new(
        model: M,
        minimum: CalendarDate,
        maximum: CalendarDate,
        locale: Locale,
    ) -> Result<Self, SelectorError> {
        Self::with_icons(
            model,
            minimum,
            maximum,
            locale,
            DEFAULT_PREVIOUS_MONTH_ICON,
            DEFAULT_NEXT_MONTH_ICON,
        )
    }

    /// Creates a selector with custom navigation icons.
    ///
    /// # Errors
    /// Returns `SelectorError::InvalidRange` if `minimum` is after `maximum`.
    pub fn with_icons(
        model: M,
        minimum: CalendarDate,
        maximum: CalendarDate,
        locale: Locale,
        previous_icon: impl Into<String>,
        next_icon: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        validate_range(minimum, maximum)?;
        let mut selector = Self {
            model,
            locale,
            minimum,
            maximum,
            month_offset: 0,
            months: ListControl::default(),
            years: ListControl::default(),
            previous: NavigationControl::new(previous_icon.into()),
            next: NavigationControl::new(next_icon.into()),
        };
        selector.populate_year_list();
        selector.refresh()?;
        Ok(selector)
    }

    /// Creates a selector from deserialized settings.
    ///
    /// # Errors
    /// Returns `SelectorError::InvalidRange` if the configured minimum is after the maximum.
    pub fn from_config(
        model: M,
        config: SelectorConfig,
        locale: Locale,
    ) -> Result<Self, SelectorError> {
        Self::with_icons(
            model,
            config.minimum,
            config.maximum,
            locale,
            config.previous_month_icon,
            config.next_month_icon,
        )
    }

    pub const fn model(&self) -> &M {
        &self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    pub const fn minimum_date(&self) -> CalendarDate {
        self.minimum
    }

    pub const fn maximum_date(&self) -> CalendarDate {
        self.maximum
    }

    /// Index in the month list that January of the displayed year would have
    pub const fn month_offset(&self) -> u32 {
        self.month_offset
    }

    pub const fn month_list(&self) -> &ListControl {
        &self.months
    }

    pub const fn year_list(&self) -> &ListControl {
        &self.years
    }

    pub const fn previous_control(&self) -> &NavigationControl {
        &self.previous
    }

    pub const fn next_control(&self) -> &NavigationControl {
        &self.next
    }

    /// Replaces the minimum date and rebuilds both lists.
    /// The displayed month is left where it is.
    ///
    /// # Errors
    /// Returns `SelectorError::InvalidRange` if `minimum` is after the maximum.
    pub fn set_minimum_date(&mut self, minimum: CalendarDate) -> Result<(), SelectorError> {
        validate_range(minimum, self.maximum)?;
        debug!("Minimum date changed from {} to {minimum}", self.minimum);
        self.minimum = minimum;
        self.rebuild_lists()
    }

    /// Replaces the maximum date and rebuilds both lists.
    /// The displayed month is left where it is.
    ///
    /// # Errors
    /// Returns `SelectorError::InvalidRange` if `maximum` is before the minimum.
    pub fn set_maximum_date(&mut self, maximum: CalendarDate) -> Result<(), SelectorError> {
        validate_range(self.minimum, maximum)?;
        debug!("Maximum date changed from {} to {maximum}", self.maximum);
        self.maximum = maximum;
        self.rebuild_lists()
    }

    /// Brings the lists and controls in line with the model's current month.
    ///
    /// # Errors
    /// Returns `SelectorError::Calendar` if the month list cannot be built.
    pub fn refresh(&mut self) -> Result<(), SelectorError> {
        self.populate_month_list()?;
        self.sync_selection();
        self.previous.enabled = self.can_navigate_back();
        self.next.enabled = self.can_navigate_forward();
        Ok(())
    }

    /// Whether the displayed month is after the minimum's month
    pub fn can_navigate_back(&self) -> bool {
        self.model.current_month().year_month() > self.minimum.year_month()
    }

    /// Whether the displayed month is before the maximum's month
    pub fn can_navigate_forward(&self) -> bool {
        self.model.current_month().year_month() < self.maximum.year_month()
    }

    /// Handles the previous-month control. Returns whether the month moved.
    ///
    /// # Errors
    /// Returns `SelectorError::Calendar` if the model cannot shift.
    pub fn navigate_back(&mut self) -> Result<bool, SelectorError> {
        if !self.can_navigate_back() {
            debug!("Already at minimum month {}, ignoring back", self.minimum);
            return Ok(false);
        }
        self.add_months(-1)?;
        Ok(true)
    }

    /// Handles the next-month control. Returns whether the month moved.
    ///
    /// # Errors
    /// Returns `SelectorError::Calendar` if the model cannot shift.
    pub fn navigate_forward(&mut self) -> Result<bool, SelectorError> {
        if !self.can_navigate_forward() {
            debug!("Already at maximum month {}, ignoring forward", self.maximum);
            return Ok(false);
        }
        self.add_months(1)?;
        Ok(true)
    }

    /// Handles a pick in the month list. Returns the month delta requested.
    ///
    /// # Errors
    /// Returns `SelectorError::UnknownMonthIndex` if `index` is not in the list.
    pub fn select_month(&mut self, index: usize) -> Result<i32, SelectorError> {
        let len = self.months.len();
        let unknown = SelectorError::UnknownMonthIndex { index, len };
        if index >= len {
            return Err(unknown);
        }
        let index = i32::try_from(index).map_err(|_| unknown.clone())?;
        let offset = i32::try_from(self.month_offset).map_err(|_| unknown.clone())?;
        let current = i32::try_from(self.model.current_month().month0()).map_err(|_| unknown)?;

        let delta = index + offset - current;
        self.add_months(delta)?;
        Ok(delta)
    }

    /// Handles a pick in the year list. Returns the month delta requested.
    ///
    /// # Errors
    /// Returns `SelectorError::UnknownYearIndex` if `index` is not in the list,
    /// or `SelectorError::Calendar` if the target month is not representable.
    pub fn select_year(&mut self, index: usize) -> Result<i32, SelectorError> {
        let len = self.years.len();
        let unknown = SelectorError::UnknownYearIndex { index, len };
        if index >= len {
            return Err(unknown);
        }
        let year = i32::try_from(index)
            .ok()
            .and_then(|offset| self.minimum.year().checked_add(offset))
            .ok_or(unknown)?;

        let delta = year_change_delta(
            self.model.current_month(),
            year,
            self.minimum,
            self.maximum,
        )?;
        self.add_months(delta)?;
        Ok(delta)
    }

    fn add_months(&mut self, months: i32) -> Result<(), SelectorError> {
        debug!("Requesting a shift of {months} months");
        self.model.shift_current_month(months)?;
        self.refresh()
    }

    fn rebuild_lists(&mut self) -> Result<(), SelectorError> {
        self.years.clear();
        self.months.clear();
        self.populate_year_list();
        self.refresh()
    }

    fn populate_year_list(&mut self) {
        for year in self.minimum.year()..=self.maximum.year() {
            self.years.push(year.to_string());
        }
    }

    fn populate_month_list(&mut self) -> Result<(), SelectorError> {
        let year = self.model.current_month().year();
        let names = available_months(year, self.minimum, self.maximum, &self.locale)?;
        trace!("Months available in {year}: {names:?}");
        self.months.set_items(names);
        self.month_offset = months_offset(year, self.minimum);
        Ok(())
    }

    fn sync_selection(&mut self) {
        if !self.years.is_ready() || !self.months.is_ready() {
            debug!("Selection lists not populated yet, skipping sync");
            return;
        }

        let current = self.model.current_month();
        let year_index = usize::try_from(self.minimum.year().abs_diff(current.year())).ok();
        if !year_index.is_some_and(|index| self.years.select(index)) {
            debug!("Year {} is not in the year list, skipping sync", current.year());
            return;
        }

        let month_index = if year_index == Some(0) {
            current.month0().checked_sub(self.minimum.month0())
        } else {
            Some(current.month0())
        };
        let selected = month_index
            .and_then(|index| usize::try_from(index).ok())
            .is_some_and(|index| self.months.select(index));
        if !selected {
            debug!("Month {} is not in the month list, skipping sync", current);
        }
    }
}

fn validate_range(minimum: CalendarDate, maximum: CalendarDate) -> Result<(), SelectorError> {
    if minimum > maximum {
        return Err(SelectorError::InvalidRange { minimum, maximum });
    }
    Ok(())
}

/// Short names of the months of `year` that lie within `[minimum, maximum]`.
///
/// The months are found by stepping from `minimum` one month at a time with
/// the same day clamping as [`add_months_to_date`]. The maximum's own month
/// is always listed for the maximum's year, even when the stepped day
/// overshoots it.
///
/// # Errors
/// Returns `CalendarError` if a month cannot be stepped to or named.
pub fn available_months(
    year: i32,
    minimum: CalendarDate,
    maximum: CalendarDate,
    locale: &Locale,
) -> Result<Vec<String>, CalendarError> {
    let mut names = Vec::new();
    let mut cursor = minimum;
    while cursor.timestamp_millis() <= maximum.timestamp_millis() && cursor.year() <= year {
        if cursor.year() == year {
            names.push(locale.short_month_name(cursor.month0())?.to_owned());
        }
        add_months_to_date(&mut cursor, 1)?;
    }

    if year == maximum.year() {
        let last = locale.short_month_name(maximum.month0())?;
        if !names.iter().any(|name| name == last) {
            names.push(last.to_owned());
        }
    }

    Ok(names)
}

/// Month list index of January for `year`: the minimum's month on the
/// minimum's year, otherwise 0.
pub fn months_offset(year: i32, minimum: CalendarDate) -> u32 {
    if year == minimum.year() {
        minimum.month0()
    } else {
        0
    }
}

/// Months to move from `current` so the display lands in `year`.
///
/// The target keeps `current`'s month unless that falls outside
/// `[minimum, maximum]` in a month other than the bound's own, in which case
/// it is pulled onto the bound. The distance is counted by stepping one
/// month at a time with the clamped arithmetic of [`add_months_to_date`].
///
/// # Errors
/// Returns `CalendarError` if the target or an intermediate month is not representable.
pub fn year_change_delta(
    current: CalendarDate,
    year: i32,
    minimum: CalendarDate,
    maximum: CalendarDate,
) -> Result<i32, CalendarError> {
    let mut target = current.with_year_lenient(year)?;

    let days_min = get_days_between(minimum, target);
    let days_max = get_days_between(target, maximum);
    // Only the month is compared, not the year
    if days_min < 0 && target.month0() != minimum.month0() {
        add_days_to_date(&mut target, -days_min)?;
    } else if days_max < 0 && target.month0() != maximum.month0() {
        add_days_to_date(&mut target, days_max)?;
    }

    let direction = match target.timestamp_millis().cmp(&current.timestamp_millis()) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    };

    let mut cursor = current;
    let mut delta = 0;
    while cursor.year_month() != target.year_month() {
        add_months_to_date(&mut cursor, direction)?;
        delta += direction;
    }

    trace!("Year {year} maps to {target}, {delta} months from {current}");
    Ok(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn noon(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn selector(current: CalendarDate, min: CalendarDate, max: CalendarDate) -> MonthSelector {
        MonthSelector::new(CalendarModel::new(current), min, max, Locale::default()).unwrap()
    }

    #[test]
    fn test_available_months_partial_years() {
        let locale = Locale::default();
        let min = date(2021, 10, 1);
        let max = date(2022, 1, 1);

        let names = available_months(2021, min, max, &locale).unwrap();
        assert_eq!(names, vec!["Nov", "Dec"]);
        assert_eq!(months_offset(2021, min), 10);

        let names = available_months(2022, min, max, &locale).unwrap();
        assert_eq!(names, vec!["Jan", "Feb"]);
        assert_eq!(months_offset(2022, min), 0);
    }

    #[test]
    fn test_available_months_full_year() {
        let locale = Locale::default();
        let names = available_months(2021, date(2020, 5, 1), date(2023, 0, 1), &locale).unwrap();
        assert_eq!(names, crate::consts::ENGLISH_SHORT_MONTHS.to_vec());
    }

    #[test]
    fn test_available_months_includes_overshot_maximum() {
        // Stepping from the 15th passes Feb 1 without landing in February
        let locale = Locale::default();
        let min = date(2021, 10, 15);
        let max = date(2022, 1, 1);
        let names = available_months(2022, min, max, &locale).unwrap();
        assert_eq!(names, vec!["Jan", "Feb"]);

        let names = available_months(2021, min, max, &locale).unwrap();
        assert_eq!(names, vec!["Nov", "Dec"]);
    }

    #[test]
    fn test_available_months_single_month_range() {
        let locale = Locale::default();
        let names = available_months(2021, date(2021, 4, 3), date(2021, 4, 20), &locale).unwrap();
        assert_eq!(names, vec!["May"]);
    }

    #[test]
    fn test_year_change_without_clamp() {
        let min = date(2020, 0, 15);
        let max = date(2022, 5, 10);
        let current = noon(2021, 2, 1);

        assert_eq!(year_change_delta(current, 2020, min, max).unwrap(), -12);
        assert_eq!(year_change_delta(current, 2022, min, max).unwrap(), 12);
        assert_eq!(year_change_delta(current, 2021, min, max).unwrap(), 0);
    }

    #[test]
    fn test_year_change_clamps_to_maximum() {
        let min = date(2020, 0, 15);
        let max = date(2022, 5, 10);
        // Sep 2022 is past June 10, so the target is pulled back to June
        let current = noon(2021, 8, 1);
        assert_eq!(year_change_delta(current, 2022, min, max).unwrap(), 9);
    }

    #[test]
    fn test_year_change_clamps_to_minimum() {
        let min = date(2020, 4, 20);
        let max = date(2022, 5, 10);
        // Feb 2020 is before May 20, so the target is pushed to May
        let current = noon(2021, 1, 1);
        assert_eq!(year_change_delta(current, 2020, min, max).unwrap(), -9);
    }

    #[test]
    fn test_year_change_same_month_as_bound_is_not_clamped() {
        let min = date(2020, 0, 15);
        let max = date(2022, 5, 10);
        // Jan 1 2020 is before the minimum but shares its month
        let current = noon(2021, 0, 1);
        assert_eq!(year_change_delta(current, 2020, min, max).unwrap(), -12);
    }

    #[test]
    fn test_year_change_from_month_end() {
        let min = date(2019, 0, 1);
        let max = date(2023, 11, 31);
        let current = noon(2021, 0, 31);
        assert_eq!(year_change_delta(current, 2023, min, max).unwrap(), 24);
        assert_eq!(year_change_delta(current, 2019, min, max).unwrap(), -24);
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = MonthSelector::new(
            CalendarModel::new(date(2021, 0, 1)),
            date(2022, 0, 1),
            date(2021, 0, 1),
            Locale::default(),
        );
        assert!(matches!(result, Err(SelectorError::InvalidRange { .. })));
    }

    #[test]
    fn test_setup_populates_lists() {
        let s = selector(date(2021, 2, 1), date(2020, 0, 15), date(2022, 5, 10));
        assert_eq!(s.year_list().items(), ["2020", "2021", "2022"]);
        assert_eq!(s.year_list().selected_item(), Some("2021"));
        assert_eq!(s.month_list().len(), 12);
        assert_eq!(s.month_list().selected_item(), Some("Mar"));
        assert_eq!(s.month_offset(), 0);
        assert_eq!(s.previous_control().icon(), DEFAULT_PREVIOUS_MONTH_ICON);
        assert_eq!(s.next_control().icon(), DEFAULT_NEXT_MONTH_ICON);
    }

    #[test]
    fn test_sync_on_minimum_year_uses_offset() {
        let s = selector(date(2021, 11, 1), date(2021, 10, 1), date(2022, 1, 1));
        assert_eq!(s.month_list().items(), ["Nov", "Dec"]);
        assert_eq!(s.month_offset(), 10);
        assert_eq!(s.month_list().selected_index(), Some(1));
        assert_eq!(s.year_list().selected_index(), Some(0));
    }

    #[test]
    fn test_sync_skips_month_outside_list() {
        // Displayed month is before the minimum's month on the minimum's year
        let s = selector(date(2021, 8, 1), date(2021, 10, 1), date(2022, 1, 1));
        assert_eq!(s.year_list().selected_index(), Some(0));
        assert_eq!(s.month_list().selected_index(), None);
    }

    #[test]
    fn test_sync_skips_year_outside_list() {
        let s = selector(date(2025, 0, 1), date(2021, 10, 1), date(2022, 1, 1));
        assert_eq!(s.year_list().selected_index(), None);
        assert!(s.month_list().is_empty());
        assert!(!s.month_list().is_ready());
    }

    #[test]
    fn test_navigation_guards() {
        let mut s = selector(date(2021, 10, 1), date(2021, 10, 20), date(2022, 0, 5));
        assert!(!s.previous_control().is_enabled());
        assert!(!s.navigate_back().unwrap());
        assert_eq!(s.model().current_month().year_month(), (2021, 10));

        assert!(s.navigate_forward().unwrap());
        assert!(s.navigate_forward().unwrap());
        assert_eq!(s.model().current_month().year_month(), (2022, 0));
        assert!(!s.next_control().is_enabled());
        assert!(!s.navigate_forward().unwrap());
        assert_eq!(s.model().current_month().year_month(), (2022, 0));

        assert!(s.previous_control().is_enabled());
        assert!(s.navigate_back().unwrap());
        assert_eq!(s.model().current_month().year_month(), (2021, 11));
    }

    #[test]
    fn test_navigate_back_across_year_with_earlier_month() {
        // Current month index is below the minimum's month but the year is later
        let mut s = selector(date(2022, 2, 1), date(2020, 5, 1), date(2023, 0, 1));
        assert!(s.navigate_back().unwrap());
        assert_eq!(s.model().current_month().year_month(), (2022, 1));
    }

    #[test]
    fn test_select_month_applies_offset() {
        let mut s = selector(date(2021, 10, 1), date(2021, 10, 1), date(2022, 1, 1));
        assert_eq!(s.select_month(1).unwrap(), 1);
        assert_eq!(s.model().current_month().year_month(), (2021, 11));
        assert_eq!(s.month_list().selected_item(), Some("Dec"));

        assert_eq!(s.select_month(0).unwrap(), -1);
        assert_eq!(s.model().current_month().year_month(), (2021, 10));
    }

    #[test]
    fn test_select_month_unknown_index() {
        let mut s = selector(date(2021, 10, 1), date(2021, 10, 1), date(2022, 1, 1));
        let result = s.select_month(2);
        assert!(matches!(
            result,
            Err(SelectorError::UnknownMonthIndex { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_select_year_moves_model() {
        let mut s = selector(date(2021, 8, 1), date(2020, 0, 15), date(2022, 5, 10));
        assert_eq!(s.select_year(2).unwrap(), 9);
        assert_eq!(s.model().current_month().year_month(), (2022, 5));
        assert_eq!(s.year_list().selected_item(), Some("2022"));
        assert_eq!(s.month_list().items(), ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(s.month_list().selected_item(), Some("Jun"));

        assert!(matches!(
            s.select_year(3),
            Err(SelectorError::UnknownYearIndex { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_set_minimum_rebuilds_lists() {
        let mut s = selector(date(2021, 2, 1), date(2020, 0, 15), date(2022, 5, 10));
        s.set_minimum_date(date(2021, 1, 1)).unwrap();
        assert_eq!(s.year_list().items(), ["2021", "2022"]);
        assert_eq!(s.month_offset(), 1);
        assert_eq!(s.month_list().items().first().map(String::as_str), Some("Feb"));
        assert_eq!(s.month_list().selected_item(), Some("Mar"));
    }

    #[test]
    fn test_set_maximum_keeps_displayed_month() {
        let mut s = selector(date(2021, 2, 1), date(2020, 0, 15), date(2022, 5, 10));
        s.set_maximum_date(date(2020, 6, 1)).unwrap();
        assert_eq!(s.year_list().items(), ["2020"]);
        assert_eq!(s.model().current_month().year_month(), (2021, 2));
        assert!(!s.can_navigate_forward());
        assert_eq!(s.year_list().selected_index(), None);
    }

    #[test]
    fn test_setters_reject_inverted_range() {
        let mut s = selector(date(2021, 2, 1), date(2020, 0, 15), date(2022, 5, 10));
        assert!(matches!(
            s.set_minimum_date(date(2023, 0, 1)),
            Err(SelectorError::InvalidRange { .. })
        ));
        assert!(matches!(
            s.set_maximum_date(date(2019, 0, 1)),
            Err(SelectorError::InvalidRange { .. })
        ));
        assert_eq!(s.minimum_date(), date(2020, 0, 15));
        assert_eq!(s.maximum_date(), date(2022, 5, 10));
    }

    #[test]
    fn test_error_display() {
        let err = SelectorError::InvalidRange {
            minimum: date(2022, 0, 1),
            maximum: date(2021, 0, 1),
        };
        assert_eq!(
            err.to_string(),
            "Invalid selector range: minimum (2022-01-01 00:00:00) is after maximum (2021-01-01 00:00:00)"
        );

        let err: SelectorError = CalendarError::InvalidMonth(12).into();
        assert_eq!(err.to_string(), "Invalid month index: 12 (must be 0-11)");
    }
}
