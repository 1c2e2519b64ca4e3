use std::fmt;

use log::trace;

use crate::calendar::{add_months_to_date, set_to_first_day_of_month};
use crate::types::CalendarDate;
use crate::CalendarError;

/// Owner of the month a date picker is currently showing.
///
/// The model is the only writer of the current month; selectors read it and
/// ask for relative shifts.
pub trait MonthModel {
    fn current_month(&self) -> CalendarDate;

    /// Moves the current month by `months` (negative goes back) and returns
    /// the new value.
    ///
    /// # Errors
    /// Returns `CalendarError` if the shifted month is not representable.
    fn shift_current_month(&mut self, months: i32) -> Result<CalendarDate, CalendarError>;
}

type Listener = Box<dyn FnMut(&CalendarDate)>;

/// Default month model. The current month is kept at noon on the first day
/// of the month, and every subscriber is told about each change.
pub struct CalendarModel {
    current_month: CalendarDate,
    listeners: Vec<Listener>,
}

impl CalendarModel {
    pub fn new(current_month: CalendarDate) -> Self {
        let mut current_month = current_month;
        set_to_first_day_of_month(&mut current_month);
        Self {
            current_month,
            listeners: Vec::new(),
        }
    }

    /// Registers a callback run after every change of the current month.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&CalendarDate) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Jumps straight to the month containing `date`.
    pub fn set_current_month(&mut self, date: CalendarDate) {
        let mut month = date;
        set_to_first_day_of_month(&mut month);
        if month != self.current_month {
            self.current_month = month;
            self.notify();
        }
    }

    fn notify(&mut self) {
        trace!(
            "Current month is now {}, notifying {} listeners",
            self.current_month,
            self.listeners.len()
        );
        let current = self.current_month;
        for listener in &mut self.listeners {
            listener(&current);
        }
    }
}

impl MonthModel for CalendarModel {
    fn current_month(&self) -> CalendarDate {
        self.current_month
    }

    fn shift_current_month(&mut self, months: i32) -> Result<CalendarDate, CalendarError> {
        if months != 0 {
            add_months_to_date(&mut self.current_month, months)?;
            self.notify();
        }
        Ok(self.current_month)
    }
}

impl fmt::Debug for CalendarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarModel")
            .field("current_month", &self.current_month)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
