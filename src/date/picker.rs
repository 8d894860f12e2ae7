//! DatePicker: the displayed month and the user's selection.
//!
//! Holds the reference date-time whose month is shown, the first weekday of
//! the grid, and the selection callback. Month and year changes keep the
//! day and time of day, clamping the day to the target month's length.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};

use super::grid::{compute_grid, days_in_month, year_bounds, MonthGrid};

/// Callback invoked with the date the user picked.
pub type SelectCallback = Box<dyn FnMut(NaiveDate)>;

// ---------------------------------------------------------------------------
// DatePicker
// ---------------------------------------------------------------------------

pub struct DatePicker {
    reference: NaiveDateTime,
    first_weekday: Weekday,
    selected: Option<NaiveDate>,
    on_select: Option<SelectCallback>,
}

impl DatePicker {
    /// Show `reference`'s month with weeks starting on Monday.
    ///
    /// References outside [`year_bounds`] are moved to the nearest supported year.
    pub fn new(reference: NaiveDateTime) -> Self {
        Self {
            reference: clamp_reference(reference),
            first_weekday: Weekday::Mon,
            selected: None,
            on_select: None,
        }
    }

    /// Set the first column's weekday (builder pattern).
    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    /// Set the selection callback (builder pattern).
    pub fn on_select(mut self, callback: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn set_on_select(&mut self, callback: impl FnMut(NaiveDate) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference.date()
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// The month view for the current reference date.
    pub fn grid(&self) -> MonthGrid {
        compute_grid(self.reference.date(), self.first_weekday)
    }

    /// Whether `date` falls in the displayed month.
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.reference.year() && date.month() == self.reference.month()
    }

    // ── Mutation ─────────────────────────────────────────────────────

    pub fn set_reference(&mut self, reference: NaiveDateTime) {
        self.reference = clamp_reference(reference);
    }

    pub fn set_first_weekday(&mut self, first_weekday: Weekday) {
        self.first_weekday = first_weekday;
    }

    /// Confirm `date` as the user's choice.
    ///
    /// Dates outside the displayed month are padding cells and are ignored.
    /// Returns whether the selection was accepted.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.is_in_month(date) {
            tracing::trace!(%date, "ignoring selection outside displayed month");
            return false;
        }
        tracing::debug!(%date, "date selected");
        self.selected = Some(date);
        if let Some(callback) = self.on_select.as_mut() {
            callback(date);
        }
        true
    }

    /// Show `month` (1-12, clamped) of the current year.
    pub fn set_month(&mut self, month: u32) {
        self.move_to(self.reference.year(), month);
    }

    /// Show the current month of `year`.
    pub fn set_year(&mut self, year: i32) {
        self.move_to(year, self.reference.month());
    }

    pub fn next_month(&mut self) {
        if let Some(r) = self.reference.checked_add_months(Months::new(1)) {
            if year_bounds().contains(&r.year()) {
                self.reference = r;
            }
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(r) = self.reference.checked_sub_months(Months::new(1)) {
            if year_bounds().contains(&r.year()) {
                self.reference = r;
            }
        }
    }

    fn move_to(&mut self, year: i32, month: u32) {
        let month = month.clamp(1, 12);
        let bounds = year_bounds();
        let year = year.clamp(*bounds.start(), *bounds.end());
        let day = self.reference.day().min(days_in_month(year, month));
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            tracing::debug!(%date, "calendar moved");
            self.reference = date.and_time(self.reference.time());
        }
    }
}

fn clamp_reference(reference: NaiveDateTime) -> NaiveDateTime {
    let bounds = year_bounds();
    let year = reference.year().clamp(*bounds.start(), *bounds.end());
    if year == reference.year() {
        return reference;
    }
    let day = reference.day().min(days_in_month(year, reference.month()));
    NaiveDate::from_ymd_opt(year, reference.month(), day)
        .map_or(reference, |date| date.and_time(reference.time()))
}

impl std::fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("reference", &self.reference)
            .field("first_weekday", &self.first_weekday)
            .field("selected", &self.selected)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
