//! Month grid arithmetic.
//!
//! [`compute_grid`] produces the cells of a month view: whole weeks starting
//! on a configurable weekday, padded with days from the adjacent months. Any
//! Gregorian month yields 4, 5 or 6 rows of 7 cells.

use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Full month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ---------------------------------------------------------------------------
// DayCell
// ---------------------------------------------------------------------------

/// One cell of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from the previous or next month.
    pub in_month: bool,
}

// ---------------------------------------------------------------------------
// MonthGrid
// ---------------------------------------------------------------------------

/// The visible cells for one month, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    first_weekday: Weekday,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Cells grouped into weeks.
    pub fn rows(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(7)
    }

    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(7)
    }

    pub fn first(&self) -> Option<&DayCell> {
        self.cells.first()
    }

    pub fn last(&self) -> Option<&DayCell> {
        self.cells.last()
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Option<&DayCell> {
        if column >= 7 {
            return None;
        }
        self.cells.get(row * 7 + column)
    }

    /// `(row, column)` of `date`, if the grid shows it.
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|c| c.date == date)
            .map(|i| (i / 7, i % 7))
    }
}

// ---------------------------------------------------------------------------
// Grid computation
// ---------------------------------------------------------------------------

/// Years whose every month grid fits inside chrono's date range.
///
/// The first and last representable years are excluded: their January and
/// December views need padding days that `NaiveDate` cannot express.
pub fn year_bounds() -> RangeInclusive<i32> {
    NaiveDate::MIN.year() + 1..=NaiveDate::MAX.year() - 1
}

/// Compute the month view for `reference`'s month.
///
/// The grid starts on the last `first_weekday` on or before the 1st and ends
/// on the day before the next `first_weekday` on or after the last day of the
/// month. Only the year and month of `reference` matter. Months outside
/// [`year_bounds`] may come back with truncated padding.
pub fn compute_grid(reference: NaiveDate, first_weekday: Weekday) -> MonthGrid {
    let year = reference.year();
    let month = reference.month();
    let length = days_in_month(year, month);
    let month_start = reference.with_day(1).unwrap_or(reference);
    let month_end = reference.with_day(length).unwrap_or(reference);

    let leading = column_of(month_start.weekday(), first_weekday);
    let trailing = 6 - column_of(month_end.weekday(), first_weekday);
    let grid_start = month_start
        .checked_sub_days(Days::new(u64::from(leading)))
        .unwrap_or(month_start);
    let count = (leading + length + trailing) as usize;

    let cells = grid_start
        .iter_days()
        .take(count)
        .map(|date| DayCell {
            date,
            in_month: date.year() == year && date.month() == month,
        })
        .collect();

    MonthGrid { year, month, first_weekday, cells }
}

/// Column (0-6) that `day` occupies in a week starting on `first_weekday`.
pub fn column_of(day: Weekday, first_weekday: Weekday) -> u32 {
    (day.num_days_from_monday() + 7 - first_weekday.num_days_from_monday()) % 7
}

/// Header order for a week starting on `first_weekday`.
pub fn weekday_labels(first_weekday: Weekday) -> [Weekday; 7] {
    let mut days = [first_weekday; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Three-letter upper-case weekday label.
pub fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

/// English name of a 1-based month; months outside 1-12 are clamped.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in a 1-based month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_february_starting_thursday() {
        let grid = compute_grid(ymd(2024, 2, 14), Weekday::Mon);
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.cells().len(), 35);
        assert_eq!(grid.first().unwrap().date, ymd(2024, 1, 29));
        assert_eq!(grid.last().unwrap().date, ymd(2024, 3, 3));
    }

    #[test]
    fn thirty_day_month_starting_sunday_needs_six_rows() {
        let grid = compute_grid(ymd(2024, 9, 1), Weekday::Mon);
        assert_eq!(grid.row_count(), 6);
        assert_eq!(grid.first().unwrap().date, ymd(2024, 8, 26));
        assert_eq!(grid.last().unwrap().date, ymd(2024, 10, 6));
    }

    #[test]
    fn aligned_february_fits_four_rows() {
        let grid = compute_grid(ymd(2021, 2, 10), Weekday::Mon);
        assert_eq!(grid.row_count(), 4);
        assert!(grid.cells().iter().all(|c| c.in_month));
    }

    #[test]
    fn sunday_first_rotates_grid() {
        let grid = compute_grid(ymd(2024, 2, 1), Weekday::Sun);
        assert_eq!(grid.first().unwrap().date, ymd(2024, 1, 28));
        assert_eq!(grid.last().unwrap().date, ymd(2024, 3, 2));
        assert_eq!(grid.first().unwrap().date.weekday(), Weekday::Sun);
    }

    #[test]
    fn padding_cells_are_out_of_month() {
        let grid = compute_grid(ymd(2024, 2, 1), Weekday::Mon);
        let row = grid.rows().next().unwrap();
        assert!(!row[0].in_month);
        assert!(!row[2].in_month);
        assert!(row[3].in_month);
        assert_eq!(row[3].date, ymd(2024, 2, 1));
        assert_eq!(grid.position_of(ymd(2024, 2, 29)), Some((4, 3)));
        assert_eq!(grid.cell_at(4, 6).unwrap().date, ymd(2024, 3, 3));
        assert!(grid.cell_at(0, 7).is_none());
    }

    #[test]
    fn year_boundary_padding() {
        let grid = compute_grid(ymd(2024, 12, 25), Weekday::Mon);
        assert_eq!(grid.first().unwrap().date, ymd(2024, 11, 25));
        assert_eq!(grid.last().unwrap().date, ymd(2025, 1, 5));
        assert_eq!(grid.cells().iter().filter(|c| c.in_month).count(), 31);
    }

    #[test]
    fn every_month_has_whole_weeks() {
        let firsts = [Weekday::Mon, Weekday::Wed, Weekday::Sat, Weekday::Sun];
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                for first in firsts {
                    let grid = compute_grid(ymd(year, month, 1), first);
                    let len = grid.cells().len();
                    assert_eq!(len % 7, 0);
                    assert!((4..=6).contains(&grid.row_count()), "{year}-{month}");
                    assert_eq!(grid.first().unwrap().date.weekday(), first);
                    let in_month = grid.cells().iter().filter(|c| c.in_month).count();
                    assert_eq!(in_month as u32, days_in_month(year, month));
                }
            }
        }
    }

    #[test]
    fn weekday_label_rotation() {
        assert_eq!(weekday_labels(Weekday::Mon)[0], Weekday::Mon);
        assert_eq!(weekday_labels(Weekday::Sun)[1], Weekday::Mon);
        assert_eq!(weekday_labels(Weekday::Wed)[6], Weekday::Tue);
        assert_eq!(weekday_abbrev(Weekday::Thu), "THU");
        assert_eq!(column_of(Weekday::Sun, Weekday::Mon), 6);
        assert_eq!(column_of(Weekday::Sun, Weekday::Sun), 0);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(month_name(9), "September");
    }
}
