//! Date arithmetic for the calendar: month grids and selection state.

pub mod grid;
pub mod picker;

pub use grid::{compute_grid, weekday_abbrev, weekday_labels, year_bounds, DayCell, MonthGrid};
pub use picker::{DatePicker, SelectCallback};
