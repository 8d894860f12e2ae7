//! Calendar widget: a month grid with month and year dropdowns.
//!
//! Layout, top to bottom inside the inset:
//!
//! ```text
//! February ▾        2024 ▾
//! MON TUE WED THU FRI SAT SUN
//!  29  30  31   1   2   3   4
//!   5   6   7   8   9  10  11
//! ...
//! ```
//!
//! The dropdown lists are drawn over the grid below their button. While one
//! is open the grid ignores the pointer.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::config::CalendarConfig;
use crate::date::grid::{
    month_name, weekday_abbrev, weekday_labels, year_bounds, MonthGrid, MONTH_NAMES,
};
use crate::date::picker::DatePicker;
use crate::event::gesture::Clickable;
use crate::event::input::{InputEvent, Key, MouseAction, MouseBtn};
use crate::geometry::{Region, Size, Spacing};
use crate::render::strip::{CellStyle, Strip};
use crate::render::Frame;
use crate::widget::scroll::ScrollState;
use crate::widget::traits::Widget;
use crate::widgets::Label;

/// Width of each dropdown button and of its list.
pub const DROPDOWN_WIDTH: i32 = 14;
/// Space between the month and year buttons.
pub const DROPDOWN_GAP: i32 = 4;

const HEADER_ROWS: i32 = 2;
/// Grid cells in the largest possible month view.
const MAX_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Dropdown {
    #[default]
    Closed,
    Month,
    Year,
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Rectangles of one frame, in the widget's local coordinates.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    area: Region,
    month_button: Region,
    year_button: Region,
    weekday_row: Region,
    column_width: i32,
    row_height: i32,
}

impl Geometry {
    fn new(area: Region, rows: usize, min_cell_height: i32) -> Self {
        let month_button = Region::new(area.x, area.y, DROPDOWN_WIDTH, area.height.min(1));
        let year_button = Region::new(
            area.x + DROPDOWN_WIDTH + DROPDOWN_GAP,
            area.y,
            DROPDOWN_WIDTH,
            month_button.height,
        );
        let body_height = (area.height - HEADER_ROWS).max(0);
        Self {
            area,
            month_button,
            year_button,
            weekday_row: Region::new(area.x, area.y + 1, area.width, (area.height - 1).clamp(0, 1)),
            column_width: area.width / 7,
            row_height: min_cell_height.max(body_height / rows.max(1) as i32),
        }
    }

    fn cell(&self, index: usize) -> Region {
        let row = (index / 7) as i32;
        let column = (index % 7) as i32;
        Region::new(
            self.area.x + column * self.column_width,
            self.area.y + HEADER_ROWS + row * self.row_height,
            self.column_width,
            self.row_height,
        )
        .intersection(self.area)
    }

    /// List area below `button` holding up to `items` rows.
    fn list(&self, button: Region, items: usize) -> Region {
        let room = (self.area.bottom() - button.bottom()).max(0);
        Region::new(button.x, button.bottom(), DROPDOWN_WIDTH, (items as i32).min(room))
    }
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Calendar {
    picker: DatePicker,
    config: CalendarConfig,
    today: NaiveDate,
    /// Entries of the year dropdown.
    years: Vec<i32>,
    open: Dropdown,

    month_button: Clickable,
    year_button: Clickable,
    month_items: Vec<Clickable>,
    year_items: Vec<Clickable>,
    month_scroll: ScrollState,
    year_scroll: ScrollState,
    cells: Vec<Clickable>,
    /// Month the cell clickables were last fed for.
    shown: (i32, u32),
}

impl Calendar {
    /// A calendar showing the current month with default settings.
    pub fn new() -> Self {
        Self::from_config(&CalendarConfig::default())
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        let now = Local::now().naive_local();
        let picker = DatePicker::new(now).with_first_weekday(config.first_weekday);
        let mut calendar = Self {
            picker,
            config: *config,
            today: now.date(),
            years: Vec::new(),
            open: Dropdown::Closed,
            month_button: Clickable::new(),
            year_button: Clickable::new(),
            month_items: vec![Clickable::new(); MONTH_NAMES.len()],
            year_items: Vec::new(),
            month_scroll: ScrollState::new(MONTH_NAMES.len() as i32, 0),
            year_scroll: ScrollState::default(),
            cells: vec![Clickable::new(); MAX_CELLS],
            shown: (0, 0),
        };
        calendar.rebuild_years();
        calendar
    }

    /// Show `date`'s month (builder pattern).
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        let time = self.picker.reference().time();
        self.picker.set_reference(date.and_time(time));
        self.rebuild_years();
        self
    }

    /// Override the date highlighted as today (builder pattern).
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.picker.set_first_weekday(first_weekday);
        self.config.first_weekday = first_weekday;
        self
    }

    /// Set the selection callback (builder pattern).
    pub fn on_select(mut self, callback: impl FnMut(NaiveDate) + 'static) -> Self {
        self.picker.set_on_select(callback);
        self
    }

    pub fn with_inset(mut self, inset: Spacing) -> Self {
        self.config.inset = inset;
        self
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut DatePicker {
        &mut self.picker
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_month_dropdown_open(&self) -> bool {
        self.open == Dropdown::Month
    }

    pub fn is_year_dropdown_open(&self) -> bool {
        self.open == Dropdown::Year
    }

    /// Entries of the year dropdown, oldest first.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    fn rebuild_years(&mut self) {
        let year = self.picker.reference().year();
        let bounds = year_bounds();
        let first = year.saturating_sub(self.config.years_before.max(0)).max(*bounds.start());
        let last = year.saturating_add(self.config.years_after.max(0)).min(*bounds.end());
        self.years = (first..=last).collect();
        self.year_items = vec![Clickable::new(); self.years.len()];
        self.year_scroll = ScrollState::new(self.years.len() as i32, 0);
    }

    // ── Event handling ───────────────────────────────────────────────

    fn close(&mut self, frame: &mut Frame) {
        if self.open != Dropdown::Closed {
            tracing::trace!(dropdown = ?self.open, "dropdown closed");
            self.open = Dropdown::Closed;
            frame.invalidate();
        }
    }

    fn handle_cells(&mut self, frame: &mut Frame, grid: &MonthGrid, geometry: &Geometry) {
        let month = (grid.year(), grid.month());
        if month != self.shown {
            self.cells.fill(Clickable::new());
            self.shown = month;
        }
        for (index, (cell, clickable)) in grid.cells().iter().zip(&mut self.cells).enumerate() {
            if clickable.clicked(frame, geometry.cell(index)) && self.picker.select_date(cell.date) {
                frame.invalidate();
            }
        }
    }

    fn handle_keys(&mut self, frame: &mut Frame) {
        let keys: Vec<Key> = frame
            .events()
            .iter()
            .filter_map(|event| match event {
                InputEvent::Key(key) => Some(key.code),
                _ => None,
            })
            .collect();
        for key in keys {
            match key {
                Key::Escape => self.close(frame),
                Key::PageUp => {
                    self.picker.prev_month();
                    frame.invalidate();
                }
                Key::PageDown => {
                    self.picker.next_month();
                    frame.invalidate();
                }
                _ => {}
            }
        }
    }

    /// Scroll and click handling for the open list.
    fn handle_list(&mut self, frame: &mut Frame, geometry: &Geometry) {
        match self.open {
            Dropdown::Closed => {}
            Dropdown::Month => {
                let list = geometry.list(geometry.month_button, self.month_items.len());
                if let Some(row) = pick(frame, list, &mut self.month_scroll, &mut self.month_items) {
                    self.picker.set_month(row as u32 + 1);
                    self.close(frame);
                }
            }
            Dropdown::Year => {
                let list = geometry.list(geometry.year_button, self.year_items.len());
                if let Some(row) = pick(frame, list, &mut self.year_scroll, &mut self.year_items) {
                    if let Some(&year) = self.years.get(row) {
                        self.picker.set_year(year);
                    }
                    self.close(frame);
                }
            }
        }
    }

    fn handle_buttons(&mut self, frame: &mut Frame, geometry: &Geometry) {
        if self.month_button.clicked(frame, geometry.month_button) {
            self.toggle(Dropdown::Month, geometry, frame);
        }
        if self.year_button.clicked(frame, geometry.year_button) {
            self.toggle(Dropdown::Year, geometry, frame);
        }
    }

    fn toggle(&mut self, dropdown: Dropdown, geometry: &Geometry, frame: &mut Frame) {
        frame.invalidate();
        if self.open == dropdown {
            self.open = Dropdown::Closed;
            return;
        }
        self.open = dropdown;
        let reference = self.picker.reference();
        match dropdown {
            Dropdown::Month => {
                let list = geometry.list(geometry.month_button, self.month_items.len());
                self.month_scroll.set_viewport_len(list.height);
                self.month_scroll.reveal(reference.month0() as i32, 1);
            }
            Dropdown::Year => {
                let list = geometry.list(geometry.year_button, self.year_items.len());
                self.year_scroll.set_viewport_len(list.height);
                if let Some(row) = self.years.iter().position(|&y| y == reference.year()) {
                    self.year_scroll.reveal(row as i32, 1);
                }
            }
            Dropdown::Closed => {}
        }
        tracing::trace!(?dropdown, "dropdown opened");
    }

    /// A press anywhere but the open list or the buttons closes the list.
    fn handle_outside_press(&mut self, frame: &mut Frame, geometry: &Geometry) {
        let list = match self.open {
            Dropdown::Closed => return,
            Dropdown::Month => geometry.list(geometry.month_button, self.month_items.len()),
            Dropdown::Year => geometry.list(geometry.year_button, self.year_items.len()),
        };
        let keep = [list, geometry.month_button, geometry.year_button];
        let outside = frame.events().iter().any(|event| match event {
            InputEvent::Mouse(me) if me.kind == MouseAction::Down(MouseBtn::Left) => {
                let pointer = frame.to_local(me);
                !keep.iter().any(|r| r.contains_offset(pointer))
            }
            _ => false,
        });
        if outside {
            self.close(frame);
        }
    }

    // ── Drawing ──────────────────────────────────────────────────────

    fn draw_header(&self, frame: &mut Frame, geometry: &Geometry) {
        let theme = frame.theme().clone();
        let reference = self.picker.reference();
        let buttons = [
            (
                geometry.month_button,
                format!("{} ▾", month_name(reference.month())),
                self.month_button.is_hovered() || self.open == Dropdown::Month,
            ),
            (
                geometry.year_button,
                format!("{} ▾", reference.year()),
                self.year_button.is_hovered() || self.open == Dropdown::Year,
            ),
        ];
        for (rect, text, active) in buttons {
            let style = if active { theme.highlight() } else { theme.text() };
            let rect = rect.intersection(geometry.area);
            frame.layout_in(rect, |f| Label::new(text).style(style).layout(f));
        }

        let contrast = theme.contrast();
        fill(frame, geometry.weekday_row, contrast.clone());
        for (column, day) in weekday_labels(self.picker.first_weekday()).into_iter().enumerate() {
            let rect = Region::new(
                geometry.area.x + column as i32 * geometry.column_width,
                geometry.weekday_row.y,
                geometry.column_width,
                geometry.weekday_row.height,
            );
            frame.layout_in(rect, |f| {
                Label::new(weekday_abbrev(day)).centered().style(contrast.clone()).layout(f)
            });
        }
    }

    fn draw_cells(&self, frame: &mut Frame, grid: &MonthGrid, geometry: &Geometry) {
        let theme = frame.theme().clone();
        let selected = self.picker.selected();
        for (index, (cell, clickable)) in grid.cells().iter().zip(&self.cells).enumerate() {
            let style = if !cell.in_month {
                theme.muted()
            } else if selected == Some(cell.date) {
                theme.highlight().bold()
            } else if cell.date == self.today || clickable.is_hovered() {
                theme.highlight()
            } else {
                theme.text()
            };
            let rect = geometry.cell(index);
            fill(frame, rect, style.clone());
            let first_line = Region::new(rect.x, rect.y, rect.width, rect.height.min(1));
            frame.layout_in(first_line, |f| {
                Label::new(format!("{:>3}", cell.date.day())).style(style).layout(f)
            });
        }
    }

    fn draw_list(&self, frame: &mut Frame, geometry: &Geometry) {
        let theme = frame.theme().clone();
        let reference = self.picker.reference();
        let (list, scroll, items, labels, current): (_, _, _, Vec<String>, usize) = match self.open {
            Dropdown::Closed => return,
            Dropdown::Month => (
                geometry.list(geometry.month_button, self.month_items.len()),
                &self.month_scroll,
                &self.month_items,
                MONTH_NAMES.iter().map(|name| format!(" {name}")).collect(),
                reference.month0() as usize,
            ),
            Dropdown::Year => (
                geometry.list(geometry.year_button, self.year_items.len()),
                &self.year_scroll,
                &self.year_items,
                self.years.iter().map(|year| format!(" {year}")).collect(),
                self.years
                    .iter()
                    .position(|&y| y == reference.year())
                    .unwrap_or(usize::MAX),
            ),
        };

        for row in scroll.visible_rows() {
            let index = row as usize;
            let (Some(text), Some(item)) = (labels.get(index), items.get(index)) else {
                continue;
            };
            let style = if index == current || item.is_hovered() {
                theme.highlight()
            } else {
                theme.text()
            };
            let rect = Region::new(list.x, list.y + row - scroll.offset, list.width, 1);
            frame.layout_in(rect, |f| Label::new(text.as_str()).style(style).layout(f));
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Calendar {
    fn widget_type(&self) -> &str {
        "Calendar"
    }

    fn layout(&mut self, frame: &mut Frame) -> Size {
        let size = frame.max();
        let area = size.to_region().shrink(self.config.inset);

        // Pointer input on the grid uses the month that was on screen.
        let grid = self.picker.grid();
        let geometry = Geometry::new(area, grid.row_count(), self.config.min_cell_height);
        if self.open == Dropdown::Closed {
            self.handle_cells(frame, &grid, &geometry);
        }
        self.handle_keys(frame);
        self.handle_list(frame, &geometry);
        self.handle_buttons(frame, &geometry);
        self.handle_outside_press(frame, &geometry);

        let grid = self.picker.grid();
        let geometry = Geometry::new(area, grid.row_count(), self.config.min_cell_height);
        self.draw_header(frame, &geometry);
        self.draw_cells(frame, &grid, &geometry);
        self.draw_list(frame, &geometry);
        size
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Paint `rect` (local coordinates) with blanks in `style`.
fn fill(frame: &mut Frame, rect: Region, style: CellStyle) {
    frame.layout_in(rect, |f| {
        let size = f.max();
        for y in 0..size.height {
            f.push(Strip::repeat(y, 0, ' ', size.width, style.clone()));
        }
    });
}

/// Feed this frame's events to a scrollable list occupying `list`; returns
/// the index of the clicked entry.
fn pick(
    frame: &Frame,
    list: Region,
    scroll: &mut ScrollState,
    items: &mut [Clickable],
) -> Option<usize> {
    scroll.content_len = items.len() as i32;
    scroll.set_viewport_len(list.height);
    for event in frame.events() {
        let InputEvent::Mouse(me) = event else {
            continue;
        };
        if !list.contains_offset(frame.to_local(me)) {
            continue;
        }
        match me.kind {
            MouseAction::ScrollUp => scroll.scroll_by(-1),
            MouseAction::ScrollDown => scroll.scroll_by(1),
            _ => {}
        }
    }

    let mut picked = None;
    for row in scroll.visible_rows() {
        let rect = Region::new(list.x, list.y + row - scroll.offset, list.width, 1);
        if let Some(item) = items.get_mut(row as usize) {
            if item.clicked(frame, rect) {
                picked = Some(row as usize);
            }
        }
    }
    picked
}

// ===========================================================================
// Tests
// ===========================================================================
