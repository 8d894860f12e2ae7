//! Integration tests for gilt-tui-widgets.
//!
//! These tests exercise the public API from outside the crate, driving the
//! widgets frame by frame through the headless `Pilot`.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, Weekday};
use gilt_tui_widgets::config::{CalendarConfig, ResizerConfig};
use gilt_tui_widgets::event::input::Key;
use gilt_tui_widgets::geometry::{Axis, Size};
use gilt_tui_widgets::layout::ResizeChain;
use gilt_tui_widgets::render::Frame;
use gilt_tui_widgets::testing::{render_to_string, Pilot};
use gilt_tui_widgets::widget::traits::from_fn;
use gilt_tui_widgets::widgets::*;
use gilt_tui_widgets::WidgetError;
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn panes(texts: &[&str]) -> Vec<Pane> {
    texts.iter().map(|t| Pane::new(Label::new(*t))).collect()
}

// ---------------------------------------------------------------------------
// ResizeChain
// ---------------------------------------------------------------------------

#[test]
fn test_chain_drag_and_resize_keep_minimums() {
    let mut chain = ResizeChain::new(Axis::Horizontal, 4, Some(10)).unwrap();
    chain.initialize(Size::new(100, 20), &[0, 0, 0, 0]);
    assert_eq!(chain.boundaries(), &[25, 50, 75, 100]);

    assert!(chain.drag(2, -30).unwrap());
    assert_eq!(chain.boundaries(), &[25, 35, 45, 100]);

    assert!(chain.resize(Size::new(200, 20)));
    assert_eq!(chain.boundaries(), &[50, 70, 90, 200]);
    assert_eq!(chain.min_region_length(), 20);
}

#[test]
fn test_chain_rejects_bad_input() {
    assert!(matches!(
        ResizeChain::new(Axis::Vertical, 0, None),
        Err(WidgetError::InvalidConfiguration(_))
    ));
    let chain = ResizeChain::new(Axis::Vertical, 2, None).unwrap();
    assert_eq!(
        chain.region_bounds(5, 10).unwrap_err(),
        WidgetError::IndexOutOfRange { index: 5, len: 2 }
    );
}

// ---------------------------------------------------------------------------
// Resizer
// ---------------------------------------------------------------------------

#[test]
fn test_resizer_drag_through_pilot() {
    let resizer = Resizer::new(Axis::Horizontal, panes(&["one", "two", "six"])).unwrap();
    let mut pilot = Pilot::new(resizer, 30, 2);
    pilot.tick();
    assert_eq!(pilot.line(0), "one      │two      │six");

    pilot.press(9, 0);
    pilot.drag_to(13, 0);
    pilot.release(13, 0);
    assert!(pilot.tick());
    assert_eq!(pilot.widget().chain().boundaries(), &[14, 20, 30]);
    assert_eq!(pilot.line(0), "one          │two  │six");
}

#[test]
fn test_resizer_push_stops_at_minimum() {
    let config = ResizerConfig { min_region_length: Some(5), ..ResizerConfig::default() };
    let resizer = Resizer::from_config(&config, panes(&["a", "b", "c"])).unwrap();
    let mut pilot = Pilot::new(resizer, 30, 1);
    pilot.tick();

    pilot.press(9, 0);
    pilot.drag_to(29, 0);
    pilot.release(29, 0);
    pilot.tick();
    assert_eq!(pilot.widget().chain().boundaries(), &[20, 25, 30]);
}

#[test]
fn test_resizer_vertical_with_resize() {
    let config = ResizerConfig { axis: Axis::Vertical, ..ResizerConfig::default() };
    let resizer = Resizer::from_config(&config, panes(&["top", "bottom"])).unwrap();
    let mut pilot = Pilot::new(resizer, 10, 10);
    pilot.tick();
    assert_eq!(pilot.line(4), "──────────");

    pilot.resize(10, 20);
    pilot.tick();
    assert_eq!(pilot.widget().chain().boundaries(), &[10, 20]);
    assert_eq!(pilot.line(9), "──────────");
    assert_eq!(pilot.line(10), "bottom");
}

#[test]
fn test_resizer_nested_in_resizer() {
    let inner = Resizer::new(Axis::Vertical, panes(&["x", "y"])).unwrap();
    let mut outer = Resizer::new(
        Axis::Horizontal,
        vec![Pane::new(inner), Pane::new(Label::new("side"))],
    )
    .unwrap();
    let output = render_to_string(&mut outer, 20, 4);
    let rows: Vec<&str> = output.split('\n').collect();
    // The inner resizer fills its probe, so it weighs 20 against "side" at 4.
    assert_eq!(outer.chain().boundaries(), &[17, 20]);
    assert_eq!(rows[0], "x               │sid");
    assert_eq!(rows[1], "────────────────│");
    assert_eq!(rows[2], "y               │");
}

#[test]
fn test_resizer_custom_handle() {
    let grip = from_fn("grip", |f: &mut Frame| {
        let size = f.max();
        for y in 0..size.height {
            let mut strip = gilt_tui_widgets::render::Strip::new(y, 0);
            strip.push_str("<>", Default::default());
            f.push(strip);
        }
        Size::new(2, size.height)
    });
    let resizer = Resizer::new(
        Axis::Horizontal,
        vec![Pane::new(Label::new("l")).with_handle(grip), Pane::new(Label::new("r"))],
    )
    .unwrap();
    let mut pilot = Pilot::new(resizer, 20, 1);
    pilot.tick();
    assert_eq!(pilot.line(0), "l       <>r");
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

fn september() -> Calendar {
    Calendar::new().with_date(date(2024, 9, 18)).with_today(date(2024, 9, 18))
}

#[test]
fn test_calendar_renders_six_week_month() {
    let mut pilot = Pilot::new(september(), 28, 10);
    pilot.tick();
    assert!(pilot.line(0).starts_with("September ▾"));
    assert_eq!(pilot.line(1), "MON TUE WED THU FRI SAT SUN");
    assert_eq!(pilot.line(2), " 26  27  28  29  30  31   1");
    assert_eq!(pilot.line(7), " 30   1   2   3   4   5   6");
}

#[test]
fn test_calendar_select_invokes_callback() {
    let picked = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&picked);
    let calendar = september().on_select(move |d| *sink.borrow_mut() = Some(d));
    let mut pilot = Pilot::new(calendar, 28, 10);
    pilot.tick();

    // Sep 18 2024 is a Wednesday in the fourth week.
    pilot.click(9, 5);
    assert!(pilot.tick());
    assert_eq!(*picked.borrow(), Some(date(2024, 9, 18)));

    // Oct 1 is padding in the last week.
    *picked.borrow_mut() = None;
    pilot.click(5, 7);
    pilot.tick();
    assert_eq!(*picked.borrow(), None);
}

#[test]
fn test_calendar_month_and_year_dropdowns() {
    let mut pilot = Pilot::new(september(), 28, 10);
    pilot.tick();

    pilot.click(2, 0);
    pilot.tick();
    assert!(pilot.widget().is_month_dropdown_open());
    // The list scrolls as far as it can towards September.
    assert!(pilot.line(1).starts_with(" April"));
    assert!(pilot.line(9).starts_with(" December"));

    pilot.click(2, 1);
    pilot.tick();
    assert!(!pilot.widget().is_month_dropdown_open());
    assert_eq!(pilot.widget().picker().reference_date(), date(2024, 4, 18));

    pilot.click(20, 0);
    pilot.tick();
    assert!(pilot.widget().is_year_dropdown_open());
    for _ in 0..3 {
        pilot.scroll_up(20, 3);
    }
    pilot.scroll_down(20, 3);
    pilot.tick();
    assert!(pilot.line(1)[18..].starts_with(" 2021"));
    pilot.click(20, 1);
    pilot.tick();
    assert_eq!(pilot.widget().picker().reference_date(), date(2021, 4, 18));
}

#[test]
fn test_calendar_keys() {
    let mut pilot = Pilot::new(september(), 28, 10);
    pilot.press_key(Key::PageDown);
    pilot.tick();
    assert!(pilot.line(0).starts_with("October ▾"));

    pilot.click(20, 0);
    pilot.tick();
    pilot.press_key(Key::Escape);
    pilot.tick();
    assert!(!pilot.widget().is_year_dropdown_open());
    assert_eq!(pilot.settle(), 1);
}

#[test]
fn test_calendar_from_config() {
    let config: CalendarConfig =
        serde_json::from_str(r#"{ "first_weekday": "Sun", "years_before": 1, "years_after": 1 }"#)
            .unwrap();
    let mut calendar = Calendar::from_config(&config).with_date(date(2024, 9, 18));
    assert_eq!(calendar.years(), &[2023, 2024, 2025]);
    assert_eq!(calendar.picker().first_weekday(), Weekday::Sun);

    let output = render_to_string(&mut calendar, 28, 4);
    let rows: Vec<&str> = output.split('\n').collect();
    assert_eq!(rows[1], "SUN MON TUE WED THU FRI SAT");
    assert_eq!(rows[2], "  1   2   3   4   5   6   7");
}
