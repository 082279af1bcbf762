use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use wheelpicker::gesture::WHEEL_QUIESCE;
use wheelpicker::{
    ChangeEvent, Event, Key, Modifiers, MouseButton, PickerOption, Rect, ValueSource, WheelPicker,
};

fn abc() -> Vec<PickerOption> {
    vec![
        PickerOption::new("A", "a"),
        PickerOption::new("B", "b"),
        PickerOption::new("C", "c"),
    ]
}

fn area() -> Rect {
    Rect::new(0, 0, 20, 5)
}

fn key_down() -> Event {
    Event::Key {
        key: Key::Down,
        modifiers: Modifiers::new(),
    }
}

/// Picker plus a shared log of every emitted change event.
fn picker_with_log(options: Vec<PickerOption>) -> (WheelPicker, Rc<RefCell<Vec<ChangeEvent>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let picker = WheelPicker::new(options).on_change(move |event| sink.borrow_mut().push(event));
    (picker, log)
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_value_seeds_the_selection() {
    let picker = WheelPicker::new(abc()).default_value("b");
    assert_eq!(picker.selected_index(), 1);
    assert_eq!(picker.selected_value(), Some("b"));
}

#[test]
fn test_unknown_default_falls_back_to_first() {
    let picker = WheelPicker::new(abc()).default_value("zzz");
    assert_eq!(picker.selected_index(), 0);
    assert_eq!(picker.selected_value(), Some("a"));
}

#[test]
fn test_empty_picker_renders_and_stays_inert() {
    let (mut picker, log) = picker_with_log(vec![]);
    assert_eq!(picker.selected(), None);

    picker.process_events_at(&[key_down()], area(), Instant::now());
    assert_eq!(picker.selected_index(), 0);
    assert!(log.borrow().is_empty());
}

// ============================================================================
// Keyboard scenario (B -> C -> clamp)
// ============================================================================

#[test]
fn test_keyboard_scenario_emits_exactly_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let mut picker = WheelPicker::new(abc())
        .default_value("b")
        .on_change(move |event| sink.borrow_mut().push(event));

    assert_eq!(picker.selected_index(), 1);

    picker.process_events_at(&[key_down()], area(), Instant::now());
    assert_eq!(picker.selected_index(), 2);
    assert_eq!(
        *log.borrow(),
        vec![ChangeEvent {
            value: "c".to_string(),
            index: 2,
        }]
    );

    // Clamped at the end: no duplicate event.
    picker.process_events_at(&[key_down()], area(), Instant::now());
    assert_eq!(picker.selected_index(), 2);
    assert_eq!(log.borrow().len(), 1);
}

// ============================================================================
// Drag emits only on settle
// ============================================================================

#[test]
fn test_drag_emits_once_on_release_only() {
    let (mut picker, log) = picker_with_log(abc());
    let now = Instant::now();

    let press = Event::Press {
        x: 5,
        y: 3,
        button: MouseButton::Left,
    };
    let drag = Event::Drag {
        x: 5,
        y: 2,
        button: MouseButton::Left,
    };
    let release = Event::Release {
        x: 5,
        y: 2,
        button: MouseButton::Left,
    };

    picker.process_events_at(&[press, drag], area(), now);
    assert!(log.borrow().is_empty(), "nothing emits mid-drag");

    picker.process_events_at(&[release], area(), now);
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0].index, 1);
}

// ============================================================================
// Wheel resolves through update()
// ============================================================================

#[test]
fn test_wheel_emits_after_quiesce_tick() {
    let (mut picker, log) = picker_with_log(abc());
    let t0 = Instant::now();

    let scroll = Event::Scroll {
        x: 5,
        y: 2,
        delta: 1,
    };
    picker.process_events_at(&[scroll], area(), t0);
    assert!(log.borrow().is_empty());

    picker.update(t0 + WHEEL_QUIESCE + Duration::from_millis(1));
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0].value, "b");
}

// ============================================================================
// Controlled mode / sync_value
// ============================================================================

#[test]
fn test_value_marks_the_picker_controlled() {
    let picker = WheelPicker::new(abc()).value("c");
    assert_eq!(picker.value_source(), ValueSource::Controlled);
    assert_eq!(picker.selected_index(), 2);
}

#[test]
fn test_sync_value_reseats_without_emitting() {
    let (mut picker, log) = picker_with_log(abc());

    assert!(picker.sync_value("c"));
    assert_eq!(picker.selected_index(), 2);
    assert!(log.borrow().is_empty(), "caller-driven updates never re-emit");
}

#[test]
fn test_sync_value_unknown_is_ignored() {
    let (mut picker, log) = picker_with_log(abc());

    assert!(!picker.sync_value("zzz"));
    assert_eq!(picker.selected_index(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_sync_value_cancels_inflight_gesture() {
    let (mut picker, log) = picker_with_log(abc());
    let t0 = Instant::now();

    // Start a wheel flick, then the caller overrides before it settles.
    let scroll = Event::Scroll {
        x: 5,
        y: 2,
        delta: 1,
    };
    picker.process_events_at(&[scroll], area(), t0);
    picker.sync_value("c");

    // The abandoned flick must not resolve later.
    picker.update(t0 + WHEEL_QUIESCE * 2);
    assert_eq!(picker.selected_index(), 2);
    assert!(log.borrow().is_empty());
}

// ============================================================================
// Duplicate options are absorbed
// ============================================================================

#[test]
fn test_duplicate_values_are_deduplicated() {
    let options = vec![
        PickerOption::new("One", "x"),
        PickerOption::new("Two", "x"),
        PickerOption::new("Three", "y"),
    ];
    let picker = WheelPicker::new(options);
    assert_eq!(picker.options().count(), 2);
}
