use std::time::Instant;

use crate::buffer::Buffer;
use crate::event::Event;
use crate::gesture::GestureEngine;
use crate::layout::Rect;
use crate::options::{OptionList, PickerOption};
use crate::render::render_wheel;
use crate::selection::SelectionState;
use crate::types::PickerTheme;

/// Single-shot notification of a settled selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
    pub index: usize,
}

/// Who owns the selected value: the picker itself (seeded once from a
/// default) or the caller (who pushes updates in via
/// [`WheelPicker::sync_value`]). An explicit variant rather than a flag so
/// the re-sync-without-re-emit rule stays unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueSource {
    #[default]
    Uncontrolled,
    Controlled,
}

type ChangeHandler = Box<dyn FnMut(ChangeEvent)>;

/// A scrollable, snap-to-item, single-value selector: the item at the
/// wheel's vertical center is the current selection.
///
/// The picker draws into a caller-supplied [`Rect`] of a [`Buffer`], so
/// any container can frame it. Input arrives as crate [`Event`]s via
/// [`process_events`]; time-driven behavior (the debounced wheel snap and
/// the settle animation) advances through [`update`].
///
/// [`process_events`]: WheelPicker::process_events
/// [`update`]: WheelPicker::update
pub struct WheelPicker {
    options: OptionList,
    state: SelectionState,
    gesture: GestureEngine,
    theme: PickerTheme,
    visible_rows: u16,
    source: ValueSource,
    on_change: Option<ChangeHandler>,
}

impl std::fmt::Debug for WheelPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelPicker")
            .field("options", &self.options.count())
            .field("index", &self.state.index())
            .field("source", &self.source)
            .finish()
    }
}

impl WheelPicker {
    /// Create a picker over `options`. Empty lists and duplicate values
    /// are absorbed with a warning (the control renders an inert wheel),
    /// never a panic.
    pub fn new(options: Vec<PickerOption>) -> Self {
        let options = OptionList::new(options);
        let state = SelectionState::new(options.count(), 0, 1);
        Self {
            options,
            state,
            gesture: GestureEngine::new(),
            theme: PickerTheme::default(),
            visible_rows: 5,
            source: ValueSource::default(),
            on_change: None,
        }
    }

    // Builder configuration

    /// Seed the initial selection (uncontrolled mode). Unknown values fall
    /// back to index 0.
    pub fn default_value(mut self, value: &str) -> Self {
        let index = self.options.resolve_default(Some(value));
        self.state = SelectionState::new(self.options.count(), index, self.state.item_height());
        self
    }

    /// Caller-owned value (controlled mode): seeds the selection and marks
    /// the picker as externally driven. Push later updates through
    /// [`sync_value`](WheelPicker::sync_value).
    pub fn value(mut self, value: &str) -> Self {
        self.source = ValueSource::Controlled;
        self.default_value(value)
    }

    /// Rows shown in the wheel window (default 5). Even counts get an
    /// asymmetric window; the center band stays anchored either way.
    pub fn visible_rows(mut self, rows: u16) -> Self {
        self.visible_rows = rows.max(1);
        self
    }

    /// Terminal rows per item (default 1).
    pub fn item_height(mut self, height: u16) -> Self {
        self.state = SelectionState::new(
            self.options.count(),
            self.state.index(),
            height.max(1),
        );
        self
    }

    pub fn theme(mut self, theme: PickerTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Handler invoked with each settled selection change, exactly once
    /// per transition, never during intermediate drag offsets.
    pub fn on_change(mut self, handler: impl FnMut(ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // Introspection

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.state.index()
    }

    pub fn selected(&self) -> Option<&PickerOption> {
        self.options.option_at(self.state.index())
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected().map(|o| o.value.as_str())
    }

    pub fn value_source(&self) -> ValueSource {
        self.source
    }

    /// Natural height of the wheel window, for hosts sizing the rect.
    pub fn preferred_height(&self) -> u16 {
        self.visible_rows * self.state.item_height()
    }

    // Runtime surface

    /// Feed input events. `area` is the rect the wheel is drawn into and
    /// scopes hit testing. Returns true when a redraw is needed.
    pub fn process_events(&mut self, events: &[Event], area: Rect) -> bool {
        self.process_events_at(events, area, Instant::now())
    }

    pub fn process_events_at(&mut self, events: &[Event], area: Rect, now: Instant) -> bool {
        let mut redraw = false;
        for event in events {
            if matches!(event, Event::Resize { .. }) {
                redraw = true;
                continue;
            }
            let outcome = self.gesture.process(event, area, &mut self.state, now);
            redraw |= outcome.redraw;
            if let Some(index) = outcome.changed {
                self.emit(index);
            }
        }
        redraw
    }

    /// Advance animations and deferred snaps. Returns true while further
    /// frames are needed.
    pub fn update(&mut self, now: Instant) -> bool {
        let outcome = self.gesture.tick(&mut self.state, now);
        if let Some(index) = outcome.changed {
            self.emit(index);
        }
        outcome.redraw || self.gesture.needs_frame()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        self.render_at(area, buf, Instant::now());
    }

    pub fn render_at(&self, area: Rect, buf: &mut Buffer, now: Instant) {
        let visual = self.gesture.visual_offset(&self.state, now);
        render_wheel(area, buf, &self.options, &self.state, visual, &self.theme);
    }

    /// Programmatic override: re-seat the wheel on `value` without
    /// emitting a change event (the caller already knows). Cancels any
    /// in-flight gesture and jumps instantly. Unknown values are ignored
    /// with a warning. Returns whether the value was applied.
    pub fn sync_value(&mut self, value: &str) -> bool {
        let Some(index) = self.options.index_of(value) else {
            log::warn!("wheel picker sync_value `{value}` matches no option, ignoring");
            return false;
        };
        self.gesture.cancel(&mut self.state);
        let _ = self.state.set_index(index as isize);
        true
    }

    fn emit(&mut self, index: usize) {
        let Some(option) = self.options.option_at(index) else {
            return;
        };
        let event = ChangeEvent {
            value: option.value.clone(),
            index,
        };
        log::debug!("selection settled on `{}` (index {index})", event.value);
        if let Some(handler) = &mut self.on_change {
            handler(event);
        }
    }
}
