use std::time::{Duration, Instant};

use crate::animation::{Easing, SettleAnimation};
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::layout::{Rect, WheelLayout};
use crate::selection::SelectionState;

/// Default duration of the ease-out settle after a gesture resolves.
pub const SETTLE_DURATION: Duration = Duration::from_millis(200);

/// How long wheel input must stay quiet before the debounced snap fires.
/// Snapping per wheel event would fight an ongoing flick.
pub const WHEEL_QUIESCE: Duration = Duration::from_millis(150);

/// What a processed event or tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureOutcome {
    /// New index when the event settled a selection change.
    pub changed: Option<usize>,
    /// The wheel needs to be redrawn.
    pub redraw: bool,
}

impl GestureOutcome {
    fn redraw() -> Self {
        Self {
            changed: None,
            redraw: true,
        }
    }

    fn settled(changed: Option<usize>) -> Self {
        Self {
            changed,
            redraw: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    /// Pointer captured; offsets follow the pointer until release.
    Dragging { last_y: u16, moved: bool },
    /// Wheel steps accumulated; snaps when input quiesces.
    Wheeling { deadline: Instant },
    /// Ease-out back to rest after a resolved gesture.
    Settling(SettleAnimation),
}

/// Translates pointer, wheel, and keyboard input into `nudge`/`snap`/
/// `set_index` calls on a [`SelectionState`], and owns the settle
/// animation between gestures.
#[derive(Debug)]
pub struct GestureEngine {
    phase: Phase,
    settle_duration: Duration,
    easing: Easing,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEngine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            settle_duration: SETTLE_DURATION,
            easing: Easing::EaseOut,
        }
    }

    pub fn with_settle(mut self, duration: Duration, easing: Easing) -> Self {
        self.settle_duration = duration;
        self.easing = easing;
        self
    }

    /// The offset to draw the wheel at right now: the settle animation's
    /// interpolated value while settling, the rubber-banded gesture offset
    /// otherwise.
    pub fn visual_offset(&self, state: &SelectionState, now: Instant) -> f32 {
        match &self.phase {
            Phase::Settling(anim) => anim.offset_at(now),
            _ => state.visual_offset(),
        }
    }

    /// True while a deferred decision (wheel quiesce) or an animation is
    /// pending, i.e. the host should keep ticking frames.
    pub fn needs_frame(&self) -> bool {
        matches!(self.phase, Phase::Wheeling { .. } | Phase::Settling(_))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Abort any in-flight gesture or animation and discard accumulated
    /// offset. Used for programmatic re-sync.
    pub fn cancel(&mut self, state: &mut SelectionState) {
        self.phase = Phase::Idle;
        state.clear_offset();
    }

    /// Feed one input event. `area` is the rect the wheel was last drawn
    /// into; it scopes hit testing for presses, taps, and scrolls.
    pub fn process(
        &mut self,
        event: &Event,
        area: Rect,
        state: &mut SelectionState,
        now: Instant,
    ) -> GestureOutcome {
        let layout = WheelLayout::new(area, state.item_height());

        match *event {
            Event::Press {
                x,
                y,
                button: MouseButton::Left,
            } if area.contains(x, y) => self.on_press(y, state, now),

            Event::Drag {
                y,
                button: MouseButton::Left,
                ..
            } => self.on_drag(y, state),

            Event::Release {
                y,
                button: MouseButton::Left,
                ..
            } => self.on_release(y, &layout, state, now),

            Event::Scroll { x, y, delta } if area.contains(x, y) => {
                self.on_scroll(delta, state, now)
            }

            Event::Key { key, modifiers } => self.on_key(key, modifiers, &layout, state, now),

            _ => GestureOutcome::default(),
        }
    }

    /// Advance time-driven transitions: fire the debounced wheel snap and
    /// retire finished settle animations.
    pub fn tick(&mut self, state: &mut SelectionState, now: Instant) -> GestureOutcome {
        match self.phase {
            Phase::Wheeling { deadline } if now >= deadline => self.resolve_snap(state, now),
            Phase::Settling(anim) => {
                if anim.is_finished(now) {
                    self.phase = Phase::Idle;
                }
                GestureOutcome::redraw()
            }
            _ => GestureOutcome::default(),
        }
    }

    fn on_press(&mut self, y: u16, state: &mut SelectionState, now: Instant) -> GestureOutcome {
        // A press mid-settle cancels the animation and resumes tracking
        // from its current interpolated offset, so nothing jumps.
        if let Phase::Settling(anim) = &self.phase {
            state.nudge(anim.offset_at(now));
        }
        self.phase = Phase::Dragging {
            last_y: y,
            moved: false,
        };
        GestureOutcome::default()
    }

    fn on_drag(&mut self, y: u16, state: &mut SelectionState) -> GestureOutcome {
        let Phase::Dragging { last_y, moved } = &mut self.phase else {
            return GestureOutcome::default();
        };

        // Dragging up (y shrinking) rolls the wheel toward later options.
        let dy = *last_y as f32 - y as f32;
        if dy == 0.0 {
            return GestureOutcome::default();
        }
        *moved = true;
        *last_y = y;
        state.nudge(dy);
        GestureOutcome::redraw()
    }

    fn on_release(
        &mut self,
        y: u16,
        layout: &WheelLayout,
        state: &mut SelectionState,
        now: Instant,
    ) -> GestureOutcome {
        let Phase::Dragging { moved, .. } = self.phase else {
            return GestureOutcome::default();
        };

        if !moved && state.pending_offset() == 0.0 {
            // Stationary press-release: a tap. An off-center row becomes
            // the selection with an animated snap.
            self.phase = Phase::Idle;
            return match layout.slot_at(y) {
                Some(slot) if slot != 0 => {
                    self.jump_by(slot, state, now)
                }
                _ => GestureOutcome::default(),
            };
        }

        self.resolve_snap(state, now)
    }

    fn on_scroll(&mut self, delta: i16, state: &mut SelectionState, now: Instant) -> GestureOutcome {
        if let Phase::Dragging { .. } = self.phase {
            return GestureOutcome::default();
        }
        if let Phase::Settling(anim) = &self.phase {
            state.nudge(anim.offset_at(now));
        }

        // One wheel step is one item height; the snap decision waits for
        // the quiesce window so a flick is not cut short.
        state.nudge(delta as f32 * state.item_height() as f32);
        self.phase = Phase::Wheeling {
            deadline: now + WHEEL_QUIESCE,
        };
        GestureOutcome::redraw()
    }

    fn on_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        layout: &WheelLayout,
        state: &mut SelectionState,
        now: Instant,
    ) -> GestureOutcome {
        if !modifiers.none() {
            return GestureOutcome::default();
        }

        let slots = layout.visible_slots();
        let page = (slots.end() - slots.start() + 1).max(1);

        match key {
            Key::Up => self.jump_by(-1, state, now),
            Key::Down => self.jump_by(1, state, now),
            Key::PageUp => self.jump_by(-page, state, now),
            Key::PageDown => self.jump_by(page, state, now),
            Key::Home => self.jump_to(0, state, now),
            Key::End => {
                if state.count() == 0 {
                    GestureOutcome::default()
                } else {
                    self.jump_to(state.count() as isize - 1, state, now)
                }
            }
            _ => GestureOutcome::default(),
        }
    }

    /// Direct index move (keyboard, tap): bypasses the continuous-offset
    /// path entirely and settles with an animated snap.
    fn jump_by(&mut self, delta: isize, state: &mut SelectionState, now: Instant) -> GestureOutcome {
        if state.count() == 0 {
            return GestureOutcome::default();
        }
        self.jump_to(state.index() as isize + delta, state, now)
    }

    fn jump_to(&mut self, target: isize, state: &mut SelectionState, now: Instant) -> GestureOutcome {
        let visual = self.visual_offset(state, now);
        state.clear_offset();

        let old = state.index();
        let changed = state.set_index(target);
        let applied = (state.index() as f32 - old as f32) * state.item_height() as f32;
        self.settle_from(visual - applied, now);

        if changed.is_some() || visual != 0.0 {
            GestureOutcome::settled(changed)
        } else {
            GestureOutcome::default()
        }
    }

    /// Round-and-clamp the accumulated offset, then animate to rest.
    fn resolve_snap(&mut self, state: &mut SelectionState, now: Instant) -> GestureOutcome {
        let resolution = state.snap();
        self.settle_from(resolution.settle_from, now);
        GestureOutcome::settled(resolution.changed)
    }

    fn settle_from(&mut self, offset: f32, now: Instant) {
        if offset == 0.0 {
            self.phase = Phase::Idle;
        } else {
            self.phase = Phase::Settling(SettleAnimation::new(
                offset,
                now,
                self.settle_duration,
                self.easing,
            ));
        }
    }
}
