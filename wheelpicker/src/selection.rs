/// Overscroll drag distance beyond a boundary approaches this many item
/// heights but never reaches it.
pub const RUBBER_BAND_SPAN_ITEMS: f32 = 1.5;

/// Outcome of a snap: the index change (if any) and the visual offset the
/// settle animation starts from, relative to the new rest position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResolution {
    pub changed: Option<usize>,
    pub settle_from: f32,
}

/// The picker's selection: a current index plus the transient continuous
/// offset accumulated by an in-flight gesture.
///
/// Offsets are in terminal rows, positive toward later options. The raw
/// accumulation is kept as-is so a drag retraces its own path; boundary
/// resistance is applied only when reading [`visual_offset`], which keeps
/// [`snap`] a plain round-and-clamp.
///
/// [`visual_offset`]: SelectionState::visual_offset
/// [`snap`]: SelectionState::snap
#[derive(Debug, Clone)]
pub struct SelectionState {
    index: usize,
    count: usize,
    item_height: u16,
    pending_offset: f32,
}

impl SelectionState {
    pub fn new(count: usize, initial: usize, item_height: u16) -> Self {
        let index = if count == 0 {
            0
        } else {
            initial.min(count - 1)
        };
        Self {
            index,
            count,
            item_height: item_height.max(1),
            pending_offset: 0.0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn item_height(&self) -> u16 {
        self.item_height
    }

    pub fn pending_offset(&self) -> f32 {
        self.pending_offset
    }

    /// Request a selection. Out-of-range targets clamp into bounds; a
    /// request for the already-current index is a no-op. Returns the new
    /// index when the selection actually changed.
    pub fn set_index(&mut self, target: isize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let clamped = target.clamp(0, self.count as isize - 1) as usize;
        if clamped == self.index {
            return None;
        }
        self.index = clamped;
        Some(clamped)
    }

    /// Accumulate continuous gesture input. Never changes the index; that
    /// decision is deferred to [`snap`](SelectionState::snap).
    pub fn nudge(&mut self, delta: f32) {
        if self.count == 0 {
            return;
        }
        self.pending_offset += delta;
    }

    /// Discard accumulated continuous input without snapping. Used by the
    /// paths that bypass the continuous offset entirely (keyboard, tap,
    /// programmatic re-sync).
    pub fn clear_offset(&mut self) {
        self.pending_offset = 0.0;
    }

    /// The offset to display, with sub-linear rubber-band resistance past
    /// either boundary.
    pub fn visual_offset(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let h = self.item_height as f32;
        let min = -(self.index as f32) * h;
        let max = (self.count - 1 - self.index) as f32 * h;
        let span = RUBBER_BAND_SPAN_ITEMS * h;

        if self.pending_offset > max {
            max + rubber_band(self.pending_offset - max, span)
        } else if self.pending_offset < min {
            min - rubber_band(min - self.pending_offset, span)
        } else {
            self.pending_offset
        }
    }

    /// Resolve the accumulated offset to the nearest option, clamped to
    /// bounds, and reset the offset to exactly zero.
    pub fn snap(&mut self) -> SnapResolution {
        if self.count == 0 {
            return SnapResolution {
                changed: None,
                settle_from: 0.0,
            };
        }

        let visual = self.visual_offset();
        let delta = snap_delta(self.pending_offset, self.item_height);
        let old = self.index;
        let changed = self.set_index(old as isize + delta);
        let applied = (self.index as f32 - old as f32) * self.item_height as f32;
        self.pending_offset = 0.0;

        log::debug!(
            "snap: offset {visual:.2} -> delta {delta}, index {old} -> {}",
            self.index
        );

        SnapResolution {
            changed,
            settle_from: visual - applied,
        }
    }
}

/// Nearest whole-item offset for an accumulated scroll displacement,
/// rounding halves away from zero so a half-item drag commits in the drag
/// direction. Pure, so the snap policy is testable without any rendering.
pub fn snap_delta(offset: f32, item_height: u16) -> isize {
    (offset / item_height.max(1) as f32).round() as isize
}

/// Sub-linear overscroll resistance: grows with `excess` but stays below
/// `span`. Total for all non-negative inputs.
pub fn rubber_band(excess: f32, span: f32) -> f32 {
    span * excess / (span + excess)
}
