use wheelpicker::selection::{rubber_band, snap_delta, RUBBER_BAND_SPAN_ITEMS};
use wheelpicker::SelectionState;

const EPS: f32 = 1e-6;

// ============================================================================
// snap_delta (pure snap policy)
// ============================================================================

#[test]
fn test_snap_delta_rounds_to_nearest() {
    assert_eq!(snap_delta(0.0, 1), 0);
    assert_eq!(snap_delta(0.4, 1), 0);
    assert_eq!(snap_delta(0.6, 1), 1);
    assert_eq!(snap_delta(1.4, 1), 1);
    assert_eq!(snap_delta(1.6, 1), 2);
    assert_eq!(snap_delta(-0.4, 1), 0);
    assert_eq!(snap_delta(-1.6, 1), -2);
}

#[test]
fn test_snap_delta_half_commits_away_from_zero() {
    assert_eq!(snap_delta(0.5, 1), 1);
    assert_eq!(snap_delta(-0.5, 1), -1);
    assert_eq!(snap_delta(1.5, 1), 2);
    assert_eq!(snap_delta(-2.5, 1), -3);
}

#[test]
fn test_snap_delta_respects_item_height() {
    assert_eq!(snap_delta(0.9, 2), 0);
    assert_eq!(snap_delta(1.0, 2), 1);
    assert_eq!(snap_delta(3.0, 2), 2);
    assert_eq!(snap_delta(-1.0, 2), -1);
}

// ============================================================================
// rubber_band
// ============================================================================

#[test]
fn test_rubber_band_zero_at_rest() {
    assert_eq!(rubber_band(0.0, 1.5), 0.0);
}

#[test]
fn test_rubber_band_monotonic_and_bounded() {
    let span = 1.5;
    let mut prev = 0.0;
    for i in 1..=50 {
        let excess = i as f32 * 0.5;
        let resisted = rubber_band(excess, span);
        assert!(resisted > prev, "not monotonic at excess {excess}");
        assert!(resisted < span, "escaped the span at excess {excess}");
        assert!(resisted < excess, "resistance must be sub-linear");
        prev = resisted;
    }
}

// ============================================================================
// set_index
// ============================================================================

#[test]
fn test_set_index_always_lands_in_bounds() {
    for count in 1..=5usize {
        let mut state = SelectionState::new(count, 0, 1);
        for target in [-100isize, -1, 0, 1, 2, 4, 5, 100] {
            let _ = state.set_index(target);
            assert!(state.index() < count, "index {} out of bounds", state.index());
        }
    }
}

#[test]
fn test_set_index_current_is_a_noop() {
    let mut state = SelectionState::new(3, 1, 1);
    assert_eq!(state.set_index(1), None);
    assert_eq!(state.index(), 1);
}

#[test]
fn test_set_index_reports_the_new_index() {
    let mut state = SelectionState::new(3, 0, 1);
    assert_eq!(state.set_index(2), Some(2));
    // Clamped requests still report when they moved the selection.
    assert_eq!(state.set_index(99), None); // already clamped to 2
    assert_eq!(state.set_index(-5), Some(0));
}

#[test]
fn test_empty_state_is_inert() {
    let mut state = SelectionState::new(0, 0, 1);
    assert_eq!(state.set_index(3), None);
    state.nudge(5.0);
    assert_eq!(state.visual_offset(), 0.0);
    let resolution = state.snap();
    assert_eq!(resolution.changed, None);
    assert_eq!(resolution.settle_from, 0.0);
}

// ============================================================================
// nudge + snap
// ============================================================================

#[test]
fn test_nudge_accumulates_without_changing_index() {
    let mut state = SelectionState::new(5, 2, 1);
    state.nudge(0.4);
    state.nudge(0.4);
    assert!((state.pending_offset() - 0.8).abs() < EPS);
    assert_eq!(state.index(), 2);
}

#[test]
fn test_snap_resets_offset_to_exactly_zero() {
    let mut state = SelectionState::new(5, 2, 1);
    state.nudge(1.7);
    state.snap();
    assert_eq!(state.pending_offset(), 0.0);
    assert_eq!(state.visual_offset(), 0.0);
}

#[test]
fn test_one_item_drag_moves_exactly_one() {
    let mut state = SelectionState::new(5, 2, 1);
    state.nudge(1.0);
    let resolution = state.snap();
    assert_eq!(state.index(), 3);
    assert_eq!(resolution.changed, Some(3));
    // Rest position already matches the new index.
    assert!(resolution.settle_from.abs() < EPS);
}

#[test]
fn test_snap_within_half_item_returns_home() {
    let mut state = SelectionState::new(5, 2, 1);
    state.nudge(0.3);
    let resolution = state.snap();
    assert_eq!(state.index(), 2);
    assert_eq!(resolution.changed, None);
    assert!((resolution.settle_from - 0.3).abs() < EPS);
}

#[test]
fn test_snap_respects_item_height_unit() {
    let mut state = SelectionState::new(5, 2, 3);
    state.nudge(4.0); // 1.33 items
    let resolution = state.snap();
    assert_eq!(state.index(), 3);
    assert_eq!(resolution.changed, Some(3));
    // One item (3 rows) was applied; a third of a row of momentum remains.
    assert!((resolution.settle_from - 1.0).abs() < EPS);
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_overscroll_past_start_snaps_back_to_first() {
    let mut state = SelectionState::new(3, 0, 1);
    state.nudge(-4.0);
    let resolution = state.snap();
    assert_eq!(state.index(), 0);
    assert_eq!(resolution.changed, None);
    assert_eq!(state.pending_offset(), 0.0);
}

#[test]
fn test_overscroll_past_end_snaps_back_to_last() {
    let mut state = SelectionState::new(3, 2, 1);
    state.nudge(4.0);
    let resolution = state.snap();
    assert_eq!(state.index(), 2);
    assert_eq!(resolution.changed, None);
}

#[test]
fn test_overscroll_is_rubber_banded() {
    let mut state = SelectionState::new(3, 0, 1);
    state.nudge(-2.0);
    let visual = state.visual_offset();
    // Resisted: closer to rest than the raw offset, bounded by the span.
    assert!(visual > -2.0);
    assert!(visual < 0.0);
    assert!(visual > -RUBBER_BAND_SPAN_ITEMS);
}

#[test]
fn test_in_bounds_offset_is_not_resisted() {
    let mut state = SelectionState::new(5, 2, 1);
    state.nudge(1.2);
    assert!((state.visual_offset() - 1.2).abs() < EPS);
}

#[test]
fn test_boundary_snap_settles_from_the_resisted_offset() {
    let mut state = SelectionState::new(3, 0, 1);
    state.nudge(-2.0);
    let visual = state.visual_offset();
    let resolution = state.snap();
    // The settle animation starts where the rubber band left the wheel.
    assert!((resolution.settle_from - visual).abs() < EPS);
}
