#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Row arithmetic for the wheel: which screen rows belong to which slot.
///
/// A "slot" is a signed distance in whole items from the wheel's center;
/// slot 0 holds the current selection, negative slots sit above it. The
/// center band is anchored so it stays put for any area height.
#[derive(Debug, Clone, Copy)]
pub struct WheelLayout {
    pub area: Rect,
    pub item_height: u16,
}

impl WheelLayout {
    pub fn new(area: Rect, item_height: u16) -> Self {
        Self {
            area,
            item_height: item_height.max(1),
        }
    }

    /// Top row of the center (selection) band.
    pub fn center_top(&self) -> u16 {
        let h = self.item_height;
        self.area.y + (self.area.height.saturating_sub(h)) / 2
    }

    /// Top row of the band for `slot`, or None when it falls outside the
    /// area (fully or partially).
    pub fn slot_top(&self, slot: isize) -> Option<u16> {
        let top = self.center_top() as isize + slot * self.item_height as isize;
        let bottom = top + self.item_height as isize;
        if top < self.area.y as isize || bottom > self.area.bottom() as isize {
            None
        } else {
            Some(top as u16)
        }
    }

    /// The slot containing screen row `y`, including partially visible
    /// slots at the edges. None when `y` is outside the area.
    pub fn slot_at(&self, y: u16) -> Option<isize> {
        if y < self.area.y || y >= self.area.bottom() {
            return None;
        }
        let rel = y as isize - self.center_top() as isize;
        Some(rel.div_euclid(self.item_height as isize))
    }

    /// Inclusive slot range that fits fully inside the area. Collapses to
    /// `0..=0` when the area is shorter than one item.
    pub fn visible_slots(&self) -> std::ops::RangeInclusive<isize> {
        let above = self.center_top().saturating_sub(self.area.y) / self.item_height;
        let below = self
            .area
            .bottom()
            .saturating_sub(self.center_top())
            .saturating_sub(self.item_height)
            / self.item_height;
        -(above as isize)..=below as isize
    }

    /// Screen rect of the center band.
    pub fn center_band(&self) -> Rect {
        Rect::new(
            self.area.x,
            self.center_top(),
            self.area.width,
            self.item_height.min(self.area.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_band_is_anchored() {
        let layout = WheelLayout::new(Rect::new(0, 0, 20, 7), 1);
        assert_eq!(layout.center_top(), 3);
        assert_eq!(layout.visible_slots(), -3..=3);
    }

    #[test]
    fn slot_lookup_round_trips() {
        let layout = WheelLayout::new(Rect::new(2, 1, 20, 9), 1);
        for slot in layout.visible_slots() {
            let top = layout.slot_top(slot).unwrap();
            assert_eq!(layout.slot_at(top), Some(slot));
        }
        assert_eq!(layout.slot_at(0), None);
        assert_eq!(layout.slot_at(10), None);
    }

    #[test]
    fn short_areas_collapse_to_the_center_slot() {
        let layout = WheelLayout::new(Rect::new(0, 0, 20, 2), 3);
        assert_eq!(layout.visible_slots(), 0..=0);
        let layout = WheelLayout::new(Rect::new(0, 0, 20, 0), 1);
        assert_eq!(layout.visible_slots(), 0..=0);
    }

    #[test]
    fn tall_items_shrink_the_window() {
        let layout = WheelLayout::new(Rect::new(0, 0, 20, 9), 3);
        assert_eq!(layout.center_top(), 3);
        assert_eq!(layout.visible_slots(), -1..=1);
        assert_eq!(layout.slot_at(4), Some(0));
        assert_eq!(layout.slot_at(2), Some(-1));
    }
}
