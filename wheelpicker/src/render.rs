use crate::buffer::Buffer;
use crate::layout::{Rect, WheelLayout};
use crate::options::OptionList;
use crate::selection::SelectionState;
use crate::text::{center_offset, display_width, truncate_to_width};
use crate::types::{PickerTheme, TextStyle};

/// Draw the wheel into `area`: a selection band at the vertical center,
/// neighbors above and below fading toward the theme's muted color with
/// distance from the center. `visual_offset` shifts the whole column by
/// the in-flight gesture/animation displacement, in rows, positive toward
/// later options.
pub fn render_wheel(
    area: Rect,
    buf: &mut Buffer,
    options: &OptionList,
    state: &SelectionState,
    visual_offset: f32,
    theme: &PickerTheme,
) {
    if area.is_empty() {
        return;
    }

    let bg = theme.background.to_rgb();
    buf.fill(area, theme.muted.to_rgb(), bg);

    let layout = WheelLayout::new(area, state.item_height());
    let band = layout.center_band();
    buf.fill(band, theme.foreground.to_rgb(), theme.selection_band.to_rgb());

    if options.is_empty() {
        return;
    }

    let h = state.item_height() as isize;
    // Terminal cells can't show sub-row displacement; draw at the nearest
    // whole row.
    let shift = visual_offset.round() as isize;
    let center_mid = layout.center_top() as isize + (h - 1) / 2;
    let max_slot = *layout.visible_slots().end().max(&1) as f32;

    for (i, option) in options.iter().enumerate() {
        let rel = i as isize - state.index() as isize;
        let text_row = center_mid + rel * h - shift;
        if text_row < area.y as isize || text_row >= area.bottom() as isize {
            continue;
        }
        let text_row = text_row as u16;

        // Distance from center in item units drives emphasis falloff.
        let distance = ((text_row as isize - center_mid) as f32 / h as f32).abs();
        let on_band = band.contains(band.x, text_row);

        let fg = if on_band {
            theme.foreground
        } else {
            let t = (distance / (max_slot + 1.0)).min(1.0);
            theme.foreground.mix(theme.muted, t)
        };
        let style = if on_band {
            TextStyle::new().bold()
        } else if distance >= 2.0 {
            TextStyle::new().dim()
        } else {
            TextStyle::new()
        };
        let row_bg = if on_band {
            theme.selection_band.to_rgb()
        } else {
            bg
        };

        let label = truncate_to_width(&option.label, area.width as usize);
        let x = area.x + center_offset(display_width(&label), area.width as usize) as u16;
        buf.draw_text(x, text_row, &label, area.width, fg.to_rgb(), row_bg, style);
    }
}
