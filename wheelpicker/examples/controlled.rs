//! Controlled-mode demo: the caller owns the value. Number keys push a
//! value into the picker from outside; the sync never re-emits a change
//! event (watch the log), while wheel gestures still do.

use std::fs::File;
use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, WriteLogger};
use wheelpicker::{Event, Key, PickerOption, Rect, Rgb, Terminal, TextStyle, WheelPicker};

const SIZES: &[(&str, &str)] = &[
    ("Extra small", "xs"),
    ("Small", "s"),
    ("Medium", "m"),
    ("Large", "l"),
    ("Extra large", "xl"),
];

fn main() -> std::io::Result<()> {
    let log_file = File::create("controlled.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let options = SIZES
        .iter()
        .map(|(label, value)| PickerOption::new(*label, *value))
        .collect();
    let mut picker = WheelPicker::new(options)
        .value("m")
        .on_change(|change| log::info!("picker emitted {} (index {})", change.value, change.index));

    let mut redraw = true;
    let mut animating = false;

    loop {
        let area = wheel_area(term.size(), &picker);

        if redraw {
            let value = picker.selected_value().unwrap_or("-").to_string();
            term.draw(|buf| {
                picker.render(area, buf);
                let footer = format!("value: {value}   1-5 sets externally, q quits");
                buf.draw_text(
                    area.x.saturating_sub(6),
                    area.bottom() + 1,
                    &footer,
                    buf.width(),
                    Rgb::new(140, 140, 140),
                    Rgb::new(0, 0, 0),
                    TextStyle::new(),
                );
            })?;
            redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };
        let events = term.poll(timeout)?;

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Key {
                    key: Key::Char(c @ '1'..='5'),
                    ..
                } => {
                    let slot = *c as usize - '1' as usize;
                    // External update: re-seats the wheel, emits nothing.
                    redraw |= picker.sync_value(SIZES[slot].1);
                    log::info!("caller pushed {}", SIZES[slot].1);
                }
                _ => {}
            }
        }

        redraw |= picker.process_events(&events, area);
        animating = picker.update(Instant::now());
        redraw |= animating;
    }
}

fn wheel_area((width, height): (u16, u16), picker: &WheelPicker) -> Rect {
    let w = 24.min(width);
    let h = picker.preferred_height().min(height);
    Rect::new((width - w) / 2, (height.saturating_sub(h)) / 2, w, h)
}
