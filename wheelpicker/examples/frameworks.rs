use std::fs::File;
use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, WriteLogger};
use wheelpicker::{Event, Key, PickerOption, Rect, Terminal, WheelPicker};

fn options() -> Vec<PickerOption> {
    vec![
        PickerOption::new("Next.js", "nextjs"),
        PickerOption::new("Vite", "vite"),
        PickerOption::new("Laravel", "laravel"),
        PickerOption::new("React Router", "react-router"),
        PickerOption::new("Astro", "astro"),
        PickerOption::new("TanStack Start", "tanstack-start"),
        PickerOption::new("TanStack Router", "tanstack-router"),
        PickerOption::new("Gatsby", "gatsby"),
    ]
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("frameworks.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut picker = WheelPicker::new(options())
        .default_value("react-router")
        .visible_rows(7)
        .on_change(|change| log::info!("selected {} (index {})", change.value, change.index));

    let mut redraw = true;
    let mut animating = false;

    loop {
        let area = wheel_area(term.size(), &picker);

        if redraw {
            let value = picker.selected_value().unwrap_or("-").to_string();
            term.draw(|buf| {
                picker.render(area, buf);
                let footer = format!("value: {value}   drag/scroll/arrows, q quits");
                buf.draw_text(
                    area.x,
                    area.bottom() + 1,
                    &footer,
                    buf.width().saturating_sub(area.x),
                    wheelpicker::Rgb::new(140, 140, 140),
                    wheelpicker::Rgb::new(0, 0, 0),
                    wheelpicker::TextStyle::new(),
                );
            })?;
            redraw = false;
        }

        // Short frames while animating, lazy polling otherwise.
        let timeout = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };
        let events = term.poll(timeout)?;

        for event in &events {
            if let Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } = event
            {
                return Ok(());
            }
        }

        redraw |= picker.process_events(&events, area);
        animating = picker.update(Instant::now());
        redraw |= animating;
    }
}

fn wheel_area((width, height): (u16, u16), picker: &WheelPicker) -> Rect {
    let w = 28.min(width);
    let h = picker.preferred_height().min(height);
    Rect::new(
        (width - w) / 2,
        (height.saturating_sub(h)) / 2,
        w,
        h,
    )
}
