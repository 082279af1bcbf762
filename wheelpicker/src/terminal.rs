use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::event::Event;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode alternate-screen host for the demos: polls input, lets the
/// caller draw into a cell buffer, and flushes only the cells that changed
/// since the previous frame.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Collect pending input, translated to crate events. Blocks up to
    /// `timeout` for the first event, then drains whatever else is queued.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            if let Some(ev) = Event::from_crossterm(&event::read()?) {
                events.push(ev);
            }
            while event::poll(Duration::ZERO)? {
                if let Some(ev) = Event::from_crossterm(&event::read()?) {
                    events.push(ev);
                }
            }
        }

        Ok(events)
    }

    /// Run one frame: hand the caller a cleared buffer, then flush the
    /// diff against the previous frame.
    pub fn draw(&mut self, f: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        // Re-allocate on resize; the full screen redraws that frame.
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
        }

        self.current.clear();
        f(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_pos: Option<(u16, u16, u16)> = None;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            // Wide chars already painted their trailing cell.
            if cell.wide_continuation {
                continue;
            }

            let sequential =
                matches!(last_pos, Some((lx, ly, lw)) if y == ly && x == lx + lw);
            if !sequential {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = Some(cell.fg);
            }

            if last_bg != Some(cell.bg) {
                queue!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = Some(cell.bg);
            }

            queue_style_change(&mut self.stdout, last_style, cell.style)?;
            last_style = cell.style;

            write!(self.stdout, "{}", cell.char)?;
            last_pos = Some((x, y, char_width(cell.char).max(1) as u16));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

// A free function, not a method: flush_diff iterates `self.current` while
// queueing, so only the stdout field may be borrowed mutably.
fn queue_style_change(out: &mut impl Write, from: TextStyle, to: TextStyle) -> io::Result<()> {
    if to.bold != from.bold {
        let attr = if to.bold {
            Attribute::Bold
        } else {
            Attribute::NormalIntensity
        };
        queue!(out, SetAttribute(attr))?;
    }
    if to.dim != from.dim {
        let attr = if to.dim {
            Attribute::Dim
        } else {
            Attribute::NormalIntensity
        };
        queue!(out, SetAttribute(attr))?;
    }
    if to.italic != from.italic {
        let attr = if to.italic {
            Attribute::Italic
        } else {
            Attribute::NoItalic
        };
        queue!(out, SetAttribute(attr))?;
    }
    if to.underline != from.underline {
        let attr = if to.underline {
            Attribute::Underlined
        } else {
            Attribute::NoUnderline
        };
        queue!(out, SetAttribute(attr))?;
    }
    Ok(())
}


impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
