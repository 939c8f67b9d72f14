//! Terminal painter: streams composed frames to an output and paces them

use crate::config::VizConfig;
use crate::sorting::{Highlights, Visualizer};
use crate::ui::bars::SortFrame;
use crossterm::{
    cursor::{Hide, MoveTo},
    queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use ratatui::{buffer::Buffer, style::Color};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Draws every frame it receives as a full repaint, then sleeps for the
/// configured delay. The sleep is the animation clock.
pub struct Painter<'a, W: Write> {
    out: &'a mut W,
    config: &'a VizConfig,
    frames: usize,
}

impl<'a, W: Write> Painter<'a, W> {
    pub fn new(out: &'a mut W, config: &'a VizConfig) -> Self {
        Painter {
            out,
            config,
            frames: 0,
        }
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl<W: Write> Visualizer for Painter<'_, W> {
    fn frame(&mut self, data: &[u32], highlights: Highlights, status: &str) -> io::Result<()> {
        let buf = SortFrame::new(data, highlights, status, self.config).into_buffer();
        write_buffer(self.out, &buf)?;
        self.frames += 1;
        log::trace!("frame {}: {:?} {}", self.frames, highlights, status);

        if self.config.delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.delay_ms));
        }
        Ok(())
    }
}

/// Clear the screen, home the cursor and write `buf` row by row.
///
/// Color changes are only emitted for visible glyphs, and trailing blank
/// cells are dropped so narrow frames don't wrap.
pub fn write_buffer<W: Write>(out: &mut W, buf: &Buffer) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Hide)?;

    let width = usize::from(buf.area.width);
    if width > 0 {
        for row in buf.content.chunks(width) {
            let end = row
                .iter()
                .rposition(|cell| cell.symbol() != " ")
                .map_or(0, |last| last + 1);

            let mut current = Color::Reset;
            for cell in &row[..end] {
                if cell.symbol() != " " && cell.fg != current {
                    if cell.fg == Color::Reset {
                        queue!(out, ResetColor)?;
                    } else {
                        queue!(out, SetForegroundColor(term_color(cell.fg)))?;
                    }
                    current = cell.fg;
                }
                queue!(out, Print(cell.symbol()))?;
            }
            if current != Color::Reset {
                queue!(out, ResetColor)?;
            }
            queue!(out, Print("\n"))?;
        }
    }

    out.flush()
}

/// Map a palette color onto the terminal's 256-color table
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Indexed(index) => TermColor::AnsiValue(index),
        _ => TermColor::Reset,
    }
}
