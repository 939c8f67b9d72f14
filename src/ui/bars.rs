//! Bar-chart frame composition
//!
//! A [`SortFrame`] lays out one instant of algorithm progress into a ratatui
//! [`Buffer`]:
//!
//! ```text
//! row 0            title   "Sorting Visualizer (n=.., delay=..ms)"
//! row 1            status  (blank when empty)
//! rows 2..2+H      bars, tallest row first, one column per element
//! row 2+H          last digit of each value (only with show-values)
//! ```
//!
//! Writing the buffer to the terminal is the painter's job.

use crate::config::VizConfig;
use crate::sorting::Highlights;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Glyph used for a filled bar cell
pub const BAR_GLYPH: &str = "█";

/// Quantize `value` into a bar height in `[1, max_bar_height]`.
///
/// Integer floor division; a zero `max_value` is treated as 1.
pub fn to_height(value: u32, max_value: u32, max_bar_height: u16) -> u16 {
    let scaled = u64::from(value) * u64::from(max_bar_height) / u64::from(max_value.max(1));
    scaled.max(1) as u16
}

/// Label printed under a bar: only the last decimal digit
pub fn value_label(value: u32) -> char {
    char::from_digit(value % 10, 10).unwrap_or('?')
}

pub struct SortFrame<'a> {
    data: &'a [u32],
    highlights: Highlights,
    status: &'a str,
    config: &'a VizConfig,
}

impl<'a> SortFrame<'a> {
    pub fn new(
        data: &'a [u32],
        highlights: Highlights,
        status: &'a str,
        config: &'a VizConfig,
    ) -> Self {
        SortFrame {
            data,
            highlights,
            status,
            config,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Sorting Visualizer (n={}, delay={}ms)",
            self.data.len(),
            self.config.delay_ms
        )
    }

    /// Columns needed to show every bar and both text lines uncut
    pub fn width(&self) -> u16 {
        let widest = self
            .data
            .len()
            .max(self.title().chars().count())
            .max(self.status.chars().count());
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    pub fn height(&self) -> u16 {
        2 + self.config.max_bar_height + u16::from(self.config.show_values)
    }

    /// Render into a fresh buffer sized to fit the whole frame
    pub fn into_buffer(self) -> Buffer {
        let area = Rect::new(0, 0, self.width(), self.height());
        let mut buf = Buffer::empty(area);
        self.render(area, &mut buf);
        buf
    }
}

impl Widget for SortFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let text_style = Style::default().fg(DEFAULT_THEME.text);
        let width = usize::from(area.width);

        buf.set_stringn(area.x, area.y, self.title(), width, text_style);
        if area.height > 1 {
            buf.set_stringn(area.x, area.y + 1, self.status, width, text_style);
        }

        let rows = self.config.max_bar_height;
        let max_value = self.data.iter().copied().max().unwrap_or(0);
        let heights: Vec<u16> = self
            .data
            .iter()
            .map(|&v| to_height(v, max_value, rows))
            .collect();
        let columns = heights.len().min(width);

        for (line, r) in (1..=rows).rev().enumerate() {
            let y = area.y + 2 + line as u16;
            if y >= area.bottom() {
                break;
            }
            for (c, &h) in heights.iter().enumerate().take(columns) {
                if h >= r {
                    let color = DEFAULT_THEME.bar_color(self.highlights.role_at(c));
                    buf.set_string(area.x + c as u16, y, BAR_GLYPH, Style::default().fg(color));
                }
            }
        }

        if self.config.show_values {
            let y = area.y + 2 + rows;
            if y < area.bottom() {
                let labels: String = self
                    .data
                    .iter()
                    .take(columns)
                    .map(|&v| value_label(v))
                    .collect();
                buf.set_string(area.x, y, labels, text_style);
            }
        }
    }
}
