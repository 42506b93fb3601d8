//! Field Widget
//!
//! A single labeled form row: `label  value_` with the cursor shown on the
//! focused field. Long values keep their tail visible.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{DIM_GRAY, FOCUS_YELLOW};

/// Columns reserved for labels
pub const LABEL_WIDTH: u16 = 22;

/// A labeled, single-line form field
pub struct Field<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
    disabled: bool,
}

impl<'a> Field<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            disabled: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Read-only field (derived values)
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Keep the last `width` columns of `text`
pub fn tail_to_width(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for Field<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default()
                .fg(FOCUS_YELLOW)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let label_width = LABEL_WIDTH.min(area.width);
        buf.set_stringn(area.x, area.y, self.label, label_width as usize, label_style);

        let value_x = area.x + label_width;
        let value_width = area.width.saturating_sub(label_width) as usize;
        if value_width < 2 {
            return;
        }

        let value_style = if self.disabled {
            Style::default().fg(DIM_GRAY)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };

        // Leave a column for the cursor
        let visible = tail_to_width(self.value, value_width - 1);
        let end = buf.set_stringn(value_x, area.y, visible, value_width - 1, value_style);

        if self.focused && !self.disabled {
            buf.set_string(end.0, end.1, "_", Style::default().fg(FOCUS_YELLOW));
        }
    }
}
