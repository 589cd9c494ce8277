use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// Reusable view component for one detail row.
///
/// Renderers fill `title`, `value` and `detail` on every bind; the list
/// container recycles cells through a [`super::ViewContext`] keyed by
/// `reuse_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailCell {
    pub reuse_id: String,
    pub title: String,
    pub value: String,
    /// Secondary line shown beneath the value, e.g. a scientific name.
    pub detail: String,
    /// Marks a row whose edit flow continues on another screen.
    pub accessory: bool,
}

impl DetailCell {
    pub fn with_reuse_id(reuse_id: impl Into<String>) -> Self {
        Self {
            reuse_id: reuse_id.into(),
            ..Self::default()
        }
    }

    /// Clear display state before rebinding; pooled cells must not leak the
    /// previous row.
    pub fn reset(&mut self) {
        self.title.clear();
        self.value.clear();
        self.detail.clear();
        self.accessory = false;
    }

    /// Styled terminal lines for this cell, wrapped to `max_width`.
    pub fn to_lines(&self, max_width: u16) -> Vec<Line<'static>> {
        let clamp = max_width.max(4) as usize;
        let mut lines = Vec::new();

        let mut title_spans = vec![Span::styled(
            self.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if self.accessory {
            title_spans.push(Span::styled(" ›", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(title_spans));

        if self.value.is_empty() {
            lines.push(Line::from("  "));
        } else {
            for segment in wrap(&self.value, clamp) {
                lines.push(Line::from(Span::styled(
                    format!("  {segment}"),
                    Style::default().fg(Color::White),
                )));
            }
        }

        if !self.detail.is_empty() {
            for segment in wrap(&self.detail, clamp) {
                lines.push(Line::from(Span::styled(
                    format!("  {segment}"),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        lines
    }

    /// Display width of the title, in terminal columns.
    pub fn title_width(&self) -> usize {
        UnicodeWidthStr::width(self.title.as_str())
    }

    /// One-line plain-text rendering with the label column padded to
    /// `label_width` display columns.
    pub fn summary(&self, label_width: usize) -> String {
        let pad = label_width.saturating_sub(UnicodeWidthStr::width(self.title.as_str()));
        let mut out = format!("{}{}  {}", self.title, " ".repeat(pad), self.value);
        if !self.detail.is_empty() {
            out.push_str(&format!(" ({})", self.detail));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_previous_row_state() {
        let mut cell = DetailCell::with_reuse_id("label");
        cell.title = "Species".to_string();
        cell.value = "Quercus".to_string();
        cell.detail = "Quercus rubra".to_string();
        cell.accessory = true;
        cell.reset();
        assert_eq!(cell.reuse_id, "label");
        assert!(cell.title.is_empty());
        assert!(cell.value.is_empty());
        assert!(cell.detail.is_empty());
        assert!(!cell.accessory);
    }

    #[test]
    fn empty_value_renders_a_placeholder_line() {
        let mut cell = DetailCell::with_reuse_id("label");
        cell.title = "Diameter".to_string();
        let lines = cell.to_lines(20);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn summary_pads_the_label_column() {
        let mut cell = DetailCell::with_reuse_id("label");
        cell.title = "Diameter".to_string();
        cell.value = "12.5\"".to_string();
        assert_eq!(cell.summary(10), "Diameter    12.5\"");
    }
}
