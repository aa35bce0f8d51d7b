use crate::ui::quote::QuoteState;
use crate::ui::theme::{
    ACCENT_CYAN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &QuoteState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (dot, label, color) = if state.loading || state.quote.is_none() {
            ("○", "loading", MUTED_TEXT)
        } else if state.is_fallback() {
            ("●", "local", STATUS_ERROR)
        } else {
            ("●", "live", STATUS_OK)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "InspireX",
                Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, Style::default().fg(color)),
            Span::styled(" ", text_style),
            Span::styled(label, Style::default().fg(color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
