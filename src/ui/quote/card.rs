//! Rendering for the quote card.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT_VIOLET, AUTHOR_TEXT, BUTTON_TEXT, GLOBAL_BORDER, MUTED_TEXT, QUOTE_TEXT, STATUS_ERROR,
};

use super::state::QuoteState;

const CARD_MAX_WIDTH: u16 = 72;

/// Lines of the card body, before wrapping.
pub(crate) fn card_lines(state: &QuoteState) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);

    let Some(quote) = state.quote.as_ref().filter(|_| state.is_displayable()) else {
        let mut lines = vec![Line::from(vec![
            Span::styled(state.spinner_frame(), Style::default().fg(BUTTON_TEXT)),
            Span::styled(" Loading quote…", muted),
        ])
        .centered()];
        if state.retry_attempt > 0 {
            let reason = state.last_failure.as_deref().unwrap_or("request failed");
            lines.push(
                Line::from(Span::styled(
                    format!("Retry {} after: {}", state.retry_attempt, reason),
                    muted.add_modifier(Modifier::DIM),
                ))
                .centered(),
            );
        }
        return lines;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("“{}”", quote.text()),
            Style::default().fg(QUOTE_TEXT).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            format!("— {}", quote.author()),
            Style::default().fg(AUTHOR_TEXT),
        ))
        .right_aligned(),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " n  New Quote ",
                Style::default()
                    .fg(Color::White)
                    .bg(ACCENT_VIOLET)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(" t  Tweet ", Style::default().fg(BUTTON_TEXT)),
            Span::raw("  "),
            Span::styled(" c  Copy ", Style::default().fg(BUTTON_TEXT)),
        ])
        .centered(),
    ];

    if let Some(error) = &state.error {
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(STATUS_ERROR),
            ))
            .centered(),
        );
    }

    lines
}

pub fn render_quote_card(frame: &mut Frame<'_>, area: Rect, state: &QuoteState) {
    if area.width < 6 || area.height < 3 {
        return;
    }

    let card_width = (area.width.saturating_mul(92) / 100)
        .min(CARD_MAX_WIDTH)
        .max(area.width.min(24));
    // Borders plus one column of padding on each side.
    let inner_width = card_width.saturating_sub(4);
    let paragraph = Paragraph::new(card_lines(state)).wrap(Wrap { trim: false });
    let rows = u16::try_from(paragraph.line_count(inner_width)).unwrap_or(u16::MAX);
    let rect = centered_rect_by_size(area, card_width, rows.saturating_add(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph.block(block), rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{FallbackCatalog, Quote, FALLBACK_ADVISORY};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn empty_state_shows_loading() {
        let lines = text_of(&card_lines(&QuoteState::default()));
        assert_eq!(lines, vec!["| Loading quote…".to_string()]);
    }

    #[test]
    fn retry_line_names_failure() {
        let state = QuoteState {
            loading: true,
            retry_attempt: 1,
            last_failure: Some("HTTP 500".into()),
            ..QuoteState::default()
        };
        let lines = text_of(&card_lines(&state));
        assert_eq!(lines[1], "Retry 1 after: HTTP 500");
    }

    #[test]
    fn settled_state_shows_quote_and_author() {
        let state = QuoteState {
            quote: Quote::new("X", Some("Y")),
            ..QuoteState::default()
        };
        let lines = text_of(&card_lines(&state));
        assert_eq!(lines[0], "“X”");
        assert_eq!(lines[2], "— Y");
        assert!(lines[4].contains("New Quote"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn advisory_follows_controls() {
        let state = QuoteState {
            quote: Quote::new("X", Some("Y")),
            error: Some("offline".into()),
            ..QuoteState::default()
        };
        let lines = text_of(&card_lines(&state));
        assert_eq!(lines.last().map(String::as_str), Some("offline"));
    }

    fn render_screen(state: &QuoteState, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 60)).unwrap();
        terminal
            .draw(|frame| render_quote_card(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn fallback_card_is_never_clipped() {
        for quote in FallbackCatalog::builtin().iter() {
            let state = QuoteState {
                quote: Some(quote.clone()),
                error: Some(FALLBACK_ADVISORY.to_string()),
                ..QuoteState::default()
            };
            for width in [30, 40, 52, 64, 80, 100] {
                let screen = render_screen(&state, width);
                assert!(
                    screen.contains("quotes."),
                    "advisory cut off at width {} for {:?}",
                    width,
                    quote.author()
                );
            }
        }
    }

    #[test]
    fn remote_card_keeps_controls_visible() {
        for quote in FallbackCatalog::builtin().iter() {
            let state = QuoteState {
                quote: Some(quote.clone()),
                ..QuoteState::default()
            };
            for width in [30, 40, 64] {
                let screen = render_screen(&state, width);
                assert!(
                    screen.contains("Copy"),
                    "controls cut off at width {} for {:?}",
                    width,
                    quote.author()
                );
            }
        }
    }
}
