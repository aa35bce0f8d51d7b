use crate::ui::app::{App, Notice, NoticeKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::quote::render_quote_card;
use crate::ui::theme::{ACCENT_CYAN, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.quote_state()), header);
    frame.render_widget(Clear, body);
    render_quote_card(frame, body, app.quote_state());
    frame.render_widget(
        Footer::new().widget(footer, app.last_command_error()),
        footer,
    );

    if let Some(notice) = app.notice() {
        render_notice(frame, body, notice);
    }
}

fn render_notice(frame: &mut Frame<'_>, body: Rect, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Info => STATUS_OK,
        NoticeKind::Error => STATUS_ERROR,
    };
    let lines = vec![
        Line::from(Span::styled(notice.message.clone(), Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Notice ", Style::default().fg(ACCENT_CYAN)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
