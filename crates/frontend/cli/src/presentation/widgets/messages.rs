//! Activity feed panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use satchel_frontend_core::{MessageLog, PanelStyler};

pub fn render<T: PanelStyler<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    messages: &MessageLog,
    theme: &T,
) {
    let visible = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = messages
        .recent(visible)
        .map(|message| {
            Line::from(Span::styled(
                message.display(),
                theme.style_message(message.kind),
            ))
        })
        .collect();
    // `recent` yields newest first; the panel reads top-down oldest first.
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "));
    frame.render_widget(paragraph, area);
}
