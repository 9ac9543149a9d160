//! Interaction prompt bar for the faced target.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use satchel_frontend_core::PanelStyler;

pub fn render<T: PanelStyler<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    prompt: Option<&str>,
    item_use: bool,
    theme: &T,
) {
    let line = match prompt {
        Some(text) => Line::from(vec![
            Span::styled("[Tab] ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.to_string(), theme.style_prompt(item_use)),
        ]),
        None => Line::from(Span::styled(
            "Nothing nearby.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Facing "));
    frame.render_widget(paragraph, area);
}
