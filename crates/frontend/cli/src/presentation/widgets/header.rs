//! Header bar: title, slot position, and the held item.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use satchel_frontend_core::{SlotPanelView, format};

pub fn render(frame: &mut Frame, area: Rect, view: &SlotPanelView, equipped_name: Option<&str>) {
    let mut spans = vec![
        Span::styled(
            "Satchel",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  slot "),
        Span::styled(
            format::slot_position(view.viewed, view.total),
            Style::default().fg(Color::Yellow),
        ),
    ];

    spans.push(Span::raw("  held: "));
    spans.push(match equipped_name {
        Some(name) => Span::styled(name.to_string(), Style::default().fg(Color::LightGreen)),
        None => Span::styled("nothing", Style::default().fg(Color::DarkGray)),
    });

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
