//! Viewed-slot panel: item name, description, stack amount, and the
//! navigation indicators.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use satchel_frontend_core::{PanelStyler, SlotPanelView};

pub fn render<T: PanelStyler<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view: &SlotPanelView,
    theme: &T,
) {
    let mut lines = Vec::new();

    if view.total == 0 {
        lines.push(Line::from(Span::styled(
            "Your satchel is empty.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            view.name.clone(),
            theme.emphasize(Style::default().fg(Color::White)),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::raw(view.description.clone())));
        if !view.amount.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("Amount: "),
                Span::styled(view.amount.clone(), theme.style_amount()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("<- prev", theme.style_nav(view.nav.prev_enabled)),
        Span::raw("   "),
        Span::styled("next ->", theme.style_nav(view.nav.next_enabled)),
        Span::raw("   "),
        Span::styled("[e]quip", theme.style_nav(view.nav.equip_enabled)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Viewed Slot "))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
