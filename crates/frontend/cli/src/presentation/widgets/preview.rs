//! Preview pane rendering the live ASCII visual.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, art: Option<&[String]>) {
    let lines: Vec<Line> = match art {
        Some(art) => art.iter().map(|l| Line::from(l.clone())).collect(),
        None => vec![Line::from("")],
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::LightYellow))
        .block(Block::default().borders(Borders::ALL).title(" Preview "));

    frame.render_widget(paragraph, area);
}
