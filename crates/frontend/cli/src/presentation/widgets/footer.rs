//! Key help footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const HELP: &str =
    "arrows/h/l browse | e equip | i satchel | Tab target | g pick up | x drop | q quit";

pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        HELP,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(paragraph, area);
}
