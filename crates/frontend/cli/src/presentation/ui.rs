//! UI composition: one render entry point laying out all widgets.

use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use satchel_frontend_core::{MessageLog, SlotPanelView};

use crate::presentation::{terminal::Tui, theme::SatchelTheme, widgets};

/// Everything a frame draw needs, borrowed from the app for the duration of
/// one render.
pub struct RenderContext<'a> {
    pub view: &'a SlotPanelView,
    pub messages: &'a MessageLog,
    pub equipped_name: Option<&'a str>,
    pub prompt: Option<&'a str>,
    pub prompt_item_use: bool,
    pub preview_art: Option<&'a [String]>,
    pub message_panel_height: u16,
    pub preview_pane: bool,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = SatchelTheme;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Slot panel + preview
                Constraint::Length(3),                        // Interaction prompt
                Constraint::Length(ctx.message_panel_height), // Log
                Constraint::Length(1),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.view, ctx.equipped_name);

        if ctx.view.visible {
            if ctx.preview_pane {
                let panels = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                    .split(chunks[1]);
                widgets::slot_panel::render(frame, panels[0], ctx.view, &theme);
                widgets::preview::render(frame, panels[1], ctx.preview_art);
            } else {
                widgets::slot_panel::render(frame, chunks[1], ctx.view, &theme);
            }
        } else {
            let closed = Paragraph::new("Satchel closed. Press i to open it.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(closed, chunks[1]);
        }

        widgets::prompt_bar::render(frame, chunks[2], ctx.prompt, ctx.prompt_item_use, &theme);
        widgets::messages::render(frame, chunks[3], ctx.messages, &theme);
        widgets::footer::render(frame, chunks[4]);
    })?;

    Ok(())
}
