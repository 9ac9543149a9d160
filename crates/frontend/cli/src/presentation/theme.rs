//! Ratatui theme implementing the framework-agnostic PanelStyler.

use ratatui::style::{Color, Modifier, Style};
use satchel_frontend_core::{MessageKind, PanelStyler};

/// Color scheme and styling rules for the terminal client.
pub struct SatchelTheme;

impl PanelStyler for SatchelTheme {
    type Style = Style;

    fn style_nav(&self, enabled: bool) -> Self::Style {
        if enabled {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }

    fn style_amount(&self) -> Self::Style {
        Style::default().fg(Color::Cyan)
    }

    fn style_prompt(&self, item_use: bool) -> Self::Style {
        if item_use {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn style_message(&self, kind: MessageKind) -> Self::Style {
        match kind {
            MessageKind::Activity => Style::default().fg(Color::White),
            MessageKind::Hint => Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            MessageKind::Alert => Style::default().fg(Color::LightRed),
        }
    }

    fn emphasize(&self, base: Self::Style) -> Self::Style {
        base.add_modifier(Modifier::BOLD)
    }
}

impl SatchelTheme {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SatchelTheme {
    fn default() -> Self {
        Self::new()
    }
}
