//! Input processing for the terminal client.
//!
//! Owns the keyboard-to-command mapping so the rest of the application can
//! stay agnostic about concrete key bindings or `crossterm` event details.

use crossterm::event::{KeyCode, KeyEvent};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// View the next inventory slot.
    NextSlot,
    /// View the previous inventory slot.
    PrevSlot,
    /// Equip the viewed slot.
    EquipViewed,
    /// Show/hide the inventory display.
    ToggleInventory,
    /// Face the next interaction target.
    CycleTarget,
    /// Pick up the next supply drop.
    PickUp,
    /// Drop the viewed stack.
    DropViewed,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::PrevSlot,
            KeyCode::Right => KeyAction::NextSlot,
            KeyCode::Tab => KeyAction::CycleTarget,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'h' => KeyAction::PrevSlot,
            'l' => KeyAction::NextSlot,
            'e' => KeyAction::EquipViewed,
            'i' => KeyAction::ToggleInventory,
            'g' => KeyAction::PickUp,
            'x' => KeyAction::DropViewed,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_vi_keys_navigate_slots() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Right)), KeyAction::NextSlot);
        assert_eq!(input.handle_key(key(KeyCode::Left)), KeyAction::PrevSlot);
        assert_eq!(input.handle_key(key(KeyCode::Char('l'))), KeyAction::NextSlot);
        assert_eq!(input.handle_key(key(KeyCode::Char('h'))), KeyAction::PrevSlot);
    }

    #[test]
    fn uppercase_input_maps_like_lowercase() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Char('E'))), KeyAction::EquipViewed);
        assert_eq!(input.handle_key(key(KeyCode::Char('Q'))), KeyAction::Quit);
    }

    #[test]
    fn unmapped_keys_produce_nothing() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(input.handle_key(key(KeyCode::Home)), KeyAction::None);
    }
}
