//! Framework-agnostic styling seam.
//!
//! Frontends implement [`PanelStyler`] with their own style type (a ratatui
//! `Style`, a CSS class) so widget logic stays independent of the concrete
//! UI framework.

use crate::message::MessageKind;

pub trait PanelStyler {
    type Style;

    /// Style for a navigation indicator, dimmed when the direction is
    /// disabled.
    fn style_nav(&self, enabled: bool) -> Self::Style;

    /// Style for the stack amount readout.
    fn style_amount(&self) -> Self::Style;

    /// Style for the interaction prompt; `item_use` marks the
    /// "Use X on Y" phrasing.
    fn style_prompt(&self, item_use: bool) -> Self::Style;

    fn style_message(&self, kind: MessageKind) -> Self::Style;

    /// Emphasis applied to the viewed slot's name.
    fn emphasize(&self, base: Self::Style) -> Self::Style;
}
