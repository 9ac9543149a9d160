//! Terminal presentation: layout, theme, preview stage, and widgets.
pub mod stage;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
