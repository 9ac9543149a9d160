//! UI-only application state.

use crate::content::DemoProp;

/// State owned by the terminal client itself: which demo target the player
/// is facing, and the rotating supply of pickups. Presentation state (viewed
/// slot, visibility) lives in the slot viewer.
pub struct AppState {
    targets: Vec<DemoProp>,
    focused: usize,
}

impl AppState {
    pub fn new(targets: Vec<DemoProp>) -> Self {
        Self {
            targets,
            focused: 0,
        }
    }

    pub fn focused_target(&self) -> Option<&DemoProp> {
        self.targets.get(self.focused)
    }

    /// Faces the next target, wrapping around.
    pub fn cycle_target(&mut self) {
        if !self.targets.is_empty() {
            self.focused = (self.focused + 1) % self.targets.len();
        }
    }
}
