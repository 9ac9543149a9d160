//! Capability traits for interaction targets.
//!
//! A target is anything the player can face and act on. Every target has a
//! name; targets that additionally accept an item-based use action expose the
//! [`ItemUsable`] capability through `as_item_usable`.

/// A nameable interaction target.
pub trait Interactable {
    fn name(&self) -> &str;

    /// Capability downcast: targets that accept item use return themselves.
    fn as_item_usable(&self) -> Option<&dyn ItemUsable> {
        None
    }
}

/// Capability of accepting an item-based use action.
///
/// `can_use_item` reflects the target's current state (a lock already open
/// may stop accepting keys); the prompt layer re-queries it on every compose.
pub trait ItemUsable {
    fn can_use_item(&self) -> bool;
}
