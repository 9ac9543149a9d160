//! Interaction prompt composition.

use satchel_core::{Equipment, Interactable, ItemOracle};

/// Composes the action label shown when the player faces an interaction
/// target.
///
/// Prefers the "use equipped item on target" phrasing when the target
/// accepts item use and something is held; otherwise falls back to a
/// generic prompt built from the configured hint. Pure function of current
/// state; composing has no side effects.
#[derive(Clone, Debug)]
pub struct PromptComposer {
    hint: String,
}

impl PromptComposer {
    pub fn new(hint: impl Into<String>) -> Self {
        Self { hint: hint.into() }
    }

    pub fn compose(
        &self,
        target: &dyn Interactable,
        equipment: &Equipment,
        items: &dyn ItemOracle,
    ) -> String {
        if let Some(usable) = target.as_item_usable()
            && usable.can_use_item()
            && let Some(held) = equipment.held()
            && let Some(definition) = items.definition(held)
        {
            return format!("Use {} on {}", definition.name, target.name());
        }

        format!("{} {}", self.hint, target.name())
    }

    /// True when `compose` would produce the item-use phrasing.
    pub fn offers_item_use(&self, target: &dyn Interactable, equipment: &Equipment) -> bool {
        target
            .as_item_usable()
            .is_some_and(|usable| usable.can_use_item())
            && equipment.held().is_some()
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new("Interact with")
    }
}
