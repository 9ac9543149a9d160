//! Embedded demo content.
//!
//! The client ships a small RON bundle (catalog, starting loadout, pickup
//! supply, interaction targets) so the view layer has real collaborators to
//! bind to. A full game would load this from its content pipeline instead.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use satchel_core::{
    CatalogError, Interactable, ItemDefinition, ItemHandle, ItemUsable, StaticCatalog,
};

const DEMO_RON: &str = include_str!("../content/demo.ron");

/// One stack granted to the player, at startup (`loadout`) or on pickup
/// (`supply`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StackSpec {
    pub handle: ItemHandle,
    pub quantity: u16,
}

/// Prop the player can face. Stands in for a real interaction-detection
/// system; `accepts_items` is the whole of its item-use capability.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DemoProp {
    name: String,
    accepts_items: bool,
}

impl Interactable for DemoProp {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_item_usable(&self) -> Option<&dyn ItemUsable> {
        Some(self)
    }
}

impl ItemUsable for DemoProp {
    fn can_use_item(&self) -> bool {
        self.accepts_items
    }
}

/// Demo content bundle as stored in `content/demo.ron`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DemoContent {
    pub items: Vec<ItemDefinition>,
    pub loadout: Vec<StackSpec>,
    pub supply: Vec<StackSpec>,
    pub targets: Vec<DemoProp>,
}

impl DemoContent {
    /// Parses the embedded bundle.
    pub fn load() -> anyhow::Result<Self> {
        ron::from_str(DEMO_RON).context("failed to parse embedded demo content")
    }

    pub fn catalog(&self) -> Result<StaticCatalog, CatalogError> {
        StaticCatalog::from_definitions(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::ItemOracle;

    #[test]
    fn embedded_content_parses_and_builds_a_catalog() {
        let content = DemoContent::load().unwrap();
        let catalog = content.catalog().unwrap();

        assert!(!content.loadout.is_empty());
        assert!(!content.targets.is_empty());

        // Every referenced handle must resolve.
        for stack in content.loadout.iter().chain(content.supply.iter()) {
            assert!(
                catalog.definition(stack.handle).is_some(),
                "unresolved handle {:?}",
                stack.handle
            );
        }
    }

    #[test]
    fn demo_props_expose_item_use_only_when_declared() {
        let content = DemoContent::load().unwrap();
        let usable = content
            .targets
            .iter()
            .find(|t| t.name() == "Iron Door")
            .unwrap();
        let inert = content
            .targets
            .iter()
            .find(|t| t.name() == "Old Signpost")
            .unwrap();

        assert!(usable.as_item_usable().unwrap().can_use_item());
        assert!(!inert.as_item_usable().unwrap().can_use_item());
    }
}
