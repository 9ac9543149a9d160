//! Item definition lookup.

use std::collections::HashMap;

use crate::config::InventoryConfig;
use crate::item::{ItemDefinition, ItemHandle};

/// Definition lookup the view layer resolves display data through.
pub trait ItemOracle {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;
}

/// Errors from catalog construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate definition for {0:?}")]
    DuplicateHandle(ItemHandle),
    #[error("{0:?} declares max_stack above the ceiling")]
    StackAboveCeiling(ItemHandle),
}

/// In-memory [`ItemOracle`] over a fixed set of definitions.
///
/// Built once from content data; lookups are handle -> index.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    definitions: Vec<ItemDefinition>,
    by_handle: HashMap<ItemHandle, usize>,
}

impl StaticCatalog {
    pub fn from_definitions(definitions: Vec<ItemDefinition>) -> Result<Self, CatalogError> {
        let mut by_handle = HashMap::with_capacity(definitions.len());
        for (index, def) in definitions.iter().enumerate() {
            if def.max_stack > InventoryConfig::MAX_STACK_CEILING {
                return Err(CatalogError::StackAboveCeiling(def.handle));
            }
            if by_handle.insert(def.handle, index).is_some() {
                return Err(CatalogError::DuplicateHandle(def.handle));
            }
        }
        Ok(Self {
            definitions,
            by_handle,
        })
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.definitions.iter()
    }
}

impl ItemOracle for StaticCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.by_handle
            .get(&handle)
            .map(|&index| &self.definitions[index])
    }
}
