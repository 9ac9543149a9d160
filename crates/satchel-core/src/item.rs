//! Item definition types.
//!
//! An [`ItemHandle`] is the compact identity that inventories and equipment
//! trade in; the [`ItemDefinition`] behind it carries everything the
//! presentation layer needs to display a slot (name, description, stack
//! ceiling, optional preview model).

/// Reference to an item definition (lookup via [`crate::ItemOracle`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

/// Symbolic reference to a displayable model asset.
///
/// Frontends resolve this against their own asset store; the core never
/// interprets the key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelRef(pub String);

impl ModelRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Broad item grouping used for display ordering and styling.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Tool,
    Consumable,
    Key,
    Trinket,
}

/// Item definition with the display data the UI layer consumes.
///
/// # Stacking
///
/// Every definition declares a `max_stack`:
/// - Tools/keys: max_stack=1 (unique, never stack)
/// - Consumables: max_stack>1 (stackable)
///
/// The slot viewer renders a quantity readout only for stackable items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub max_stack: u16,
    /// Preview model, if the item has one. Absent models simply skip the
    /// preview pane; they never fail a render.
    pub model: Option<ModelRef>,
}

impl ItemDefinition {
    pub fn new(
        handle: ItemHandle,
        name: impl Into<String>,
        description: impl Into<String>,
        category: ItemCategory,
        max_stack: u16,
    ) -> Self {
        Self {
            handle,
            name: name.into(),
            description: description.into(),
            category,
            max_stack: max_stack.max(1),
            model: None,
        }
    }

    /// Attaches a preview model (builder pattern).
    #[must_use]
    pub fn with_model(mut self, model: ModelRef) -> Self {
        self.model = Some(model);
        self
    }

    /// True when more than one of this item fits in a slot.
    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }
}
