//! Domain types and collaborator contracts for the inventory UI layer.
//!
//! `satchel-core` defines the item, inventory, and equipment state the view
//! layer binds to, plus the trait seams (`ItemOracle`, `Interactable`) that
//! embedding applications implement. Nothing here renders; the crate stays
//! free of UI dependencies so it can back any frontend.
pub mod catalog;
pub mod config;
pub mod equip;
pub mod interact;
pub mod inventory;
pub mod item;

pub use catalog::{CatalogError, ItemOracle, StaticCatalog};
pub use config::InventoryConfig;
pub use equip::Equipment;
pub use interact::{Interactable, ItemUsable};
pub use inventory::{Inventory, InventoryError, InventorySlot};
pub use item::{ItemCategory, ItemDefinition, ItemHandle, ModelRef};
