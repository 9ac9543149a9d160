//! Ordered item storage the slot viewer binds to.
//!
//! The viewer holds a non-owning reference and never mutates storage;
//! mutation belongs to the embedding application, which publishes a
//! collection-changed event after every change.

use arrayvec::ArrayVec;

use crate::catalog::ItemOracle;
use crate::config::InventoryConfig;
use crate::item::ItemHandle;

/// Inventory slot containing an item and its quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub handle: ItemHandle,
    pub quantity: u16,
}

impl InventorySlot {
    pub fn new(handle: ItemHandle, quantity: u16) -> Self {
        Self { handle, quantity }
    }
}

/// Errors from inventory mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory is full")]
    Full,
    #[error("item {0:?} has no definition in the catalog")]
    UnknownItem(ItemHandle),
    #[error("quantity must be non-zero")]
    ZeroQuantity,
}

/// Ordered sequence of item stacks.
///
/// Slot order is stable: stacks keep their index until removed, and removal
/// shifts later slots down. The viewer relies on this to keep the viewed
/// index meaningful across refreshes.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { InventoryConfig::MAX_SLOTS }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InventorySlot> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    /// Adds `quantity` of `handle`, filling existing stacks before opening
    /// new slots. Returns the slot index the final units landed in.
    pub fn add(
        &mut self,
        handle: ItemHandle,
        quantity: u16,
        items: &dyn ItemOracle,
    ) -> Result<usize, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }
        let max_stack = items
            .definition(handle)
            .ok_or(InventoryError::UnknownItem(handle))?
            .max_stack;

        let mut remaining = quantity;
        let mut landed = None;

        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.handle != handle || slot.quantity >= max_stack {
                continue;
            }
            let take = remaining.min(max_stack - slot.quantity);
            slot.quantity += take;
            remaining -= take;
            landed = Some(index);
            if remaining == 0 {
                break;
            }
        }

        while remaining > 0 {
            if self.slots.is_full() {
                return Err(InventoryError::Full);
            }
            let take = remaining.min(max_stack);
            self.slots.push(InventorySlot::new(handle, take));
            remaining -= take;
            landed = Some(self.slots.len() - 1);
        }

        Ok(landed.expect("non-zero quantity always lands somewhere"))
    }

    /// Removes the whole stack at `index`, returning it. Out-of-range
    /// indices return `None`; later slots shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<InventorySlot> {
        if index < self.slots.len() {
            Some(self.slots.remove(index))
        } else {
            None
        }
    }
}
