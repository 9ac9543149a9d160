//! Held-item slot.
//!
//! Equipment stores the handle of the item currently in the actor's hands.
//! The prompt composer reads it to phrase "use item on target" messages; the
//! slot viewer writes it when the player equips the viewed slot.

use crate::item::ItemHandle;

/// Single held-item slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    held: Option<ItemHandle>,
}

impl Equipment {
    /// Creates empty equipment (nothing held).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<ItemHandle> {
        self.held
    }

    /// Equips an item, returning the previously held handle if any.
    pub fn equip(&mut self, handle: ItemHandle) -> Option<ItemHandle> {
        self.held.replace(handle)
    }

    /// Empties the hands, returning the held handle if any.
    pub fn unequip(&mut self) -> Option<ItemHandle> {
        self.held.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_returns_displaced_handle() {
        let mut equipment = Equipment::empty();
        assert_eq!(equipment.equip(ItemHandle(1)), None);
        assert_eq!(equipment.equip(ItemHandle(2)), Some(ItemHandle(1)));
        assert_eq!(equipment.held(), Some(ItemHandle(2)));
        assert_eq!(equipment.unequip(), Some(ItemHandle(2)));
        assert_eq!(equipment.unequip(), None);
    }
}
