/// Inventory configuration constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryConfig;

impl InventoryConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of occupied slots in a single inventory.
    pub const MAX_SLOTS: usize = 32;

    /// Largest stack any item may declare. Definitions above this are
    /// rejected at catalog construction.
    pub const MAX_STACK_CEILING: u16 = 999;
}
