//! Slot viewer state machine.
//!
//! [`SlotViewer`] owns the viewed-slot index into an external inventory,
//! navigates it with optional wraparound, and derives the display state for
//! one slot per refresh. Collaborators (inventory, item oracle, preview
//! stage) are passed into each operation; the viewer never stores references
//! to them and never mutates the collection.

use satchel_core::{Equipment, Inventory, ItemHandle, ItemOracle};

use crate::format;
use crate::preview::{PreviewHandle, PreviewStage};

/// Enablement of the navigation and equip controls, recomputed on every
/// index change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub equip_enabled: bool,
}

/// Outcome of a navigation step: the slot now in view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotChange {
    pub index: usize,
    pub handle: Option<ItemHandle>,
}

/// Outcome of equipping the viewed slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipOutcome {
    pub equipped: ItemHandle,
    /// Item the equip displaced from the hands, if any.
    pub displaced: Option<ItemHandle>,
}

/// Display state for the viewed slot. Fully recomputed on every refresh,
/// never diffed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotPanelView {
    pub visible: bool,
    /// Normalized viewed index; 0 when the collection is empty.
    pub viewed: usize,
    pub total: usize,
    pub name: String,
    pub description: String,
    /// `"{quantity} / {max}"` for stackable items, blank otherwise.
    pub amount: String,
    pub nav: NavState,
    pub preview_active: bool,
}

/// State machine over the viewed-slot index.
pub struct SlotViewer {
    viewed: i32,
    looping: bool,
    visible: bool,
    nav: NavState,
    preview: Option<PreviewHandle>,
}

impl SlotViewer {
    pub fn new(looping: bool) -> Self {
        Self {
            viewed: 0,
            looping,
            visible: false,
            nav: NavState::default(),
            preview: None,
        }
    }

    pub fn viewed_index(&self) -> usize {
        self.viewed.max(0) as usize
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    /// Clamps or wraps the index into `0..len` (0 when empty) and recomputes
    /// control enablement. Idempotent; called after every index change and
    /// before every render.
    fn normalize(&mut self, len: usize) {
        let len_i32 = len as i32;
        self.viewed = if len == 0 {
            0
        } else if self.looping {
            self.viewed.rem_euclid(len_i32)
        } else {
            self.viewed.clamp(0, len_i32 - 1)
        };

        self.nav = NavState {
            prev_enabled: self.looping || self.viewed > 0,
            next_enabled: self.looping || (len > 0 && self.viewed < len_i32 - 1),
            equip_enabled: len > 0,
        };

        debug_assert!(
            (len == 0 && self.viewed == 0) || (self.viewed >= 0 && (self.viewed as usize) < len),
            "viewed index {} out of range for {} slots",
            self.viewed,
            len
        );
    }

    /// Adjusts the index by `delta` slots and returns the normalized index.
    pub fn step(&mut self, delta: i32, len: usize) -> usize {
        self.viewed += delta;
        self.normalize(len);
        self.viewed_index()
    }

    /// Advances to the next slot, returning the slot now in view so the
    /// caller can notify collaborators and re-render.
    pub fn next(&mut self, inventory: &Inventory) -> SlotChange {
        let index = self.step(1, inventory.len());
        self.slot_change(inventory, index)
    }

    /// Steps back to the previous slot.
    pub fn previous(&mut self, inventory: &Inventory) -> SlotChange {
        let index = self.step(-1, inventory.len());
        self.slot_change(inventory, index)
    }

    fn slot_change(&self, inventory: &Inventory, index: usize) -> SlotChange {
        SlotChange {
            index,
            handle: inventory.get(index).map(|slot| slot.handle),
        }
    }

    /// Shows or hides the display. Always releases the transient preview;
    /// callers refresh afterwards when becoming visible.
    pub fn set_visible(
        &mut self,
        visible: bool,
        inventory: &Inventory,
        stage: &mut dyn PreviewStage,
    ) {
        self.normalize(inventory.len());
        self.visible = visible;
        self.clear_preview(stage);
    }

    /// Recomputes the display state for the viewed slot.
    ///
    /// Hidden viewer, empty collection, or a handle without a definition all
    /// yield blank text and no preview. The previous preview is released
    /// before a new one is materialized; definitions without a model skip
    /// materialization entirely.
    pub fn refresh(
        &mut self,
        inventory: &Inventory,
        items: &dyn ItemOracle,
        stage: &mut dyn PreviewStage,
    ) -> SlotPanelView {
        self.normalize(inventory.len());

        let mut view = SlotPanelView {
            visible: self.visible,
            viewed: self.viewed_index(),
            total: inventory.len(),
            nav: self.nav,
            ..SlotPanelView::default()
        };

        if !self.visible || inventory.is_empty() {
            self.clear_preview(stage);
            return view;
        }

        let slot = inventory
            .get(self.viewed_index())
            .expect("normalized index is in range for a non-empty inventory");

        self.clear_preview(stage);
        if let Some(definition) = items.definition(slot.handle) {
            view.name = definition.name.clone();
            view.description = definition.description.clone();
            view.amount = format::amount_text(slot.quantity, definition.max_stack);
            if let Some(model) = &definition.model {
                self.preview = Some(stage.materialize(model));
            }
        }
        view.preview_active = self.preview.is_some();

        view
    }

    /// Equips the item in the viewed slot. No-op on an empty collection.
    pub fn equip_viewed(
        &mut self,
        inventory: &Inventory,
        equipment: &mut Equipment,
    ) -> Option<EquipOutcome> {
        self.normalize(inventory.len());
        let slot = inventory.get(self.viewed_index())?;
        let displaced = equipment.equip(slot.handle);
        Some(EquipOutcome {
            equipped: slot.handle,
            displaced,
        })
    }

    /// Releases the held preview, if any. Each handle is released exactly
    /// once; calling this with no preview held does nothing.
    pub fn clear_preview(&mut self, stage: &mut dyn PreviewStage) {
        if let Some(handle) = self.preview.take() {
            stage.release(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::{ItemCategory, ItemDefinition, ItemHandle, ModelRef, StaticCatalog};

    /// Stage that tracks which handles are currently live.
    #[derive(Default)]
    struct CountingStage {
        next_id: u64,
        live: Vec<PreviewHandle>,
        released: Vec<PreviewHandle>,
    }

    impl PreviewStage for CountingStage {
        fn materialize(&mut self, _model: &ModelRef) -> PreviewHandle {
            let handle = PreviewHandle(self.next_id);
            self.next_id += 1;
            self.live.push(handle);
            handle
        }

        fn release(&mut self, handle: PreviewHandle) {
            let index = self
                .live
                .iter()
                .position(|&h| h == handle)
                .expect("released handle must be live");
            self.live.remove(index);
            self.released.push(handle);
        }
    }

    fn catalog() -> StaticCatalog {
        StaticCatalog::from_definitions(vec![
            ItemDefinition::new(ItemHandle(1), "Torch", "A burning brand.", ItemCategory::Tool, 1)
                .with_model(ModelRef::new("torch")),
            ItemDefinition::new(
                ItemHandle(2),
                "Ration",
                "Keeps you going.",
                ItemCategory::Consumable,
                5,
            )
            .with_model(ModelRef::new("ration")),
            // No model on purpose: previews must be skipped, not failed.
            ItemDefinition::new(ItemHandle(3), "Pebble", "Round.", ItemCategory::Trinket, 1),
        ])
        .unwrap()
    }

    fn inventory_of(handles: &[(u32, u16)]) -> Inventory {
        let items = catalog();
        let mut inventory = Inventory::new();
        for &(handle, quantity) in handles {
            inventory.add(ItemHandle(handle), quantity, &items).unwrap();
        }
        inventory
    }

    #[test]
    fn normalization_lands_in_range_and_is_idempotent() {
        for looping in [false, true] {
            for len in 0..=4usize {
                let bound = 2 * len as i32;
                for start in -bound..=bound {
                    let mut viewer = SlotViewer::new(looping);
                    viewer.viewed = start;
                    viewer.normalize(len);

                    let first = viewer.viewed;
                    if len == 0 {
                        assert_eq!(first, 0);
                    } else {
                        assert!((0..len as i32).contains(&first), "start={start} len={len}");
                    }

                    viewer.normalize(len);
                    assert_eq!(viewer.viewed, first, "normalize must be idempotent");
                }
            }
        }
    }

    #[test]
    fn looping_wraps_both_directions() {
        let inventory = inventory_of(&[(1, 1), (2, 3), (3, 1)]);
        let mut viewer = SlotViewer::new(true);

        viewer.step(2, inventory.len());
        assert_eq!(viewer.next(&inventory).index, 0);

        let change = viewer.previous(&inventory);
        assert_eq!(change.index, 2);
        assert_eq!(change.handle, Some(ItemHandle(3)));

        assert!(viewer.nav().prev_enabled);
        assert!(viewer.nav().next_enabled);
    }

    #[test]
    fn non_looping_clamps_and_disables_controls_at_the_edges() {
        let inventory = inventory_of(&[(1, 1), (2, 3), (3, 1)]);
        let mut viewer = SlotViewer::new(false);

        assert_eq!(viewer.previous(&inventory).index, 0);
        assert!(!viewer.nav().prev_enabled);
        assert!(viewer.nav().next_enabled);

        viewer.step(10, inventory.len());
        assert_eq!(viewer.viewed_index(), 2);
        assert_eq!(viewer.next(&inventory).index, 2);
        assert!(!viewer.nav().next_enabled);
        assert!(viewer.nav().prev_enabled);
    }

    #[test]
    fn single_slot_looping_stays_put() {
        let inventory = inventory_of(&[(1, 1)]);
        let mut viewer = SlotViewer::new(true);

        assert_eq!(viewer.next(&inventory).index, 0);
        assert_eq!(viewer.previous(&inventory).index, 0);
    }

    #[test]
    fn empty_collection_blanks_the_view() {
        let inventory = Inventory::new();
        let items = catalog();
        let mut stage = CountingStage::default();
        let mut viewer = SlotViewer::new(false);

        viewer.set_visible(true, &inventory, &mut stage);
        let view = viewer.refresh(&inventory, &items, &mut stage);

        assert_eq!(view.viewed, 0);
        assert_eq!(view.total, 0);
        assert_eq!(view.name, "");
        assert_eq!(view.amount, "");
        assert!(!view.preview_active);
        assert!(!view.nav.equip_enabled);
        assert!(stage.live.is_empty());
    }

    #[test]
    fn refresh_formats_amount_only_for_stackable_items() {
        let inventory = inventory_of(&[(2, 3), (1, 1)]);
        let items = catalog();
        let mut stage = CountingStage::default();
        let mut viewer = SlotViewer::new(false);
        viewer.set_visible(true, &inventory, &mut stage);

        let view = viewer.refresh(&inventory, &items, &mut stage);
        assert_eq!(view.name, "Ration");
        assert_eq!(view.amount, "3 / 5");

        viewer.next(&inventory);
        let view = viewer.refresh(&inventory, &items, &mut stage);
        assert_eq!(view.name, "Torch");
        assert_eq!(view.amount, "");
    }

    #[test]
    fn refresh_replaces_the_preview_and_skips_missing_models() {
        let inventory = inventory_of(&[(1, 1), (3, 1)]);
        let items = catalog();
        let mut stage = CountingStage::default();
        let mut viewer = SlotViewer::new(false);
        viewer.set_visible(true, &inventory, &mut stage);

        let view = viewer.refresh(&inventory, &items, &mut stage);
        assert!(view.preview_active);
        assert_eq!(stage.live.len(), 1);

        // Re-render of the same slot still tears down the old visual first.
        viewer.refresh(&inventory, &items, &mut stage);
        assert_eq!(stage.live.len(), 1);
        assert_eq!(stage.released.len(), 1);

        // The pebble has no model: the torch preview goes away, nothing new.
        viewer.next(&inventory);
        let view = viewer.refresh(&inventory, &items, &mut stage);
        assert!(!view.preview_active);
        assert!(stage.live.is_empty());
    }

    #[test]
    fn hiding_releases_the_preview_exactly_once() {
        let inventory = inventory_of(&[(1, 1)]);
        let items = catalog();
        let mut stage = CountingStage::default();
        let mut viewer = SlotViewer::new(false);

        // Hiding with no preview held releases nothing.
        viewer.set_visible(false, &inventory, &mut stage);
        assert!(stage.released.is_empty());

        viewer.set_visible(true, &inventory, &mut stage);
        viewer.refresh(&inventory, &items, &mut stage);
        assert_eq!(stage.live.len(), 1);

        viewer.set_visible(false, &inventory, &mut stage);
        assert!(stage.live.is_empty());
        assert_eq!(stage.released.len(), 1);

        // A hidden refresh holds no resource to release again.
        viewer.refresh(&inventory, &items, &mut stage);
        assert_eq!(stage.released.len(), 1);
    }

    #[test]
    fn equip_viewed_is_a_noop_on_empty_and_reports_displacement() {
        let mut equipment = Equipment::empty();
        let mut viewer = SlotViewer::new(false);

        assert!(viewer.equip_viewed(&Inventory::new(), &mut equipment).is_none());

        let inventory = inventory_of(&[(1, 1), (2, 2)]);
        let outcome = viewer.equip_viewed(&inventory, &mut equipment).unwrap();
        assert_eq!(outcome.equipped, ItemHandle(1));
        assert_eq!(outcome.displaced, None);

        viewer.next(&inventory);
        let outcome = viewer.equip_viewed(&inventory, &mut equipment).unwrap();
        assert_eq!(outcome.equipped, ItemHandle(2));
        assert_eq!(outcome.displaced, Some(ItemHandle(1)));
    }

    #[test]
    fn stale_index_renormalizes_after_the_collection_shrinks() {
        let items = catalog();
        let mut stage = CountingStage::default();
        let mut viewer = SlotViewer::new(false);
        let mut inventory = inventory_of(&[(1, 1), (2, 2), (3, 1)]);
        viewer.set_visible(true, &inventory, &mut stage);
        viewer.step(2, inventory.len());

        inventory.remove_at(2);
        inventory.remove_at(1);

        let view = viewer.refresh(&inventory, &items, &mut stage);
        assert_eq!(view.viewed, 0);
        assert_eq!(view.name, "Torch");
    }
}
