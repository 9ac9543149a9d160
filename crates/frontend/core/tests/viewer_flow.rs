//! End-to-end exercise of the view layer against in-memory collaborators:
//! events drive visibility and refreshes, navigation walks the slots, and
//! the preview resource is tracked across the whole session.

use satchel_core::{
    Equipment, Interactable, Inventory, ItemCategory, ItemDefinition, ItemHandle, ItemUsable,
    ModelRef, StaticCatalog,
};
use satchel_frontend_core::{
    EventBus, EventConsumer, InventoryEvent, PreviewHandle, PreviewStage, PromptComposer,
    SlotViewer, ViewImpact,
};

struct LedgerStage {
    next_id: u64,
    live: u32,
    released: u32,
}

impl LedgerStage {
    fn new() -> Self {
        Self {
            next_id: 0,
            live: 0,
            released: 0,
        }
    }
}

impl PreviewStage for LedgerStage {
    fn materialize(&mut self, _model: &ModelRef) -> PreviewHandle {
        let handle = PreviewHandle(self.next_id);
        self.next_id += 1;
        self.live += 1;
        handle
    }

    fn release(&mut self, _handle: PreviewHandle) {
        assert!(self.live > 0, "release without a live preview");
        self.live -= 1;
        self.released += 1;
    }
}

/// Observer translating collaborator events into view impacts, the way a
/// frontend's event loop consumer does.
struct Presenter;

impl EventConsumer for Presenter {
    fn on_event(&mut self, event: &InventoryEvent) -> ViewImpact {
        match event {
            InventoryEvent::CollectionChanged => ViewImpact::reload(),
            InventoryEvent::VisibilityRequested(visible) => ViewImpact::visibility(*visible),
            InventoryEvent::ItemEquipped(_) => ViewImpact::redraw(),
        }
    }
}

struct Brazier;

impl Interactable for Brazier {
    fn name(&self) -> &str {
        "Brazier"
    }

    fn as_item_usable(&self) -> Option<&dyn ItemUsable> {
        Some(self)
    }
}

impl ItemUsable for Brazier {
    fn can_use_item(&self) -> bool {
        true
    }
}

fn demo_catalog() -> StaticCatalog {
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
    ])
    .unwrap()
}

#[test]
fn event_driven_session_keeps_view_and_preview_consistent() {
    let items = demo_catalog();
    let mut inventory = Inventory::new();
    let mut equipment = Equipment::empty();
    let mut stage = LedgerStage::new();
    let mut viewer = SlotViewer::new(false);
    let mut bus = EventBus::new();
    let composer = PromptComposer::default();

    let sub = bus.attach(Box::new(Presenter));

    // Owner toggles the inventory open before anything is in it.
    let impact = bus.publish(&InventoryEvent::VisibilityRequested(true));
    if let Some(visible) = impact.set_visible {
        viewer.set_visible(visible, &inventory, &mut stage);
    }
    let view = viewer.refresh(&inventory, &items, &mut stage);
    assert!(view.visible);
    assert_eq!(view.total, 0);
    assert_eq!(view.name, "");
    assert_eq!(stage.live, 0);

    // Items arrive; the store publishes a collection change.
    inventory.add(ItemHandle(1), 1, &items).unwrap();
    inventory.add(ItemHandle(2), 3, &items).unwrap();
    let impact = bus.publish(&InventoryEvent::CollectionChanged);
    assert!(impact.reload_slots);
    let view = viewer.refresh(&inventory, &items, &mut stage);
    assert_eq!(view.name, "Torch");
    assert_eq!(view.amount, "");
    assert_eq!(stage.live, 1);

    // Navigate to the ration stack.
    let change = viewer.next(&inventory);
    assert_eq!(change.handle, Some(ItemHandle(2)));
    let view = viewer.refresh(&inventory, &items, &mut stage);
    assert_eq!(view.amount, "3 / 5");
    assert_eq!(stage.live, 1, "old preview must be torn down first");

    // Equip the viewed slot and compose the prompt against a usable target.
    viewer.previous(&inventory);
    let outcome = viewer.equip_viewed(&inventory, &mut equipment).unwrap();
    bus.publish(&InventoryEvent::ItemEquipped(outcome.equipped));
    assert_eq!(
        composer.compose(&Brazier, &equipment, &items),
        "Use Torch on Brazier"
    );

    // Closing the display releases the preview; reopening re-creates it.
    let impact = bus.publish(&InventoryEvent::VisibilityRequested(false));
    viewer.set_visible(impact.set_visible.unwrap(), &inventory, &mut stage);
    viewer.refresh(&inventory, &items, &mut stage);
    assert_eq!(stage.live, 0);

    // Teardown detaches what setup attached.
    assert!(bus.detach(sub).is_some());
    assert_eq!(bus.observer_count(), 0);
}
