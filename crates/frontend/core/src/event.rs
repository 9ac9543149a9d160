//! Collaborator events and observer registration.
//!
//! The store side publishes [`InventoryEvent`]s; view-side observers attach
//! to an [`EventBus`] and translate events into a [`ViewImpact`] the event
//! loop acts on. Registration is symmetric: whoever attaches is responsible
//! for detaching on teardown, and `detach` hands the observer back.

use satchel_core::ItemHandle;

/// Notifications the inventory collaborators emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryEvent {
    /// The ordered item collection changed (add, remove, restack).
    CollectionChanged,
    /// The owner asked for the inventory display to be shown or hidden.
    VisibilityRequested(bool),
    /// An item was moved into the held-item slot.
    ItemEquipped(ItemHandle),
}

/// What the view layer must do in response to published events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewImpact {
    pub requires_redraw: bool,
    /// Slot contents may have moved; re-pull the viewed record.
    pub reload_slots: bool,
    /// Visibility change requested by a collaborator.
    pub set_visible: Option<bool>,
}

impl ViewImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            reload_slots: false,
            set_visible: None,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            reload_slots: false,
            set_visible: None,
        }
    }

    pub const fn reload() -> Self {
        Self {
            requires_redraw: true,
            reload_slots: true,
            set_visible: None,
        }
    }

    pub const fn visibility(visible: bool) -> Self {
        Self {
            requires_redraw: true,
            reload_slots: false,
            set_visible: Some(visible),
        }
    }

    /// Merges two impacts; a later visibility request wins.
    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            reload_slots: self.reload_slots || other.reload_slots,
            set_visible: other.set_visible.or(self.set_visible),
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &InventoryEvent) -> ViewImpact;
}

/// Token returned by [`EventBus::attach`]; required for detaching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Observer registry with explicit attach/detach.
///
/// Fan-out is single-threaded and run-to-completion: `publish` calls every
/// observer on the calling thread before returning the combined impact.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<(u64, Box<dyn EventConsumer>)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Box<dyn EventConsumer>) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, observer));
        Subscription(id)
    }

    /// Removes the observer registered under `subscription`, returning it.
    /// Detaching twice is a quiet `None`, never an error.
    pub fn detach(&mut self, subscription: Subscription) -> Option<Box<dyn EventConsumer>> {
        let index = self
            .observers
            .iter()
            .position(|(id, _)| *id == subscription.0)?;
        Some(self.observers.remove(index).1)
    }

    pub fn publish(&mut self, event: &InventoryEvent) -> ViewImpact {
        self.observers
            .iter_mut()
            .map(|(_, observer)| observer.on_event(event))
            .fold(ViewImpact::none(), ViewImpact::combine)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
