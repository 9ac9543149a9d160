//! Glue tying the collaborators, view layer, and terminal UI together.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};

use satchel_core::{Equipment, Inventory, InventoryError, ItemHandle, ItemOracle, StaticCatalog};
use satchel_frontend_core::{
    EventBus, EventConsumer, FrontendConfig, InventoryEvent, MessageLog, PromptComposer,
    SlotPanelView, SlotViewer, ViewImpact,
};

use crate::config::CliConfig;
use crate::content::{DemoContent, StackSpec};
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{stage::AsciiPreviewStage, terminal, ui};
use crate::state::AppState;

const POLL_INTERVAL_MS: u64 = 250;

/// Observer attached to the event bus for the lifetime of the app; turns
/// collaborator events into view impacts.
struct Presenter;

impl EventConsumer for Presenter {
    fn on_event(&mut self, event: &InventoryEvent) -> ViewImpact {
        tracing::debug!(?event, "inventory event");
        match event {
            InventoryEvent::CollectionChanged => ViewImpact::reload(),
            InventoryEvent::VisibilityRequested(visible) => ViewImpact::visibility(*visible),
            InventoryEvent::ItemEquipped(_) => ViewImpact::redraw(),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

pub struct App {
    cli_config: CliConfig,
    items: StaticCatalog,
    inventory: Inventory,
    equipment: Equipment,
    viewer: SlotViewer,
    composer: PromptComposer,
    bus: EventBus,
    messages: MessageLog,
    state: AppState,
    stage: AsciiPreviewStage,
    input: InputHandler,
    view: SlotPanelView,
    supply: Vec<StackSpec>,
    next_supply: usize,
    needs_redraw: bool,
}

impl App {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Result<Self> {
        let content = DemoContent::load()?;
        let items = content.catalog().context("invalid demo catalog")?;

        let mut inventory = Inventory::new();
        for stack in &content.loadout {
            inventory
                .add(stack.handle, stack.quantity, &items)
                .context("starting loadout does not fit")?;
        }

        let mut messages = MessageLog::new(frontend_config.messages.capacity);
        messages.hint("Welcome. Press i to close the satchel, q to leave.");

        Ok(Self {
            cli_config,
            items,
            inventory,
            equipment: Equipment::empty(),
            viewer: SlotViewer::new(frontend_config.loop_inventory),
            composer: PromptComposer::new(frontend_config.interact_hint.clone()),
            bus: EventBus::new(),
            messages,
            state: AppState::new(content.targets),
            stage: AsciiPreviewStage::new(),
            input: InputHandler::new(),
            view: SlotPanelView::default(),
            supply: content.supply,
            next_supply: 0,
            needs_redraw: true,
        })
    }

    pub fn run(mut self) -> Result<()> {
        tracing::info!("terminal client starting");

        let subscription = self.bus.attach(Box::new(Presenter));

        let mut tui = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        // The owner opens the display at startup, through the same event
        // path a game would use.
        self.publish(InventoryEvent::VisibilityRequested(true));

        loop {
            if self.needs_redraw {
                self.render(&mut tui)?;
                self.needs_redraw = false;
            }

            if !term_event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                continue;
            }
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Flow::Quit = self.handle_key(key) {
                        break;
                    }
                }
                TermEvent::Resize(_, _) => self.needs_redraw = true,
                _ => {}
            }
        }

        // Teardown detaches exactly what startup attached.
        self.bus.detach(subscription);

        terminal::restore()?;
        tracing::info!("terminal client exiting");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match self.input.handle_key(key) {
            KeyAction::Quit => return Flow::Quit,
            KeyAction::NextSlot => self.navigate(1),
            KeyAction::PrevSlot => self.navigate(-1),
            KeyAction::EquipViewed => self.equip_viewed(),
            KeyAction::ToggleInventory => {
                let visible = !self.viewer.is_visible();
                self.publish(InventoryEvent::VisibilityRequested(visible));
            }
            KeyAction::CycleTarget => {
                self.state.cycle_target();
                self.needs_redraw = true;
            }
            KeyAction::PickUp => self.pick_up(),
            KeyAction::DropViewed => self.drop_viewed(),
            KeyAction::None => {}
        }
        Flow::Continue
    }

    fn navigate(&mut self, delta: i32) {
        if !self.viewer.is_visible() {
            self.messages.hint("The satchel is closed.");
            self.needs_redraw = true;
            return;
        }
        let change = if delta > 0 {
            self.viewer.next(&self.inventory)
        } else {
            self.viewer.previous(&self.inventory)
        };
        tracing::debug!(index = change.index, "slot viewed");
        self.refresh_view();
    }

    fn equip_viewed(&mut self) {
        match self.viewer.equip_viewed(&self.inventory, &mut self.equipment) {
            Some(outcome) => {
                let name = self.name_of(outcome.equipped);
                match outcome.displaced {
                    Some(displaced) => {
                        let displaced = self.name_of(displaced);
                        self.messages
                            .activity(format!("Equipped {name}, stowed {displaced}."));
                    }
                    None => self.messages.activity(format!("Equipped {name}.")),
                }
                self.publish(InventoryEvent::ItemEquipped(outcome.equipped));
            }
            None => {
                self.messages.hint("Nothing to equip.");
                self.needs_redraw = true;
            }
        }
    }

    fn pick_up(&mut self) {
        if self.supply.is_empty() {
            self.messages.hint("Nothing left to pick up.");
            self.needs_redraw = true;
            return;
        }
        let stack = self.supply[self.next_supply % self.supply.len()];
        match self.inventory.add(stack.handle, stack.quantity, &self.items) {
            Ok(_) => {
                self.next_supply += 1;
                let name = self.name_of(stack.handle);
                self.messages
                    .activity(format!("Picked up {} x{}.", name, stack.quantity));
                self.publish(InventoryEvent::CollectionChanged);
            }
            Err(InventoryError::Full) => {
                self.messages.alert("The satchel is full.");
                self.needs_redraw = true;
            }
            Err(err) => {
                tracing::warn!(%err, "pickup rejected");
                self.messages.alert(format!("Can't pick that up: {err}."));
                self.needs_redraw = true;
            }
        }
    }

    fn drop_viewed(&mut self) {
        if !self.viewer.is_visible() {
            self.messages.hint("The satchel is closed.");
            self.needs_redraw = true;
            return;
        }
        match self.inventory.remove_at(self.viewer.viewed_index()) {
            Some(slot) => {
                let name = self.name_of(slot.handle);
                self.messages.activity(format!("Dropped {name}."));
                self.publish(InventoryEvent::CollectionChanged);
            }
            None => {
                self.messages.hint("Nothing to drop.");
                self.needs_redraw = true;
            }
        }
    }

    /// Publishes to every attached observer and applies the combined impact.
    fn publish(&mut self, event: InventoryEvent) {
        let impact = self.bus.publish(&event);
        if let Some(visible) = impact.set_visible {
            self.viewer
                .set_visible(visible, &self.inventory, &mut self.stage);
        }
        if impact.requires_redraw || impact.reload_slots {
            self.refresh_view();
        }
    }

    fn refresh_view(&mut self) {
        self.view = self
            .viewer
            .refresh(&self.inventory, &self.items, &mut self.stage);
        self.needs_redraw = true;
    }

    fn name_of(&self, handle: ItemHandle) -> String {
        self.items
            .definition(handle)
            .map(|def| def.name.clone())
            .unwrap_or_else(|| format!("item #{}", handle.0))
    }

    fn render(&self, tui: &mut terminal::Tui) -> Result<()> {
        let prompt = self
            .state
            .focused_target()
            .map(|target| self.composer.compose(target, &self.equipment, &self.items));
        let prompt_item_use = self
            .state
            .focused_target()
            .is_some_and(|target| self.composer.offers_item_use(target, &self.equipment));
        let equipped_name = self
            .equipment
            .held()
            .and_then(|handle| self.items.definition(handle))
            .map(|def| def.name.as_str());

        ui::render(
            tui,
            &ui::RenderContext {
                view: &self.view,
                messages: &self.messages,
                equipped_name,
                prompt: prompt.as_deref(),
                prompt_item_use,
                preview_art: self.stage.live_art(),
                message_panel_height: self.cli_config.ui.message_panel_height,
                preview_pane: self.cli_config.ui.preview_pane,
            },
        )
    }
}
