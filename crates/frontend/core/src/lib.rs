//! Cross-frontend primitives for presenting inventory and interaction state.
//!
//! Houses the slot viewer state machine, interaction prompt composition,
//! the preview-resource contract, and the observer plumbing that ties the
//! view layer to its collaborators. Terminal and future graphical clients
//! share everything here.
pub mod config;
pub mod event;
pub mod format;
pub mod message;
pub mod preview;
pub mod prompt;
pub mod style;
pub mod viewer;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventBus, EventConsumer, InventoryEvent, Subscription, ViewImpact};
pub use message::{Message, MessageKind, MessageLog};
pub use preview::{NullPreviewStage, PreviewHandle, PreviewStage};
pub use prompt::PromptComposer;
pub use style::PanelStyler;
pub use viewer::{EquipOutcome, NavState, SlotChange, SlotPanelView, SlotViewer};
