//! ASCII preview stage.
//!
//! The terminal's stand-in for a 3D item preview: materializing a model
//! picks its ASCII art and holds it as the live visual; releasing the handle
//! tears it down. At most one visual is live at a time, which the widget
//! renders in the preview pane.

use satchel_core::ModelRef;
use satchel_frontend_core::{PreviewHandle, PreviewStage};

/// Art shown when a model key has no dedicated drawing.
const FALLBACK_ART: [&str; 3] = ["  ____  ", " /    \\ ", " \\____/ "];

fn art_for(key: &str) -> Vec<String> {
    let lines: &[&str] = match key {
        "torch" => &[" ) ", "(~)", " | ", " | "],
        "ration" => &[" ______ ", "(______)", " \\____/ "],
        "key" => &[" O-==  "],
        _ => &FALLBACK_ART,
    };
    lines.iter().map(|l| l.to_string()).collect()
}

/// [`PreviewStage`] rendering into the terminal preview pane.
#[derive(Debug, Default)]
pub struct AsciiPreviewStage {
    next_id: u64,
    live: Option<(PreviewHandle, Vec<String>)>,
}

impl AsciiPreviewStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of the live visual, if one is on stage.
    pub fn live_art(&self) -> Option<&[String]> {
        self.live.as_ref().map(|(_, lines)| lines.as_slice())
    }
}

impl PreviewStage for AsciiPreviewStage {
    fn materialize(&mut self, model: &ModelRef) -> PreviewHandle {
        debug_assert!(
            self.live.is_none(),
            "viewer must release the previous preview first"
        );
        let handle = PreviewHandle(self.next_id);
        self.next_id += 1;
        self.live = Some((handle, art_for(model.key())));
        handle
    }

    fn release(&mut self, handle: PreviewHandle) {
        // Stale handles (already replaced) are ignored rather than failed.
        if self.live.as_ref().is_some_and(|(live, _)| *live == handle) {
            self.live = None;
        }
    }
}
