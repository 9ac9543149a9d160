//! Preview resource contract.
//!
//! The viewed item's visual preview is an exclusively owned resource: the
//! slot viewer holds at most one [`PreviewHandle`] and releases it before
//! materializing a replacement, when the display hides, and when the
//! collection empties. Stages own the actual visual (a scene object, an
//! ASCII panel); the viewer only tracks the handle.

use satchel_core::ModelRef;

/// Handle to a materialized preview, issued by a [`PreviewStage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PreviewHandle(pub u64);

pub trait PreviewStage {
    /// Creates the visual for `model` and returns its handle.
    fn materialize(&mut self, model: &ModelRef) -> PreviewHandle;

    /// Destroys the visual behind `handle`. Called exactly once per handle.
    fn release(&mut self, handle: PreviewHandle);
}

/// Stage for embedders without a preview surface; hands out handles and
/// drops them on the floor.
#[derive(Debug, Default)]
pub struct NullPreviewStage {
    next_id: u64,
}

impl NullPreviewStage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreviewStage for NullPreviewStage {
    fn materialize(&mut self, _model: &ModelRef) -> PreviewHandle {
        let handle = PreviewHandle(self.next_id);
        self.next_id += 1;
        handle
    }

    fn release(&mut self, _handle: PreviewHandle) {}
}
