//! Session state: the active sample and whether a render is in progress.

use shared::{DatasetIndex, Direction, IndexError};

/// Viewer activity. Rendering is synchronous, so `Rendering` is only ever
/// observed from inside a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Rendering,
}

/// The single piece of mutable state shared by navigation and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSession {
    current: DatasetIndex,
    phase: Phase,
}

impl ViewerSession {
    /// Session positioned on the first sample.
    pub fn new(dataset_len: u32) -> Result<Self, IndexError> {
        Ok(Self {
            current: DatasetIndex::first(dataset_len)?,
            phase: Phase::Idle,
        })
    }

    pub fn current(&self) -> DatasetIndex {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index one step away from the current one, wrapping at the ends.
    pub fn target(&self, direction: Direction) -> DatasetIndex {
        self.current.step(direction)
    }

    pub(crate) fn begin_render(&mut self) {
        self.phase = Phase::Rendering;
    }

    pub(crate) fn finish_render(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Record `index` as the sample now on screen.
    pub(crate) fn commit(&mut self, index: DatasetIndex) {
        self.current = index;
    }
}
