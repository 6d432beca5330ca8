//! Runtime state of one image block.

use common::model::record::DataRecord;

/// Where the rendered fragment is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// `render` has not been called yet.
    Uninitialized,
    /// The fragment exists and shows the loader; an image decode may be pending.
    Loading,
    /// The image decoded and the final structure is in place.
    Ready,
}

/// The nodes created by `render`, created once and shared by every part of
/// the block that touches the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewHandles<N> {
    pub wrapper: N,
    pub loader: N,
    /// Detached until the first successful decode.
    pub image_holder: N,
    pub image: N,
    pub caption: N,
}

pub(crate) struct BlockState<N> {
    /// Single source of truth. The DOM is a projection of it.
    pub data: DataRecord,
    pub render: RenderState,
    pub view: Option<ViewHandles<N>>,
    /// Bumped by every data replacement and every file decode request. A file
    /// decode completing under a different generation is stale.
    pub generation: u64,
}

impl<N> BlockState<N> {
    pub fn new(data: DataRecord) -> Self {
        Self {
            data,
            render: RenderState::Uninitialized,
            view: None,
            generation: 0,
        }
    }

    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
