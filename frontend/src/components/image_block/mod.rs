//! The image block: root module wiring state, lifecycle, tunes, paste
//! ingestion and save into one [`ImageBlock`].
//!
//! Responsibilities
//! - Own the block's [`DataRecord`]; the DOM is only a projection of it.
//! - Expose the data accessor pair (`data` / `set_data`) through which every
//!   replacement, pastes included, reaches the view.
//! - Provide the static declarations the host reads before creating blocks
//!   (toolbox entry, paste routing, sanitization, read-only support).

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use common::config::BlockConfig;
use common::model::record::{DataPatch, DataRecord};
use common::model::toolbox::{Toolbox, TOOLBOX};
use common::paste::PasteConfig;
use common::sanitize::{SanitizeRules, SANITIZE};

use crate::dom::Dom;
use crate::host::{HostApi, HostStyles};

pub(crate) mod helpers;
mod lifecycle;
mod paste;
mod props;
mod save;
mod state;
mod tunes;

pub use paste::PasteEvent;
pub use props::BlockOptions;
pub use state::{RenderState, ViewHandles};
pub use tunes::TuneSetting;

use state::BlockState;

pub(crate) struct Block<D: Dom> {
    pub dom: D,
    pub host: Rc<dyn HostApi>,
    pub config: BlockConfig,
    pub styles: HostStyles,
    pub read_only: bool,
    pub state: RefCell<BlockState<D::Node>>,
}

/// One image block instance.
///
/// Cloning is cheap and yields another handle to the same block; event
/// listeners and pending decodes hold weak handles only.
pub struct ImageBlock<D: Dom + 'static> {
    inner: Rc<Block<D>>,
}

impl<D: Dom + 'static> Clone for ImageBlock<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D: Dom + 'static> ImageBlock<D> {
    pub fn new(dom: D, options: BlockOptions) -> Self {
        let data = DataRecord::from_patch(options.data);
        let styles = options.host.styles();
        log::debug!("image block created (url: {:?})", data.url);
        Self {
            inner: Rc::new(Block {
                dom,
                host: options.host,
                config: options.config,
                styles,
                read_only: options.read_only,
                state: RefCell::new(BlockState::new(data)),
            }),
        }
    }

    fn from_inner(inner: Rc<Block<D>>) -> Self {
        Self { inner }
    }

    pub fn dom(&self) -> &D {
        &self.inner.dom
    }

    pub fn is_read_only(&self) -> bool {
        self.inner.read_only
    }

    /// The live record. Do not hold the guard across calls into the block.
    pub fn data(&self) -> Ref<'_, DataRecord> {
        Ref::map(self.inner.state.borrow(), |state| &state.data)
    }

    /// Merges `patch` over the current record and, once rendered, projects
    /// the result onto the existing nodes.
    ///
    /// This is the only way a record replacement reaches the view. The host
    /// calls it with whole records, and `on_paste` calls it for every paste
    /// branch, the file branch only once its read has completed. With a view
    /// present it re-points the image source, rewrites the caption and
    /// reapplies every tune, so modifier classes and the host's stretch state
    /// follow the new flags even when the url did not change.
    ///
    /// A new url on a ready block puts it back into [`RenderState::Loading`];
    /// the existing nodes are reused and finalized again on the next load.
    /// Every call also bumps the generation, which invalidates file reads
    /// still in flight.
    ///
    /// # Arguments
    /// * `patch` - Fields to overwrite. Absent fields keep their current
    ///   value; a full patch replaces the record.
    pub fn set_data(&self, patch: impl Into<DataPatch>) {
        let synced = {
            let mut state = self.inner.state.borrow_mut();
            let previous_url = state.data.url.clone();
            state.data.merge(patch.into());
            state.next_generation();
            if state.render == RenderState::Ready && state.data.url != previous_url {
                state.render = RenderState::Loading;
            }
            state
                .view
                .as_ref()
                .map(|view| (view.image.clone(), view.caption.clone(), state.data.clone()))
        };

        if let Some((image, caption, data)) = synced {
            let dom = &self.inner.dom;
            dom.set_image_src(&image, &data.url);
            dom.set_inner_html(&caption, &data.caption);
            self.apply_tunes();
        }
    }

    pub fn render_state(&self) -> RenderState {
        self.inner.state.borrow().render
    }

    /// Handles to the rendered nodes, once `render` has run.
    pub fn view(&self) -> Option<ViewHandles<D::Node>> {
        self.inner.state.borrow().view.clone()
    }

    pub fn toolbox() -> Toolbox {
        TOOLBOX
    }

    pub fn paste_config() -> PasteConfig {
        PasteConfig::default()
    }

    pub fn sanitize() -> SanitizeRules {
        SANITIZE
    }

    pub fn is_read_only_supported() -> bool {
        true
    }
}
