//! Image block for a block-based rich-text editor.
//!
//! An [`ImageBlock`] renders an image referenced by URL with an editable
//! caption and three visual tunes, turns pastes into its data record and
//! reads the live DOM back at save time. The host editor is reached only
//! through the injected [`HostApi`], the document only through [`Dom`].

pub mod components;
pub mod dom;
pub mod error;
pub mod host;

pub use common::config::BlockConfig;
pub use common::model::record::{DataPatch, DataRecord};
pub use common::model::tune::TuneKey;
pub use components::image_block::{BlockOptions, ImageBlock, PasteEvent, RenderState, TuneSetting, ViewHandles};
pub use dom::{DetachedDom, Dom, WebDom};
pub use error::BlockError;
pub use host::{HostApi, HostStyles};
