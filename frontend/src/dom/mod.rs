//! The seam between the image block and the document it renders into.
//!
//! The block never talks to `web_sys` directly. It goes through [`Dom`], which
//! has a browser implementation ([`WebDom`]) and an in-memory one
//! ([`DetachedDom`]) for headless rendering and tests.

mod detached;
mod web;

pub use detached::{DetachedDom, DetachedFile, DetachedNode};
pub use web::WebDom;

use crate::error::BlockError;

/// Result of reading a pasted file: an inline data URL plus the file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedFile {
    pub data_url: String,
    pub name: String,
}

pub type FileReadCallback = Box<dyn FnOnce(Result<DecodedFile, BlockError>)>;

pub trait Dom {
    type Node: Clone + PartialEq;
    type File;

    fn create_element(&self, tag: &str) -> Result<Self::Node, BlockError>;

    /// Lower-case tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn add_class(&self, node: &Self::Node, class: &str);
    fn toggle_class(&self, node: &Self::Node, class: &str, force: bool);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_inner_html(&self, node: &Self::Node, html: &str);
    fn inner_html(&self, node: &Self::Node) -> String;

    /// Appends `child` as the last child of `parent`, moving it out of its
    /// current parent first.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    /// Detaches `node` from its parent. No-op for detached nodes.
    fn remove(&self, node: &Self::Node);
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// First descendant of `root` matching `selector`, which is either a tag
    /// name (`img`) or a single class (`.cdx-input`).
    fn query_selector(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn image_src(&self, image: &Self::Node) -> String;
    /// Assigning a source starts a decode; completion arrives through the
    /// listeners registered with [`Dom::on_image_events`].
    fn set_image_src(&self, image: &Self::Node, src: &str);
    fn on_image_events(&self, image: &Self::Node, on_load: Box<dyn Fn()>, on_error: Box<dyn Fn()>);

    fn file_name(&self, file: &Self::File) -> String;
    fn file_mime(&self, file: &Self::File) -> String;
    /// Reads `file` asynchronously and hands the data URL to `done`. Single
    /// shot: `done` runs at most once.
    fn read_file(&self, file: Self::File, done: FileReadCallback);
}
