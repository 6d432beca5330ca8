//! In-memory [`Dom`] used for headless rendering and tests.
//!
//! Nodes are reference counted and compare by identity, like real DOM nodes.
//! Nothing happens asynchronously: image load/error events and file reads are
//! completed explicitly through [`DetachedDom::fire_load`],
//! [`DetachedDom::complete_next_read`] and friends.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{DecodedFile, Dom, FileReadCallback};
use crate::components::image_block::helpers::encode_data_url;
use crate::error::BlockError;

const VOID_TAGS: [&str; 3] = ["img", "br", "input"];

#[derive(Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    inner_html: String,
    children: Vec<DetachedNode>,
    parent: Weak<RefCell<NodeData>>,
    on_load: Option<Rc<dyn Fn()>>,
    on_error: Option<Rc<dyn Fn()>>,
}

#[derive(Clone)]
pub struct DetachedNode(Rc<RefCell<NodeData>>);

impl PartialEq for DetachedNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DetachedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("DetachedNode")
            .field("tag", &data.tag)
            .field("classes", &data.classes)
            .field("children", &data.children.len())
            .finish()
    }
}

/// A file handle for [`DetachedDom`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetachedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DetachedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Default)]
pub struct DetachedDom {
    pending_reads: RefCell<VecDeque<(DetachedFile, FileReadCallback)>>,
}

impl DetachedDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self, node: &DetachedNode) -> Vec<DetachedNode> {
        node.0.borrow().children.clone()
    }

    pub fn classes(&self, node: &DetachedNode) -> Vec<String> {
        node.0.borrow().classes.clone()
    }

    /// True when `node` is `root` or one of its descendants.
    pub fn contains(&self, root: &DetachedNode, node: &DetachedNode) -> bool {
        root == node || self.children(root).iter().any(|child| self.contains(child, node))
    }

    /// Runs the load listener of `image`, as a browser does after a decode.
    pub fn fire_load(&self, image: &DetachedNode) {
        let handler = image.0.borrow().on_load.clone();
        if let Some(handler) = handler {
            handler();
        }
    }

    pub fn fire_error(&self, image: &DetachedNode) {
        let handler = image.0.borrow().on_error.clone();
        if let Some(handler) = handler {
            handler();
        }
    }

    pub fn pending_reads(&self) -> usize {
        self.pending_reads.borrow().len()
    }

    /// Completes the oldest queued file read successfully.
    pub fn complete_next_read(&self) -> bool {
        let next = self.pending_reads.borrow_mut().pop_front();
        Self::finish(next, None)
    }

    /// Completes the newest queued file read successfully.
    pub fn complete_last_read(&self) -> bool {
        let next = self.pending_reads.borrow_mut().pop_back();
        Self::finish(next, None)
    }

    pub fn fail_next_read(&self, reason: &str) -> bool {
        let next = self.pending_reads.borrow_mut().pop_front();
        Self::finish(next, Some(reason))
    }

    fn finish(next: Option<(DetachedFile, FileReadCallback)>, failure: Option<&str>) -> bool {
        let Some((file, done)) = next else {
            return false;
        };
        match failure {
            None => done(Ok(DecodedFile {
                data_url: encode_data_url(&file.mime, &file.bytes),
                name: file.name,
            })),
            Some(reason) => done(Err(BlockError::FileDecode {
                name: file.name,
                reason: reason.to_string(),
            })),
        }
        true
    }

    /// Serializes `node` and its subtree.
    pub fn outer_html(&self, node: &DetachedNode) -> String {
        let data = node.0.borrow();
        let mut out = format!("<{}", data.tag);
        if !data.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", data.classes.join(" ")));
        }
        for (name, value) in &data.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, value.replace('"', "&quot;")));
        }
        out.push('>');
        if VOID_TAGS.contains(&data.tag.as_str()) {
            return out;
        }
        drop(data);
        out.push_str(&self.inner_html(node));
        out.push_str(&format!("</{}>", node.0.borrow().tag));
        out
    }

    fn matches(node: &DetachedNode, selector: &str) -> bool {
        let data = node.0.borrow();
        match selector.strip_prefix('.') {
            Some(class) => data.classes.iter().any(|c| c == class),
            None => data.tag.eq_ignore_ascii_case(selector),
        }
    }
}

impl Dom for DetachedDom {
    type Node = DetachedNode;
    type File = DetachedFile;

    fn create_element(&self, tag: &str) -> Result<DetachedNode, BlockError> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(BlockError::Dom(format!("invalid tag name `{}`", tag)));
        }
        Ok(DetachedNode(Rc::new(RefCell::new(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        }))))
    }

    fn tag_name(&self, node: &DetachedNode) -> String {
        node.0.borrow().tag.clone()
    }

    fn add_class(&self, node: &DetachedNode, class: &str) {
        let mut data = node.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    fn toggle_class(&self, node: &DetachedNode, class: &str, force: bool) {
        if force {
            self.add_class(node, class);
        } else {
            node.0.borrow_mut().classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, node: &DetachedNode, class: &str) -> bool {
        node.0.borrow().classes.iter().any(|c| c == class)
    }

    fn set_attribute(&self, node: &DetachedNode, name: &str, value: &str) {
        let mut data = node.0.borrow_mut();
        match data.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn attribute(&self, node: &DetachedNode, name: &str) -> Option<String> {
        node.0
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_inner_html(&self, node: &DetachedNode, html: &str) {
        let children = std::mem::take(&mut node.0.borrow_mut().children);
        for child in children {
            child.0.borrow_mut().parent = Weak::new();
        }
        node.0.borrow_mut().inner_html = html.to_string();
    }

    fn inner_html(&self, node: &DetachedNode) -> String {
        let children = self.children(node);
        if children.is_empty() {
            return node.0.borrow().inner_html.clone();
        }
        children.iter().map(|child| self.outer_html(child)).collect()
    }

    fn append_child(&self, parent: &DetachedNode, child: &DetachedNode) {
        self.remove(child);
        child.0.borrow_mut().parent = Rc::downgrade(&parent.0);
        let mut data = parent.0.borrow_mut();
        data.inner_html.clear();
        data.children.push(child.clone());
    }

    fn remove(&self, node: &DetachedNode) {
        let parent = node.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|c| c != node);
        }
        node.0.borrow_mut().parent = Weak::new();
    }

    fn parent(&self, node: &DetachedNode) -> Option<DetachedNode> {
        node.0.borrow().parent.upgrade().map(DetachedNode)
    }

    fn query_selector(&self, root: &DetachedNode, selector: &str) -> Option<DetachedNode> {
        for child in self.children(root) {
            if Self::matches(&child, selector) {
                return Some(child);
            }
            if let Some(found) = self.query_selector(&child, selector) {
                return Some(found);
            }
        }
        None
    }

    fn image_src(&self, image: &DetachedNode) -> String {
        self.attribute(image, "src").unwrap_or_default()
    }

    fn set_image_src(&self, image: &DetachedNode, src: &str) {
        self.set_attribute(image, "src", src);
    }

    fn on_image_events(&self, image: &DetachedNode, on_load: Box<dyn Fn()>, on_error: Box<dyn Fn()>) {
        let mut data = image.0.borrow_mut();
        data.on_load = Some(Rc::from(on_load));
        data.on_error = Some(Rc::from(on_error));
    }

    fn file_name(&self, file: &DetachedFile) -> String {
        file.name.clone()
    }

    fn file_mime(&self, file: &DetachedFile) -> String {
        file.mime.clone()
    }

    fn read_file(&self, file: DetachedFile, done: FileReadCallback) {
        self.pending_reads.borrow_mut().push_back((file, done));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};

    fn el(dom: &DetachedDom, tag: &str) -> DetachedNode {
        dom.create_element(tag).unwrap()
    }

    #[test]
    fn append_moves_between_parents() {
        let dom = DetachedDom::new();
        let (a, b, child) = (el(&dom, "div"), el(&dom, "div"), el(&dom, "span"));
        dom.append_child(&a, &child);
        dom.append_child(&b, &child);
        assert!(dom.children(&a).is_empty());
        assert_eq!(dom.children(&b), vec![child.clone()]);
        assert_eq!(dom.parent(&child), Some(b));
    }

    #[test]
    fn reappending_moves_to_the_end() {
        let dom = DetachedDom::new();
        let (root, first, second) = (el(&dom, "div"), el(&dom, "p"), el(&dom, "p"));
        dom.append_child(&root, &first);
        dom.append_child(&root, &second);
        dom.append_child(&root, &first);
        assert_eq!(dom.children(&root), vec![second, first]);
    }

    #[test]
    fn query_selector_by_tag_and_class() {
        let dom = DetachedDom::new();
        let root = el(&dom, "div");
        let holder = el(&dom, "div");
        let img = el(&dom, "img");
        let caption = el(&dom, "div");
        dom.add_class(&caption, "cdx-input");
        dom.append_child(&holder, &img);
        dom.append_child(&root, &holder);
        dom.append_child(&root, &caption);
        assert_eq!(dom.query_selector(&root, "img"), Some(img));
        assert_eq!(dom.query_selector(&root, ".cdx-input"), Some(caption));
        assert_eq!(dom.query_selector(&root, ".missing"), None);
        assert_eq!(dom.query_selector(&holder, "div"), None);
    }

    #[test]
    fn serializes_subtree() {
        let dom = DetachedDom::new();
        let root = el(&dom, "div");
        dom.add_class(&root, "a");
        dom.add_class(&root, "b");
        let img = el(&dom, "img");
        dom.set_image_src(&img, "https://x/a.png");
        let caption = el(&dom, "div");
        dom.set_inner_html(&caption, "hi<br>there");
        dom.append_child(&root, &img);
        dom.append_child(&root, &caption);
        assert_eq!(
            dom.outer_html(&root),
            r#"<div class="a b"><img src="https://x/a.png"><div>hi<br>there</div></div>"#
        );
    }

    #[test]
    fn toggle_class_is_idempotent() {
        let dom = DetachedDom::new();
        let node = el(&dom, "div");
        dom.toggle_class(&node, "on", true);
        dom.toggle_class(&node, "on", true);
        assert_eq!(dom.classes(&node), vec!["on".to_string()]);
        dom.toggle_class(&node, "on", false);
        dom.toggle_class(&node, "on", false);
        assert!(dom.classes(&node).is_empty());
    }

    #[test]
    fn reads_complete_in_requested_order() {
        let dom = DetachedDom::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for name in ["a.png", "b.png"] {
            let seen = seen.clone();
            dom.read_file(
                DetachedFile::new(name, "image/png", vec![1, 2, 3]),
                Box::new(move |result: Result<DecodedFile, BlockError>| {
                    seen.borrow_mut().push(result.map(|f| f.name))
                }),
            );
        }
        assert_eq!(dom.pending_reads(), 2);
        assert!(dom.complete_last_read());
        assert!(dom.fail_next_read("boom"));
        assert!(!dom.complete_next_read());
        let seen = seen.borrow();
        assert_eq!(seen[0], Ok("b.png".to_string()));
        assert!(matches!(&seen[1], Err(BlockError::FileDecode { name, .. }) if name == "a.png"));
    }

    #[test]
    fn rejects_invalid_tag_names() {
        assert!(DetachedDom::new().create_element("not a tag").is_err());
    }

    #[test]
    fn file_payload_is_base64_of_bytes() {
        let dom = DetachedDom::new();
        let out = Rc::new(RefCell::new(None));
        let sink = out.clone();
        dom.read_file(
            DetachedFile::new("x.gif", "image/gif", b"GIF89a".to_vec()),
            Box::new(move |result: Result<DecodedFile, BlockError>| *sink.borrow_mut() = result.ok()),
        );
        dom.complete_next_read();
        let decoded = out.borrow().clone().unwrap();
        assert_eq!(
            decoded.data_url,
            format!("data:image/gif;base64,{}", general_purpose::STANDARD.encode(b"GIF89a"))
        );
    }
}
