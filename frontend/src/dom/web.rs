use std::cell::RefCell;

use gloo_file::futures::read_as_bytes;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, File, HtmlImageElement};

use super::{DecodedFile, Dom, FileReadCallback};
use crate::components::image_block::helpers::encode_data_url;
use crate::error::BlockError;

/// Browser-backed [`Dom`].
///
/// Event listener closures are kept alive by the `WebDom` itself and dropped
/// with it, so one `WebDom` belongs to exactly one block.
pub struct WebDom {
    document: Document,
    listeners: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>>,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Uses the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    fn listen(&self, target: &Element, event: &str, handler: Box<dyn Fn()>) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| handler());
        if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::warn!("could not listen to `{}`: {:?}", event, err);
            return;
        }
        self.listeners.borrow_mut().push(closure);
    }
}

impl Dom for WebDom {
    type Node = Element;
    type File = File;

    fn create_element(&self, tag: &str) -> Result<Element, BlockError> {
        self.document
            .create_element(tag)
            .map_err(|err| BlockError::Dom(format!("create_element({}): {:?}", tag, err)))
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn add_class(&self, node: &Element, class: &str) {
        node.class_list().add_1(class).ok();
    }

    fn toggle_class(&self, node: &Element, class: &str, force: bool) {
        node.class_list().toggle_with_force(class, force).ok();
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        node.set_attribute(name, value).ok();
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn inner_html(&self, node: &Element) -> String {
        node.inner_html()
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        parent.append_child(child).ok();
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn query_selector(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn image_src(&self, image: &Element) -> String {
        match image.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.src(),
            None => image.get_attribute("src").unwrap_or_default(),
        }
    }

    fn set_image_src(&self, image: &Element, src: &str) {
        match image.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(src),
            None => {
                image.set_attribute("src", src).ok();
            }
        }
    }

    fn on_image_events(&self, image: &Element, on_load: Box<dyn Fn()>, on_error: Box<dyn Fn()>) {
        self.listen(image, "load", on_load);
        self.listen(image, "error", on_error);
    }

    fn file_name(&self, file: &File) -> String {
        file.name()
    }

    fn file_mime(&self, file: &File) -> String {
        file.type_()
    }

    fn read_file(&self, file: File, done: FileReadCallback) {
        let name = file.name();
        let mime = file.type_();
        wasm_bindgen_futures::spawn_local(async move {
            let file = gloo_file::File::from(file);
            match read_as_bytes(&file).await {
                Ok(bytes) => done(Ok(DecodedFile {
                    data_url: encode_data_url(&mime, &bytes),
                    name,
                })),
                Err(err) => done(Err(BlockError::FileDecode {
                    name,
                    reason: err.to_string(),
                })),
            }
        });
    }
}
