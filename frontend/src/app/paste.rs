//! Routes a clipboard paste to the image block using its declared filters.

use common::paste::PasteConfig;
use image_block::PasteEvent;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Element, File, HtmlTemplateElement};

/// Files first, then `<img src>` markup, then bare image URLs.
pub fn route_paste(event: &ClipboardEvent, config: &PasteConfig) -> Option<PasteEvent<Element, File>> {
    let data = event.clipboard_data()?;

    if let Some(files) = data.files() {
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                if config.accepts_mime(&file.type_()) {
                    return Some(PasteEvent::File(file));
                }
            }
        }
    }

    if let Ok(markup) = data.get_data("text/html") {
        if let Some(element) = first_accepted_tag(&markup, config) {
            return Some(PasteEvent::Tag(element));
        }
    }

    let text = data.get_data("text/plain").ok()?;
    let text = text.trim();
    config
        .match_pattern(text)
        .map(|_| PasteEvent::Pattern(text.to_string()))
}

fn first_accepted_tag(markup: &str, config: &PasteConfig) -> Option<Element> {
    if markup.trim().is_empty() {
        return None;
    }
    let document = web_sys::window()?.document()?;
    let template: HtmlTemplateElement = document.create_element("template").ok()?.dyn_into().ok()?;
    template.set_inner_html(markup);
    let content = template.content();
    config.tags.iter().find_map(|filter| {
        let selector = filter
            .required_attributes
            .iter()
            .fold(filter.tag.to_string(), |acc, attr| format!("{}[{}]", acc, attr));
        content.query_selector(&selector).ok().flatten()
    })
}
