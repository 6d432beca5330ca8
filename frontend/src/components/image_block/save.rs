use common::model::record::{DataPatch, DataRecord};

use super::helpers::class_selector;
use super::ImageBlock;
use crate::dom::Dom;

impl<D: Dom + 'static> ImageBlock<D> {
    /// Reads url and caption back from the live fragment under `wrapper`.
    ///
    /// The host calls this at serialization time. It is the only point where
    /// the DOM is authoritative: caption text typed straight into the
    /// caption node, and the source as the browser resolved it, become part
    /// of the record here. The image is found by tag. The caption is found by
    /// the block's own caption class, so another host input inside the
    /// wrapper is never picked up.
    ///
    /// # Arguments
    /// * `wrapper` - The node returned by `render`.
    ///
    /// # Returns
    /// The updated record, with the three tune flags unchanged. Before the
    /// first successful decode the image is not attached yet, so the stored
    /// record is returned as is.
    pub fn save(&self, wrapper: &D::Node) -> DataRecord {
        let dom = &self.inner.dom;
        let Some(image) = dom.query_selector(wrapper, "img") else {
            log::debug!("save before the image was attached; returning stored record");
            return self.data().clone();
        };
        let caption = dom
            .query_selector(wrapper, &class_selector(&self.inner.config.caption_class()))
            .map(|node| dom.inner_html(&node))
            .unwrap_or_default();

        let mut state = self.inner.state.borrow_mut();
        state.data.merge(DataPatch {
            url: Some(dom.image_src(&image)),
            caption: Some(caption),
            ..DataPatch::default()
        });
        state.data.clone()
    }
}
