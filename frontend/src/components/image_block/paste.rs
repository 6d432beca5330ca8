//! Paste ingestion: tag, pattern and file pastes all end up as a data
//! replacement through `set_data`.

use std::rc::Rc;

use common::model::record::{DataPatch, DataRecord};

use super::ImageBlock;
use crate::dom::{DecodedFile, Dom};
use crate::error::BlockError;

const FILE_FAILED: &str = "Failed to read the pasted file";

/// A paste the host routed to this block.
#[derive(Clone, Debug, PartialEq)]
pub enum PasteEvent<N, F> {
    /// An element matching the tag filter.
    Tag(N),
    /// Text matching the image URL pattern.
    Pattern(String),
    /// A file matching the MIME filter.
    File(F),
}

impl<D: Dom + 'static> ImageBlock<D> {
    /// Applies a paste the host routed to this block.
    ///
    /// The host checks the declared filters from `paste_config` before it
    /// calls this. Only the tag branch is checked again here, because its
    /// payload is an arbitrary element.
    ///
    /// - `Tag` replaces the whole record with the element's `src`. Caption
    ///   and tunes go back to their defaults.
    /// - `Pattern` overwrites only the url.
    /// - `File` starts an asynchronous read and returns at once. When the read
    ///   completes, url and caption are taken from the data URL and the file
    ///   name. That only happens if no newer replacement or file paste came
    ///   in meanwhile.
    ///
    /// Every applied replacement goes through `set_data`, so the view is
    /// synced without a re-render.
    ///
    /// # Arguments
    /// * `event` - The routed paste, carrying an element, the matched text, or
    ///   a file handle.
    ///
    /// # Returns
    /// `Err(BlockError::PasteShape)` if a tag paste is not an `<img>` with a
    /// `src`. The record is then left untouched. Otherwise `Ok(())`, which for
    /// files means only that the read was requested.
    pub fn on_paste(&self, event: PasteEvent<D::Node, D::File>) -> Result<(), BlockError> {
        match event {
            PasteEvent::Tag(element) => {
                let dom = &self.inner.dom;
                let tag = dom.tag_name(&element);
                if tag != "img" || dom.attribute(&element, "src").is_none() {
                    let err = BlockError::PasteShape { tag };
                    log::warn!("{}", err);
                    return Err(err);
                }
                let url = dom.image_src(&element);
                log::debug!("tag paste: {}", url);
                self.set_data(DataPatch::full(DataRecord {
                    url,
                    ..DataRecord::default()
                }));
            }
            PasteEvent::Pattern(text) => {
                log::debug!("pattern paste: {}", text);
                self.set_data(DataPatch::url(text));
            }
            PasteEvent::File(file) => self.read_pasted_file(file),
        }
        Ok(())
    }

    fn read_pasted_file(&self, file: D::File) {
        let generation = self.inner.state.borrow_mut().next_generation();
        let dom = &self.inner.dom;
        log::debug!(
            "file paste #{}: {} ({})",
            generation,
            dom.file_name(&file),
            dom.file_mime(&file)
        );

        let weak = Rc::downgrade(&self.inner);
        dom.read_file(
            file,
            Box::new(move |result: Result<DecodedFile, BlockError>| {
                if let Some(inner) = weak.upgrade() {
                    ImageBlock::from_inner(inner).file_read(generation, result);
                }
            }),
        );
    }

    fn file_read(&self, generation: u64, result: Result<DecodedFile, BlockError>) {
        let current = self.inner.state.borrow().generation;
        if generation != current {
            log::debug!("dropping file read #{}, block is at #{}", generation, current);
            return;
        }
        match result {
            Ok(decoded) => self.set_data(DataPatch {
                url: Some(decoded.data_url),
                caption: Some(decoded.name),
                ..DataPatch::default()
            }),
            Err(err) => {
                log::warn!("{}", err);
                let host = &self.inner.host;
                host.notify(&host.translate(FILE_FAILED));
            }
        }
    }
}
