//! Render lifecycle: build the fragment, show the loader, swap in the image
//! once the browser has decoded it.

use std::rc::Rc;

use super::state::{RenderState, ViewHandles};
use super::ImageBlock;
use crate::dom::Dom;
use crate::error::BlockError;

const DECODE_FAILED: &str = "Failed to load an image";

impl<D: Dom + 'static> ImageBlock<D> {
    /// Builds the block's fragment and returns its wrapper.
    ///
    /// The host calls this once per block and inserts the wrapper into its
    /// own layout. The fragment has five nodes: wrapper, loader, image holder,
    /// image and caption. At first the wrapper holds only the loader. The
    /// image holder and the caption are attached when the browser reports a
    /// successful decode. The tunes are then replayed onto the holder.
    ///
    /// If the record already has a url, it is assigned to the image right
    /// away, which starts the decode. The block is in
    /// [`RenderState::Loading`] from here on. The caption is
    /// `contenteditable` unless the block was created read-only, and carries
    /// the translated placeholder as `data-placeholder`.
    ///
    /// # Returns
    /// The wrapper node, or `BlockError::Dom` if the document refused to
    /// create an element. A second call logs a warning and returns the
    /// existing wrapper without rebuilding anything.
    pub fn render(&self) -> Result<D::Node, BlockError> {
        if let Some(view) = self.inner.state.borrow().view.as_ref() {
            log::warn!("image block rendered twice; reusing the existing fragment");
            return Ok(view.wrapper.clone());
        }

        let view = self.build_view()?;
        self.listen_image(&view.image);

        let url = {
            let mut state = self.inner.state.borrow_mut();
            state.view = Some(view.clone());
            state.render = RenderState::Loading;
            state.data.url.clone()
        };
        if !url.is_empty() {
            self.inner.dom.set_image_src(&view.image, &url);
        }
        log::debug!("image block rendered, loading {:?}", url);

        Ok(view.wrapper)
    }

    fn build_view(&self) -> Result<ViewHandles<D::Node>, BlockError> {
        let dom = &self.inner.dom;
        let config = &self.inner.config;
        let styles = &self.inner.styles;

        let wrapper = dom.create_element("div")?;
        dom.add_class(&wrapper, &styles.block);
        dom.add_class(&wrapper, config.wrapper_class());

        let loader = dom.create_element("div")?;
        dom.add_class(&loader, &styles.loader);

        let image_holder = dom.create_element("div")?;
        dom.add_class(&image_holder, &config.image_holder_class());

        let image = dom.create_element("img")?;

        let caption = dom.create_element("div")?;
        dom.add_class(&caption, &styles.input);
        dom.add_class(&caption, &config.caption_class());
        let editable = if self.inner.read_only { "false" } else { "true" };
        dom.set_attribute(&caption, "contenteditable", editable);
        dom.set_attribute(
            &caption,
            "data-placeholder",
            &self.inner.host.translate(&config.caption_placeholder),
        );
        dom.set_inner_html(&caption, &self.inner.state.borrow().data.caption);

        dom.append_child(&wrapper, &loader);

        Ok(ViewHandles {
            wrapper,
            loader,
            image_holder,
            image,
            caption,
        })
    }

    fn listen_image(&self, image: &D::Node) {
        let on_load = {
            let weak = Rc::downgrade(&self.inner);
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    ImageBlock::from_inner(inner).image_loaded();
                }
            })
        };
        let on_error = {
            let weak = Rc::downgrade(&self.inner);
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    ImageBlock::from_inner(inner).image_failed();
                }
            })
        };
        self.inner.dom.on_image_events(image, on_load, on_error);
    }

    /// `Loading -> Ready`. Detaches the loader, attaches image holder then
    /// caption, and replays the tunes onto the now attached holder.
    fn image_loaded(&self) {
        let view = {
            let mut state = self.inner.state.borrow_mut();
            if state.render != RenderState::Loading {
                return;
            }
            let Some(view) = state.view.clone() else {
                return;
            };
            state.render = RenderState::Ready;
            view
        };

        let dom = &self.inner.dom;
        dom.remove(&view.loader);
        dom.append_child(&view.image_holder, &view.image);
        dom.append_child(&view.wrapper, &view.image_holder);
        dom.append_child(&view.wrapper, &view.caption);
        log::info!("image block ready: {}", dom.image_src(&view.image));

        self.apply_tunes();
    }

    /// Stays in `Loading`; the failure is only reported.
    fn image_failed(&self) {
        let url = self.inner.state.borrow().data.url.clone();
        if url.is_empty() {
            log::debug!("image element reported an error with no source set");
            return;
        }
        let err = BlockError::ImageDecode { url };
        log::warn!("{}", err);
        let host = &self.inner.host;
        host.notify(&host.translate(DECODE_FAILED));
    }
}
