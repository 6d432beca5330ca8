//! Demo host: one image block on a page, with the settings menu rendered as a
//! toolbar, a document-wide paste listener and a save preview.

use std::rc::Rc;

use common::model::record::DataPatch;
use common::model::tune::TuneKey;
use common::sanitize::clean_caption;
use image_block::{BlockOptions, ImageBlock, PasteEvent, WebDom};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Element, File};
use yew::prelude::*;

mod helpers;
mod host;
pub mod logging;
mod paste;

use helpers::{compute_md5, set_window_dirty_flag, show_toast};
use host::PageHost;

const SAMPLE_URL: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=1200&fm=jpg";

pub enum Msg {
    Paste(PasteEvent<Element, File>),
    ToggleTune(TuneKey),
    Save,
}

pub struct App {
    block_ref: NodeRef,
    block: Option<ImageBlock<WebDom>>,
    paste_listener: Option<Closure<dyn FnMut(ClipboardEvent)>>,
    saved_json: Option<String>,
    original_md5: Option<String>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            block_ref: NodeRef::default(),
            block: None,
            paste_listener: None,
            saved_json: None,
            original_md5: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(block) = &self.block else {
            return false;
        };
        match msg {
            Msg::Paste(event) => {
                if let Err(err) = block.on_paste(event) {
                    show_toast(&err.to_string());
                }
            }
            Msg::ToggleTune(key) => {
                if let Some(setting) = block.tune_settings().iter().find(|s| s.key == key) {
                    setting.activate();
                }
            }
            Msg::Save => {
                let Some(view) = block.view() else {
                    return false;
                };
                let mut record = block.save(&view.wrapper);
                record.caption = clean_caption(&record.caption);
                match serde_json::to_string_pretty(&record) {
                    Ok(json) => {
                        self.original_md5 = Some(compute_md5(&json));
                        self.saved_json = Some(json);
                        show_toast("Bloque guardado.");
                    }
                    Err(err) => show_toast(&format!("Error al guardar el bloque: {}", err)),
                }
            }
        }
        set_window_dirty_flag(self.is_dirty());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tunes = self
            .block
            .as_ref()
            .map(|block| block.tune_settings())
            .unwrap_or_default();

        html! {
            <div class="image-block-demo">
                <div class="icon-toolbar">
                    { for tunes.into_iter().map(|tune| {
                        let key = tune.key;
                        html! {
                            <button
                                class={classes!("icon-btn", tune.is_active.then_some("active"))}
                                title={tune.label.clone()}
                                onclick={link.callback(move |_| Msg::ToggleTune(key))}
                            >
                                <span class="icon-label">{ tune.label }</span>
                            </button>
                        }
                    }) }
                    <button class="icon-btn" title="Guardar" onclick={link.callback(|_| Msg::Save)} style="position: relative;">
                        <i class="material-icons">{"save"}</i>
                        <span class="icon-label">{"Guardar"}</span>
                        {
                            if self.is_dirty() {
                                html! { <span title="Cambios sin guardar" class="dirty-dot" /> }
                            } else {
                                html! {}
                            }
                        }
                    </button>
                </div>
                <div class="ce-block" ref={self.block_ref.clone()} />
                {
                    match &self.saved_json {
                        Some(json) => html! { <pre class="saved-record">{ json }</pre> },
                        None => html! {},
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.block.is_some() {
            return;
        }
        let Some(container) = self.block_ref.cast::<Element>() else {
            return;
        };
        let Some(dom) = WebDom::from_window() else {
            log::error!("no document available to render into");
            return;
        };

        let host = Rc::new(PageHost::new(container.clone(), 0));
        let options = BlockOptions::new(host).with_data(DataPatch::url(SAMPLE_URL));
        let block = ImageBlock::new(dom, options);
        match block.render() {
            Ok(wrapper) => {
                container.append_child(&wrapper).ok();
            }
            Err(err) => {
                show_toast(&err.to_string());
                return;
            }
        }

        self.paste_listener = install_paste_listener(ctx.link().clone());
        self.block = Some(block);
        ctx.link().send_message(Msg::Save);
    }
}

impl App {
    fn is_dirty(&self) -> bool {
        let Some(block) = &self.block else {
            return false;
        };
        let current = serde_json::to_string_pretty(&*block.data()).unwrap_or_default();
        self.original_md5
            .as_ref()
            .map_or(true, |orig| orig != &compute_md5(&current))
    }
}

fn install_paste_listener(link: yew::html::Scope<App>) -> Option<Closure<dyn FnMut(ClipboardEvent)>> {
    let document = web_sys::window()?.document()?;
    let config = ImageBlock::<WebDom>::paste_config();
    let closure = Closure::<dyn FnMut(ClipboardEvent)>::new(move |event: ClipboardEvent| {
        if let Some(paste) = paste::route_paste(&event, &config) {
            event.prevent_default();
            link.send_message(Msg::Paste(paste));
        }
    });
    document
        .add_event_listener_with_callback("paste", closure.as_ref().unchecked_ref())
        .ok()?;
    Some(closure)
}
