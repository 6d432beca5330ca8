//! Small browser helpers for the demo host.
//!
//! - **User Feedback**: temporary "toast" notifications, also used as the
//!   block's notification hook.
//! - **Dirty Tracking**: MD5 of the last saved JSON, compared against the
//!   current record, mirrored into `window.app_dirty`.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// This function creates and injects a styled `div` into the page to give
/// non-blocking feedback. `PageHost::notify` routes the block's failure
/// notices through it (an image that failed to decode, a pasted file that
/// could not be read). `App::update` uses it to confirm saves and to report
/// rejected pastes. The toast removes itself after three seconds.
///
/// # Arguments
/// * `message` - Plain text to display. It is set as text content, never as
///   markup.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        html_toast.remove();
                    });
                }
            }
        }
    }
}

/// Computes the MD5 hash of a string and returns it as a hex digest.
///
/// `App` stores the digest of the JSON written by the last save and compares
/// it with the digest of the current record to decide whether the save
/// button shows the unsaved-changes dot.
///
/// # Arguments
/// * `input` - The string to hash.
///
/// # Returns
/// The 32-character lowercase hexadecimal digest.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Mirrors the unsaved-changes state into `window.app_dirty` so the page can
/// warn before unload.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}
