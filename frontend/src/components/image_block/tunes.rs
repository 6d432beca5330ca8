//! Visual tunes: the settings read contract, toggling, and reflecting the
//! flags onto the image holder's classes.

use std::fmt;
use std::rc::Rc;

use common::model::tune::{TuneKey, TUNES};

use super::ImageBlock;
use crate::dom::Dom;

/// One entry of the block settings menu.
pub struct TuneSetting {
    pub key: TuneKey,
    /// Already translated by the host.
    pub label: String,
    pub icon: &'static str,
    pub toggle: bool,
    pub is_active: bool,
    on_activate: Rc<dyn Fn()>,
}

impl TuneSetting {
    /// Toggles the tune on the block this setting was read from.
    pub fn activate(&self) {
        (self.on_activate)()
    }
}

impl fmt::Debug for TuneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TuneSetting")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("toggle", &self.toggle)
            .field("is_active", &self.is_active)
            .finish()
    }
}

impl<D: Dom + 'static> ImageBlock<D> {
    pub fn tune_settings(&self) -> Vec<TuneSetting> {
        let data = self.data().clone();
        TUNES
            .iter()
            .map(|tune| {
                let key = tune.key;
                let weak = Rc::downgrade(&self.inner);
                TuneSetting {
                    key,
                    label: self.inner.host.translate(tune.label),
                    icon: tune.icon,
                    toggle: true,
                    is_active: key.is_active(&data),
                    on_activate: Rc::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            ImageBlock::from_inner(inner).toggle_tune(key);
                        }
                    }),
                }
            })
            .collect()
    }

    /// Flips `key` and reapplies every tune. Returns the new flag value.
    pub fn toggle_tune(&self, key: TuneKey) -> bool {
        let active = key.toggle(&mut self.inner.state.borrow_mut().data);
        log::debug!("tune {} -> {}", key.name(), active);
        self.apply_tunes();
        active
    }

    /// Projects the three tune flags onto the view and the host.
    ///
    /// Called after every `toggle_tune`, after every `set_data` on a rendered
    /// block, and on the transition to ready, when the image holder gets
    /// attached for the first time. Each tune's modifier class
    /// (`<prefix>__picture--<kebab key>`) is set or cleared on the image
    /// holder. The holder may still be detached at this point. The stretch
    /// flag is re-sent to the host every time, whether it changed or not, so
    /// the host's layout never drifts from the record.
    ///
    /// Calling it twice in a row without a flag change leaves the same class
    /// set and repeats the same stretch call.
    pub fn apply_tunes(&self) {
        let (holder, data) = {
            let state = self.inner.state.borrow();
            (state.view.as_ref().map(|view| view.image_holder.clone()), state.data.clone())
        };
        let dom = &self.inner.dom;
        let host = &self.inner.host;

        for tune in &TUNES {
            let active = tune.key.is_active(&data);
            if let Some(holder) = &holder {
                let class = self.inner.config.modifier_class(&tune.key.modifier());
                dom.toggle_class(holder, &class, active);
            }
            if tune.key == TuneKey::Stretched {
                host.stretch_block(host.current_block_index(), active);
            }
        }
    }
}
