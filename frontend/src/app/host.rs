//! The demo page acting as the host editor for a single block.

use image_block::{HostApi, HostStyles};
use web_sys::Element;

use super::helpers::show_toast;

const STRETCHED_CLASS: &str = "ce-block--stretched";

pub struct PageHost {
    /// The element standing in for the host's block container.
    block_container: Element,
    index: usize,
}

impl PageHost {
    pub fn new(block_container: Element, index: usize) -> Self {
        Self { block_container, index }
    }
}

impl HostApi for PageHost {
    fn current_block_index(&self) -> usize {
        self.index
    }

    fn translate(&self, key: &str) -> String {
        let translated = match key {
            "Image" => "Imagen",
            "Enter a caption" => "Escribe una leyenda",
            "With border" => "Con borde",
            "Stretch image" => "Estirar imagen",
            "With background" => "Con fondo",
            "Failed to load an image" => "No se pudo cargar la imagen.",
            "Failed to read the pasted file" => "No se pudo leer el archivo pegado.",
            other => other,
        };
        translated.to_string()
    }

    fn stretch_block(&self, index: usize, stretched: bool) {
        if index != self.index {
            log::warn!("stretch requested for unknown block {}", index);
            return;
        }
        self.block_container
            .class_list()
            .toggle_with_force(STRETCHED_CLASS, stretched)
            .ok();
    }

    fn styles(&self) -> HostStyles {
        HostStyles::default()
    }

    fn notify(&self, message: &str) {
        show_toast(message);
    }
}
