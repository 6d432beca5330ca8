pub mod image_block;
