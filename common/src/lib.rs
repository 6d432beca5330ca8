//! Shared, target-independent model for the image block.
//!
//! Everything here is plain data plus the pure rules attached to it, so the
//! widget in `frontend` and any host can agree on the serialized shape, the
//! tune catalog and the paste/sanitize declarations without touching a DOM.

pub mod config;
pub mod model;
pub mod paste;
pub mod sanitize;
