//! Failure taxonomy of the image block.
//!
//! None of these are fatal to the host: each one leaves a single block
//! incomplete and is reported through logging and, where the user should
//! know, the host's notification hook.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    /// A tag paste carried something other than an `<img>` with a `src`.
    #[error("pasted element <{tag}> is not an image with a source")]
    PasteShape { tag: String },

    /// The browser could not decode the image at `url`.
    #[error("failed to load an image from `{url}`")]
    ImageDecode { url: String },

    /// A pasted file could not be read into a data URL.
    #[error("failed to read pasted file `{name}`: {reason}")]
    FileDecode { name: String, reason: String },

    /// The document refused a node operation.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
