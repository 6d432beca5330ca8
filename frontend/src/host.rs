//! Capabilities the host editor hands to a block at construction.

/// Class names owned by the host's stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostStyles {
    pub block: String,
    pub input: String,
    pub loader: String,
}

impl Default for HostStyles {
    fn default() -> Self {
        Self {
            block: "cdx-block".to_string(),
            input: "cdx-input".to_string(),
            loader: "cdx-loader".to_string(),
        }
    }
}

/// The host editor, as seen from one block.
///
/// Implementations must not call back into the block synchronously from
/// these methods.
pub trait HostApi {
    /// Index of the block currently being worked on.
    fn current_block_index(&self) -> usize;

    /// Localizes a UI string. Returning the key unchanged is a valid fallback.
    fn translate(&self, key: &str) -> String;

    /// Widens or restores the block at `index` in the host's own layout.
    fn stretch_block(&self, index: usize, stretched: bool);

    fn styles(&self) -> HostStyles;

    /// Shows a user-visible notice.
    fn notify(&self, message: &str);
}
