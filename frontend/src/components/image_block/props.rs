//! Construction input for an [`ImageBlock`](super::ImageBlock).

use std::rc::Rc;

use common::config::BlockConfig;
use common::model::record::DataPatch;

use crate::host::HostApi;

/// Everything the host supplies when it creates a block.
pub struct BlockOptions {
    /// Initial, possibly partial, record. Normalized at construction.
    pub data: DataPatch,
    pub config: BlockConfig,
    pub host: Rc<dyn HostApi>,
    /// When set, the caption is rendered non-editable.
    pub read_only: bool,
}

impl BlockOptions {
    pub fn new(host: Rc<dyn HostApi>) -> Self {
        Self {
            data: DataPatch::default(),
            config: BlockConfig::default(),
            host,
            read_only: false,
        }
    }

    pub fn with_data(mut self, data: impl Into<DataPatch>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_config(mut self, config: BlockConfig) -> Self {
        self.config = config;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}
