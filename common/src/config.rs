use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options the host passes to every image block.
///
/// Deserialized from the host's opaque options bag: unknown keys are ignored,
/// missing keys take the defaults below.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockConfig {
    /// i18n key shown as the empty-caption hint.
    pub caption_placeholder: String,
    /// Base for the block's own class names.
    pub class_prefix: String,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            caption_placeholder: "Enter a caption".to_string(),
            class_prefix: "cdx-simple-image".to_string(),
        }
    }
}

impl BlockConfig {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    pub fn wrapper_class(&self) -> &str {
        &self.class_prefix
    }

    pub fn image_holder_class(&self) -> String {
        format!("{}__picture", self.class_prefix)
    }

    pub fn caption_class(&self) -> String {
        format!("{}__caption", self.class_prefix)
    }

    /// `<prefix>__picture--<modifier>`.
    pub fn modifier_class(&self, modifier: &str) -> String {
        format!("{}--{}", self.image_holder_class(), modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_empty_give_defaults() {
        assert_eq!(BlockConfig::from_value(Value::Null).unwrap(), BlockConfig::default());
        assert_eq!(BlockConfig::from_value(json!({})).unwrap(), BlockConfig::default());
    }

    #[test]
    fn partial_bag_overrides_and_ignores_unknown() {
        let config = BlockConfig::from_value(json!({
            "classPrefix": "photo",
            "endpoint": "/upload"
        }))
        .unwrap();
        assert_eq!(config.class_prefix, "photo");
        assert_eq!(config.caption_placeholder, "Enter a caption");
        assert_eq!(config.modifier_class("with-border"), "photo__picture--with-border");
        assert_eq!(config.caption_class(), "photo__caption");
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(BlockConfig::from_value(json!({ "classPrefix": 3 })).is_err());
    }
}
