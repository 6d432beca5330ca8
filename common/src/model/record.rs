use serde::{Deserialize, Serialize};

/// The persisted value of one image block.
///
/// This is the serialization contract shared with the host editor:
/// `{ url, caption, withBorder, withBackground, stretched }`. Unknown keys in
/// incoming JSON are dropped and missing keys fall back to their defaults, so a
/// deserialized record always carries exactly these five fields.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DataRecord {
    /// Image source. An empty string means "no image yet".
    pub url: String,
    /// Caption markup. Only `<br>` survives host-side sanitization.
    pub caption: String,
    pub with_border: bool,
    pub with_background: bool,
    pub stretched: bool,
}

/// A partial record, as handed over by the host at construction or by the
/// data setter.
///
/// `None` means "not present in the input". It is distinct from an explicit
/// `Some(false)` or `Some(String::new())`, which are real values and are kept.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_border: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stretched: Option<bool>,
}

impl DataPatch {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Every field present, taken from `record`. Merging it replaces the whole
    /// target record.
    pub fn full(record: DataRecord) -> Self {
        Self {
            url: Some(record.url),
            caption: Some(record.caption),
            with_border: Some(record.with_border),
            with_background: Some(record.with_background),
            stretched: Some(record.stretched),
        }
    }
}

impl From<DataRecord> for DataPatch {
    fn from(record: DataRecord) -> Self {
        Self::full(record)
    }
}

impl DataRecord {
    /// Normalizes a partial input into a complete record. Absent fields take
    /// their defaults; present fields are kept as given, `false` included.
    pub fn from_patch(patch: DataPatch) -> Self {
        let mut record = Self::default();
        record.merge(patch);
        record
    }

    /// Shallow, field-by-field overwrite for the keys present in `patch`.
    pub fn merge(&mut self, patch: DataPatch) {
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(caption) = patch.caption {
            self.caption = caption;
        }
        if let Some(with_border) = patch.with_border {
            self.with_border = with_border;
        }
        if let Some(with_background) = patch.with_background {
            self.with_background = with_background;
        }
        if let Some(stretched) = patch.stretched {
            self.stretched = stretched;
        }
    }

    pub fn has_image(&self) -> bool {
        !self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_default() {
        let record = DataRecord::from_patch(DataPatch::url("https://x/a.png"));
        assert_eq!(record.url, "https://x/a.png");
        assert_eq!(record.caption, "");
        assert!(!record.with_border);
        assert!(!record.with_background);
        assert!(!record.stretched);
    }

    #[test]
    fn explicit_false_is_preserved_over_true() {
        let mut record = DataRecord {
            with_border: true,
            stretched: true,
            ..DataRecord::default()
        };
        record.merge(DataPatch {
            with_border: Some(false),
            ..DataPatch::default()
        });
        assert!(!record.with_border);
        assert!(record.stretched);
    }

    #[test]
    fn deserialize_drops_unknown_and_defaults_missing() {
        let record: DataRecord = serde_json::from_str(
            r#"{"url":"https://x/a.png","withBorder":true,"file":{"url":"ignored"}}"#,
        )
        .unwrap();
        assert_eq!(
            record,
            DataRecord {
                url: "https://x/a.png".into(),
                with_border: true,
                ..DataRecord::default()
            }
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(DataRecord::default()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["caption", "stretched", "url", "withBackground", "withBorder"]
        );
    }

    #[test]
    fn patch_skips_absent_keys_when_serialized() {
        let json = serde_json::to_string(&DataPatch::url("u")).unwrap();
        assert_eq!(json, r#"{"url":"u"}"#);
    }

    #[test]
    fn full_patch_replaces_everything() {
        let mut record = DataRecord {
            url: "old".into(),
            caption: "old caption".into(),
            with_border: true,
            with_background: true,
            stretched: true,
        };
        record.merge(DataPatch::full(DataRecord {
            url: "new".into(),
            ..DataRecord::default()
        }));
        assert_eq!(record, DataRecord::from_patch(DataPatch::url("new")));
    }
}
