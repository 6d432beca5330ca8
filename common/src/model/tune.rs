//! The three visual tunes of an image block.
//!
//! Tunes are a closed set, so they are an enum rather than string keys into
//! the record. Each variant maps to exactly one boolean of [`DataRecord`].

use serde::{Deserialize, Serialize};

use super::record::DataRecord;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TuneKey {
    WithBorder,
    Stretched,
    WithBackground,
}

impl TuneKey {
    /// Catalog order, which is also the order tunes are shown and applied in.
    pub const ALL: [TuneKey; 3] = [TuneKey::WithBorder, TuneKey::Stretched, TuneKey::WithBackground];

    /// The record key, as it appears in the serialized record.
    pub fn name(self) -> &'static str {
        match self {
            TuneKey::WithBorder => "withBorder",
            TuneKey::Stretched => "stretched",
            TuneKey::WithBackground => "withBackground",
        }
    }

    /// CSS modifier suffix: the record key in kebab case.
    pub fn modifier(self) -> String {
        camel_to_kebab(self.name())
    }

    pub fn is_active(self, record: &DataRecord) -> bool {
        match self {
            TuneKey::WithBorder => record.with_border,
            TuneKey::Stretched => record.stretched,
            TuneKey::WithBackground => record.with_background,
        }
    }

    pub fn flag_mut(self, record: &mut DataRecord) -> &mut bool {
        match self {
            TuneKey::WithBorder => &mut record.with_border,
            TuneKey::Stretched => &mut record.stretched,
            TuneKey::WithBackground => &mut record.with_background,
        }
    }

    /// Flips the flag and returns its new value.
    pub fn toggle(self, record: &mut DataRecord) -> bool {
        let flag = self.flag_mut(record);
        *flag = !*flag;
        *flag
    }

    pub fn descriptor(self) -> &'static TuneDescriptor {
        match self {
            TuneKey::WithBorder => &TUNES[0],
            TuneKey::Stretched => &TUNES[1],
            TuneKey::WithBackground => &TUNES[2],
        }
    }
}

/// Static description of a tune. `label` is an i18n key, translated by the host.
#[derive(Debug, PartialEq, Eq)]
pub struct TuneDescriptor {
    pub key: TuneKey,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static TUNES: [TuneDescriptor; 3] = [
    TuneDescriptor {
        key: TuneKey::WithBorder,
        label: "With border",
        icon: ICON_BORDER,
    },
    TuneDescriptor {
        key: TuneKey::Stretched,
        label: "Stretch image",
        icon: ICON_STRETCH,
    },
    TuneDescriptor {
        key: TuneKey::WithBackground,
        label: "With background",
        icon: ICON_BACKGROUND,
    },
];

const ICON_BORDER: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="5" y="5" width="14" height="14" rx="4" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;
const ICON_STRETCH: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M4 12h16M4 12l3-3M4 12l3 3M20 12l-3-3M20 12l-3 3" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>"#;
const ICON_BACKGROUND: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><rect x="4" y="4" width="16" height="16" rx="4" fill="currentColor" opacity=".3"/><rect x="8" y="8" width="8" height="8" rx="2" fill="currentColor"/></svg>"#;

/// `withBorder` -> `with-border`.
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_are_kebab_case() {
        assert_eq!(TuneKey::WithBorder.modifier(), "with-border");
        assert_eq!(TuneKey::Stretched.modifier(), "stretched");
        assert_eq!(TuneKey::WithBackground.modifier(), "with-background");
    }

    #[test]
    fn catalog_matches_keys() {
        for key in TuneKey::ALL {
            assert_eq!(key.descriptor().key, key);
        }
    }

    #[test]
    fn toggle_touches_only_its_flag() {
        let mut record = DataRecord::default();
        assert!(TuneKey::WithBackground.toggle(&mut record));
        assert!(record.with_background);
        assert!(!record.with_border);
        assert!(!record.stretched);
        assert!(!TuneKey::WithBackground.toggle(&mut record));
        assert_eq!(record, DataRecord::default());
    }

    #[test]
    fn key_serializes_as_record_key() {
        for key in TuneKey::ALL {
            assert_eq!(
                serde_json::to_value(key).unwrap(),
                serde_json::Value::from(key.name())
            );
        }
    }
}
