use common::model::record::{DataPatch, DataRecord};
use proptest::prelude::*;

fn patch_strategy() -> impl Strategy<Value = DataPatch> {
    (
        proptest::option::of(".{0,16}"),
        proptest::option::of(".{0,16}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(url, caption, with_border, with_background, stretched)| DataPatch {
            url,
            caption,
            with_border,
            with_background,
            stretched,
        })
}

proptest! {
    /// Omitted fields resolve to their defaults, present ones are kept verbatim.
    #[test]
    fn construction_normalizes_every_field(patch in patch_strategy()) {
        let record = DataRecord::from_patch(patch.clone());
        prop_assert_eq!(&record.url, patch.url.as_deref().unwrap_or(""));
        prop_assert_eq!(&record.caption, patch.caption.as_deref().unwrap_or(""));
        prop_assert_eq!(record.with_border, patch.with_border.unwrap_or(false));
        prop_assert_eq!(record.with_background, patch.with_background.unwrap_or(false));
        prop_assert_eq!(record.stretched, patch.stretched.unwrap_or(false));
    }

    /// Merging only overwrites the keys present in the patch.
    #[test]
    fn merge_leaves_absent_keys_alone(base in patch_strategy(), patch in patch_strategy()) {
        let before = DataRecord::from_patch(base);
        let mut after = before.clone();
        after.merge(patch.clone());
        if patch.url.is_none() { prop_assert_eq!(&after.url, &before.url); }
        if patch.caption.is_none() { prop_assert_eq!(&after.caption, &before.caption); }
        if patch.with_border.is_none() { prop_assert_eq!(after.with_border, before.with_border); }
        if patch.with_background.is_none() { prop_assert_eq!(after.with_background, before.with_background); }
        if patch.stretched.is_none() { prop_assert_eq!(after.stretched, before.stretched); }
    }

    /// A JSON round trip through the serialized shape is lossless.
    #[test]
    fn json_shape_is_stable(patch in patch_strategy()) {
        let record = DataRecord::from_patch(patch);
        let json = serde_json::to_string(&record).unwrap();
        let back: DataRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, record);
    }
}
