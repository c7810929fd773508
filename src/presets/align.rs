use once_cell::sync::Lazy;

use super::layout::FLEX_ROOT;
use crate::style::{compose, PropertyMapping};
use crate::vendor::prefixed;

type Preset = Lazy<PropertyMapping>;

// Cross axis
pub static START: Preset = Lazy::new(|| prefixed("alignItems", "flex-start"));
pub static CENTER: Preset = Lazy::new(|| prefixed("alignItems", "center"));
pub static END: Preset = Lazy::new(|| prefixed("alignItems", "flex-end"));

// Main axis
pub static START_JUSTIFIED: Preset = Lazy::new(|| prefixed("justifyContent", "flex-start"));
pub static CENTER_JUSTIFIED: Preset = Lazy::new(|| prefixed("justifyContent", "center"));
pub static END_JUSTIFIED: Preset = Lazy::new(|| prefixed("justifyContent", "flex-end"));
pub static AROUND_JUSTIFIED: Preset = Lazy::new(|| prefixed("justifyContent", "space-around"));
pub static BETWEEN_JUSTIFIED: Preset = Lazy::new(|| prefixed("justifyContent", "space-between"));

/// Both axes.
pub static CENTER_CENTER: Preset =
    Lazy::new(|| compose([&*FLEX_ROOT, &*CENTER, &*CENTER_JUSTIFIED]));

// Self alignment
pub static SELF_START: Preset = Lazy::new(|| prefixed("alignSelf", "flex-start"));
pub static SELF_CENTER: Preset = Lazy::new(|| prefixed("alignSelf", "center"));
pub static SELF_END: Preset = Lazy::new(|| prefixed("alignSelf", "flex-end"));
pub static SELF_STRETCH: Preset = Lazy::new(|| prefixed("alignSelf", "stretch"));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PropertyValue;

    #[test]
    fn center_center_combines_root_and_both_axes() {
        assert_eq!(
            *CENTER_CENTER,
            PropertyMapping::new()
                .with("display", ["-webkit-flex", "flex"])
                .with("-webkit-align-items", "center")
                .with("alignItems", "center")
                .with("-webkit-justify-content", "center")
                .with("justifyContent", "center")
        );
    }

    #[test]
    fn justification_presets_use_space_keywords() {
        assert_eq!(
            AROUND_JUSTIFIED.get("justifyContent"),
            Some(&PropertyValue::from("space-around"))
        );
        assert_eq!(
            BETWEEN_JUSTIFIED.get("-webkit-justify-content"),
            Some(&PropertyValue::from("space-between"))
        );
    }

    #[test]
    fn self_alignment_targets_align_self() {
        for preset in [&SELF_START, &SELF_CENTER, &SELF_END, &SELF_STRETCH] {
            assert!(preset.contains_key("alignSelf"));
            assert!(preset.contains_key("-webkit-align-self"));
            assert_eq!(preset.len(), 2);
        }
        assert_eq!(SELF_STRETCH.get("alignSelf"), Some(&PropertyValue::from("stretch")));
    }
}
