//! Named flexbox and positioning presets.
//!
//! Every preset is built once, on first use, and never changes afterwards.
//! Composed presets (`HORIZONTAL`, `CENTER_CENTER`, `FIXED_TOP`...) are merged
//! at that point, not per lookup.

mod align;
mod layout;
mod position;

use once_cell::sync::Lazy;

use crate::error::{StyleError, StyleResult};
use crate::style::PropertyMapping;

pub use align::*;
pub use layout::*;
pub use position::*;

static REGISTRY: &[(&str, &Lazy<PropertyMapping>)] = &[
    ("flexRoot", &FLEX_ROOT),
    ("pass", &PASS),
    ("inlineRoot", &INLINE_ROOT),
    ("horizontal", &HORIZONTAL),
    ("vertical", &VERTICAL),
    ("wrap", &WRAP),
    ("flexNone", &FLEX_NONE),
    ("content", &CONTENT),
    ("flex", &FLEX),
    ("flex1", &FLEX1),
    ("flex2", &FLEX2),
    ("flex3", &FLEX3),
    ("flex4", &FLEX4),
    ("flex5", &FLEX5),
    ("flex6", &FLEX6),
    ("flex7", &FLEX7),
    ("flex8", &FLEX8),
    ("flex9", &FLEX9),
    ("flex10", &FLEX10),
    ("flex11", &FLEX11),
    ("flex12", &FLEX12),
    ("start", &START),
    ("center", &CENTER),
    ("end", &END),
    ("startJustified", &START_JUSTIFIED),
    ("centerJustified", &CENTER_JUSTIFIED),
    ("endJustified", &END_JUSTIFIED),
    ("aroundJustified", &AROUND_JUSTIFIED),
    ("betweenJustified", &BETWEEN_JUSTIFIED),
    ("centerCenter", &CENTER_CENTER),
    ("selfStart", &SELF_START),
    ("selfCenter", &SELF_CENTER),
    ("selfEnd", &SELF_END),
    ("selfStretch", &SELF_STRETCH),
    ("block", &BLOCK),
    ("none", &NONE),
    ("invisible", &INVISIBLE),
    ("fixed", &FIXED),
    ("fixedTop", &FIXED_TOP),
    ("fixedRight", &FIXED_RIGHT),
    ("fixedBottom", &FIXED_BOTTOM),
    ("fixedLeft", &FIXED_LEFT),
    ("newLayerParent", &NEW_LAYER_PARENT),
    ("newLayer", &NEW_LAYER),
    ("scroll", &SCROLL),
];

/// Looks a preset up by its camelCase name, e.g. `"centerCenter"`.
pub fn get(name: &str) -> Option<&'static PropertyMapping> {
    REGISTRY
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|(_, preset)| Lazy::force(*preset))
}

pub fn require(name: &str) -> StyleResult<&'static PropertyMapping> {
    get(name).ok_or_else(|| {
        tracing::debug!(name, "unknown preset requested");
        StyleError::UnknownPreset {
            name: name.to_string(),
        }
    })
}

pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_registered_name_resolves_to_a_non_empty_preset() {
        for name in names() {
            let preset = get(name).unwrap();
            assert!(!preset.is_empty(), "{name} is empty");
        }
        assert_eq!(names().count(), 45);
    }

    #[test]
    fn registered_names_are_unique() {
        let unique: HashSet<_> = names().collect();
        assert_eq!(unique.len(), names().count());
    }

    #[test]
    fn lookups_return_the_shared_static() {
        let looked_up = get("centerCenter").unwrap();
        assert!(std::ptr::eq(looked_up, &*CENTER_CENTER));
        assert_eq!(get("flex5"), Some(&*FLEX5));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(get("centre").is_none());
        assert_eq!(
            require("centre").unwrap_err(),
            StyleError::UnknownPreset {
                name: "centre".to_string()
            }
        );
    }
}
