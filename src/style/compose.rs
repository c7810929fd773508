use super::PropertyMapping;

/// Shallow-merges `mappings` left to right into a new mapping; later values win.
///
/// No input yields an empty mapping and a single input yields an independent copy.
pub fn compose<'a, I>(mappings: I) -> PropertyMapping
where
    I: IntoIterator<Item = &'a PropertyMapping>,
{
    let mut composed = PropertyMapping::new();
    let mut parts = 0usize;
    for mapping in mappings {
        composed.merge(mapping);
        parts += 1;
    }
    tracing::trace!(parts, properties = composed.len(), "composed style mappings");
    composed
}

/// Variadic form of [`compose`]. Accepts anything that derefs to a
/// [`PropertyMapping`], including the preset statics.
///
/// ```
/// use csx::{compose, presets};
///
/// let toolbar = compose!(presets::HORIZONTAL, presets::CENTER, csx::padding(8).unwrap());
/// assert!(toolbar.contains_key("paddingTop"));
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::style::PropertyMapping::new()
    };
    ($($mapping:expr),+ $(,)?) => {{
        let mut composed = $crate::style::PropertyMapping::new();
        $(composed.merge(&$mapping);)+
        composed
    }};
}
