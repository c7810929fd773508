use once_cell::sync::Lazy;

use crate::style::{compose, PropertyMapping};
use crate::vendor::prefixed;

type Preset = Lazy<PropertyMapping>;

/// A flex container. With more than one child prefer [`HORIZONTAL`] or [`VERTICAL`].
pub static FLEX_ROOT: Preset =
    Lazy::new(|| PropertyMapping::new().with("display", ["-webkit-flex", "flex"]));

/// Grouping that has no impact on the parent flexbox properties.
pub static PASS: Preset = Lazy::new(|| {
    compose([
        &PropertyMapping::new().with("display", "inherit"),
        &prefixed("flexDirection", "inherit"),
        &prefixed("flexGrow", 1),
    ])
});

pub static INLINE_ROOT: Preset =
    Lazy::new(|| PropertyMapping::new().with("display", "inline-flex"));

pub static HORIZONTAL: Preset = Lazy::new(|| {
    compose([
        &*FLEX_ROOT,
        &PropertyMapping::new().with("flexDirection", "row"),
    ])
});

pub static VERTICAL: Preset = Lazy::new(|| {
    compose([
        &*FLEX_ROOT,
        &PropertyMapping::new().with("flexDirection", "column"),
    ])
});

pub static WRAP: Preset = Lazy::new(|| PropertyMapping::new().with("flexWrap", "wrap"));

pub static FLEX_NONE: Preset = Lazy::new(|| PropertyMapping::new().with("flex", "none"));

/// Lets an item be sized by its children; works around flex-shrink bugs in
/// several flexbox implementations.
pub static CONTENT: Preset = Lazy::new(|| prefixed("flexShrink", 0));

/// `flex: n` with its `-webkit-` alias.
pub fn flex_n(n: u32) -> PropertyMapping {
    prefixed("flex", n)
}

pub static FLEX: Preset = Lazy::new(|| flex_n(1));
pub static FLEX1: Preset = Lazy::new(|| flex_n(1));
pub static FLEX2: Preset = Lazy::new(|| flex_n(2));
pub static FLEX3: Preset = Lazy::new(|| flex_n(3));
pub static FLEX4: Preset = Lazy::new(|| flex_n(4));
pub static FLEX5: Preset = Lazy::new(|| flex_n(5));
pub static FLEX6: Preset = Lazy::new(|| flex_n(6));
pub static FLEX7: Preset = Lazy::new(|| flex_n(7));
pub static FLEX8: Preset = Lazy::new(|| flex_n(8));
pub static FLEX9: Preset = Lazy::new(|| flex_n(9));
pub static FLEX10: Preset = Lazy::new(|| flex_n(10));
pub static FLEX11: Preset = Lazy::new(|| flex_n(11));
pub static FLEX12: Preset = Lazy::new(|| flex_n(12));

pub static BLOCK: Preset = Lazy::new(|| PropertyMapping::new().with("display", "block"));
pub static NONE: Preset = Lazy::new(|| PropertyMapping::new().with("display", "none"));
pub static INVISIBLE: Preset = Lazy::new(|| PropertyMapping::new().with("visibility", "hidden"));

/// Momentum scrolling on touch devices.
pub static SCROLL: Preset = Lazy::new(|| {
    PropertyMapping::new()
        .with("-webkit-overflow-scrolling", "touch")
        .with("overflow", "auto")
});
