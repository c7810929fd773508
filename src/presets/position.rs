use once_cell::sync::Lazy;

use crate::style::{compose, PropertyMapping};

type Preset = Lazy<PropertyMapping>;

fn zeroed(edges: &[&str]) -> PropertyMapping {
    edges.iter().map(|edge| (*edge, 0)).collect()
}

/// Prefer the edge-anchored variants below.
pub static FIXED: Preset = Lazy::new(|| PropertyMapping::new().with("position", "fixed"));

pub static FIXED_TOP: Preset = Lazy::new(|| compose([&*FIXED, &zeroed(&["top", "left", "right"])]));
pub static FIXED_RIGHT: Preset =
    Lazy::new(|| compose([&*FIXED, &zeroed(&["top", "right", "bottom"])]));
pub static FIXED_BOTTOM: Preset =
    Lazy::new(|| compose([&*FIXED, &zeroed(&["right", "bottom", "left"])]));
pub static FIXED_LEFT: Preset =
    Lazy::new(|| compose([&*FIXED, &zeroed(&["top", "bottom", "left"])]));

pub static NEW_LAYER_PARENT: Preset =
    Lazy::new(|| PropertyMapping::new().with("position", "relative"));

/// Covers the nearest `position: relative` or `position: absolute` ancestor,
/// like opening a new body.
pub static NEW_LAYER: Preset = Lazy::new(|| {
    compose([
        &PropertyMapping::new().with("position", "absolute"),
        &zeroed(&["left", "right", "top", "bottom"]),
    ])
});
