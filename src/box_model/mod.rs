//! Box helpers.
//!
//! Each box family keeps top, right, bottom and left as separate properties so
//! a later mapping can override one edge without restating the others.

mod shorthand;
mod unit;

pub use shorthand::{BoxFunction, BoxMapper, IntoShorthand, ResolvedBox, Shorthand};
pub use unit::{normalize, EdgeValue};

use crate::error::StyleResult;
use crate::style::PropertyMapping;

fn edge_properties(names: [&str; 4], resolved: &ResolvedBox) -> PropertyMapping {
    let [top, right, bottom, left] = names;
    PropertyMapping::new()
        .with(top, resolved.top())
        .with(right, resolved.right())
        .with(bottom, resolved.bottom())
        .with(left, resolved.left())
}

fn padding_properties(resolved: &ResolvedBox) -> PropertyMapping {
    edge_properties(
        ["paddingTop", "paddingRight", "paddingBottom", "paddingLeft"],
        resolved,
    )
}

fn margin_properties(resolved: &ResolvedBox) -> PropertyMapping {
    edge_properties(
        ["marginTop", "marginRight", "marginBottom", "marginLeft"],
        resolved,
    )
}

fn border_properties(resolved: &ResolvedBox) -> PropertyMapping {
    edge_properties(
        ["borderTop", "borderRight", "borderBottom", "borderLeft"],
        resolved,
    )
}

pub static PADDING: BoxFunction<BoxMapper> = BoxFunction::new(padding_properties as BoxMapper);
pub static MARGIN: BoxFunction<BoxMapper> = BoxFunction::new(margin_properties as BoxMapper);
pub static BORDER: BoxFunction<BoxMapper> = BoxFunction::new(border_properties as BoxMapper);

/// `padding(all)`, `padding((vertical, horizontal))` or
/// `padding((top, right, bottom, left))`. Bare numbers are pixels.
pub fn padding(args: impl IntoShorthand) -> StyleResult<PropertyMapping> {
    PADDING.call(args)
}

pub fn margin(args: impl IntoShorthand) -> StyleResult<PropertyMapping> {
    MARGIN.call(args)
}

pub fn border(args: impl IntoShorthand) -> StyleResult<PropertyMapping> {
    BORDER.call(args)
}
