use crate::error::{InvalidArgument, StyleResult};
use crate::style::format_number;

const PIXEL_SUFFIX: &str = "px";

/// One box edge: a bare number is a pixel quantity, text carries its own unit.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeValue {
    Number(f64),
    Text(String),
}

/// Canonical text of an edge value. Numbers get a `px` suffix, text passes
/// through verbatim.
pub fn normalize(value: &EdgeValue) -> StyleResult<String> {
    match value {
        EdgeValue::Number(number) if !number.is_finite() => {
            Err(InvalidArgument::NonFiniteEdge { value: *number }.into())
        }
        EdgeValue::Number(number) => Ok(format!("{}{PIXEL_SUFFIX}", format_number(*number))),
        EdgeValue::Text(text) => Ok(text.clone()),
    }
}

impl From<f64> for EdgeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_lossless_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for EdgeValue {
                fn from(value: $ty) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

impl_from_lossless_number!(i8, i16, i32, u8, u16, u32, f32);

impl From<&str> for EdgeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EdgeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for EdgeValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}
