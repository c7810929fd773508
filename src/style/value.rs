use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A single declaration value.
///
/// `Fallback` holds several values for one property, emitted in order so that
/// engines keep the last one they understand (`display: -webkit-flex; display: flex`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Fallback(Vec<String>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_fallback(&self) -> Option<&[String]> {
        match self {
            Self::Fallback(values) => Some(values),
            _ => None,
        }
    }
}

/// Shortest decimal form of `value`: integral values drop the fraction and
/// negative zero prints as `0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn is_integral(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => f.write_str(&format_number(*number)),
            Self::Text(text) => f.write_str(text),
            Self::Fallback(values) => f.write_str(&values.join(", ")),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(number) if is_integral(*number) => serializer.serialize_i64(*number as i64),
            Self::Number(number) => serializer.serialize_f64(*number),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Fallback(values) => values.serialize(serializer),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_lossless_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

impl_from_lossless_number!(i8, i16, i32, u8, u16, u32, f32);

impl<const N: usize> From<[&str; N]> for PropertyValue {
    fn from(values: [&str; N]) -> Self {
        Self::Fallback(values.iter().map(|value| (*value).to_string()).collect())
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(values: Vec<String>) -> Self {
        Self::Fallback(values)
    }
}
