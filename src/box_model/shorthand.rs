use super::unit::{normalize, EdgeValue};
use crate::error::{InvalidArgument, StyleResult};
use crate::style::PropertyMapping;

/// Four canonical edge texts, in CSS clockwise order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBox {
    top: String,
    right: String,
    bottom: String,
    left: String,
}

impl ResolvedBox {
    pub fn new(
        top: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
    ) -> Self {
        Self {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    pub fn top(&self) -> &str {
        &self.top
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    pub fn left(&self) -> &str {
        &self.left
    }
}

/// The three accepted call shapes of a box shorthand.
#[derive(Debug, Clone, PartialEq)]
pub enum Shorthand {
    All(EdgeValue),
    Symmetric {
        vertical: EdgeValue,
        horizontal: EdgeValue,
    },
    PerEdge {
        top: EdgeValue,
        right: EdgeValue,
        bottom: EdgeValue,
        left: EdgeValue,
    },
}

impl Shorthand {
    pub fn all(value: impl Into<EdgeValue>) -> Self {
        Self::All(value.into())
    }

    pub fn symmetric(vertical: impl Into<EdgeValue>, horizontal: impl Into<EdgeValue>) -> Self {
        Self::Symmetric {
            vertical: vertical.into(),
            horizontal: horizontal.into(),
        }
    }

    pub fn per_edge(
        top: impl Into<EdgeValue>,
        right: impl Into<EdgeValue>,
        bottom: impl Into<EdgeValue>,
        left: impl Into<EdgeValue>,
    ) -> Self {
        Self::PerEdge {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Dispatches on the number of positional values. Only 1, 2 and 4 are shapes.
    pub fn from_args(args: &[EdgeValue]) -> StyleResult<Self> {
        match args {
            [all] => Ok(Self::All(all.clone())),
            [vertical, horizontal] => Ok(Self::Symmetric {
                vertical: vertical.clone(),
                horizontal: horizontal.clone(),
            }),
            [top, right, bottom, left] => Ok(Self::PerEdge {
                top: top.clone(),
                right: right.clone(),
                bottom: bottom.clone(),
                left: left.clone(),
            }),
            _ => Err(InvalidArgument::Arity { arity: args.len() }.into()),
        }
    }

    pub const fn arity(&self) -> usize {
        match self {
            Self::All(_) => 1,
            Self::Symmetric { .. } => 2,
            Self::PerEdge { .. } => 4,
        }
    }

    pub fn resolve(&self) -> StyleResult<ResolvedBox> {
        let (top, right, bottom, left) = match self {
            Self::All(all) => (all, all, all, all),
            Self::Symmetric {
                vertical,
                horizontal,
            } => (vertical, horizontal, vertical, horizontal),
            Self::PerEdge {
                top,
                right,
                bottom,
                left,
            } => (top, right, bottom, left),
        };
        Ok(ResolvedBox {
            top: normalize(top)?,
            right: normalize(right)?,
            bottom: normalize(bottom)?,
            left: normalize(left)?,
        })
    }
}

/// Argument shapes accepted by [`BoxFunction::call`].
///
/// Implemented for a single edge value, 2-tuples and 4-tuples. A 3-tuple has no
/// implementation, so a three-value call is rejected at compile time.
pub trait IntoShorthand {
    fn into_shorthand(self) -> Shorthand;
}

impl IntoShorthand for Shorthand {
    fn into_shorthand(self) -> Shorthand {
        self
    }
}

macro_rules! impl_single_edge_shorthand {
    ($($ty:ty),*) => {
        $(
            impl IntoShorthand for $ty {
                fn into_shorthand(self) -> Shorthand {
                    Shorthand::all(self)
                }
            }
        )*
    };
}

impl_single_edge_shorthand!(EdgeValue, f64, f32, i8, i16, i32, u8, u16, u32, &str, String, &String);

impl<A, B> IntoShorthand for (A, B)
where
    A: Into<EdgeValue>,
    B: Into<EdgeValue>,
{
    fn into_shorthand(self) -> Shorthand {
        Shorthand::symmetric(self.0, self.1)
    }
}

impl<A, B, C, D> IntoShorthand for (A, B, C, D)
where
    A: Into<EdgeValue>,
    B: Into<EdgeValue>,
    C: Into<EdgeValue>,
    D: Into<EdgeValue>,
{
    fn into_shorthand(self) -> Shorthand {
        Shorthand::per_edge(self.0, self.1, self.2, self.3)
    }
}

pub type BoxMapper = fn(&ResolvedBox) -> PropertyMapping;

/// A box shorthand parameterized by the mapper that names its four properties.
#[derive(Debug, Clone, Copy)]
pub struct BoxFunction<F> {
    mapper: F,
}

impl<F> BoxFunction<F> {
    pub const fn new(mapper: F) -> Self {
        Self { mapper }
    }
}

impl<F> BoxFunction<F>
where
    F: Fn(&ResolvedBox) -> PropertyMapping,
{
    pub fn call(&self, args: impl IntoShorthand) -> StyleResult<PropertyMapping> {
        self.apply(&args.into_shorthand())
    }

    /// Runtime-arity form of [`BoxFunction::call`].
    pub fn call_slice(&self, args: &[EdgeValue]) -> StyleResult<PropertyMapping> {
        let shorthand = Shorthand::from_args(args).map_err(|error| {
            tracing::warn!(arity = args.len(), "rejected box shorthand arity");
            error
        })?;
        self.apply(&shorthand)
    }

    pub fn all(&self, value: impl Into<EdgeValue>) -> StyleResult<PropertyMapping> {
        self.apply(&Shorthand::all(value))
    }

    pub fn symmetric(
        &self,
        vertical: impl Into<EdgeValue>,
        horizontal: impl Into<EdgeValue>,
    ) -> StyleResult<PropertyMapping> {
        self.apply(&Shorthand::symmetric(vertical, horizontal))
    }

    pub fn per_edge(
        &self,
        top: impl Into<EdgeValue>,
        right: impl Into<EdgeValue>,
        bottom: impl Into<EdgeValue>,
        left: impl Into<EdgeValue>,
    ) -> StyleResult<PropertyMapping> {
        self.apply(&Shorthand::per_edge(top, right, bottom, left))
    }

    pub fn apply(&self, shorthand: &Shorthand) -> StyleResult<PropertyMapping> {
        tracing::trace!(arity = shorthand.arity(), "resolving box shorthand");
        let resolved = shorthand.resolve().map_err(|error| {
            tracing::warn!(%error, "box shorthand edge rejected");
            error
        })?;
        Ok((self.mapper)(&resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::style::PropertyValue;

    fn edges_only(resolved: &ResolvedBox) -> PropertyMapping {
        PropertyMapping::new()
            .with("top", resolved.top())
            .with("right", resolved.right())
            .with("bottom", resolved.bottom())
            .with("left", resolved.left())
    }

    const EDGES: BoxFunction<BoxMapper> = BoxFunction::new(edges_only as BoxMapper);

    fn edge(mapping: &PropertyMapping, name: &str) -> String {
        mapping
            .get(name)
            .and_then(PropertyValue::as_text)
            .unwrap()
            .to_string()
    }

    #[test]
    fn single_value_fills_every_edge() {
        let mapping = EDGES.call(4).unwrap();
        for name in ["top", "right", "bottom", "left"] {
            assert_eq!(edge(&mapping, name), "4px");
        }
    }

    #[test]
    fn two_values_mirror_vertical_and_horizontal() {
        let mapping = EDGES.call((1, "2em")).unwrap();
        assert_eq!(edge(&mapping, "top"), "1px");
        assert_eq!(edge(&mapping, "bottom"), "1px");
        assert_eq!(edge(&mapping, "right"), "2em");
        assert_eq!(edge(&mapping, "left"), "2em");
    }

    #[test]
    fn four_values_assign_clockwise_from_top() {
        let resolved = Shorthand::per_edge(5, "1em", 0, "10%").resolve().unwrap();
        assert_eq!(resolved, ResolvedBox::new("5px", "1em", "0px", "10%"));
    }

    #[test]
    fn collapsed_shapes_agree() {
        for value in [EdgeValue::from(3), EdgeValue::from("auto"), EdgeValue::from(-1.5)] {
            let one = Shorthand::all(value.clone()).resolve().unwrap();
            let two = Shorthand::symmetric(value.clone(), value.clone())
                .resolve()
                .unwrap();
            let four = Shorthand::per_edge(value.clone(), value.clone(), value.clone(), value)
                .resolve()
                .unwrap();
            assert_eq!(one, two);
            assert_eq!(two, four);
        }
    }

    #[test]
    fn symmetric_matches_repeated_per_edge() {
        let symmetric = Shorthand::symmetric("1rem", 7).resolve().unwrap();
        let per_edge = Shorthand::per_edge("1rem", 7, "1rem", 7).resolve().unwrap();
        assert_eq!(symmetric, per_edge);
    }

    #[test]
    fn from_args_accepts_only_one_two_or_four_values() {
        let one = [EdgeValue::from(1)];
        let two = [EdgeValue::from(1), EdgeValue::from(2)];
        let four = [1_i32, 2, 3, 4].map(EdgeValue::from);
        assert_eq!(Shorthand::from_args(&one).unwrap().arity(), 1);
        assert_eq!(Shorthand::from_args(&two).unwrap().arity(), 2);
        assert_eq!(Shorthand::from_args(&four).unwrap().arity(), 4);

        for arity in [0usize, 3, 5] {
            let args = vec![EdgeValue::from(1); arity];
            let error = Shorthand::from_args(&args).unwrap_err();
            assert_eq!(error, StyleError::from(InvalidArgument::Arity { arity }));
        }
    }

    #[test]
    fn call_slice_rejects_three_values_without_partial_output() {
        let args = [1_i32, 2, 3].map(EdgeValue::from);
        let error = EDGES.call_slice(&args).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn non_finite_edge_fails_the_whole_call() {
        let error = EDGES.per_edge(1, 2, f64::NAN, 4).unwrap_err();
        assert!(matches!(
            error,
            StyleError::InvalidArgument(InvalidArgument::NonFiniteEdge { value }) if value.is_nan()
        ));
    }

    #[test]
    fn closures_can_serve_as_mappers() {
        let prefix = String::from("inset");
        let inset = BoxFunction::new(move |resolved: &ResolvedBox| {
            PropertyMapping::new().with(format!("{prefix}Top"), resolved.top())
        });
        let mapping = inset.all("1px").unwrap();
        assert_eq!(edge(&mapping, "insetTop"), "1px");
    }
}
