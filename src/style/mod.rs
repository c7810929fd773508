mod compose;
mod mapping;
mod value;

pub use compose::compose;
pub use mapping::PropertyMapping;
pub use value::PropertyValue;

pub(crate) use value::format_number;
