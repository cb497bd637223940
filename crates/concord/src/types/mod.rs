mod arguments;
mod property;
mod value;

pub use arguments::Arguments;
pub use property::{Properties, PropertyValue};
pub use value::Value;
