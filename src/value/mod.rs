//! A dynamic type to representing any valid JSON value.

pub mod array;
mod de;
mod from;
#[macro_use]
mod macros;
pub(crate) mod node;
pub mod object;
mod partial_eq;
mod ser;
mod value_trait;

#[doc(inline)]
pub use self::array::Array;
#[doc(inline)]
pub use self::node::Value;
#[doc(inline)]
pub use self::object::Object;
#[doc(inline)]
pub use self::value_trait::{JsonType, JsonValueMutTrait, JsonValueTrait};
