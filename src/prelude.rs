//! Imports the traits about JSON values. `use tagged_json::prelude::*` to bring the accessor
//! methods into scope.

pub use crate::{
    format::Formatter,
    input::JsonInput,
    value::{JsonValueMutTrait, JsonValueTrait},
};
