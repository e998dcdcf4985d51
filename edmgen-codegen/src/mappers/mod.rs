//! Language-specific type mappers.

mod java;

pub use java::{DATE_ONLY, JavaTypeMapper, MODEL_NAMESPACE, SIMPLE_TYPE_NAMES, TIME_OF_DAY};
