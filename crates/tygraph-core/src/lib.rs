//! Type-graph data model for the tygraph schema generator
//!
//! The parser crate populates this graph; an external emission stage walks
//! it and serializes each [`DefinitionType`] as a named `$ref` target.

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{
    DefinitionType, LiteralValue, ObjectProperty, ObjectType, PrimitiveType, ReferenceType, Type,
};
