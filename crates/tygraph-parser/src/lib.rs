//! Node dispatch and type-graph construction
//!
//! The entry point is [`NodeParser`]: an ordered set of [`SubNodeParser`]
//! strategies, each owning one syntactic category. For every node the first
//! strategy whose predicate accepts it builds the corresponding type-graph
//! node, recursing back through the dispatcher for children. A per-traversal
//! [`Context`] threads generic-parameter bindings and the memo table that
//! keeps self-referential declarations from unfolding forever.

pub mod context;
pub mod error;
pub mod node_key;
pub mod nodes;
pub mod parser;

pub use context::Context;
pub use error::ParserError;
pub use node_key::{node_key, NodeKey};
pub use parser::{NodeParser, SubNodeParser};
