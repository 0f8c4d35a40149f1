use thiserror::Error;
use tygraph_core::CoreError;
use tygraph_syntax::{NodeKind, Span};

#[derive(Error, Debug)]
pub enum ParserError {
    /// No registered sub-parser accepts the node. Fatal for this branch of
    /// the traversal: emitting a best-effort type for an unknown construct
    /// would silently produce a wrong schema.
    #[error("cannot derive a schema type for {kind} at {span}")]
    UnsupportedNode { kind: NodeKind, span: Span },

    /// A sub-parser accepted a node it cannot name. Defensive invariant;
    /// unreachable when predicates and builders agree.
    #[error("expected to find a name for {kind} at {span} but couldn't")]
    UnresolvableName { kind: NodeKind, span: Span },

    #[error("unknown type name `{name}` at {span}")]
    UnknownTypeName { name: String, span: Span },

    #[error(transparent)]
    Core(#[from] CoreError),
}
