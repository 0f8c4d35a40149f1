//! Arena-based syntax tree for declaration parsing
//!
//! A front-end parses source text into this tree and hands it to the
//! type-graph core. The core never mutates the tree; it walks it by
//! [`NodeId`] and reads parent links for context-sensitive decisions
//! (e.g. "is this arrow function bound to a variable?").

pub mod builder;
pub mod kind;
pub mod tree;

pub use builder::{SyntaxError, TreeBuilder};
pub use kind::NodeKind;
pub use tree::{
    ArrayType, FunctionDecl, FunctionLike, InterfaceDecl, Keyword, LiteralType, LiteralValue,
    MethodSignature, Node, NodeId, Parameter, PropertySignature, SourceFile, Span, SyntaxTree,
    TypeAliasDecl, TypeLiteral, TypeParameter, TypeReference, UnionType, VariableDecl,
};
