//! Node kind tags used for dispatch predicates and error reporting

use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic category of a node, detached from its payload.
///
/// Dispatch predicates match on the payload itself; the kind tag exists so
/// errors and logs can name a node without dragging the payload along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    SourceFile,
    FunctionDecl,
    ArrowFunction,
    FunctionExpr,
    VariableDecl,
    Parameter,
    InterfaceDecl,
    PropertySignature,
    MethodSignature,
    TypeAliasDecl,
    TypeParameter,
    KeywordType,
    TypeReference,
    UnionType,
    ArrayType,
    LiteralType,
    TypeLiteral,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::SourceFile => "source file",
            NodeKind::FunctionDecl => "function declaration",
            NodeKind::ArrowFunction => "arrow function",
            NodeKind::FunctionExpr => "function expression",
            NodeKind::VariableDecl => "variable declaration",
            NodeKind::Parameter => "parameter",
            NodeKind::InterfaceDecl => "interface declaration",
            NodeKind::PropertySignature => "property signature",
            NodeKind::MethodSignature => "method signature",
            NodeKind::TypeAliasDecl => "type alias declaration",
            NodeKind::TypeParameter => "type parameter",
            NodeKind::KeywordType => "keyword type",
            NodeKind::TypeReference => "type reference",
            NodeKind::UnionType => "union type",
            NodeKind::ArrayType => "array type",
            NodeKind::LiteralType => "literal type",
            NodeKind::TypeLiteral => "type literal",
        };
        f.write_str(name)
    }
}
