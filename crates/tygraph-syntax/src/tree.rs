//! Syntax tree storage: one flat arena of nodes addressed by [`NodeId`]

use crate::kind::NodeKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Byte range of a node in the original source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Arena entry: payload plus the structural facts every node carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    pub node: Node,
    pub parent: Option<NodeId>,
    pub span: Span,
}

/// A parsed node. Children are referenced by [`NodeId`], never owned inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Node {
    SourceFile(SourceFile),
    FunctionDecl(FunctionDecl),
    ArrowFunction(FunctionLike),
    FunctionExpr(FunctionLike),
    VariableDecl(VariableDecl),
    Parameter(Parameter),
    InterfaceDecl(InterfaceDecl),
    PropertySignature(PropertySignature),
    MethodSignature(MethodSignature),
    TypeAliasDecl(TypeAliasDecl),
    TypeParameter(TypeParameter),
    KeywordType(Keyword),
    TypeReference(TypeReference),
    UnionType(UnionType),
    ArrayType(ArrayType),
    LiteralType(LiteralType),
    TypeLiteral(TypeLiteral),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::SourceFile(_) => NodeKind::SourceFile,
            Node::FunctionDecl(_) => NodeKind::FunctionDecl,
            Node::ArrowFunction(_) => NodeKind::ArrowFunction,
            Node::FunctionExpr(_) => NodeKind::FunctionExpr,
            Node::VariableDecl(_) => NodeKind::VariableDecl,
            Node::Parameter(_) => NodeKind::Parameter,
            Node::InterfaceDecl(_) => NodeKind::InterfaceDecl,
            Node::PropertySignature(_) => NodeKind::PropertySignature,
            Node::MethodSignature(_) => NodeKind::MethodSignature,
            Node::TypeAliasDecl(_) => NodeKind::TypeAliasDecl,
            Node::TypeParameter(_) => NodeKind::TypeParameter,
            Node::KeywordType(_) => NodeKind::KeywordType,
            Node::TypeReference(_) => NodeKind::TypeReference,
            Node::UnionType(_) => NodeKind::UnionType,
            Node::ArrayType(_) => NodeKind::ArrayType,
            Node::LiteralType(_) => NodeKind::LiteralType,
            Node::TypeLiteral(_) => NodeKind::TypeLiteral,
        }
    }

    /// Child node ids in declaration order. Used by the builder to wire
    /// parent links; kept here so payload and traversal can't drift apart.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::SourceFile(n) => n.declarations.clone(),
            Node::FunctionDecl(n) => {
                let mut ids = n.type_params.clone();
                ids.extend(&n.params);
                ids
            }
            Node::ArrowFunction(n) | Node::FunctionExpr(n) => n.params.clone(),
            Node::VariableDecl(n) => n.initializer.into_iter().collect(),
            Node::Parameter(n) => n.ty.into_iter().collect(),
            Node::InterfaceDecl(n) => {
                let mut ids = n.type_params.clone();
                ids.extend(&n.heritage);
                ids.extend(&n.members);
                ids
            }
            Node::PropertySignature(n) => vec![n.ty],
            Node::MethodSignature(n) => n.params.clone(),
            Node::TypeAliasDecl(n) => {
                let mut ids = n.type_params.clone();
                ids.push(n.ty);
                ids
            }
            Node::TypeParameter(_) | Node::KeywordType(_) | Node::LiteralType(_) => Vec::new(),
            Node::TypeReference(n) => n.type_args.clone(),
            Node::UnionType(n) => n.members.clone(),
            Node::ArrayType(n) => vec![n.element],
            Node::TypeLiteral(n) => n.members.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub declarations: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// `None` for anonymous declarations (e.g. a default export).
    pub name: Option<String>,
    pub type_params: Vec<NodeId>,
    pub params: Vec<NodeId>,
}

/// Arrow function or function expression: parameters only, no own name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionLike {
    pub params: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDecl {
    pub name: String,
    pub initializer: Option<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Declared type annotation; absent annotations default to `any`.
    pub ty: Option<NodeId>,
    /// Optional marker (`?`) on the parameter.
    pub optional: bool,
    /// Whether the parameter carries a default-value initializer.
    pub has_initializer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub type_params: Vec<NodeId>,
    /// Heritage clause types (`extends A, B`).
    pub heritage: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySignature {
    pub name: String,
    pub ty: NodeId,
    pub optional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    pub optional: bool,
    pub params: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeAliasDecl {
    pub name: String,
    pub type_params: Vec<NodeId>,
    pub ty: NodeId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keyword {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Any,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeReference {
    pub name: String,
    pub type_args: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionType {
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArrayType {
    pub element: NodeId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralType {
    pub value: LiteralValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeLiteral {
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

/// The finished, read-only tree. Shared by reference across a traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) root: NodeId,
    /// Name -> top-level declaration, for type-reference resolution.
    pub(crate) declarations: HashMap<String, NodeId>,
}

impl SyntaxTree {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()].node
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn source_file(&self) -> &SourceFile {
        match self.node(self.root) {
            Node::SourceFile(file) => file,
            _ => unreachable!("root is always a source file"),
        }
    }

    /// Look up a top-level declaration by name.
    pub fn declaration(&self, name: &str) -> Option<NodeId> {
        self.declarations.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
