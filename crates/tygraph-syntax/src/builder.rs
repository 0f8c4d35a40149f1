//! Construction API used by front-ends (and tests) to assemble a tree

use crate::kind::NodeKind;
use crate::tree::*;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("duplicate top-level declaration `{name}`")]
    DuplicateDeclaration { name: String },
    #[error("top-level node {id} is a {kind}, not a declaration")]
    NotADeclaration { id: NodeId, kind: NodeKind },
}

/// Incrementally builds a [`SyntaxTree`]. Nodes are pushed leaves-first;
/// `finish` wires parent links and the top-level declaration table.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            node,
            parent: None,
            span: Span::default(),
        });
        id
    }

    /// Attach a source span to an already-pushed node.
    pub fn set_span(&mut self, id: NodeId, span: Span) {
        self.nodes[id.index()].span = span;
    }

    pub fn keyword(&mut self, keyword: Keyword) -> NodeId {
        self.push(Node::KeywordType(keyword))
    }

    pub fn literal(&mut self, value: LiteralValue) -> NodeId {
        self.push(Node::LiteralType(LiteralType { value }))
    }

    pub fn type_reference(&mut self, name: impl Into<String>, type_args: Vec<NodeId>) -> NodeId {
        self.push(Node::TypeReference(TypeReference {
            name: name.into(),
            type_args,
        }))
    }

    pub fn union(&mut self, members: Vec<NodeId>) -> NodeId {
        self.push(Node::UnionType(UnionType { members }))
    }

    pub fn array(&mut self, element: NodeId) -> NodeId {
        self.push(Node::ArrayType(ArrayType { element }))
    }

    pub fn type_literal(&mut self, members: Vec<NodeId>) -> NodeId {
        self.push(Node::TypeLiteral(TypeLiteral { members }))
    }

    pub fn parameter(
        &mut self,
        name: impl Into<String>,
        ty: Option<NodeId>,
        optional: bool,
        has_initializer: bool,
    ) -> NodeId {
        self.push(Node::Parameter(Parameter {
            name: name.into(),
            ty,
            optional,
            has_initializer,
        }))
    }

    pub fn type_parameter(&mut self, name: impl Into<String>) -> NodeId {
        self.push(Node::TypeParameter(TypeParameter { name: name.into() }))
    }

    pub fn function_decl(
        &mut self,
        name: Option<String>,
        type_params: Vec<NodeId>,
        params: Vec<NodeId>,
    ) -> NodeId {
        self.push(Node::FunctionDecl(FunctionDecl {
            name,
            type_params,
            params,
        }))
    }

    pub fn arrow_function(&mut self, params: Vec<NodeId>) -> NodeId {
        self.push(Node::ArrowFunction(FunctionLike { params }))
    }

    pub fn function_expr(&mut self, params: Vec<NodeId>) -> NodeId {
        self.push(Node::FunctionExpr(FunctionLike { params }))
    }

    pub fn variable_decl(&mut self, name: impl Into<String>, initializer: Option<NodeId>) -> NodeId {
        self.push(Node::VariableDecl(VariableDecl {
            name: name.into(),
            initializer,
        }))
    }

    pub fn property_signature(
        &mut self,
        name: impl Into<String>,
        ty: NodeId,
        optional: bool,
    ) -> NodeId {
        self.push(Node::PropertySignature(PropertySignature {
            name: name.into(),
            ty,
            optional,
        }))
    }

    pub fn method_signature(
        &mut self,
        name: impl Into<String>,
        optional: bool,
        params: Vec<NodeId>,
    ) -> NodeId {
        self.push(Node::MethodSignature(MethodSignature {
            name: name.into(),
            optional,
            params,
        }))
    }

    pub fn interface_decl(
        &mut self,
        name: impl Into<String>,
        type_params: Vec<NodeId>,
        heritage: Vec<NodeId>,
        members: Vec<NodeId>,
    ) -> NodeId {
        self.push(Node::InterfaceDecl(InterfaceDecl {
            name: name.into(),
            type_params,
            heritage,
            members,
        }))
    }

    pub fn type_alias(
        &mut self,
        name: impl Into<String>,
        type_params: Vec<NodeId>,
        ty: NodeId,
    ) -> NodeId {
        self.push(Node::TypeAliasDecl(TypeAliasDecl {
            name: name.into(),
            type_params,
            ty,
        }))
    }

    /// Seal the tree. `top_level` lists the file's declarations in source
    /// order; each must be a function, variable, interface, or alias
    /// declaration with a distinct name.
    pub fn finish(mut self, top_level: Vec<NodeId>) -> Result<SyntaxTree, SyntaxError> {
        let mut declarations = HashMap::new();
        for &id in &top_level {
            let name = match &self.nodes[id.index()].node {
                Node::FunctionDecl(f) => f.name.clone(),
                Node::InterfaceDecl(i) => Some(i.name.clone()),
                Node::TypeAliasDecl(a) => Some(a.name.clone()),
                Node::VariableDecl(v) => Some(v.name.clone()),
                other => {
                    return Err(SyntaxError::NotADeclaration {
                        id,
                        kind: other.kind(),
                    })
                }
            };
            if let Some(name) = name {
                if declarations.insert(name.clone(), id).is_some() {
                    return Err(SyntaxError::DuplicateDeclaration { name });
                }
            }
        }

        let root = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            node: Node::SourceFile(SourceFile {
                declarations: top_level,
            }),
            parent: None,
            span: Span::default(),
        });

        // Wire parent links from each node's child list.
        for index in 0..self.nodes.len() {
            let parent = NodeId(index as u32);
            for child in self.nodes[index].node.children() {
                self.nodes[child.index()].parent = Some(parent);
            }
        }

        Ok(SyntaxTree {
            nodes: self.nodes,
            root,
            declarations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parent_links_follow_child_lists() {
        let mut b = TreeBuilder::new();
        let num = b.keyword(Keyword::Number);
        let param = b.parameter("a", Some(num), false, false);
        let func = b.function_decl(Some("foo".into()), vec![], vec![param]);
        let tree = b.finish(vec![func]).unwrap();

        assert_eq!(tree.parent(num), Some(param));
        assert_eq!(tree.parent(param), Some(func));
        assert_eq!(tree.parent(func), Some(tree.root()));
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn declaration_table_resolves_names() {
        let mut b = TreeBuilder::new();
        let s = b.keyword(Keyword::String);
        let alias = b.type_alias("Name", vec![], s);
        let iface = b.interface_decl("Empty", vec![], vec![], vec![]);
        let tree = b.finish(vec![alias, iface]).unwrap();

        assert_eq!(tree.declaration("Name"), Some(alias));
        assert_eq!(tree.declaration("Empty"), Some(iface));
        assert_eq!(tree.declaration("Missing"), None);
    }

    #[test]
    fn duplicate_top_level_names_are_rejected() {
        let mut b = TreeBuilder::new();
        let s = b.keyword(Keyword::String);
        let a1 = b.type_alias("Name", vec![], s);
        let n = b.keyword(Keyword::Number);
        let a2 = b.type_alias("Name", vec![], n);
        let err = b.finish(vec![a1, a2]).unwrap_err();
        assert!(matches!(err, SyntaxError::DuplicateDeclaration { name } if name == "Name"));
    }

    #[test]
    fn anonymous_function_decl_is_allowed_at_top_level() {
        let mut b = TreeBuilder::new();
        let func = b.function_decl(None, vec![], vec![]);
        let tree = b.finish(vec![func]).unwrap();
        assert_eq!(tree.source_file().declarations, vec![func]);
    }

    #[test]
    fn non_declaration_top_level_is_rejected() {
        let mut b = TreeBuilder::new();
        let s = b.keyword(Keyword::String);
        let err = b.finish(vec![s]).unwrap_err();
        assert!(matches!(err, SyntaxError::NotADeclaration { .. }));
    }

    #[test]
    fn tree_round_trips_through_serde() {
        let mut b = TreeBuilder::new();
        let num = b.keyword(Keyword::Number);
        let param = b.parameter("x", Some(num), true, false);
        let arrow = b.arrow_function(vec![param]);
        let var = b.variable_decl("bar", Some(arrow));
        let tree = b.finish(vec![var]).unwrap();

        let json = serde_json::to_string(&tree).unwrap();
        let back: SyntaxTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), tree.len());
        assert_eq!(back.declaration("bar"), Some(var));
        assert_eq!(back.parent(arrow), Some(var));
    }
}
