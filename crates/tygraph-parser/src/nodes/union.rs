//! Union types recurse per member, preserving member order

use crate::context::Context;
use crate::error::ParserError;
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tygraph_core::Type;
use tygraph_syntax::{Node, NodeId, SyntaxTree};

pub struct UnionParser;

impl SubNodeParser for UnionParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        matches!(tree.node(node), Node::UnionType(_))
    }

    fn create_type(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        let Node::UnionType(union) = tree.node(node) else {
            return Err(ParserError::UnsupportedNode {
                kind: tree.kind(node),
                span: tree.span(node),
            });
        };
        let members = union
            .members
            .iter()
            .map(|&member| parser.create_type(member, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rc::new(Type::Union(members)))
    }

    fn name(&self) -> &'static str {
        "union"
    }
}
