//! Array types recurse on their element type

use crate::context::Context;
use crate::error::ParserError;
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tygraph_core::Type;
use tygraph_syntax::{Node, NodeId, SyntaxTree};

pub struct ArrayParser;

impl SubNodeParser for ArrayParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        matches!(tree.node(node), Node::ArrayType(_))
    }

    fn create_type(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        let Node::ArrayType(array) = tree.node(node) else {
            return Err(ParserError::UnsupportedNode {
                kind: tree.kind(node),
                span: tree.span(node),
            });
        };
        let element = parser.create_type(array.element, ctx)?;
        Ok(Rc::new(Type::Array(element)))
    }

    fn name(&self) -> &'static str {
        "array"
    }
}
