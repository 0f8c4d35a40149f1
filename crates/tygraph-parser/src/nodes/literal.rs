//! Literal types (`"on"`, `42`, `true`)

use crate::context::Context;
use crate::error::ParserError;
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tygraph_core::{LiteralValue, Type};
use tygraph_syntax::{Node, NodeId, SyntaxTree};

pub struct LiteralParser;

impl SubNodeParser for LiteralParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        matches!(tree.node(node), Node::LiteralType(_))
    }

    fn create_type(
        &self,
        node: NodeId,
        _parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        let Node::LiteralType(literal) = tree.node(node) else {
            return Err(ParserError::UnsupportedNode {
                kind: tree.kind(node),
                span: tree.span(node),
            });
        };
        let value = match &literal.value {
            tygraph_syntax::LiteralValue::String(s) => LiteralValue::String(s.clone()),
            tygraph_syntax::LiteralValue::Number(n) => LiteralValue::Number(*n),
            tygraph_syntax::LiteralValue::Boolean(b) => LiteralValue::Boolean(*b),
        };
        Ok(Rc::new(Type::Literal(value)))
    }

    fn name(&self) -> &'static str {
        "literal"
    }
}
