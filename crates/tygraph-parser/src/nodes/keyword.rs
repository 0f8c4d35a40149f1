//! Keyword types map directly onto primitives

use crate::context::Context;
use crate::error::ParserError;
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tygraph_core::{PrimitiveType, Type};
use tygraph_syntax::{Keyword, Node, NodeId, SyntaxTree};

pub struct KeywordParser;

impl SubNodeParser for KeywordParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        matches!(tree.node(node), Node::KeywordType(_))
    }

    fn create_type(
        &self,
        node: NodeId,
        _parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        let Node::KeywordType(keyword) = tree.node(node) else {
            return Err(ParserError::UnsupportedNode {
                kind: tree.kind(node),
                span: tree.span(node),
            });
        };
        let primitive = match keyword {
            Keyword::String => PrimitiveType::String,
            Keyword::Number => PrimitiveType::Number,
            Keyword::Integer => PrimitiveType::Integer,
            Keyword::Boolean => PrimitiveType::Boolean,
            Keyword::Null => PrimitiveType::Null,
            Keyword::Any => PrimitiveType::Any,
        };
        Ok(Rc::new(Type::Primitive(primitive)))
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
