//! Anonymous object types (`{ a: string; b?: number }`)

use crate::context::Context;
use crate::error::ParserError;
use crate::node_key::node_key;
use crate::nodes::object_members;
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tygraph_core::{ObjectType, Type};
use tygraph_syntax::{Node, NodeId, SyntaxTree};

pub struct TypeLiteralParser;

impl SubNodeParser for TypeLiteralParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        matches!(tree.node(node), Node::TypeLiteral(_))
    }

    fn create_type(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        let Node::TypeLiteral(literal) = tree.node(node) else {
            return Err(ParserError::UnsupportedNode {
                kind: tree.kind(node),
                span: tree.span(node),
            });
        };
        let properties = object_members(&literal.members, parser, ctx)?;
        let key = node_key(node, ctx);
        let object = ObjectType::new(format!("object-{key}"), Vec::new(), properties, false)?;
        Ok(Rc::new(Type::Object(object)))
    }

    fn name(&self) -> &'static str {
        "type-literal"
    }
}
