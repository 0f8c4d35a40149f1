//! Type aliases promote their right-hand side to a named definition

use crate::context::Context;
use crate::error::ParserError;
use crate::nodes::instantiated_name;
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tygraph_core::{DefinitionType, Type};
use tygraph_syntax::{Node, NodeId, SyntaxTree};

pub struct TypeAliasParser;

impl SubNodeParser for TypeAliasParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        matches!(tree.node(node), Node::TypeAliasDecl(_))
    }

    fn create_type(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        let Node::TypeAliasDecl(alias) = tree.node(node) else {
            return Err(ParserError::UnsupportedNode {
                kind: tree.kind(node),
                span: tree.span(node),
            });
        };
        let inner = parser.create_type(alias.ty, ctx)?;
        let name = instantiated_name(&alias.name, &alias.type_params, ctx);
        Ok(Rc::new(Type::Definition(DefinitionType::new(name, inner))))
    }

    fn name(&self) -> &'static str {
        "type-alias"
    }
}
