//! Interface declarations become named definitions wrapping an object type

use crate::context::Context;
use crate::error::ParserError;
use crate::node_key::node_key;
use crate::nodes::{instantiated_name, object_members};
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tygraph_core::{DefinitionType, ObjectType, Type};
use tygraph_syntax::{Node, NodeId, SyntaxTree};

pub struct InterfaceParser;

impl SubNodeParser for InterfaceParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        matches!(tree.node(node), Node::InterfaceDecl(_))
    }

    fn create_type(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        let Node::InterfaceDecl(interface) = tree.node(node) else {
            return Err(ParserError::UnsupportedNode {
                kind: tree.kind(node),
                span: tree.span(node),
            });
        };

        let base_types = interface
            .heritage
            .iter()
            .map(|&base| parser.create_type(base, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        let properties = object_members(&interface.members, parser, ctx)?;

        let key = node_key(node, ctx);
        let object = ObjectType::new(format!("object-{key}"), base_types, properties, false)?;
        let name = instantiated_name(&interface.name, &interface.type_params, ctx);
        Ok(Rc::new(Type::Definition(DefinitionType::new(
            name,
            Rc::new(Type::Object(object)),
        ))))
    }

    fn name(&self) -> &'static str {
        "interface"
    }
}
