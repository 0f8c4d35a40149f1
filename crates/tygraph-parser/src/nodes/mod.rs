//! The built-in sub-parser set, one module per syntactic category

pub mod array;
pub mod function;
pub mod interface;
pub mod keyword;
pub mod literal;
pub mod reference;
pub mod type_alias;
pub mod type_literal;
pub mod union;

pub use array::ArrayParser;
pub use function::FunctionParser;
pub use interface::InterfaceParser;
pub use keyword::KeywordParser;
pub use literal::LiteralParser;
pub use reference::ReferenceParser;
pub use type_alias::TypeAliasParser;
pub use type_literal::TypeLiteralParser;
pub use union::UnionParser;

use crate::context::Context;
use crate::error::ParserError;
use crate::parser::NodeParser;
use tygraph_core::ObjectProperty;
use tygraph_syntax::{Node, NodeId};

/// Translate interface / type-literal members into object properties,
/// preserving declaration order. Optional methods go through
/// [`FunctionParser::create_type_as_object_property`] so their parameter
/// objects are built the same way as free-standing functions.
pub(crate) fn object_members(
    members: &[NodeId],
    parser: &NodeParser,
    ctx: &mut Context<'_>,
) -> Result<Vec<ObjectProperty>, ParserError> {
    let tree = ctx.tree();
    let mut properties = Vec::with_capacity(members.len());
    for &member in members {
        match tree.node(member) {
            Node::PropertySignature(property) => {
                let ty = parser.create_type(property.ty, ctx)?;
                properties.push(ObjectProperty::new(
                    property.name.clone(),
                    ty,
                    !property.optional,
                ));
            }
            Node::MethodSignature(_) => {
                properties.push(FunctionParser.create_type_as_object_property(
                    member, parser, ctx,
                )?);
            }
            _ => {
                return Err(ParserError::UnsupportedNode {
                    kind: tree.kind(member),
                    span: tree.span(member),
                })
            }
        }
    }
    Ok(properties)
}

/// Definition name for a possibly-generic declaration: `Box` stays `Box`,
/// while `Box<T>` instantiated with a string binding becomes `Box<string>`
/// so distinct instantiations get distinct `$ref` targets.
pub(crate) fn instantiated_name(
    base: &str,
    type_params: &[NodeId],
    ctx: &Context<'_>,
) -> String {
    if type_params.is_empty() {
        return base.to_string();
    }
    let tree = ctx.tree();
    let mut args = Vec::with_capacity(type_params.len());
    for &param in type_params {
        let Node::TypeParameter(p) = tree.node(param) else {
            return base.to_string();
        };
        match ctx.resolve_generic(&p.name) {
            Some(bound) => args.push(bound.id()),
            None => return base.to_string(),
        }
    }
    format!("{base}<{}>", args.join(","))
}
