//! Type references: generic parameters and named declarations
//!
//! A reference either resolves against the innermost generic binding or
//! names a top-level declaration, in which case the dispatcher recurses
//! into that declaration with the reference's type arguments bound. The
//! memo keyed by (declaration, bindings) is what terminates mutually
//! recursive declarations.

use crate::context::Context;
use crate::error::ParserError;
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tracing::trace;
use tygraph_core::Type;
use tygraph_syntax::{Node, NodeId, SyntaxTree};

pub struct ReferenceParser;

impl SubNodeParser for ReferenceParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        matches!(tree.node(node), Node::TypeReference(_))
    }

    fn create_type(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        let Node::TypeReference(reference) = tree.node(node) else {
            return Err(ParserError::UnsupportedNode {
                kind: tree.kind(node),
                span: tree.span(node),
            });
        };

        if let Some(bound) = ctx.resolve_generic(&reference.name) {
            trace!(name = %reference.name, "reference resolved to generic binding");
            return Ok(bound);
        }

        let declaration =
            tree.declaration(&reference.name)
                .ok_or_else(|| ParserError::UnknownTypeName {
                    name: reference.name.clone(),
                    span: tree.span(node),
                })?;

        // Arguments are evaluated in the current scope, before the new
        // bindings come into effect.
        let args = reference
            .type_args
            .iter()
            .map(|&arg| parser.create_type(arg, ctx))
            .collect::<Result<Vec<_>, _>>()?;

        let type_params: &[NodeId] = match tree.node(declaration) {
            Node::InterfaceDecl(interface) => &interface.type_params,
            Node::TypeAliasDecl(alias) => &alias.type_params,
            Node::FunctionDecl(func) => &func.type_params,
            _ => &[],
        };

        let mut pairs = Vec::with_capacity(args.len());
        for (&param, arg) in type_params.iter().zip(args) {
            let Node::TypeParameter(p) = tree.node(param) else {
                return Err(ParserError::UnsupportedNode {
                    kind: tree.kind(param),
                    span: tree.span(param),
                });
            };
            pairs.push((p.name.clone(), arg));
        }

        ctx.with_generic_bindings(pairs, |ctx| parser.create_type(declaration, ctx))
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}
