//! Function-like declarations: the parameter list becomes an object type
//!
//! Handles function declarations plus arrow functions and function
//! expressions bound to a variable. Only the input parameters are parsed;
//! return types are out of scope.

use crate::context::Context;
use crate::error::ParserError;
use crate::node_key::node_key;
use crate::parser::{NodeParser, SubNodeParser};
use std::rc::Rc;
use tygraph_core::{DefinitionType, ObjectProperty, ObjectType, PrimitiveType, Type};
use tygraph_syntax::{Node, NodeId, SyntaxTree};

pub struct FunctionParser;

impl FunctionParser {
    /// `NamedParameters<typeof foo>` — from the declaration's own
    /// identifier, or from the enclosing variable binding for arrow
    /// functions and function expressions.
    fn type_name(&self, node: NodeId, tree: &SyntaxTree) -> Result<String, ParserError> {
        match tree.node(node) {
            Node::FunctionDecl(func) => {
                if let Some(name) = &func.name {
                    return Ok(format!("NamedParameters<typeof {name}>"));
                }
            }
            Node::ArrowFunction(_) | Node::FunctionExpr(_) => {
                if let Some(parent) = tree.parent(node) {
                    if let Node::VariableDecl(var) = tree.node(parent) {
                        return Ok(format!("NamedParameters<typeof {}>", var.name));
                    }
                }
            }
            Node::MethodSignature(method) => {
                return Ok(format!("NamedParameters<typeof {}>", method.name));
            }
            _ => {}
        }
        Err(ParserError::UnresolvableName {
            kind: tree.kind(node),
            span: tree.span(node),
        })
    }

    /// The synthetic object whose properties are the parameters, mapped
    /// 1:1 in declaration order.
    fn named_arguments(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<ObjectType, ParserError> {
        let tree = ctx.tree();
        let params = match tree.node(node) {
            Node::FunctionDecl(func) => &func.params,
            Node::ArrowFunction(func) | Node::FunctionExpr(func) => &func.params,
            Node::MethodSignature(method) => &method.params,
            _ => {
                return Err(ParserError::UnsupportedNode {
                    kind: tree.kind(node),
                    span: tree.span(node),
                })
            }
        };

        let mut properties = Vec::with_capacity(params.len());
        for &id in params {
            let Node::Parameter(param) = tree.node(id) else {
                return Err(ParserError::UnsupportedNode {
                    kind: tree.kind(id),
                    span: tree.span(id),
                });
            };
            let ty = match param.ty {
                Some(annotation) => parser.create_type(annotation, ctx)?,
                None => Rc::new(Type::Primitive(PrimitiveType::Any)),
            };
            // An optional marker always wins; a default initializer makes
            // the parameter non-required even without the marker.
            let required = if param.optional {
                false
            } else {
                !param.has_initializer
            };
            properties.push(ObjectProperty::new(param.name.clone(), ty, required));
        }

        let key = node_key(node, ctx);
        Ok(ObjectType::new(
            format!("object-{key}"),
            Vec::new(),
            properties,
            false,
        )?)
    }

    /// Wrap the named-arguments object as a property of an enclosing
    /// object instead of a top-level definition; `required` comes from the
    /// node's own optional marker (an optional method is not required).
    pub fn create_type_as_object_property(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<ObjectProperty, ParserError> {
        let name = self.type_name(node, ctx.tree())?;
        let required = match ctx.tree().node(node) {
            Node::MethodSignature(method) => !method.optional,
            _ => true,
        };
        let object = self.named_arguments(node, parser, ctx)?;
        Ok(ObjectProperty::new(
            name,
            Rc::new(Type::Object(object)),
            required,
        ))
    }
}

impl SubNodeParser for FunctionParser {
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool {
        match tree.node(node) {
            // A function declaration needs a name for the schema to refer to.
            Node::FunctionDecl(func) => func.name.is_some(),
            // Arrow functions and function expressions only get a name from
            // an enclosing variable binding; anything else falls through to
            // the rest of the chain.
            Node::ArrowFunction(_) | Node::FunctionExpr(_) => matches!(
                tree.parent(node).map(|parent| tree.node(parent)),
                Some(Node::VariableDecl(_))
            ),
            _ => false,
        }
    }

    fn create_type(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let name = self.type_name(node, ctx.tree())?;
        let object = self.named_arguments(node, parser, ctx)?;
        Ok(Rc::new(Type::Definition(DefinitionType::new(
            name,
            Rc::new(Type::Object(object)),
        ))))
    }

    fn name(&self) -> &'static str {
        "function"
    }
}
