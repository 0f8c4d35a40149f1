//! The dispatcher: ordered sub-parsers behind one `create_type` entry point

use crate::context::Context;
use crate::error::ParserError;
use crate::node_key::node_key;
use crate::nodes;
use std::rc::Rc;
use tracing::{instrument, trace};
use tygraph_core::Type;
use tygraph_syntax::{NodeId, SyntaxTree};

/// One pluggable visitor owning a single syntactic category.
///
/// Implementations are stateless; recursion goes back through the
/// dispatcher passed into `create_type`. New categories are added by
/// registering another implementation — never by touching existing ones.
pub trait SubNodeParser {
    /// Cheap, side-effect-free predicate: can this parser handle `node`?
    fn supports_node(&self, node: NodeId, tree: &SyntaxTree) -> bool;

    /// Build the type-graph node. Only called when `supports_node` is true.
    fn create_type(
        &self,
        node: NodeId,
        parser: &NodeParser,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError>;

    /// Name for logs.
    fn name(&self) -> &'static str;
}

/// Dispatches each node to the first registered sub-parser that accepts it,
/// memoizing the result under the node's canonical key.
pub struct NodeParser {
    parsers: Vec<Box<dyn SubNodeParser>>,
}

impl NodeParser {
    /// An empty dispatcher. Useful when composing a custom sub-parser set.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// The full built-in sub-parser set, in priority order.
    pub fn with_default_parsers() -> Self {
        let mut parser = Self::new();
        parser.register(Box::new(nodes::KeywordParser));
        parser.register(Box::new(nodes::LiteralParser));
        parser.register(Box::new(nodes::ArrayParser));
        parser.register(Box::new(nodes::UnionParser));
        parser.register(Box::new(nodes::TypeLiteralParser));
        parser.register(Box::new(nodes::ReferenceParser));
        parser.register(Box::new(nodes::InterfaceParser));
        parser.register(Box::new(nodes::TypeAliasParser));
        parser.register(Box::new(nodes::FunctionParser));
        parser
    }

    pub fn register(&mut self, sub_parser: Box<dyn SubNodeParser>) {
        self.parsers.push(sub_parser);
    }

    /// Translate `node` into a type-graph node.
    ///
    /// Linear predicate matching over the registered sub-parsers; the
    /// winning builder runs under the memo so repeated and recursive visits
    /// of the same declaration share one instance.
    #[instrument(skip(self, ctx), level = "trace")]
    pub fn create_type(
        &self,
        node: NodeId,
        ctx: &mut Context<'_>,
    ) -> Result<Rc<Type>, ParserError> {
        let tree = ctx.tree();
        for sub_parser in &self.parsers {
            if sub_parser.supports_node(node, tree) {
                trace!(parser = sub_parser.name(), %node, "sub-parser selected");
                let key = node_key(node, ctx);
                return ctx.lookup_or_insert(key, |ctx| sub_parser.create_type(node, self, ctx));
            }
        }
        Err(ParserError::UnsupportedNode {
            kind: tree.kind(node),
            span: tree.span(node),
        })
    }
}

impl Default for NodeParser {
    fn default() -> Self {
        Self::with_default_parsers()
    }
}
