//! Canonical node identity
//!
//! A key must be stable and unique per distinct (node, generic-binding)
//! pair, and identical across repeated visits under the same bindings. It
//! doubles as the seed for synthetic names (`object-{key}`), so the format
//! is short and human-readable: the node-id path from the source file root,
//! plus the ids of the bound generic arguments when any are active.

use crate::context::Context;
use std::fmt;
use tygraph_syntax::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the canonical key for `node` under the context's current generic
/// bindings. No side effects.
pub fn node_key(node: NodeId, ctx: &Context<'_>) -> NodeKey {
    let tree = ctx.tree();

    let mut path = vec![node];
    let mut current = node;
    while let Some(parent) = tree.parent(current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    let mut key = path
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("-");

    let bindings = ctx.bindings();
    if !bindings.is_empty() {
        let args = bindings
            .iter()
            .map(|binding| binding.ty().id())
            .collect::<Vec<_>>()
            .join(",");
        key.push('<');
        key.push_str(&args);
        key.push('>');
    }

    NodeKey(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use tygraph_core::{PrimitiveType, Type};
    use tygraph_syntax::{Keyword, TreeBuilder};

    #[test]
    fn key_is_the_path_from_the_root() {
        let mut b = TreeBuilder::new();
        let num = b.keyword(Keyword::Number);
        let param = b.parameter("a", Some(num), false, false);
        let func = b.function_decl(Some("foo".into()), vec![], vec![param]);
        let tree = b.finish(vec![func]).unwrap();

        let ctx = Context::new(&tree);
        // Root is pushed last, so its id is the highest.
        assert_eq!(node_key(func, &ctx).as_str(), "3-2");
        assert_eq!(node_key(num, &ctx).as_str(), "3-2-1-0");
    }

    #[test]
    fn key_changes_with_generic_bindings() {
        let mut b = TreeBuilder::new();
        let iface = b.interface_decl("Box", vec![], vec![], vec![]);
        let tree = b.finish(vec![iface]).unwrap();

        let mut ctx = Context::new(&tree);
        let bare = node_key(iface, &ctx);

        let string = Rc::new(Type::Primitive(PrimitiveType::String));
        let bound = ctx
            .with_generic_bindings(vec![("T".to_string(), string)], |ctx| {
                Ok(node_key(iface, ctx))
            })
            .unwrap();

        assert_eq!(bare.as_str(), "1-0");
        assert_eq!(bound.as_str(), "1-0<string>");

        // Bindings are gone, the bare key is reproducible.
        assert_eq!(node_key(iface, &ctx), bare);
    }
}
