//! Per-traversal state: generic bindings and the type memo
//!
//! One `Context` lives for one top-level parse request and is threaded
//! mutably through the recursive call graph. The memo is the recursion
//! guard: a declaration is memoized under its canonical key before its
//! build starts, so recursive visits close the cycle instead of unfolding.

use crate::error::ParserError;
use crate::node_key::NodeKey;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;
use tygraph_core::{ReferenceType, Type};
use tygraph_syntax::SyntaxTree;

/// One generic parameter bound to the type it was instantiated with.
#[derive(Debug, Clone)]
pub struct GenericBinding {
    name: String,
    ty: Rc<Type>,
}

impl GenericBinding {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Rc<Type> {
        &self.ty
    }
}

pub struct Context<'a> {
    tree: &'a SyntaxTree,
    /// Innermost scope last.
    bindings: Vec<GenericBinding>,
    memo: HashMap<NodeKey, Rc<Type>>,
}

impl<'a> Context<'a> {
    pub fn new(tree: &'a SyntaxTree) -> Self {
        Self {
            tree,
            bindings: Vec::new(),
            memo: HashMap::new(),
        }
    }

    /// The shared, read-only syntax tree. The returned reference outlives
    /// any borrow of the context itself.
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    pub fn bindings(&self) -> &[GenericBinding] {
        &self.bindings
    }

    /// Resolve a generic parameter name, innermost scope first.
    pub fn resolve_generic(&self, name: &str) -> Option<Rc<Type>> {
        self.bindings
            .iter()
            .rev()
            .find(|binding| binding.name == name)
            .map(|binding| Rc::clone(&binding.ty))
    }

    /// Run `f` with extra generic bindings in scope. The bindings are
    /// removed when `f` completes, whether it succeeded or failed, so a
    /// failed build never leaves stale bindings for sibling traversals.
    pub fn with_generic_bindings<T>(
        &mut self,
        pairs: Vec<(String, Rc<Type>)>,
        f: impl FnOnce(&mut Self) -> Result<T, ParserError>,
    ) -> Result<T, ParserError> {
        let depth = self.bindings.len();
        for (name, ty) in pairs {
            self.bindings.push(GenericBinding { name, ty });
        }
        let result = f(self);
        self.bindings.truncate(depth);
        result
    }

    /// Memoized build. A cached key returns the cached node without
    /// invoking `builder` — this is what guarantees a single canonical
    /// instance per key and termination on cyclic references. An uncached
    /// key is first memoized as an unresolved [`ReferenceType`]; recursive
    /// visits during the build receive that placeholder, and it is patched
    /// to point at the finished node afterwards.
    pub fn lookup_or_insert(
        &mut self,
        key: NodeKey,
        builder: impl FnOnce(&mut Self) -> Result<Rc<Type>, ParserError>,
    ) -> Result<Rc<Type>, ParserError> {
        if let Some(cached) = self.memo.get(&key) {
            trace!(%key, "memo hit");
            return Ok(Rc::clone(cached));
        }

        let placeholder = Rc::new(Type::Ref(ReferenceType::unresolved(key.as_str())));
        self.memo.insert(key.clone(), Rc::clone(&placeholder));

        match builder(self) {
            Ok(built) => {
                if let Type::Ref(reference) = placeholder.as_ref() {
                    reference.resolve(&built);
                }
                self.memo.insert(key, Rc::clone(&built));
                Ok(built)
            }
            Err(err) => {
                // A failed build must not leave a dangling placeholder: a
                // caller that skips the failing declaration and keeps going
                // would otherwise be handed an unresolvable node later.
                self.memo.remove(&key);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tygraph_core::PrimitiveType;
    use tygraph_syntax::{Keyword, TreeBuilder};

    fn empty_tree() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let s = b.keyword(Keyword::String);
        let alias = b.type_alias("S", vec![], s);
        b.finish(vec![alias]).unwrap()
    }

    #[test]
    fn generic_bindings_shadow_innermost_first() {
        let tree = empty_tree();
        let mut ctx = Context::new(&tree);
        let string = Rc::new(Type::Primitive(PrimitiveType::String));
        let number = Rc::new(Type::Primitive(PrimitiveType::Number));

        ctx.with_generic_bindings(vec![("T".into(), string)], |ctx| {
            assert_eq!(ctx.resolve_generic("T").unwrap().id(), "string");
            ctx.with_generic_bindings(vec![("T".into(), number)], |ctx| {
                assert_eq!(ctx.resolve_generic("T").unwrap().id(), "number");
                Ok(())
            })?;
            assert_eq!(ctx.resolve_generic("T").unwrap().id(), "string");
            Ok(())
        })
        .unwrap();

        assert!(ctx.resolve_generic("T").is_none());
    }

    #[test]
    fn bindings_are_popped_when_the_builder_fails() {
        let tree = empty_tree();
        let mut ctx = Context::new(&tree);
        let any = Rc::new(Type::Primitive(PrimitiveType::Any));

        let result: Result<(), ParserError> =
            ctx.with_generic_bindings(vec![("T".into(), any)], |_| {
                Err(ParserError::UnknownTypeName {
                    name: "T".into(),
                    span: Default::default(),
                })
            });

        assert!(result.is_err());
        assert!(ctx.bindings().is_empty());
    }

    #[test]
    fn failed_builds_are_evicted_from_the_memo() {
        let tree = empty_tree();
        let mut ctx = Context::new(&tree);
        let alias = tree.declaration("S").unwrap();
        let key = crate::node_key::node_key(alias, &ctx);

        let failed = ctx.lookup_or_insert(key.clone(), |_| {
            Err(ParserError::UnknownTypeName {
                name: "X".into(),
                span: Default::default(),
            })
        });
        assert!(failed.is_err());

        // A retry invokes the builder again instead of returning the
        // placeholder from the failed attempt.
        let built = ctx
            .lookup_or_insert(key, |_| Ok(Rc::new(Type::Primitive(PrimitiveType::String))))
            .unwrap();
        assert_eq!(built.id(), "string");
    }
}
