//! Type graph nodes
//!
//! Every node is held behind `Rc<Type>`: the traversal is single-threaded
//! and node identity is meaningful (a memoized declaration must hand back
//! the same instance on every visit). Self-referential graphs stay
//! leak-free because cycles are closed through [`ReferenceType`], which
//! holds its target weakly.

use crate::error::CoreError;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::trace;

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Any,
}

impl PrimitiveType {
    pub fn id(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Null => "null",
            PrimitiveType::Any => "any",
        }
    }
}

/// A literal type (`"on"`, `42`, `true`).
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl LiteralValue {
    pub fn id(&self) -> String {
        match self {
            LiteralValue::String(s) => format!("\"{s}\""),
            LiteralValue::Number(n) => n.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
        }
    }
}

/// A node in the type graph.
#[derive(Debug)]
pub enum Type {
    Primitive(PrimitiveType),
    Literal(LiteralValue),
    Array(Rc<Type>),
    Union(Vec<Rc<Type>>),
    Object(ObjectType),
    Definition(DefinitionType),
    Ref(ReferenceType),
}

impl Type {
    /// Short identity string: stable per node, embedded in canonical keys
    /// so generic instantiations with different arguments key differently.
    pub fn id(&self) -> String {
        match self {
            Type::Primitive(p) => p.id().to_string(),
            Type::Literal(value) => value.id(),
            Type::Array(element) => format!("{}[]", element.id()),
            Type::Union(members) => members
                .iter()
                .map(|m| m.id())
                .collect::<Vec<_>>()
                .join("|"),
            Type::Object(object) => object.name.clone(),
            Type::Definition(definition) => definition.name.clone(),
            Type::Ref(reference) => reference.key.clone(),
        }
    }

    /// Definition or object name, when the node carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Type::Object(object) => Some(&object.name),
            Type::Definition(definition) => Some(&definition.name),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Type::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_definition(&self) -> Option<&DefinitionType> {
        match self {
            Type::Definition(definition) => Some(definition),
            _ => None,
        }
    }

    pub fn as_ref_type(&self) -> Option<&ReferenceType> {
        match self {
            Type::Ref(reference) => Some(reference),
            _ => None,
        }
    }
}

/// Structural record type: named, with ordered base types and properties.
#[derive(Debug)]
pub struct ObjectType {
    name: String,
    base_types: Vec<Rc<Type>>,
    properties: Vec<ObjectProperty>,
    additional_properties: bool,
}

impl ObjectType {
    /// Property order is declaration order and is preserved verbatim.
    /// Property names must be unique within one object.
    pub fn new(
        name: impl Into<String>,
        base_types: Vec<Rc<Type>>,
        properties: Vec<ObjectProperty>,
        additional_properties: bool,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        for (index, property) in properties.iter().enumerate() {
            if properties[..index].iter().any(|p| p.name == property.name) {
                return Err(CoreError::DuplicateProperty {
                    object: name,
                    property: property.name.clone(),
                });
            }
        }
        Ok(Self {
            name,
            base_types,
            properties,
            additional_properties,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_types(&self) -> &[Rc<Type>] {
        &self.base_types
    }

    pub fn properties(&self) -> &[ObjectProperty] {
        &self.properties
    }

    pub fn additional_properties(&self) -> bool {
        self.additional_properties
    }
}

/// A named, typed, required-or-optional member of an [`ObjectType`].
#[derive(Debug, Clone)]
pub struct ObjectProperty {
    name: String,
    ty: Rc<Type>,
    required: bool,
}

impl ObjectProperty {
    pub fn new(name: impl Into<String>, ty: Rc<Type>, required: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            required,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Rc<Type> {
        &self.ty
    }

    pub fn required(&self) -> bool {
        self.required
    }
}

/// Promotes an inner type to a top-level, independently addressable
/// definition — the `$ref` target the emission stage deduplicates by name.
#[derive(Debug)]
pub struct DefinitionType {
    name: String,
    inner: Rc<Type>,
}

impl DefinitionType {
    pub fn new(name: impl Into<String>, inner: Rc<Type>) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inner(&self) -> &Rc<Type> {
        &self.inner
    }
}

/// Placeholder node closing cycles in self-referential declarations.
///
/// The parser memoizes one of these under a declaration's canonical key
/// before building it; recursive visits that land on the same key receive
/// the placeholder instead of unfolding forever. Once the build completes
/// the target is patched in. The target is weak, so the graph built for a
/// recursive declaration can still be dropped.
#[derive(Debug)]
pub struct ReferenceType {
    key: String,
    target: RefCell<Weak<Type>>,
}

impl ReferenceType {
    pub fn unresolved(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: RefCell::new(Weak::new()),
        }
    }

    /// Canonical key of the declaration this reference points at.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn resolve(&self, target: &Rc<Type>) {
        trace!(key = %self.key, "resolved type reference");
        *self.target.borrow_mut() = Rc::downgrade(target);
    }

    /// The referenced node, if the build completed and the graph is alive.
    pub fn target(&self) -> Option<Rc<Type>> {
        self.target.borrow().upgrade()
    }
}
