//! Memoization and cycle behavior: one canonical instance per
//! (declaration, bindings) pair, and termination on recursive references.

use std::rc::Rc;
use tygraph_core::Type;
use tygraph_parser::{Context, NodeParser, ParserError};
use tygraph_syntax::{Keyword, TreeBuilder};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn repeated_visits_return_the_same_instance() {
    init_tracing();
    let mut b = TreeBuilder::new();
    let num = b.keyword(Keyword::Number);
    let a = b.parameter("a", Some(num), false, false);
    let foo = b.function_decl(Some("foo".into()), vec![], vec![a]);
    let tree = b.finish(vec![foo]).unwrap();

    let parser = NodeParser::with_default_parsers();
    let mut ctx = Context::new(&tree);
    let first = parser.create_type(foo, &mut ctx).unwrap();
    let second = parser.create_type(foo, &mut ctx).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn self_referential_interface_terminates_and_closes_the_cycle() {
    init_tracing();
    // interface Node { next?: Node }
    let mut b = TreeBuilder::new();
    let next_ref = b.type_reference("Node", vec![]);
    let next = b.property_signature("next", next_ref, true);
    let node = b.interface_decl("Node", vec![], vec![], vec![next]);
    let tree = b.finish(vec![node]).unwrap();

    let parser = NodeParser::with_default_parsers();
    let mut ctx = Context::new(&tree);
    let definition = parser.create_type(node, &mut ctx).unwrap();

    let object = definition
        .as_definition()
        .unwrap()
        .inner()
        .as_object()
        .unwrap();
    let next = &object.properties()[0];
    assert!(!next.required());

    // The cycle closes through a reference whose target is the definition
    // currently being built.
    let reference = next.ty().as_ref_type().expect("cycle closes via a reference");
    let target = reference.target().expect("reference was back-patched");
    assert!(Rc::ptr_eq(&target, &definition));
}

#[test]
fn mutually_recursive_interfaces_terminate() {
    // interface A { b?: B }  /  interface B { a?: A }
    let mut builder = TreeBuilder::new();
    let b_ref = builder.type_reference("B", vec![]);
    let b_prop = builder.property_signature("b", b_ref, true);
    let a_decl = builder.interface_decl("A", vec![], vec![], vec![b_prop]);

    let a_ref = builder.type_reference("A", vec![]);
    let a_prop = builder.property_signature("a", a_ref, true);
    let b_decl = builder.interface_decl("B", vec![], vec![], vec![a_prop]);

    let tree = builder.finish(vec![a_decl, b_decl]).unwrap();

    let parser = NodeParser::with_default_parsers();
    let mut ctx = Context::new(&tree);
    let a_ty = parser.create_type(a_decl, &mut ctx).unwrap();

    let a_object = a_ty.as_definition().unwrap().inner().as_object().unwrap();
    let b_ty = a_object.properties()[0].ty();
    let b_object = b_ty.as_definition().unwrap().inner().as_object().unwrap();

    // B's `a` member points back at the in-flight A.
    let back = b_object.properties()[0]
        .ty()
        .as_ref_type()
        .expect("back-edge is a reference");
    assert!(Rc::ptr_eq(&back.target().unwrap(), &a_ty));
}

#[test]
fn generic_instantiations_memoize_per_argument_list() {
    // interface Foo<T> { value: T }
    // type A1 = Foo<string>; type A2 = Foo<string>; type A3 = Foo<number>;
    let mut b = TreeBuilder::new();
    let t = b.type_parameter("T");
    let t_ref = b.type_reference("T", vec![]);
    let value = b.property_signature("value", t_ref, false);
    let foo = b.interface_decl("Foo", vec![t], vec![], vec![value]);

    let s1 = b.keyword(Keyword::String);
    let r1 = b.type_reference("Foo", vec![s1]);
    let a1 = b.type_alias("A1", vec![], r1);

    let s2 = b.keyword(Keyword::String);
    let r2 = b.type_reference("Foo", vec![s2]);
    let a2 = b.type_alias("A2", vec![], r2);

    let n = b.keyword(Keyword::Number);
    let r3 = b.type_reference("Foo", vec![n]);
    let a3 = b.type_alias("A3", vec![], r3);

    let tree = b.finish(vec![foo, a1, a2, a3]).unwrap();

    let parser = NodeParser::with_default_parsers();
    let mut ctx = Context::new(&tree);

    let inner = |ty: &Rc<Type>| Rc::clone(ty.as_definition().unwrap().inner());
    let foo_string_1 = inner(&parser.create_type(a1, &mut ctx).unwrap());
    let foo_string_2 = inner(&parser.create_type(a2, &mut ctx).unwrap());
    let foo_number = inner(&parser.create_type(a3, &mut ctx).unwrap());

    assert!(Rc::ptr_eq(&foo_string_1, &foo_string_2));
    assert!(!Rc::ptr_eq(&foo_string_1, &foo_number));

    assert_eq!(
        foo_string_1.as_definition().unwrap().name(),
        "Foo<string>"
    );
    assert_eq!(foo_number.as_definition().unwrap().name(), "Foo<number>");

    // The bound member really is the argument type.
    let value = &foo_string_1
        .as_definition()
        .unwrap()
        .inner()
        .as_object()
        .unwrap()
        .properties()[0];
    assert_eq!(value.ty().id(), "string");
    assert!(value.required());
}

#[test]
fn failed_builds_leave_no_stale_bindings_or_memo_entries() {
    // interface Foo<T> { bad: Unknown }  /  type A = Foo<string>;
    let mut b = TreeBuilder::new();
    let t = b.type_parameter("T");
    let unknown = b.type_reference("Unknown", vec![]);
    let bad = b.property_signature("bad", unknown, false);
    let foo = b.interface_decl("Foo", vec![t], vec![], vec![bad]);

    let s = b.keyword(Keyword::String);
    let r = b.type_reference("Foo", vec![s]);
    let alias = b.type_alias("A", vec![], r);
    let tree = b.finish(vec![foo, alias]).unwrap();

    let parser = NodeParser::with_default_parsers();
    let mut ctx = Context::new(&tree);

    let err = parser.create_type(alias, &mut ctx).unwrap_err();
    assert!(matches!(err, ParserError::UnknownTypeName { ref name, .. } if name == "Unknown"));

    // The generic binding pushed for Foo<string> was popped on failure.
    assert!(ctx.bindings().is_empty());

    // A retry reproduces the same error instead of returning a dangling
    // placeholder from the failed attempt.
    let err = parser.create_type(alias, &mut ctx).unwrap_err();
    assert!(matches!(err, ParserError::UnknownTypeName { ref name, .. } if name == "Unknown"));
}
