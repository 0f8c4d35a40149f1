//! Property-based checks of the parameter -> property mapping.

use proptest::prelude::*;
use tygraph_parser::{Context, NodeParser};
use tygraph_syntax::{Keyword, TreeBuilder};

proptest! {
    /// N parameters always yield exactly N properties, in declaration
    /// order, with the required flag derived per parameter: an optional
    /// marker or a default initializer makes it non-required.
    #[test]
    fn parameters_map_one_to_one(flags in prop::collection::vec((any::<bool>(), any::<bool>()), 0..16)) {
        let mut b = TreeBuilder::new();
        let mut params = Vec::with_capacity(flags.len());
        for (i, &(optional, has_initializer)) in flags.iter().enumerate() {
            let num = b.keyword(Keyword::Number);
            params.push(b.parameter(format!("p{i}"), Some(num), optional, has_initializer));
        }
        let func = b.function_decl(Some("subject".into()), vec![], params);
        let tree = b.finish(vec![func]).unwrap();

        let parser = NodeParser::with_default_parsers();
        let mut ctx = Context::new(&tree);
        let ty = parser.create_type(func, &mut ctx).unwrap();

        let object = ty
            .as_definition()
            .unwrap()
            .inner()
            .as_object()
            .unwrap();
        prop_assert_eq!(object.properties().len(), flags.len());

        for (i, property) in object.properties().iter().enumerate() {
            let (optional, has_initializer) = flags[i];
            let expected_name = format!("p{i}");
            prop_assert_eq!(property.name(), expected_name.as_str());
            prop_assert_eq!(property.required(), !optional && !has_initializer);
        }
    }
}
