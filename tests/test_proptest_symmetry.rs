//! Property-based tests for cross-reference symmetry.
//!
//! Uses proptest to generate routine and type names under random case
//! mutations and verifies that declaration and implementation always
//! resolve to each other, that unrelated names never do, and that
//! overload sets surface completely.
#![cfg(feature = "proptest")]

use proptest::prelude::*;

use pascore::hir::ModuleSymbols;
use pascore::ide::find_cross_reference_targets;
use pascore::syntax::{NodeId, SyntaxKind, SyntaxTree, TreeBuilder};

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

/// Strategy for unqualified routine names.
fn arb_routine_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,12}"
}

/// Strategy for type names.
fn arb_type_name() -> impl Strategy<Value = String> {
    "T[A-Z][A-Za-z0-9]{0,10}"
}

/// The same name under a random case mutation.
fn arb_case_of(name: String) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(name.clone()),
        Just(name.to_uppercase()),
        Just(name.to_lowercase()),
    ]
}

// ============================================================================
// FIXTURES
// ============================================================================

/// One exported declaration plus a body per entry of `body_names`.
fn build_free_routine_unit(
    decl_name: &str,
    body_names: &[String],
) -> (SyntaxTree, NodeId, Vec<NodeId>) {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::Module, Some("Sample"));
    b.start_node(SyntaxKind::InterfaceSection, None);
    let decl = b.leaf(SyntaxKind::ExportedRoutine, Some(decl_name));
    b.finish_node();
    b.start_node(SyntaxKind::ImplementationSection, None);
    let bodies = body_names
        .iter()
        .map(|name| b.leaf(SyntaxKind::RoutineImpl, Some(name.as_str())))
        .collect();
    b.finish_node();
    b.finish_node();
    (b.finish().unwrap(), decl, bodies)
}

proptest! {
    #[test]
    fn prop_declaration_and_body_match_under_case_changes(
        (decl_name, body_name) in arb_routine_name()
            .prop_flat_map(|name| (arb_case_of(name.clone()), arb_case_of(name)))
    ) {
        let (tree, decl, bodies) = build_free_routine_unit(&decl_name, &[body_name]);
        let symbols = ModuleSymbols::new(&tree, tree.root());

        let forward = find_cross_reference_targets(&tree, &symbols, decl);
        prop_assert_eq!(forward.as_slice(), bodies.as_slice());

        let back = find_cross_reference_targets(&tree, &symbols, bodies[0]);
        prop_assert_eq!(back.as_slice(), [decl]);
    }

    #[test]
    fn prop_unrelated_names_never_match(
        decl_name in arb_routine_name(),
        body_name in arb_routine_name(),
    ) {
        prop_assume!(!decl_name.eq_ignore_ascii_case(&body_name));

        let (tree, decl, bodies) = build_free_routine_unit(&decl_name, &[body_name]);
        let symbols = ModuleSymbols::new(&tree, tree.root());

        prop_assert!(find_cross_reference_targets(&tree, &symbols, decl).is_empty());
        prop_assert!(find_cross_reference_targets(&tree, &symbols, bodies[0]).is_empty());
    }

    #[test]
    fn prop_overload_bodies_all_surface(
        name in arb_routine_name(),
        copies in 1usize..4,
    ) {
        let body_names: Vec<String> = (0..copies).map(|_| name.clone()).collect();
        let (tree, decl, bodies) = build_free_routine_unit(&name, &body_names);
        let symbols = ModuleSymbols::new(&tree, tree.root());

        let forward = find_cross_reference_targets(&tree, &symbols, decl);
        prop_assert_eq!(forward.len(), copies);
        prop_assert!(forward.as_slice().windows(2).all(|w| w[0] < w[1]));

        for &body in &bodies {
            let back = find_cross_reference_targets(&tree, &symbols, body);
            prop_assert_eq!(back.as_slice(), [decl]);
        }
    }

    #[test]
    fn prop_qualified_method_round_trip(
        type_name in arb_type_name(),
        method in arb_routine_name(),
        flip in any::<bool>(),
    ) {
        let qualified = format!("{type_name}.{method}");
        let qualified = if flip { qualified.to_uppercase() } else { qualified };

        let mut b = TreeBuilder::new();
        b.start_node(SyntaxKind::Module, Some("Sample"));
        b.start_node(SyntaxKind::InterfaceSection, None);
        b.start_node(SyntaxKind::TypeDecl, Some(&type_name));
        let method_decl = b.leaf(SyntaxKind::ClassMethod, Some(&method));
        b.finish_node();
        b.finish_node();
        b.start_node(SyntaxKind::ImplementationSection, None);
        let method_body = b.leaf(SyntaxKind::MethodImpl, Some(&qualified));
        b.finish_node();
        b.finish_node();
        let tree = b.finish().unwrap();
        let symbols = ModuleSymbols::new(&tree, tree.root());

        let forward = find_cross_reference_targets(&tree, &symbols, method_decl);
        prop_assert_eq!(forward.as_slice(), [method_body]);

        let back = find_cross_reference_targets(&tree, &symbols, method_body);
        prop_assert_eq!(back.as_slice(), [method_decl]);
    }
}
