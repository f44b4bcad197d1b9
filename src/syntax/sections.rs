//! Locating the top-level sections of a module.
//!
//! A well-formed unit has at most one interface section and one
//! implementation section, both immediate children of the module node.
//! Lookups here never descend further, so a nested module fragment can
//! never leak its sections into the enclosing unit.

use super::kind::SyntaxKind;
use super::tree::{NodeId, SyntaxTree};

/// The interface section of `module`, if present.
///
/// Returns `None` when `module` is not a module node or has no such
/// immediate child.
pub fn interface_section_of(tree: &SyntaxTree, module: NodeId) -> Option<NodeId> {
    section_of(tree, module, SyntaxKind::InterfaceSection)
}

/// The implementation section of `module`, if present.
///
/// Returns `None` when `module` is not a module node or has no such
/// immediate child.
pub fn implementation_section_of(tree: &SyntaxTree, module: NodeId) -> Option<NodeId> {
    section_of(tree, module, SyntaxKind::ImplementationSection)
}

fn section_of(tree: &SyntaxTree, module: NodeId, kind: SyntaxKind) -> Option<NodeId> {
    if tree.kind(module) != SyntaxKind::Module {
        return None;
    }
    tree.children(module)
        .iter()
        .copied()
        .find(|&child| tree.kind(child) == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TreeBuilder;

    #[test]
    fn test_finds_immediate_sections() {
        let mut b = TreeBuilder::new();
        let module = b.start_node(SyntaxKind::Module, Some("Sample"));
        let interface = b.start_node(SyntaxKind::InterfaceSection, None);
        b.finish_node();
        let implementation = b.start_node(SyntaxKind::ImplementationSection, None);
        b.finish_node();
        b.finish_node();
        let tree = b.finish().unwrap();

        assert_eq!(interface_section_of(&tree, module), Some(interface));
        assert_eq!(implementation_section_of(&tree, module), Some(implementation));
    }

    #[test]
    fn test_missing_section_is_none() {
        let mut b = TreeBuilder::new();
        let module = b.start_node(SyntaxKind::Module, Some("HeaderOnly"));
        b.leaf(SyntaxKind::InterfaceSection, None);
        b.finish_node();
        let tree = b.finish().unwrap();

        assert!(implementation_section_of(&tree, module).is_none());
    }

    #[test]
    fn test_non_module_node_is_none() {
        let mut b = TreeBuilder::new();
        b.start_node(SyntaxKind::Module, None);
        let interface = b.leaf(SyntaxKind::InterfaceSection, None);
        b.finish_node();
        let tree = b.finish().unwrap();

        assert!(interface_section_of(&tree, interface).is_none());
        assert!(implementation_section_of(&tree, interface).is_none());
    }

    #[test]
    fn test_nested_module_sections_do_not_leak() {
        // An inner module fragment carries its own sections; the outer
        // module must not pick them up.
        let mut b = TreeBuilder::new();
        let outer = b.start_node(SyntaxKind::Module, Some("Outer"));
        let inner = b.start_node(SyntaxKind::Module, Some("Inner"));
        let inner_impl = b.leaf(SyntaxKind::ImplementationSection, None);
        b.finish_node();
        b.finish_node();
        let tree = b.finish().unwrap();

        assert_eq!(implementation_section_of(&tree, outer), None);
        assert_eq!(implementation_section_of(&tree, inner), Some(inner_impl));
    }
}
