//! Bounded scans over a section's declarations.
//!
//! Declarations sit either directly under a section or one level deeper
//! inside a declaration group. Scans visit exactly those two layers and
//! never recurse into routine bodies or type members, which keeps a scan
//! linear in the number of declarations regardless of how deep the bodies
//! nest.

use crate::base::ident;

use super::kind::SyntaxKind;
use super::tree::{NodeId, SyntaxTree};

/// Collect the declarations of `section` for which `predicate` holds.
///
/// Visits immediate children and, for declaration groups, their immediate
/// children. Returns nodes in source order. A missing section (`None`)
/// yields an empty result.
pub fn scan_section(
    tree: &SyntaxTree,
    section: Option<NodeId>,
    mut predicate: impl FnMut(NodeId) -> bool,
) -> Vec<NodeId> {
    let Some(section) = section else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for &child in tree.children(section) {
        if tree.kind(child) == SyntaxKind::DeclGroup {
            for &decl in tree.children(child) {
                if predicate(decl) {
                    found.push(decl);
                }
            }
        } else if predicate(child) {
            found.push(child);
        }
    }
    found
}

/// Collect the declarations of `section` whose kind is one of `kinds` and
/// whose name matches `name` case-insensitively.
pub fn matching_declarations(
    tree: &SyntaxTree,
    section: Option<NodeId>,
    kinds: &[SyntaxKind],
    name: &str,
) -> Vec<NodeId> {
    scan_section(tree, section, |decl| {
        kinds.contains(&tree.kind(decl))
            && tree
                .name(decl)
                .is_some_and(|decl_name| ident::eq_ignore_case(decl_name, name))
    })
}
