//! IDE features — High-level APIs for editor integrations.
//!
//! This module sits between the semantic model (HIR) and whatever
//! presents results to the user. Each function corresponds to one editor
//! request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No presentation types**: Hosts convert markers and targets to
//!    their own gutter/link types at the boundary
//! 3. **Total**: Malformed input yields empty results, never errors
//!
//! ## Usage
//!
//! ```
//! use pascore::syntax::{SyntaxKind, TreeBuilder};
//! use pascore::hir::ModuleSymbols;
//! use pascore::ide::find_cross_reference_targets;
//!
//! let mut b = TreeBuilder::new();
//! b.start_node(SyntaxKind::Module, Some("Sample"));
//! b.start_node(SyntaxKind::InterfaceSection, None);
//! let decl = b.leaf(SyntaxKind::ExportedRoutine, Some("DoWork"));
//! b.finish_node();
//! b.start_node(SyntaxKind::ImplementationSection, None);
//! let body = b.leaf(SyntaxKind::RoutineImpl, Some("DoWork"));
//! b.finish_node();
//! b.finish_node();
//! let tree = b.finish().unwrap();
//!
//! let symbols = ModuleSymbols::new(&tree, tree.root());
//! let targets = find_cross_reference_targets(&tree, &symbols, decl);
//! assert_eq!(targets.into_vec(), vec![body]);
//! ```

mod cross_ref;
mod markers;

pub use cross_ref::{CrossRef, MatchResult, find_cross_reference_targets};
pub use markers::{MarkerKind, NavMarker, navigation_markers, navigation_markers_par};
