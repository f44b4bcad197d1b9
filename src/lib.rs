//! # pascore-base
//!
//! Core library for Pascal unit analysis: an immutable syntax tree model,
//! case-insensitive member tables, and cross-referencing between interface
//! declarations and implementation bodies.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide     → cross-reference matching, navigation markers
//!   ↓
//! hir     → member descriptors, symbol-table capability
//!   ↓
//! syntax  → node kinds, roles, arena tree, builder, section scans
//!   ↓
//! base    → primitives (FileId, spans, identifiers, interning)
//! ```
//!
//! The crate consumes an already-built tree; it contains no parser. Every
//! query is a pure read-only traversal over an immutable snapshot, safe to
//! run concurrently over independent nodes.
//!
//! ## Example
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
//! b.start_node(SyntaxKind::DeclGroup, None);
//! let body = b.leaf(SyntaxKind::RoutineImpl, Some("DoWork"));
//! b.finish_node();
//! b.finish_node();
//! b.finish_node();
//! let tree = b.finish().unwrap();
//!
//! let symbols = ModuleSymbols::new(&tree, tree.root());
//! let targets = find_cross_reference_targets(&tree, &symbols, decl);
//! assert_eq!(targets.into_vec(), vec![body]);
//! ```

/// Foundation types: FileId, spans, identifier handling, interning
pub mod base;

/// Semantic layer: member descriptors and the symbol-table capability
pub mod hir;

/// IDE features: cross-reference matching and navigation markers
pub mod ide;

/// Syntax layer: node kinds, roles, the arena tree, and section scans
pub mod syntax;

// Re-export commonly needed items
pub use base::{FileId, Interner, LineCol, LineIndex, Name, TextRange, TextSize};
pub use ide::{MatchResult, find_cross_reference_targets};
pub use syntax::{NodeId, RoutineRole, SyntaxKind, SyntaxTree};
