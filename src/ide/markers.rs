//! Navigation marker collection.
//!
//! Batch layer over the cross-reference matcher: given the declaration
//! nodes visible in an editor view, produce one marker per routine that
//! has at least one counterpart. Markers are plain data; rendering and
//! click handling stay with the host.

use rayon::prelude::*;

use crate::base::TextRange;
use crate::hir::SymbolTable;
use crate::syntax::{NodeId, RoutineNode, RoutineRole, SyntaxTree};

use super::cross_ref::{CrossRef, MatchResult};

/// Direction a marker points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    /// Declaration side: jump to the implementation bodies.
    ToImplementation,
    /// Implementation side: jump back to the interface declaration.
    ToDeclaration,
}

impl MarkerKind {
    /// Hover text for the marker.
    pub fn description(self) -> &'static str {
        match self {
            MarkerKind::ToImplementation => "Go to implementation",
            MarkerKind::ToDeclaration => "Go to interface",
        }
    }

    fn of(role: RoutineRole) -> MarkerKind {
        if role.is_declaration() {
            MarkerKind::ToImplementation
        } else {
            MarkerKind::ToDeclaration
        }
    }
}

/// A navigation marker attached to one routine node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavMarker {
    /// The routine the marker belongs to.
    pub node: NodeId,
    /// Source range to render the marker at.
    pub range: TextRange,
    /// Which way the marker points.
    pub kind: MarkerKind,
    /// The resolved counterpart nodes, never empty.
    pub targets: MatchResult,
}

/// Collect markers for `nodes`.
///
/// Nodes without a routine role or without any counterpart produce no
/// marker. Output preserves input order.
pub fn navigation_markers(
    tree: &SyntaxTree,
    symbols: &dyn SymbolTable,
    nodes: &[NodeId],
) -> Vec<NavMarker> {
    let cross_ref = CrossRef::new(tree, symbols);
    nodes
        .iter()
        .filter_map(|&node| marker_for(tree, cross_ref, node))
        .collect()
}

/// Collect markers for `nodes` across the rayon pool.
///
/// Every lookup is read-only against the same snapshot, so the batch
/// fans out per node. Output order matches [`navigation_markers`];
/// rayon's collect keeps input order even through `filter_map`.
pub fn navigation_markers_par(
    tree: &SyntaxTree,
    symbols: &dyn SymbolTable,
    nodes: &[NodeId],
) -> Vec<NavMarker> {
    let cross_ref = CrossRef::new(tree, symbols);
    nodes
        .par_iter()
        .filter_map(|&node| marker_for(tree, cross_ref, node))
        .collect()
}

fn marker_for(tree: &SyntaxTree, cross_ref: CrossRef<'_>, node: NodeId) -> Option<NavMarker> {
    let routine = RoutineNode::cast(tree, node)?;
    let targets = cross_ref.targets(node);
    if targets.is_empty() {
        return None;
    }
    Some(NavMarker {
        node,
        range: tree.range(node),
        kind: MarkerKind::of(routine.role()),
        targets,
    })
}
