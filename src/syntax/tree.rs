//! The immutable syntax tree.
//!
//! Nodes live in a single arena owned by the tree; a [`NodeId`] is an index
//! into it. Parent links are plain indices used for navigation only, never
//! for ownership, so the tree owns its nodes strictly top-down and a
//! snapshot can be shared freely across threads.

use smol_str::SmolStr;
use std::fmt;
use std::iter;

use crate::base::{FileId, TextRange};

use super::kind::{RoutineRole, SyntaxKind};

/// An index identifying a node within its [`SyntaxTree`].
///
/// `NodeId`s are only meaningful for the tree that produced them; they are
/// handles, not owners.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new NodeId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Per-node storage.
pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) range: TextRange,
    pub(crate) name: Option<SmolStr>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A parsed file as an immutable node arena.
///
/// Constructed once through [`TreeBuilder`](super::TreeBuilder), then only
/// read. All accessors take the `NodeId`s this tree handed out; indices
/// from another tree are a caller bug.
pub struct SyntaxTree {
    pub(crate) file: FileId,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) root: NodeId,
}

impl SyntaxTree {
    /// The file this tree was parsed from.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// The root node (a module for well-formed units).
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. Built trees always have a root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The kind of a node.
    pub fn kind(&self, node: NodeId) -> SyntaxKind {
        self.node(node).kind
    }

    /// The source range of a node.
    pub fn range(&self, node: NodeId) -> TextRange {
        self.node(node).range
    }

    /// The name of a node, if it has a non-empty one.
    ///
    /// An empty name means "no name"; malformed input never yields
    /// `Some("")`.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).name {
            Some(name) if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }

    /// The parent of a node; `None` for the root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    /// The ordered children of a node.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    /// The node itself followed by its ancestors up to the root.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(Some(node), |&n| self.parent(n))
    }

    /// The nearest enclosing module, starting from the node itself.
    ///
    /// For nodes inside a nested module fragment this is the fragment, not
    /// the file's root module.
    pub fn nearest_module(&self, node: NodeId) -> Option<NodeId> {
        self.ancestors(node)
            .find(|&n| self.kind(n) == SyntaxKind::Module)
    }

    fn node(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0 as usize]
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("file", &self.file)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

/// Typed view of a routine-like node.
///
/// Wraps a node whose kind carries a [`RoutineRole`] and exposes its name
/// parts: the full as-written name, the simple name part, and the optional
/// `Type` qualifier of a qualified `Type.Method` name.
#[derive(Copy, Clone)]
pub struct RoutineNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
    role: RoutineRole,
}

impl<'t> RoutineNode<'t> {
    /// View `node` as a routine, if its kind carries a role.
    pub fn cast(tree: &'t SyntaxTree, node: NodeId) -> Option<RoutineNode<'t>> {
        let role = RoutineRole::from_kind(tree.kind(node))?;
        Some(RoutineNode {
            tree,
            id: node,
            role,
        })
    }

    /// The underlying node.
    pub fn id(self) -> NodeId {
        self.id
    }

    /// The structural role.
    pub fn role(self) -> RoutineRole {
        self.role
    }

    /// The full as-written name, e.g. `DoWork` or `TFoo.Bar`.
    pub fn name(self) -> Option<&'t str> {
        self.tree.name(self.id)
    }

    /// The simple name part: everything after the last `.`, or the whole
    /// name when it is unqualified. `None` when the part is missing.
    pub fn name_part(self) -> Option<&'t str> {
        let name = self.name()?;
        match name.rsplit_once('.') {
            Some((_, part)) if !part.is_empty() => Some(part),
            Some(_) => None,
            None => Some(name),
        }
    }

    /// The qualifier before the last `.`, when present and non-empty.
    pub fn namespace(self) -> Option<&'t str> {
        let name = self.name()?;
        match name.rsplit_once('.') {
            Some((ns, _)) if !ns.is_empty() => Some(ns),
            _ => None,
        }
    }
}

impl fmt::Debug for RoutineNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutineNode")
            .field("id", &self.id)
            .field("role", &self.role)
            .field("name", &self.name())
            .finish()
    }
}
