//! Construction of [`SyntaxTree`]s.
//!
//! The builder follows the usual event shape: `start_node` opens a node,
//! `leaf` adds a childless one, `finish_node` closes the innermost open
//! node, and `finish` seals the tree. Structural misuse is collected while
//! building and reported once from [`TreeBuilder::finish`].

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{FileId, TextRange, TextSize};

use super::kind::SyntaxKind;
use super::tree::{NodeData, NodeId, SyntaxTree};

/// Structural errors detected while building a tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// `finish` was called before any node was started.
    #[error("tree has no nodes")]
    Empty,
    /// `finish` was called with nodes still open.
    #[error("{0} node(s) still open")]
    UnclosedNodes(usize),
    /// `finish_node` was called more often than `start_node`.
    #[error("{0} extra finish_node call(s)")]
    ExtraFinish(usize),
    /// A second top-level node was started after the first was closed.
    #[error("more than one root node")]
    MultipleRoots,
}

/// Event-style builder producing an immutable [`SyntaxTree`].
pub struct TreeBuilder {
    file: FileId,
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
    extra_finish: usize,
    multiple_roots: bool,
}

impl TreeBuilder {
    /// Create a builder for an anonymous file.
    pub fn new() -> Self {
        Self::for_file(FileId::new(0))
    }

    /// Create a builder for a specific file.
    pub fn for_file(file: FileId) -> Self {
        TreeBuilder {
            file,
            nodes: Vec::new(),
            stack: Vec::new(),
            extra_finish: 0,
            multiple_roots: false,
        }
    }

    /// Open a node with an empty source range.
    pub fn start_node(&mut self, kind: SyntaxKind, name: Option<&str>) -> NodeId {
        self.start_node_at(kind, name, TextRange::empty(TextSize::from(0)))
    }

    /// Open a node covering `range`.
    pub fn start_node_at(
        &mut self,
        kind: SyntaxKind,
        name: Option<&str>,
        range: TextRange,
    ) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        let parent = self.stack.last().copied();
        if parent.is_none() && !self.nodes.is_empty() {
            self.multiple_roots = true;
        }
        self.nodes.push(NodeData {
            kind,
            range,
            name: name.map(SmolStr::new),
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index() as usize].children.push(id);
        }
        self.stack.push(id);
        id
    }

    /// Add a childless node with an empty source range.
    pub fn leaf(&mut self, kind: SyntaxKind, name: Option<&str>) -> NodeId {
        self.leaf_at(kind, name, TextRange::empty(TextSize::from(0)))
    }

    /// Add a childless node covering `range`.
    pub fn leaf_at(&mut self, kind: SyntaxKind, name: Option<&str>, range: TextRange) -> NodeId {
        let id = self.start_node_at(kind, name, range);
        self.finish_node();
        id
    }

    /// Close the innermost open node.
    pub fn finish_node(&mut self) {
        if self.stack.pop().is_none() {
            self.extra_finish += 1;
        }
    }

    /// Seal the tree, reporting the first structural error encountered.
    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        if self.extra_finish > 0 {
            return Err(TreeError::ExtraFinish(self.extra_finish));
        }
        if !self.stack.is_empty() {
            return Err(TreeError::UnclosedNodes(self.stack.len()));
        }
        if self.nodes.is_empty() {
            return Err(TreeError::Empty);
        }
        if self.multiple_roots {
            return Err(TreeError::MultipleRoots);
        }
        Ok(SyntaxTree {
            file: self.file,
            nodes: self.nodes,
            root: NodeId::new(0),
        })
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
