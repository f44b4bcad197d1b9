//! Syntax tree model for Pascal-family units.
//!
//! A parsed unit is an immutable [`SyntaxTree`]: an arena of kinded,
//! optionally named nodes addressed by [`NodeId`]. Trees are produced by
//! [`TreeBuilder`] and then only read. On top of the raw tree this module
//! offers the structural helpers the analyses are built from: section
//! lookup ([`sections`]) and bounded declaration scans ([`scan`]).

mod builder;
mod kind;
mod tree;

pub mod scan;
pub mod sections;

pub use builder::{TreeBuilder, TreeError};
pub use kind::{RoutineRole, SyntaxKind};
pub use tree::{NodeId, RoutineNode, SyntaxTree};
