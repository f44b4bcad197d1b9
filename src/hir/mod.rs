//! Semantic layer: member tables over syntax trees.
//!
//! The syntax layer answers structural questions; this layer answers name
//! questions. [`ModuleSymbols`] indexes a tree snapshot into per-module
//! and per-type member tables, and the [`SymbolTable`] trait is the
//! capability surface the analyses consume, so hosts with their own
//! indexes can slot them in.

mod resolve;
mod symbols;

pub use resolve::ModuleSymbols;
pub use symbols::{MemberDescriptor, MemberKind, SymbolTable};
