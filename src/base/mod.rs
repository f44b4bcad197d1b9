//! Foundation types for the pascore library.
//!
//! This module provides the primitives used throughout the crate:
//! - [`FileId`] - Interned file identifiers
//! - [`TextRange`], [`TextSize`] - Source positions
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`ident`] - Case-insensitive identifier comparison and folding
//! - [`Name`], [`Interner`] - Case-insensitive string interning
//!
//! This module has NO dependencies on other pascore modules.

mod file_id;
pub mod ident;
mod intern;
mod span;

pub use file_id::FileId;
pub use intern::{Interner, Name};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
