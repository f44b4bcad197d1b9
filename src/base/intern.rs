//! Case-insensitive string interning for identifiers.
//!
//! `Name` is a lightweight handle (just a u32) for an identifier. Interning
//! keys on the case-folded form, so `DoWork` and `DOWORK` produce the same
//! `Name`; the spelling seen first is kept for display.
//!
//! Benefits:
//! - O(1) case-insensitive equality via handle comparison
//! - 4 bytes storage vs variable-length string
//! - Cheap to copy and hash

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::fmt;

use super::ident;

/// An interned identifier name, unique per case-folded spelling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Name(u32);

impl Name {
    /// Create a Name from a raw index (used internally).
    #[inline]
    pub(crate) const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Case-insensitive interner for identifier strings.
///
/// Thread-safe via internal locking.
#[derive(Default)]
pub struct Interner {
    inner: RwLock<InternerInner>,
}

#[derive(Default)]
struct InternerInner {
    /// Map from folded string to index
    map: FxHashMap<SmolStr, u32>,
    /// First-seen spelling of each interned name
    spellings: Vec<SmolStr>,
}

impl Interner {
    /// Create a new empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an identifier, returning a `Name` handle.
    ///
    /// Two spellings that fold to the same string return the same `Name`.
    pub fn intern(&self, s: &str) -> Name {
        let folded = ident::fold(s);

        // Fast path: check if already interned (read lock)
        {
            let inner = self.inner.read();
            if let Some(&index) = inner.map.get(&folded) {
                return Name::from_raw(index);
            }
        }

        // Slow path: need to insert (write lock)
        let mut inner = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&index) = inner.map.get(&folded) {
            return Name::from_raw(index);
        }

        let index = inner.spellings.len() as u32;
        inner.spellings.push(SmolStr::new(s));
        inner.map.insert(folded, index);

        Name::from_raw(index)
    }

    /// Look up an identifier without inserting it.
    ///
    /// Returns `None` if no spelling folding to the same string has been
    /// interned. Query-side lookups use this so misses stay misses.
    pub fn probe(&self, s: &str) -> Option<Name> {
        let folded = ident::fold(s);
        let inner = self.inner.read();
        inner.map.get(&folded).map(|&index| Name::from_raw(index))
    }

    /// The first-seen spelling for a `Name`.
    ///
    /// Returns `None` if the `Name` was created by a different interner.
    pub fn spelling(&self, name: Name) -> Option<SmolStr> {
        let inner = self.inner.read();
        inner.spellings.get(name.0 as usize).cloned()
    }

    /// Get the number of interned names.
    pub fn len(&self) -> usize {
        self.inner.read().spellings.len()
    }

    /// Check if the interner is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Interner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Interner")
            .field("count", &inner.spellings.len())
            .finish()
    }
}
