//! Unordered symbol pairs.

use serde::{Deserialize, Serialize};

use crate::cards::{Symbol, WildItem};

/// Two symbols made equivalent by a wild.
///
/// Unordered: `(a, b)` and `(b, a)` describe the same equivalence. The order
/// of construction is kept only for display.
#[derive(Clone, Copy, Debug, Eq, Serialize, Deserialize)]
pub struct SymbolPair(pub Symbol, pub Symbol);

impl SymbolPair {
    /// Create a pair.
    #[must_use]
    pub const fn new(a: Symbol, b: Symbol) -> Self {
        Self(a, b)
    }

    /// Whether this pair links `a` and `b`, in either order.
    #[must_use]
    pub fn links(&self, a: Symbol, b: Symbol) -> bool {
        (self.0 == a && self.1 == b) || (self.0 == b && self.1 == a)
    }
}

impl PartialEq for SymbolPair {
    fn eq(&self, other: &Self) -> bool {
        self.links(other.0, other.1)
    }
}

impl std::hash::Hash for SymbolPair {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        // Hash in a fixed order so equal pairs hash equally.
        let (a, b) = (self.0 as u8, self.1 as u8);
        a.min(b).hash(hasher);
        a.max(b).hash(hasher);
    }
}

impl From<WildItem> for SymbolPair {
    fn from(wild: WildItem) -> Self {
        Self(wild.symbol1(), wild.symbol2())
    }
}

impl std::fmt::Display for SymbolPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.0, self.1)
    }
}
