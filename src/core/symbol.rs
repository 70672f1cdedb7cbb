//! The symbol catalog.
//!
//! Every tile shows one of a fixed set of icons. The catalog order matters:
//! a board with `n` pairs uses the first `n` symbols.

use serde::{Deserialize, Serialize};

/// A pairable icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SymbolId {
    Hearts,
    WaterDrop,
    Die,
    Umbrella,
    Cube,
    BeachBall,
    Dragonfly,
    Hummingbird,
    Flower,
    OpenBook,
}

/// All symbols, in catalog order.
pub const CATALOG: [SymbolId; 10] = [
    SymbolId::Hearts,
    SymbolId::WaterDrop,
    SymbolId::Die,
    SymbolId::Umbrella,
    SymbolId::Cube,
    SymbolId::BeachBall,
    SymbolId::Dragonfly,
    SymbolId::Hummingbird,
    SymbolId::Flower,
    SymbolId::OpenBook,
];

impl SymbolId {
    /// Glyph shown on the tile face.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            SymbolId::Hearts => "♥",
            SymbolId::WaterDrop => "💧",
            SymbolId::Die => "🎲",
            SymbolId::Umbrella => "☂",
            SymbolId::Cube => "🧊",
            SymbolId::BeachBall => "🏐",
            SymbolId::Dragonfly => "🪰",
            SymbolId::Hummingbird => "🐦",
            SymbolId::Flower => "🌸",
            SymbolId::OpenBook => "📖",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SymbolId::Hearts => "hearts",
            SymbolId::WaterDrop => "water drop",
            SymbolId::Die => "die",
            SymbolId::Umbrella => "umbrella",
            SymbolId::Cube => "cube",
            SymbolId::BeachBall => "beach ball",
            SymbolId::Dragonfly => "dragonfly",
            SymbolId::Hummingbird => "hummingbird",
            SymbolId::Flower => "flower",
            SymbolId::OpenBook => "open book",
        }
    }

    /// The first `count` symbols of the catalog, or `None` if the catalog is
    /// too small.
    #[must_use]
    pub fn first(count: usize) -> Option<&'static [SymbolId]> {
        CATALOG.get(..count)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_catalog_is_distinct() {
        let symbols: FxHashSet<_> = CATALOG.iter().collect();
        let glyphs: FxHashSet<_> = CATALOG.iter().map(|s| s.glyph()).collect();

        assert_eq!(symbols.len(), CATALOG.len());
        assert_eq!(glyphs.len(), CATALOG.len());
        assert!(CATALOG.len() >= 8);
    }

    #[test]
    fn test_first() {
        assert_eq!(SymbolId::first(2), Some(&[SymbolId::Hearts, SymbolId::WaterDrop][..]));
        assert_eq!(SymbolId::first(0).map(<[_]>::len), Some(0));
        assert_eq!(SymbolId::first(CATALOG.len()).map(<[_]>::len), Some(10));
        assert!(SymbolId::first(CATALOG.len() + 1).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SymbolId::BeachBall), "beach ball");
    }
}
