//! Terrain blocks and their capabilities.

/// The kind of terrain occupying a single grid cell.
///
/// Collidability is the only property path searches read; the glyph and
/// symbol exist for the code that draws or parses maps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    /// Open ground.
    #[default]
    Air,
    /// Impassable terrain.
    Wall,
    /// Open ground marked as part of a drawn path.
    Pathway,
}

impl Block {
    /// Every block kind, ordered by [`id`](Block::id).
    pub const ALL: [Block; 3] = [Block::Air, Block::Wall, Block::Pathway];

    /// Stable numeric identifier.
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            Block::Air => 0,
            Block::Wall => 1,
            Block::Pathway => 2,
        }
    }

    /// Whether this block stops movement.
    #[inline]
    pub const fn collidable(self) -> bool {
        matches!(self, Block::Wall)
    }

    /// Display glyph.
    pub const fn glyph(self) -> char {
        match self {
            Block::Air => '⬜',
            Block::Wall => '🟥',
            Block::Pathway => '🟢',
        }
    }

    /// ASCII symbol used by text maps.
    pub const fn symbol(self) -> char {
        match self {
            Block::Air => '.',
            Block::Wall => '#',
            Block::Pathway => '*',
        }
    }

    /// Parse an ASCII map symbol.
    pub fn from_symbol(ch: char) -> Option<Block> {
        Block::ALL.into_iter().find(|b| b.symbol() == ch)
    }
}
