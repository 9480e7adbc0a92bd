//! The [`Grid`] type — a 2D store of terrain [`Block`]s.
//!
//! Every coordinate in `[0, width) × [0, height)` holds exactly one block.
//! Accessors are bounds-checked and report [`GridError::OutOfBounds`] rather
//! than clamping.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::terrain::Block;

/// A fixed-size 2D grid of terrain blocks, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridData", into = "GridData")
)]
pub struct Grid {
    cells: Vec<Block>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid filled with [`Block::Air`]. Negative sizes are
    /// treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Block::default(); bounds.len()],
            bounds,
        }
    }

    /// Build a grid from rows of block symbols (`.` air, `#` wall,
    /// `*` pathway). Blank lines and surrounding whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::InconsistentSize {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                cells.push(Block::from_symbol(ch).ok_or(GridError::InvalidSymbol { ch, pos })?);
            }
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, rows.len() as i32),
        })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Result<usize, GridError> {
        self.bounds.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// The block at `p`.
    pub fn get(&self, p: Point) -> Result<Block, GridError> {
        let i = self.index(p)?;
        Ok(self.cells[i])
    }

    /// Overwrite the block at `p`.
    pub fn set(&mut self, p: Point, block: Block) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.cells[i] = block;
        Ok(())
    }

    /// Whether the block at `p` can be walked on.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> Result<bool, GridError> {
        Ok(!self.get(p)?.collidable())
    }

    /// Fill every cell with `block`.
    pub fn fill(&mut self, block: Block) {
        self.cells.fill(block);
    }

    /// Number of cells holding `block`.
    pub fn count(&self, block: Block) -> usize {
        self.cells.iter().filter(|&&b| b == block).count()
    }

    /// Row-major iterator over `(Point, Block)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Block)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> + '_ {
        self.cells.chunks(self.width().max(1) as usize)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridData {
    width: i32,
    height: i32,
    cells: Vec<Block>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridData {
    fn from(g: Grid) -> Self {
        Self {
            width: g.width(),
            height: g.height(),
            cells: g.cells,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, GridError> {
        let bounds = Range::new(0, 0, data.width.max(0), data.height.max(0));
        if data.cells.len() != bounds.len() {
            return Err(GridError::InconsistentSize {
                row: 0,
                expected: bounds.len(),
                found: data.cells.len(),
            });
        }
        Ok(Self {
            cells: data.cells,
            bounds,
        })
    }
}
