//! Demo collaborator for the blockpath pathfinder: random block maps, path
//! overlay and emoji rendering.

use blockpath_core::{Block, Grid, GridError, Point};
use blockpath_paths::Path;
use log::debug;
use rand::{Rng, RngExt};

/// Parameters for building a demo map.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    /// Probability in `[0, 1]` that any given cell becomes a wall.
    pub wall_chance: f64,
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            wall_chance: 0.2,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Top-left corner.
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// Bottom-right corner.
    pub fn goal(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }
}

/// Build a grid where each cell is a wall with probability
/// `config.wall_chance`. The start and goal corners are always left open.
pub fn generate(config: &DemoConfig, rng: &mut impl Rng) -> Result<Grid, GridError> {
    let mut grid = Grid::new(config.width, config.height);
    let chance = config.wall_chance.clamp(0.0, 1.0);
    for p in grid.bounds() {
        if rng.random_bool(chance) {
            grid.set(p, Block::Wall)?;
        }
    }
    grid.set(config.start(), Block::Air)?;
    grid.set(config.goal(), Block::Air)?;
    debug!(
        "generated {}x{} map with {} walls",
        grid.width(),
        grid.height(),
        grid.count(Block::Wall)
    );
    Ok(grid)
}

/// Mark every coordinate of `path` as [`Block::Pathway`].
pub fn overlay(grid: &mut Grid, path: &Path) -> Result<(), GridError> {
    for &p in path {
        grid.set(p, Block::Pathway)?;
    }
    Ok(())
}

/// Draw the grid as rows of block glyphs.
pub fn render(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|b| b.glyph().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
