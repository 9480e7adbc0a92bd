//! Shortest paths over 4-connected terrain grids.
//!
//! The centerpiece is [`find_path`], an A* search with unit step cost and
//! the Manhattan heuristic. It is deterministic: ties between equally scored
//! frontier nodes go to the node discovered first, and neighbors are
//! discovered north, west, east, south.
//!
//! - **A\*** shortest path ([`find_path`])
//! - **BFS** unit-cost distance maps ([`bfs_map`])
//!
//! Searches read the grid through the [`Passable`] trait, implemented for
//! [`blockpath_core::Grid`]. All search state is allocated per call and
//! dropped on return.
//!
//! ```
//! use blockpath_core::{Grid, Point};
//! use blockpath_paths::find_path;
//!
//! let grid = Grid::parse("...\n##.\n...").unwrap();
//! let path = find_path(&grid, Point::new(0, 0), Point::new(0, 2)).unwrap();
//! assert!(path.reaches(Point::new(0, 2)));
//! assert_eq!(path.steps(), 6);
//! ```

mod astar;
mod bfs;
mod distance;
mod error;
mod neighbors;
mod node;
mod path;
mod traits;

pub use astar::find_path;
pub use bfs::{DistanceMap, UNREACHABLE, bfs_map};
pub use distance::manhattan;
pub use error::{Endpoint, PathError};
pub use neighbors::{CARDINAL, Neighbors};
pub use path::Path;
pub use traits::Passable;
