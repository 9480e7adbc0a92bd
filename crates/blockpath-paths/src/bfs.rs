use std::collections::VecDeque;

use blockpath_core::{Point, Range};

use crate::error::{Endpoint, PathError};
use crate::neighbors::Neighbors;
use crate::traits::Passable;

/// Sentinel distance for cells not reached by a breadth-first search.
pub const UNREACHABLE: i32 = i32::MAX;

/// Unit-cost distances from a single source, as produced by [`bfs_map`].
#[derive(Debug, Clone)]
pub struct DistanceMap {
    source: Point,
    bounds: Range,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// The point distances are measured from.
    pub fn source(&self) -> Point {
        self.source
    }

    /// Distance in steps from the source to `p`, or `None` if `p` is outside
    /// the grid or was not reached.
    pub fn at(&self, p: Point) -> Option<i32> {
        let i = self.bounds.index_of(p)?;
        match self.dist[i] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Iterator over every reached point and its distance, row-major.
    pub fn reached(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.bounds
            .iter()
            .zip(self.dist.iter().copied())
            .filter(|&(_, d)| d != UNREACHABLE)
    }
}

/// Compute a breadth-first distance map from `source`.
///
/// Movement follows the same rules as [`find_path`](crate::find_path): the
/// source is always expanded, and only in-bounds passable cells are entered
/// from it.
///
/// # Errors
///
/// [`PathError::InvalidEndpoint`] if `source` lies outside the grid.
pub fn bfs_map<G: Passable + ?Sized>(grid: &G, source: Point) -> Result<DistanceMap, PathError> {
    let bounds = grid.bounds();
    let si = bounds.index_of(source).ok_or(PathError::InvalidEndpoint {
        endpoint: Endpoint::Start,
        pos: source,
        bounds,
    })?;

    let mut dist = vec![UNREACHABLE; bounds.len()];
    dist[si] = 0;
    let mut queue: VecDeque<usize> = VecDeque::from([si]);
    let mut nb = Neighbors::new();

    while let Some(ci) = queue.pop_front() {
        let current_dist = dist[ci];
        let cp = bounds.point_at(ci);
        for &(_, ni) in nb.cardinal(bounds, cp, |p| grid.passable(p)) {
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = current_dist + 1;
            queue.push_back(ni);
        }
    }

    Ok(DistanceMap {
        source,
        bounds,
        dist,
    })
}
