use std::collections::BinaryHeap;

use blockpath_core::{Point, Range};
use log::{debug, trace};

use crate::distance::manhattan;
use crate::error::{Endpoint, PathError};
use crate::neighbors::Neighbors;
use crate::node::{OpenEntry, SearchNode, Slot};
use crate::path::Path;
use crate::traits::Passable;

/// Compute a shortest 4-connected path from `start` to `goal` using A* with
/// unit step cost and the Manhattan heuristic.
///
/// The start cell is always searched from, even when it is not passable
/// itself; every other cell on the path is passable. Among equally scored
/// frontier nodes, the one discovered first is expanded first, and
/// neighbors are discovered north, west, east, south. Results are therefore
/// fully deterministic.
///
/// When `goal` cannot be reached the returned path is just `[start]`.
///
/// # Errors
///
/// [`PathError::InvalidEndpoint`] if `start` or `goal` lies outside
/// `grid.bounds()`. No search is performed in that case.
pub fn find_path<G: Passable + ?Sized>(
    grid: &G,
    start: Point,
    goal: Point,
) -> Result<Path, PathError> {
    let bounds = grid.bounds();
    let start_idx = endpoint_index(bounds, start, Endpoint::Start)?;
    endpoint_index(bounds, goal, Endpoint::Goal)?;

    let mut slots = vec![Slot::Unseen; bounds.len()];
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();

    let h = manhattan(start, goal);
    nodes.push(SearchNode {
        pos: start,
        cell: start_idx,
        g: 0,
        h,
        f: h,
        parent: None,
    });
    slots[start_idx] = Slot::Open(0);
    open.push(OpenEntry { node: 0, f: h });

    let mut nb = Neighbors::new();
    let mut expanded = 0usize;

    while let Some(entry) = open.pop() {
        let (pos, ci, g, h, f) = {
            let n = &nodes[entry.node];
            (n.pos, n.cell, n.g, n.h, n.f)
        };

        // Skip entries superseded by an in-place improvement.
        if slots[ci] != Slot::Open(entry.node) || f != entry.f {
            continue;
        }

        slots[ci] = Slot::Closed;
        expanded += 1;
        trace!("expand {pos} g={g} h={h} f={f}");

        if pos == goal {
            let path = reconstruct(&nodes, entry.node);
            debug!(
                "path {start} -> {goal}: {} steps, {expanded} expansions",
                path.steps()
            );
            return Ok(path);
        }

        let tentative_g = g + 1;
        for &(np, ni) in nb.cardinal(bounds, pos, |p| grid.passable(p)) {
            let node = match slots[ni] {
                Slot::Closed => continue,
                Slot::Open(idx) => {
                    if tentative_g >= nodes[idx].g {
                        continue;
                    }
                    idx
                }
                Slot::Unseen => {
                    let idx = nodes.len();
                    nodes.push(SearchNode {
                        pos: np,
                        cell: ni,
                        g: 0,
                        h: 0,
                        f: 0,
                        parent: None,
                    });
                    slots[ni] = Slot::Open(idx);
                    idx
                }
            };

            let n = &mut nodes[node];
            n.parent = Some(entry.node);
            n.g = tentative_g;
            n.h = manhattan(np, goal);
            n.f = n.g + n.h;
            open.push(OpenEntry { node, f: n.f });
        }
    }

    debug!("path {start} -> {goal}: unreachable after {expanded} expansions");
    Ok(reconstruct(&nodes, 0))
}

fn endpoint_index(bounds: Range, pos: Point, endpoint: Endpoint) -> Result<usize, PathError> {
    bounds
        .index_of(pos)
        .ok_or(PathError::InvalidEndpoint {
            endpoint,
            pos,
            bounds,
        })
}

/// Follow parent links from `last` back to the root, then reverse.
fn reconstruct(nodes: &[SearchNode], last: usize) -> Path {
    let mut points = Vec::new();
    let mut cur = Some(last);
    while let Some(i) = cur {
        points.push(nodes[i].pos);
        cur = nodes[i].parent;
    }
    points.reverse();
    Path::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpath_core::{Block, Grid};

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn open_grid_tie_break() {
        let g = Grid::new(3, 3);
        let path = find_path(&g, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(path.points(), pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
        assert_eq!(path.steps(), 4);
    }

    #[test]
    fn reverse_direction_prefers_north_then_west() {
        let g = Grid::new(3, 3);
        let path = find_path(&g, Point::new(2, 2), Point::new(0, 0)).unwrap();
        assert_eq!(path.points(), pts(&[(2, 2), (2, 1), (2, 0), (1, 0), (0, 0)]));
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::new(3, 3);
        let path = find_path(&g, Point::new(1, 1), Point::new(1, 1)).unwrap();
        assert_eq!(path.points(), &[Point::new(1, 1)]);
    }

    #[test]
    fn walled_middle_row_is_unreachable() {
        let g = Grid::parse(
            "...
             ###
             ...",
        )
        .unwrap();
        let path = find_path(&g, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(path.points(), &[Point::new(0, 0)]);
        assert!(!path.reaches(Point::new(2, 2)));
    }

    #[test]
    fn routes_around_walls() {
        let g = Grid::parse(
            ".#...
             .#.#.
             ...#.",
        )
        .unwrap();
        let path = find_path(&g, Point::new(0, 0), Point::new(4, 0)).unwrap();
        assert_eq!(
            path.points(),
            pts(&[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2),
                (2, 1),
                (2, 0),
                (3, 0),
                (4, 0)
            ])
        );
        for &p in path.iter() {
            assert_eq!(g.is_walkable(p), Ok(true));
        }
    }

    #[test]
    fn open_node_is_reparented_on_cheaper_route() {
        // (0,2) is first discovered from (1,2) with g=5, then reached from
        // (0,1) with g=3 while still open; the cheaper parent must stick.
        let g = Grid::parse(
            "....
             .#..
             ...#
             .##.
             ....",
        )
        .unwrap();
        let path = find_path(&g, Point::new(1, 0), Point::new(3, 3)).unwrap();
        assert_eq!(
            path.points(),
            pts(&[
                (1, 0),
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (1, 4),
                (2, 4),
                (3, 4),
                (3, 3)
            ])
        );
        assert_eq!(path.steps(), 9);
    }

    #[test]
    fn walled_start_is_still_searched_from() {
        let g = Grid::parse("#..").unwrap();
        let path = find_path(&g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(path.points(), pts(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn walled_goal_is_never_entered() {
        let g = Grid::parse("..#").unwrap();
        let path = find_path(&g, Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(path.points(), &[Point::new(0, 0)]);
    }

    #[test]
    fn walled_start_equal_to_goal() {
        let g = Grid::parse(".#.").unwrap();
        let path = find_path(&g, Point::new(1, 0), Point::new(1, 0)).unwrap();
        assert_eq!(path.points(), &[Point::new(1, 0)]);
    }

    #[test]
    fn pathway_blocks_are_walkable() {
        let g = Grid::parse("*#\n**").unwrap();
        let path = find_path(&g, Point::new(0, 0), Point::new(1, 1)).unwrap();
        assert_eq!(path.points(), pts(&[(0, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let g = Grid::new(3, 3);
        let bounds = g.bounds();
        assert_eq!(
            find_path(&g, Point::new(-1, 0), Point::new(2, 2)),
            Err(PathError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                pos: Point::new(-1, 0),
                bounds,
            })
        );
        assert_eq!(
            find_path(&g, Point::new(0, 0), Point::new(3, 2)),
            Err(PathError::InvalidEndpoint {
                endpoint: Endpoint::Goal,
                pos: Point::new(3, 2),
                bounds,
            })
        );
    }

    #[test]
    fn empty_grid_rejects_everything() {
        let g = Grid::new(0, 0);
        assert!(find_path(&g, Point::ZERO, Point::ZERO).is_err());
    }

    #[test]
    fn search_does_not_touch_grid() {
        let mut g = Grid::new(4, 4);
        g.set(Point::new(1, 1), Block::Wall).unwrap();
        let before = g.clone();
        let _ = find_path(&g, Point::new(0, 0), Point::new(3, 3)).unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn repeated_searches_agree() {
        let g = Grid::parse(
            "......
             .##.#.
             ....#.
             .#....",
        )
        .unwrap();
        let a = find_path(&g, Point::new(0, 3), Point::new(5, 0)).unwrap();
        let b = find_path(&g, Point::new(0, 3), Point::new(5, 0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.steps(), 8);
    }
}
