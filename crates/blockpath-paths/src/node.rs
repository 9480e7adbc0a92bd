use blockpath_core::Point;

// ---------------------------------------------------------------------------
// Search arena
// ---------------------------------------------------------------------------

/// A node discovered during one A* search. Lives in the search arena;
/// `parent` is an arena index, `None` for the start node.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    /// Row-major index of `pos` in the searched bounds.
    pub(crate) cell: usize,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<usize>,
}

/// Per-cell search state, indexed by the cell's row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Unseen,
    /// In the open set, holding the arena index of its node.
    Open(usize),
    Closed,
}

/// Heap entry referencing an arena node.
///
/// Ordered by `f`, then by arena index. Arena indices grow in insertion
/// order and a node keeps its index when improved in place, so the smallest
/// entry is exactly the first lowest-`f` node a linear scan of the open set
/// in insertion order would find.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) node: usize,
    pub(crate) f: i32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, node) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_f_then_earliest() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { node: 3, f: 4 });
        heap.push(OpenEntry { node: 1, f: 6 });
        heap.push(OpenEntry { node: 2, f: 4 });
        heap.push(OpenEntry { node: 0, f: 5 });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![2, 3, 0, 1]);
    }
}
