use blockpath_core::{Point, Range};

/// Unit steps in expansion order: north, west, east, south.
pub const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
];

/// Cached neighbor computation helper.
///
/// Enumerates the in-bounds cardinal (4-way) neighbors of a grid point in
/// the fixed [`CARDINAL`] order, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<(Point, usize)>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p` that lie inside `bounds` and
    /// satisfy `keep`, each paired with its row-major index in `bounds`.
    ///
    /// `keep` is only called for in-bounds points.
    pub fn cardinal(
        &mut self,
        bounds: Range,
        p: Point,
        keep: impl Fn(Point) -> bool,
    ) -> &[(Point, usize)] {
        self.buf.clear();
        for d in CARDINAL {
            let n = p + d;
            if let Some(i) = bounds.index_of(n) {
                if keep(n) {
                    self.buf.push((n, i));
                }
            }
        }
        &self.buf
    }
}
