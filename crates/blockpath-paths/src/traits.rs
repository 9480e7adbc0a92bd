use blockpath_core::{Grid, Point, Range};

/// The grid view a path search consumes.
///
/// Implementors must not change while a search over them is running.
pub trait Passable {
    /// The extent of valid coordinates.
    fn bounds(&self) -> Range;

    /// Whether `p` may be entered. Only called for points inside
    /// [`bounds`](Passable::bounds).
    fn passable(&self, p: Point) -> bool;
}

impl Passable for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_walkable(p).unwrap_or(false)
    }
}

impl<P: Passable + ?Sized> Passable for &P {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        (**self).passable(p)
    }
}
