use glam::{ivec2, IVec2};

/// Integer rectangle over a tile lattice.
///
/// Covers the cells from `p0` up to but not including `p1`. A rectangle
/// where `p1` is not greater than `p0` along some axis is empty.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Rect {
    pub p0: IVec2,
    pub p1: IVec2,
}

impl Rect {
    /// Create a new rectangle. If p1 has components that are smaller than
    /// p0's, the corresponding range is clamped to zero.
    pub fn new(p0: impl Into<IVec2>, p1: impl Into<IVec2>) -> Self {
        let (p0, p1) = (p0.into(), p1.into());
        Rect {
            p0,
            p1: p0.max(p1),
        }
    }

    /// Create a rectangle that includes both corner points.
    pub fn new_inclusive(p0: impl Into<IVec2>, p1: impl Into<IVec2>) -> Self {
        let (p0, p1) = (p0.into(), p1.into());
        Rect::new(p0, p1 + IVec2::ONE)
    }

    /// Create a rectangle from an origin and a size.
    pub fn sized(origin: impl Into<IVec2>, dim: impl Into<IVec2>) -> Self {
        let origin = origin.into();
        Rect::new(origin, origin + dim.into())
    }

    /// Square with origin at zero.
    pub fn square(side: i32) -> Self {
        Rect::sized(IVec2::ZERO, ivec2(side, side))
    }

    /// Smallest rectangle containing all cells of both corner points.
    pub fn bounding(a: impl Into<IVec2>, b: impl Into<IVec2>) -> Self {
        let (a, b) = (a.into(), b.into());
        Rect::new_inclusive(a.min(b), a.max(b))
    }

    pub fn dim(&self) -> IVec2 {
        self.p1 - self.p0
    }

    pub fn width(&self) -> i32 {
        self.dim().x
    }

    pub fn height(&self) -> i32 {
        self.dim().y
    }

    /// Number of cells in the rectangle.
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub fn contains(&self, p: impl Into<IVec2>) -> bool {
        let p = p.into();
        p.cmpge(self.p0).all() && p.cmplt(self.p1).all()
    }

    /// Whether `other` fits completely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.p0.cmpge(self.p0).all() && other.p1.cmple(self.p1).all())
    }

    /// Rectangle grown by `amount` on every side.
    pub fn grow(&self, amount: impl Into<IVec2>) -> Rect {
        let amount = amount.into();
        Rect::new(self.p0 - amount, self.p1 + amount)
    }

    /// Overlap of two rectangles, empty if they don't intersect.
    pub fn intersection(&self, other: &Rect) -> Rect {
        Rect::new(self.p0.max(other.p0), self.p1.min(other.p1))
    }

    /// Iterate the cells of the rectangle in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = IVec2> {
        let Rect { p0, p1 } = *self;
        (p0.y..p1.y).flat_map(move |y| (p0.x..p1.x).map(move |x| ivec2(x, y)))
    }
}
