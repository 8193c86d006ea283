use crate::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, `(x1, y1, x2, y2)` with `x1 <= x2` and `y1 <= y2`
/// when well formed. Used both as a node region and as a query window.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1,
            min_y: y1,
            max_x: x2,
            max_y: y2,
        }
    }

    /// Like [`Bounds::new`], but rejects inverted rectangles and NaN or
    /// infinite corners.
    pub fn try_new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, Error> {
        let finite = x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite();
        if !finite || x1 > x2 || y1 > y2 {
            return Err(Error::MalformedBounds(x1, y1, x2, y2));
        }
        Ok(Self::new(x1, y1, x2, y2))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Closed containment: points on the edges are inside.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
    }

    /// Closed overlap test: rectangles sharing only an edge or a corner intersect.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.max_x < other.min_x
            || other.max_x < self.min_x
            || self.max_y < other.min_y
            || other.max_y < self.min_y)
    }

    /// Whether halving yields smaller regions: the center is finite and falls
    /// strictly inside the bounds on at least one axis.
    pub fn can_split(&self) -> bool {
        let Point { x: mx, y: my } = self.center();
        if !mx.is_finite() || !my.is_finite() {
            return false;
        }
        (self.min_x < mx && mx < self.max_x) || (self.min_y < my && my < self.max_y)
    }

    /// The four equal sub-regions, indexed by [`Quadrant`].
    pub fn quadrants(&self) -> [Bounds; 4] {
        let Point { x: mx, y: my } = self.center();
        [
            Bounds::new(self.min_x, self.min_y, mx, my),
            Bounds::new(mx, self.min_y, self.max_x, my),
            Bounds::new(self.min_x, my, mx, self.max_y),
            Bounds::new(mx, my, self.max_x, self.max_y),
        ]
    }
}

impl From<(f64, f64, f64, f64)> for Bounds {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

pub fn contains(bounds: &Bounds, point: Point) -> bool {
    bounds.contains(point)
}

pub fn intersects(a: &Bounds, b: &Bounds) -> bool {
    a.intersects(b)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NW = 0,
    NE = 1,
    SW = 2,
    SE = 3,
}

pub const QUADRANTS: [Quadrant; 4] = [Quadrant::NW, Quadrant::NE, Quadrant::SW, Quadrant::SE];

impl Quadrant {
    pub fn index(self) -> usize {
        self as usize
    }
}
