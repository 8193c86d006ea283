use crate::geometry::Point;

/// Anything that occupies a single point in the plane can be stored in a [`Quadtree`](crate::Quadtree).
pub trait Locate {
    fn position(&self) -> Point;
}

impl Locate for Point {
    fn position(&self) -> Point {
        *self
    }
}

/// A named location.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    name: String,
    position: Point,
}

impl City {
    pub fn new<S: Into<String>>(name: S, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: Point::new(x, y),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl Locate for City {
    fn position(&self) -> Point {
        self.position
    }
}
