//! A point quadtree for named locations.
//!
//! ```
//! use city_quadtree::{Bounds, City, Quadtree};
//!
//! let mut tree = Quadtree::new(Bounds::new(0.0, 0.0, 100.0, 100.0));
//! tree.insert(City::new("Namakkal", 10.0, 20.0));
//! tree.insert(City::new("Salem", 30.0, 40.0));
//! tree.insert(City::new("Erode", 70.0, 80.0));
//!
//! let found: Vec<&str> = tree
//!     .query(&Bounds::new(0.0, 0.0, 70.0, 70.0))
//!     .iter()
//!     .map(|city| city.name())
//!     .collect();
//! assert_eq!(found, ["Namakkal", "Salem"]);
//! ```

mod config;
mod entity;
mod geometry;
mod list;
mod quadtree;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Node capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
    #[error("Malformed bounds: ({0}, {1}, {2}, {3})")]
    MalformedBounds(f64, f64, f64, f64),
}

/// Read-only walk over a [`Quadtree`], e.g. for drawing it.
pub trait QuadtreeVisitor<T> {
    fn branch(&mut self, depth: u32, bounds: &Bounds);
    fn leaf(&mut self, depth: u32, bounds: &Bounds);
    /// Called for each entity of the leaf most recently passed to [`QuadtreeVisitor::leaf`].
    fn entity(&mut self, entity: &T);
}

pub use config::*;
pub use entity::*;
pub use geometry::*;
pub use quadtree::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render() {
        assert_eq!(
            Error::InvalidCapacity(0).to_string(),
            "Node capacity must be at least 1, got 0"
        );
        assert_eq!(
            Error::MalformedBounds(1.0, 0.0, 0.0, 1.0).to_string(),
            "Malformed bounds: (1, 0, 0, 1)"
        );
    }
}
