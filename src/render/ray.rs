pub mod raycast_result;

use crate::math::vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vector,
    /// Always normalized
    direction: Vector,
}

impl Ray {
    /// The direction is normalized, its magnitude is ignored.
    /// A zero direction gives a ray with NaN direction.
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray starting at `from`, pointing towards `at`
    pub fn look_at(from: Vector, at: Vector) -> Self {
        Self::new(from, at - from)
    }

    pub fn point_at(&self, distance: f64) -> Vector {
        self.origin + self.direction * distance
    }

    pub fn origin(&self) -> &Vector {
        &self.origin
    }
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
}
