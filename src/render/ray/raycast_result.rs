use crate::{
    math::{transform::Transform, vector::Vector},
    scene::object::Shape,
};

/// Outcome of casting a ray against a shape.
/// Point and normal are in the space of whoever cast the ray,
/// texcoords are in the hit shape's own parametrization.
#[derive(Debug, Clone, Copy)]
pub struct RaycastResult<'a> {
    shape: Option<&'a Shape>,
    distance: f64,
    point: Vector,
    normal: Vector,
    texcoords: Vector,
}

impl<'a> RaycastResult<'a> {
    pub const NO_HIT: Self = Self {
        shape: None,
        distance: -1.,
        point: Vector::ZERO,
        normal: Vector::ZERO,
        texcoords: Vector::ZERO_2D,
    };

    pub fn new(
        shape: &'a Shape,
        distance: f64,
        point: Vector,
        normal: Vector,
        texcoords: Vector,
    ) -> Self {
        Self {
            shape: Some(shape),
            distance,
            point,
            normal,
            texcoords,
        }
    }

    /// Maps an object space hit into the space the `transform` maps to.
    /// Distance is recomputed from `origin`, which is given in that outer space.
    pub(crate) fn transformed(self, transform: &Transform, origin: Vector) -> Self {
        if !self.is_hit() {
            return self;
        }
        let point = transform.transform_point(self.point);
        Self {
            distance: point.distance(origin),
            point,
            normal: transform.transform_normal(self.normal),
            ..self
        }
    }

    pub fn is_hit(&self) -> bool {
        self.shape.is_some()
    }

    pub fn shape(&self) -> Option<&'a Shape> {
        self.shape
    }

    /// Negative when there is no hit
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn point(&self) -> Vector {
        self.point
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn texcoords(&self) -> Vector {
        self.texcoords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::approx_eq::ApproxEq, scene::object::Shape};

    #[test]
    fn no_hit() {
        let result = RaycastResult::NO_HIT;
        assert!(!result.is_hit());
        assert!(result.shape().is_none());
        assert_approx_eq_low_prec!(result.distance(), -1.);
        assert_approx_eq_low_prec!(result.point(), Vector::ZERO);
        assert_approx_eq_low_prec!(result.normal(), Vector::ZERO);
        assert_eq!(result.texcoords().dimensions(), 2);
    }

    #[test]
    fn transformed_recomputes_distance() {
        let sphere = Shape::sphere();
        let transform = Transform::new(Vector::new(0., 0., 3.), Vector::ZERO, Vector::ONE);
        let local = RaycastResult::new(
            &sphere,
            1.,
            Vector::new(0., 0., 1.),
            Vector::UP,
            Vector::new2(0.5, 1.),
        );

        let outer = local.transformed(&transform, Vector::new(0., 0., 10.));
        assert_approx_eq_low_prec!(outer.point(), Vector::new(0., 0., 4.));
        assert_approx_eq_low_prec!(outer.normal(), Vector::UP);
        assert_approx_eq_low_prec!(outer.distance(), 6.);
    }
}
