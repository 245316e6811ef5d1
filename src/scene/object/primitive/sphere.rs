use std::f64::consts::{FRAC_PI_2, PI};

use crate::{math::vector::Vector, render::ray::Ray};

use super::LocalHit;

/// Sphere of radius 1 centered at the object space origin
pub struct UnitSphere {}

impl UnitSphere {
    pub fn local_normal_at(object_point: Vector) -> Vector {
        object_point.normalize()
    }

    /// Spherical coordinates of a point on the surface, both in [0; 1]
    pub fn texcoords_at(normal: Vector) -> Vector {
        Vector::new2(
            (PI + normal.y().atan2(normal.x())) / (2. * PI),
            (FRAC_PI_2 + normal.z().clamp(-1., 1.).asin()) / PI,
        )
    }

    /// Closest intersection in front of the ray origin.
    /// From inside the sphere that is the far side.
    pub fn local_intersect(object_ray: &Ray) -> Option<LocalHit> {
        let origin = *object_ray.origin();
        let direction = *object_ray.direction();

        let a = direction.dot(direction);
        let b = 2. * direction.dot(origin);
        let c = origin.dot(origin) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return None;
        }

        let delta_sqrt = discriminant.sqrt();
        let near = (-b - delta_sqrt) / (2. * a);
        let far = (-b + delta_sqrt) / (2. * a);

        let distance = if near >= 0. {
            near
        } else if far >= 0. {
            far
        } else {
            return None;
        };

        let point = object_ray.point_at(distance);
        let normal = Self::local_normal_at(point);
        Some(LocalHit {
            distance,
            point,
            normal,
            texcoords: Self::texcoords_at(normal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::approx_eq::ApproxEq};

    #[test]
    fn hit_from_outside() {
        let ray = Ray::new(Vector::new(0., 0., 5.), Vector::new(0., 0., -1.));
        let hit = UnitSphere::local_intersect(&ray).unwrap();

        assert_approx_eq_low_prec!(hit.distance, 4.);
        assert_approx_eq_low_prec!(hit.point, Vector::UP);
        assert_approx_eq_low_prec!(hit.normal, Vector::UP);
        assert_approx_eq_low_prec!(hit.normal.length(), 1.);
    }

    #[test]
    fn hit_from_inside_takes_positive_root() {
        let ray = Ray::new(Vector::ZERO, Vector::FORWARD);
        let hit = UnitSphere::local_intersect(&ray).unwrap();

        assert_approx_eq_low_prec!(hit.distance, 1.);
        assert_approx_eq_low_prec!(hit.point, Vector::FORWARD);
    }

    #[test]
    fn miss() {
        let beside = Ray::new(Vector::new(0., 2., 5.), Vector::DOWN);
        let behind = Ray::new(Vector::new(0., 0., 5.), Vector::UP);

        assert!(UnitSphere::local_intersect(&beside).is_none());
        assert!(UnitSphere::local_intersect(&behind).is_none());
    }

    #[test]
    fn tangent_hit() {
        let ray = Ray::new(Vector::new(1., -5., 0.), Vector::FORWARD);
        let hit = UnitSphere::local_intersect(&ray).unwrap();

        assert_approx_eq_low_prec!(hit.distance, 5.);
        assert_approx_eq_low_prec!(hit.point, Vector::RIGHT);
    }

    #[test]
    fn texcoords() {
        assert_approx_eq_low_prec!(UnitSphere::texcoords_at(Vector::UP), Vector::new2(0.5, 1.));
        assert_approx_eq_low_prec!(
            UnitSphere::texcoords_at(Vector::DOWN),
            Vector::new2(0.5, 0.)
        );
        assert_approx_eq_low_prec!(
            UnitSphere::texcoords_at(Vector::RIGHT),
            Vector::new2(0.5, 0.5)
        );
        assert_approx_eq_low_prec!(
            UnitSphere::texcoords_at(Vector::FORWARD),
            Vector::new2(0.75, 0.5)
        );
        assert_approx_eq_low_prec!(
            UnitSphere::texcoords_at(Vector::BACKWARD),
            Vector::new2(0.25, 0.5)
        );
    }
}
