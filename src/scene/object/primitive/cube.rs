use crate::{
    math::vector::{Axis, Vector},
    render::ray::Ray,
};

use super::LocalHit;

/// Axis aligned cube with faces at -1 and 1 on each axis
pub struct UnitCube {}

impl UnitCube {
    /// Axis with the largest absolute component.
    /// Ties on edges and corners resolve to x, then y, then z.
    pub fn dominant_axis(object_point: Vector) -> Axis {
        let abs_x = object_point.x().abs();
        let abs_y = object_point.y().abs();
        let abs_z = object_point.z().abs();

        if abs_x >= abs_y && abs_x >= abs_z {
            Axis::X
        } else if abs_y >= abs_z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    pub fn local_normal_at(object_point: Vector) -> Vector {
        match Self::dominant_axis(object_point) {
            Axis::X => Vector::new(object_point.x().signum(), 0., 0.),
            Axis::Y => Vector::new(0., object_point.y().signum(), 0.),
            Axis::Z => Vector::new(0., 0., object_point.z().signum()),
        }
    }

    /// The two components not along the face normal, mapped from [-1; 1] to [0; 1]
    pub fn texcoords_at(object_point: Vector) -> Vector {
        let (u, v) = match Self::dominant_axis(object_point) {
            Axis::X => (object_point.y(), object_point.z()),
            Axis::Y => (object_point.x(), object_point.z()),
            Axis::Z => (object_point.x(), object_point.y()),
        };
        Vector::new2((1. + u) / 2., (1. + v) / 2.)
    }

    /// Slab test, hits behind the ray origin don't count.
    /// A ray starting inside the cube doesn't hit it.
    pub fn local_intersect(object_ray: &Ray) -> Option<LocalHit> {
        let origin = object_ray.origin();
        let dir_inv = object_ray.direction().reciprocal();

        let (tmin, tmax) = Axis::ALL.iter().fold(
            (f64::NEG_INFINITY, f64::INFINITY),
            |(tmin, tmax), axis| {
                let (axis_tmin, axis_tmax) =
                    Self::cube_axis_intersec_times(origin[*axis], dir_inv[*axis]);
                (tmin.max(axis_tmin), tmax.min(axis_tmax))
            },
        );

        if tmax < tmin || tmin < 0. {
            return None;
        }

        let point = object_ray.point_at(tmin);
        Some(LocalHit {
            distance: tmin,
            point,
            normal: Self::local_normal_at(point),
            texcoords: Self::texcoords_at(point),
        })
    }

    fn cube_axis_intersec_times(origin: f64, dir_inv: f64) -> (f64, f64) {
        let tmin = (-1. - origin) * dir_inv;
        let tmax = (1. - origin) * dir_inv;

        if tmin < tmax { (tmin, tmax) } else { (tmax, tmin) }
    }
}
