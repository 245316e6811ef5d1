use crate::render::ray::Ray;

use super::{matrix::Matrix, vector::Vector};

/// Position, rotation (degrees per axis) and scale of an object,
/// with the forward and inverse matrices derived from them.
///
/// The forward matrix applies scale, then rotation around x, y and z, then translation.
/// The inverse matrix undoes those steps in the mirrored order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Vector,
    rotation: Vector,
    scale: Vector,
    matrix: Matrix,
    inverse_matrix: Matrix,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vector::ZERO, Vector::ZERO, Vector::ONE)
    }
}

impl Transform {
    pub fn new(position: Vector, rotation: Vector, scale: Vector) -> Self {
        let rotation = wrap_degrees(rotation);
        Self {
            position,
            rotation,
            scale,
            matrix: forward_matrix(position, rotation, scale),
            inverse_matrix: inverse_matrix(position, rotation, scale),
        }
    }

    pub fn position(&self) -> Vector {
        self.position
    }
    /// Degrees per axis, each in [0; 360)
    pub fn rotation(&self) -> Vector {
        self.rotation
    }
    pub fn scale(&self) -> Vector {
        self.scale
    }
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
    pub fn inverse_matrix(&self) -> &Matrix {
        &self.inverse_matrix
    }

    /// Applies every change in `update` and recomputes both matrices.
    pub fn update(&mut self, update: TransformUpdate) {
        *self = self.updated(update);
    }

    pub fn updated(&self, update: TransformUpdate) -> Self {
        let position = update.position.unwrap_or(self.position) + update.translation;
        let rotation = update.rotation.unwrap_or(self.rotation) + update.rotation_delta;
        let scale = update.scale.unwrap_or(self.scale) * update.scale_factor;
        Self::new(position, rotation, scale)
    }

    pub fn transform_point(&self, point: Vector) -> Vector {
        apply_to_point(&self.matrix, point)
    }

    pub fn inverse_transform_point(&self, point: Vector) -> Vector {
        apply_to_point(&self.inverse_matrix, point)
    }

    /// Ignores translation
    pub fn transform_direction(&self, direction: Vector) -> Vector {
        (self.matrix * direction.as_homogeneous_direction()).as_cartesian()
    }

    /// Maps an object space normal to a unit world space normal.
    /// Uses the inverse transpose so normals stay perpendicular under non-uniform scale.
    pub fn transform_normal(&self, normal: Vector) -> Vector {
        (self.inverse_matrix.transpose() * normal.as_homogeneous_direction())
            .as_cartesian()
            .normalize()
    }

    pub fn transform_ray(&self, ray: &Ray) -> Ray {
        apply_to_ray(&self.matrix, ray)
    }

    pub fn inverse_transform_ray(&self, ray: &Ray) -> Ray {
        apply_to_ray(&self.inverse_matrix, ray)
    }
}

fn wrap_degrees(rotation: Vector) -> Vector {
    rotation.map(|degrees| degrees.rem_euclid(360.))
}

fn rotation_matrices(rotation: Vector) -> [Matrix; 3] {
    [
        Matrix::rotation_x(rotation.x().to_radians()),
        Matrix::rotation_y(rotation.y().to_radians()),
        Matrix::rotation_z(rotation.z().to_radians()),
    ]
}

fn forward_matrix(position: Vector, rotation: Vector, scale: Vector) -> Matrix {
    let [rotate_x, rotate_y, rotate_z] = rotation_matrices(rotation);
    Matrix::translation(position) * rotate_z * rotate_y * rotate_x * Matrix::scaling(scale)
}

fn inverse_matrix(position: Vector, rotation: Vector, scale: Vector) -> Matrix {
    let [rotate_x, rotate_y, rotate_z] = rotation_matrices(-rotation);
    Matrix::scaling(scale.reciprocal())
        * rotate_x
        * rotate_y
        * rotate_z
        * Matrix::translation(-position)
}

fn apply_to_point(matrix: &Matrix, point: Vector) -> Vector {
    (matrix * point.as_homogeneous_point()).as_cartesian()
}

/// Maps the origin and the point at distance 1, then looks from one to the other.
fn apply_to_ray(matrix: &Matrix, ray: &Ray) -> Ray {
    let from = apply_to_point(matrix, *ray.origin());
    let at = apply_to_point(matrix, ray.point_at(1.));
    Ray::look_at(from, at)
}

/// Set of changes applied atomically by [`Transform::update`].
/// Absolute values replace the current ones, relative ones are composed
/// with whatever is current when the update is applied.
#[derive(Debug, Clone, Copy)]
pub struct TransformUpdate {
    position: Option<Vector>,
    rotation: Option<Vector>,
    scale: Option<Vector>,
    translation: Vector,
    rotation_delta: Vector,
    scale_factor: Vector,
}

impl Default for TransformUpdate {
    fn default() -> Self {
        Self {
            position: None,
            rotation: None,
            scale: None,
            translation: Vector::ZERO,
            rotation_delta: Vector::ZERO,
            scale_factor: Vector::ONE,
        }
    }
}

impl TransformUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Vector) -> Self {
        self.position = Some(position);
        self
    }

    /// Degrees per axis
    pub fn rotation(mut self, rotation: Vector) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn scale(mut self, scale: Vector) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn translate(mut self, offset: Vector) -> Self {
        self.translation = self.translation + offset;
        self
    }

    pub fn rotate(mut self, degrees: Vector) -> Self {
        self.rotation_delta = self.rotation_delta + degrees;
        self
    }

    pub fn scale_by(mut self, factors: Vector) -> Self {
        self.scale_factor = self.scale_factor * factors;
        self
    }
}
