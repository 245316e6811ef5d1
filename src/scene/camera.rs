use derive_builder::Builder;

use crate::{
    math::{
        transform::{Transform, TransformUpdate},
        vector::Vector,
    },
    render::ray::Ray,
};

// camera looks toward +y from the origin, +x is right and +z is up
#[derive(PartialEq, Debug, Clone, Builder)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct PerspectiveCamera {
    /// Width divided by height
    aspect_ratio: f64,
    /// Vertical field of view in degrees
    field_of_view: f64,
    transform: Transform,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            aspect_ratio: Self::DEFAULT_ASPECT_RATIO,
            field_of_view: Self::DEFAULT_FIELD_OF_VIEW,
            transform: Transform::default(),
        }
    }
}

impl PerspectiveCameraBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(fov) = self.field_of_view {
            if !(fov > 0. && fov < 180.) {
                return Err(format!(
                    "field of view must be between 0 and 180 degrees, got {fov}"
                ));
            }
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            if !(aspect_ratio > 0.) {
                return Err(format!("aspect ratio must be positive, got {aspect_ratio}"));
            }
        }
        Ok(())
    }
}

impl PerspectiveCamera {
    pub const DEFAULT_ASPECT_RATIO: f64 = 1.;
    pub const DEFAULT_FIELD_OF_VIEW: f64 = 60.;

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        self.aspect_ratio = aspect_ratio;
    }
    pub fn set_aspect_ratio_from_size(&mut self, width: usize, height: usize) {
        assert!(height > 0, "can't compute aspect ratio of zero height");
        self.aspect_ratio = width as f64 / height as f64;
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }
    pub fn set_field_of_view(&mut self, degrees: f64) {
        self.field_of_view = degrees;
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }
    pub fn update_transform(&mut self, update: TransformUpdate) {
        self.transform.update(update);
    }

    /// View space ray through normalized screen coordinates,
    /// `(0, 0)` is the top left corner and `(1, 1)` the bottom right.
    /// Placing it in the world is up to the caller, see [`PerspectiveCamera::transform`].
    pub fn ray(&self, u: f64, v: f64) -> Ray {
        let half_height = (self.field_of_view.to_radians() / 2.).tan();
        let half_width = half_height * self.aspect_ratio;

        let target = Vector::new(
            (2. * u - 1.) * half_width,
            1.,
            (1. - 2. * v) * half_height,
        );
        Ray::look_at(Vector::ZERO, target)
    }
}
