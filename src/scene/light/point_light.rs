use crate::{
    math::{color::Color, vector::Vector},
    render::ray::{Ray, raycast_result::RaycastResult},
};

/// Light emanating from a single point in space
#[derive(PartialEq, Debug, Clone)]
pub struct PointLight {
    color: Color,
    intensity: f64,
    position: Vector,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: Color::white(),
            intensity: 1.,
            position: Vector::ZERO,
        }
    }
}

impl PointLight {
    pub fn new(position: Vector, color: Color, intensity: f64) -> Self {
        Self {
            color,
            intensity,
            position,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }
    pub fn set_intensity(&mut self, intensity: f64) {
        self.intensity = intensity;
    }

    pub fn position(&self) -> Vector {
        self.position
    }
    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    pub fn ray_towards_source(&self, point: Vector) -> Ray {
        Ray::look_at(point, self.position)
    }

    /// Only hits closer than the light itself cast a shadow
    pub fn is_in_shadow(&self, point: Vector, raycast_result: &RaycastResult) -> bool {
        raycast_result.is_hit() && raycast_result.distance() < point.distance(self.position)
    }
}
