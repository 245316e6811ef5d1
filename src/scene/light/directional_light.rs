use crate::{
    math::{color::Color, vector::Vector},
    render::ray::{Ray, raycast_result::RaycastResult},
};

/// Light coming from infinitely far away, travelling along `direction`
#[derive(PartialEq, Debug, Clone)]
pub struct DirectionalLight {
    color: Color,
    intensity: f64,
    direction: Vector,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Color::white(),
            intensity: 1.,
            direction: Vector::DOWN,
        }
    }
}

impl DirectionalLight {
    pub fn new(direction: Vector, color: Color, intensity: f64) -> Self {
        Self {
            color,
            intensity,
            direction: direction.normalize(),
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

    pub fn direction(&self) -> Vector {
        self.direction
    }
    pub fn set_direction(&mut self, direction: Vector) {
        self.direction = direction.normalize();
    }

    pub fn ray_towards_source(&self, point: Vector) -> Ray {
        Ray::new(point, -self.direction)
    }

    /// The source is infinitely far, so any hit blocks it
    pub fn is_in_shadow(&self, _point: Vector, raycast_result: &RaycastResult) -> bool {
        raycast_result.is_hit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::approx_eq::ApproxEq, scene::object::Shape};

    #[test]
    fn direction_is_normalized() {
        let mut light = DirectionalLight::new(Vector::new(0., 0., -4.), Color::white(), 1.);
        assert_approx_eq_low_prec!(light.direction(), Vector::DOWN);

        light.set_direction(Vector::new(3., 0., 0.));
        assert_approx_eq_low_prec!(light.direction(), Vector::RIGHT);
    }

    #[test]
    fn ray_points_against_direction() {
        let light = DirectionalLight::new(Vector::DOWN, Color::white(), 1.);
        let ray = light.ray_towards_source(Vector::new(1., 1., 1.));
        assert_approx_eq_low_prec!(*ray.direction(), Vector::UP);
    }

    #[test]
    fn any_hit_is_shadow() {
        let shape = Shape::cube();
        let light = DirectionalLight::default();
        let far_hit = RaycastResult::new(&shape, 1e6, Vector::ZERO, Vector::UP, Vector::ZERO_2D);

        assert!(light.is_in_shadow(Vector::ZERO, &far_hit));
        assert!(!light.is_in_shadow(Vector::ZERO, &RaycastResult::NO_HIT));
    }
}
