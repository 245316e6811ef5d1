use crate::{
    math::{color::Color, vector::Vector},
    render::ray::{Ray, raycast_result::RaycastResult},
};

pub mod directional_light;
pub mod point_light;

pub use directional_light::DirectionalLight;
pub use point_light::PointLight;

#[derive(PartialEq, Debug, Clone)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
}

impl Light {
    pub fn color(&self) -> Color {
        match self {
            Light::Directional(light) => light.color(),
            Light::Point(light) => light.color(),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            Light::Directional(light) => light.set_color(color),
            Light::Point(light) => light.set_color(color),
        }
    }

    pub fn intensity(&self) -> f64 {
        match self {
            Light::Directional(light) => light.intensity(),
            Light::Point(light) => light.intensity(),
        }
    }

    pub fn set_intensity(&mut self, intensity: f64) {
        match self {
            Light::Directional(light) => light.set_intensity(intensity),
            Light::Point(light) => light.set_intensity(intensity),
        }
    }

    /// Ray from a surface point towards the light,
    /// to be cast against the scene and passed to [`Light::is_in_shadow`]
    pub fn ray_towards_source(&self, point: Vector) -> Ray {
        match self {
            Light::Directional(light) => light.ray_towards_source(point),
            Light::Point(light) => light.ray_towards_source(point),
        }
    }

    pub fn is_in_shadow(&self, point: Vector, raycast_result: &RaycastResult) -> bool {
        match self {
            Light::Directional(light) => light.is_in_shadow(point, raycast_result),
            Light::Point(light) => light.is_in_shadow(point, raycast_result),
        }
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Light::Directional(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}
