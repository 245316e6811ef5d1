pub mod pigment;

use crate::{
    math::{approx_eq::saturate, color::Color, vector::Vector},
    render::ray::Ray,
    shading::ray_context::RayContext,
};

use pigment::Pigment;

/// Offset along the normal for rays leaving a surface, avoids hitting the surface itself
pub const SHADOW_BIAS: f64 = 0.005;
pub const REFLECTION_BIAS: f64 = 0.005;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Lambertian surface lit by the scene's lights
    Diffuse(Pigment),
    /// Perfect mirror
    Reflective,
    /// Background, evaluates its pigment with the ray direction as coordinates
    Sky(Pigment),
}

impl Default for Material {
    fn default() -> Self {
        Self::Diffuse(Pigment::Solid(Color::red()))
    }
}

impl Material {
    pub fn diffuse(color: Color) -> Self {
        Self::Diffuse(Pigment::Solid(color))
    }

    /// Vertical gradient from gray at the horizon to white straight up
    pub fn default_sky() -> Self {
        Self::Sky(Pigment::gradient(Color::gray(), Color::white(), Vector::UP))
    }

    /// Color of the hit stored in `context`
    pub fn evaluate(&self, context: &RayContext) -> Color {
        match self {
            Self::Diffuse(pigment) => {
                pigment.color_at(context.raycast_result().texcoords()) * light_contribution(context)
            }
            Self::Reflective => reflected_color(context),
            Self::Sky(pigment) => pigment.color_at(*context.ray().direction()),
        }
    }
}

fn light_contribution(context: &RayContext) -> Color {
    let scene = context.scene();
    let point = context.raycast_result().point();
    let normal = context.raycast_result().normal();

    scene
        .lights()
        .map(|(_, light)| light)
        .fold(Color::black(), |acc, light| {
            let towards_light = light.ray_towards_source(point);
            let shadow_result = scene.raycast_with_bias(&towards_light, normal * SHADOW_BIAS);
            if light.is_in_shadow(point, &shadow_result) {
                return acc;
            }

            let factor = saturate(normal.dot(*towards_light.direction()));
            acc + light.color() * (light.intensity() * factor)
        })
}

fn reflected_color(context: &RayContext) -> Color {
    let hit = context.raycast_result();
    let origin = hit.point() + hit.normal() * REFLECTION_BIAS;
    let direction = context.ray().direction().reflect(hit.normal());

    context
        .integrator()
        .evaluate(Ray::new(origin, direction), context)
}
