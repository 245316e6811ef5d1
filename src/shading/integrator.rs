use crate::{
    math::color::Color,
    render::ray::{Ray, raycast_result::RaycastResult},
    scene::{Scene, object::material::Material},
};

use super::ray_context::RayContext;

#[derive(Debug, Clone, Copy)]
/// The integrator calculates the color for each given ray
pub struct Integrator<'a> {
    /// The scene to be rendered
    scene: &'a Scene,
    /// Number of bounces a ray may take, 0 means no reflections
    ray_depth_limit: usize,
}

impl<'a> Integrator<'a> {
    pub const DEFAULT_RAY_DEPTH_LIMIT: usize = 4;

    pub fn new(scene: &'a Scene, ray_depth_limit: usize) -> Self {
        Self {
            scene,
            ray_depth_limit,
        }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn ray_depth_limit(&self) -> usize {
        self.ray_depth_limit
    }

    /// The main method for calculating color for the given ray
    pub fn color_at(&self, ray: Ray) -> Color {
        let context = RayContext::new(self, ray, RaycastResult::NO_HIT, 0);
        self.evaluate(ray, &context)
    }

    /// Color seen along `ray`, cast from the step described by `context`.
    /// Past the depth limit only the sky is evaluated, the scene is not cast against.
    pub fn evaluate(&self, ray: Ray, context: &RayContext) -> Color {
        let depth = context.depth();
        if depth > self.ray_depth_limit {
            return self.sky_color(ray, depth);
        }

        let hit = self.scene.raycast(&ray);
        match hit.shape() {
            Some(shape) => {
                let next = RayContext::new(self, ray, hit, depth + 1);
                shape.material().evaluate(&next)
            }
            None => self.sky_color(ray, depth),
        }
    }

    /// A reflective sky has nothing to reflect and is black
    fn sky_color(&self, ray: Ray, depth: usize) -> Color {
        match self.scene.material() {
            Material::Reflective => Color::black(),
            material => material.evaluate(&RayContext::new(self, ray, RaycastResult::NO_HIT, depth)),
        }
    }
}
