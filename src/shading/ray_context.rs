use crate::{
    render::ray::{Ray, raycast_result::RaycastResult},
    scene::Scene,
};

use super::integrator::Integrator;

/// State of one step of a recursive evaluation.
/// Every step builds a new context instead of changing the previous one.
#[derive(Clone, Copy)]
pub struct RayContext<'a> {
    integrator: &'a Integrator<'a>,
    ray: Ray,
    raycast_result: RaycastResult<'a>,
    depth: usize,
}

impl<'a> RayContext<'a> {
    pub fn new(
        integrator: &'a Integrator<'a>,
        ray: Ray,
        raycast_result: RaycastResult<'a>,
        depth: usize,
    ) -> Self {
        Self {
            integrator,
            ray,
            raycast_result,
            depth,
        }
    }

    pub fn integrator(&self) -> &'a Integrator<'a> {
        self.integrator
    }

    pub fn scene(&self) -> &'a Scene {
        self.integrator.scene()
    }

    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    pub fn raycast_result(&self) -> &RaycastResult<'a> {
        &self.raycast_result
    }

    /// 0 for camera rays, every hit adds 1
    pub fn depth(&self) -> usize {
        self.depth
    }
}
