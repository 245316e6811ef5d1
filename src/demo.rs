pub mod parrot;
pub mod spheres;

use std::fmt::Display;

use clap::ValueEnum;

use crate::{
    math::{transform::TransformUpdate, vector::Vector},
    scene::{Scene, camera::PerspectiveCamera},
};

/// Animated scene, updated between rendered frames
pub trait Demo {
    /// Builds the scene for the first frame
    fn build_scene(&mut self) -> Scene;

    /// Prepares the next frame, never called while a frame is rendered
    fn update(&mut self, scene: &mut Scene, camera: &mut PerspectiveCamera);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    Spheres,
    Parrot,
}

impl DemoKind {
    pub fn create(self) -> Box<dyn Demo> {
        match self {
            DemoKind::Spheres => Box::new(spheres::SpheresDemo::new()),
            DemoKind::Parrot => Box::new(parrot::ParrotDemo::new()),
        }
    }
}

impl Display for DemoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoKind::Spheres => write!(f, "spheres"),
            DemoKind::Parrot => write!(f, "parrot"),
        }
    }
}

/// Camera circling the origin at a fixed pitch, always looking at it
#[derive(Debug, Clone, Copy)]
pub struct Orbit {
    /// Degrees around the up axis
    yaw: f64,
    /// Degrees, negative looks down
    pitch: f64,
    distance: f64,
}

impl Orbit {
    pub const YAW_STEP: f64 = 12.;
    pub const DISTANCE: f64 = 8.;

    pub fn new(pitch: f64) -> Self {
        Self {
            yaw: 0.,
            pitch,
            distance: Self::DISTANCE,
        }
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Turns by one step and moves the camera back along its view direction
    pub fn advance(&mut self, camera: &mut PerspectiveCamera) {
        self.yaw += Self::YAW_STEP;

        camera.update_transform(
            TransformUpdate::new().rotation(Vector::new(self.pitch, 0., self.yaw)),
        );
        let backward = camera.transform().transform_direction(Vector::BACKWARD) * self.distance;
        camera.update_transform(TransformUpdate::new().position(backward));
    }
}
