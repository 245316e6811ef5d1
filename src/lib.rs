pub mod demo;
pub mod error;
pub mod scene;

pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod matrix;
    pub mod transform;
    pub mod vector;

    pub use color::Color;
}

pub mod render {
    pub mod canvas;
    pub mod display;
    pub mod ray;
    pub mod raytracer;
    pub mod recorder;
}

pub mod shading {
    pub mod integrator;
    pub mod ray_context;
}

pub use error::{Error, Result};
