pub mod cube;
pub mod sphere;

use crate::math::{
    transform::{Transform, TransformUpdate},
    vector::Vector,
};

use super::material::Material;

/// Intersection with a unit shape, everything in object space
#[derive(Debug, Clone, Copy)]
pub struct LocalHit {
    pub distance: f64,
    pub point: Vector,
    pub normal: Vector,
    pub texcoords: Vector,
}

/// Placement and look of a unit shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Primitive {
    transform: Transform,
    material: Material,
}

impl Primitive {
    pub fn new(transform: Transform, material: Material) -> Self {
        Self {
            transform,
            material,
        }
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

    pub fn material(&self) -> &Material {
        &self.material
    }
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }
}
