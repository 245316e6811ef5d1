use crate::{
    demo::{Demo, Orbit},
    math::{color::Color, transform::Transform, vector::Vector},
    scene::{
        Scene,
        camera::PerspectiveCamera,
        light::DirectionalLight,
        object::{Shape, material::Material},
    },
};

/// Mirror floor with two mirror spheres and a white one between them
pub struct SpheresDemo {
    orbit: Orbit,
}

impl SpheresDemo {
    const PITCH: f64 = -45.;

    pub fn new() -> Self {
        Self {
            orbit: Orbit::new(Self::PITCH),
        }
    }
}

impl Default for SpheresDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for SpheresDemo {
    fn build_scene(&mut self) -> Scene {
        let mut scene = Scene::new();
        scene.add_light(
            DirectionalLight::new(Vector::new(-1., -1., -1.), Color::white(), 1.).into(),
        );

        scene.add_shape(Shape::cube_with(
            Transform::new(
                Vector::new(0., 0., -1.),
                Vector::ZERO,
                Vector::new(4., 4., 1.),
            ),
            Material::Reflective,
        ));

        for i in [-1., 0., 1.] {
            let material = if i == 0. {
                Material::diffuse(Color::white())
            } else {
                Material::Reflective
            };
            scene.add_shape(Shape::sphere_with(
                Transform::new(Vector::new(i, 0., 1. + i), Vector::ZERO, Vector::ONE),
                material,
            ));
        }
        scene
    }

    fn update(&mut self, _scene: &mut Scene, camera: &mut PerspectiveCamera) {
        self.orbit.advance(camera);
    }
}
