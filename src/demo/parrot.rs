use crate::{
    demo::{Demo, Orbit},
    math::{color::Color, transform::Transform, vector::Vector},
    scene::{
        Scene, ShapeKey,
        camera::PerspectiveCamera,
        light::DirectionalLight,
        object::{Shape, material::Material},
    },
};

const PARROT_COLORS: [(f64, f64, f64); 9] = [
    (1.00, 0.55, 0.54),
    (0.99, 0.83, 0.53),
    (0.53, 1.00, 0.53),
    (0.52, 1.00, 1.00),
    (0.54, 0.71, 0.99),
    (0.84, 0.54, 1.00),
    (1.00, 0.54, 1.00),
    (1.00, 0.40, 0.96),
    (0.99, 0.42, 0.71),
];

const BEAK_COLOR: (f64, f64, f64) = (0.48, 0.54, 0.40);

fn color((r, g, b): (f64, f64, f64)) -> Color {
    Color::new(r, g, b)
}

/// Parrot made of stretched spheres, its feathers change color every frame
pub struct ParrotDemo {
    orbit: Orbit,
    color_index: usize,
    feathered: Vec<ShapeKey>,
}

impl ParrotDemo {
    const PITCH: f64 = -30.;

    pub fn new() -> Self {
        Self {
            orbit: Orbit::new(Self::PITCH),
            color_index: 0,
            feathered: Vec::new(),
        }
    }

    fn feather_material(&self) -> Material {
        Material::diffuse(color(PARROT_COLORS[self.color_index]))
    }
}

impl Default for ParrotDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for ParrotDemo {
    fn build_scene(&mut self) -> Scene {
        let mut scene = Scene::new();
        scene.add_light(
            DirectionalLight::new(Vector::new(-0.5, 0.5, -1.), color(PARROT_COLORS[0]), 1.).into(),
        );
        scene.add_light(
            DirectionalLight::new(Vector::new(0.5, -0.25, -1.), color(PARROT_COLORS[4]), 1.)
                .into(),
        );

        scene.add_shape(Shape::cube_with(
            Transform::new(Vector::ZERO, Vector::ZERO, Vector::new(4., 4., 0.25)),
            Material::Reflective,
        ));

        let feathers = self.feather_material();
        let beak = Material::diffuse(color(BEAK_COLOR));
        let parts = [
            // body
            (
                Vector::new(0., 0., 0.288),
                Vector::ZERO,
                Vector::new(1.285, 1.218, 1.803),
                feathers,
            ),
            // head
            (
                Vector::new(0., -0.106, 1.572),
                Vector::new(14.2, 0., 0.),
                Vector::new(1., 1., 1.361),
                feathers,
            ),
            // upper beak
            (
                Vector::new(0., -1.09, 1.848),
                Vector::ZERO,
                Vector::new(0.243, 0.243, 0.243),
                beak,
            ),
            // lower beak
            (
                Vector::new(0., -1.161, 1.636),
                Vector::new(-5.39, 0., 0.),
                Vector::new(0.243, 0.255, 0.395),
                beak,
            ),
            // eyes
            (
                Vector::new(0.439, -0.892, 2.21),
                Vector::ZERO,
                Vector::new(0.179, 0.179, 0.246),
                Material::Reflective,
            ),
            (
                Vector::new(-0.439, -0.892, 2.21),
                Vector::ZERO,
                Vector::new(0.179, 0.179, 0.246),
                Material::Reflective,
            ),
        ];

        self.feathered.clear();
        for (position, rotation, scale, material) in parts {
            let key = scene.add_shape(Shape::sphere_with(
                Transform::new(position, rotation, scale),
                material,
            ));
            if material == feathers {
                self.feathered.push(key);
            }
        }
        scene
    }

    fn update(&mut self, scene: &mut Scene, camera: &mut PerspectiveCamera) {
        self.color_index = (self.color_index + 1) % PARROT_COLORS.len();
        let feathers = self.feather_material();
        for key in &self.feathered {
            if let Some(shape) = scene.shape_mut(*key) {
                shape.set_material(feathers);
            }
        }

        self.orbit.advance(camera);
    }
}
