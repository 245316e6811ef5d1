pub mod camera;
pub mod light;
pub mod object;

use log::trace;
use slotmap::{SlotMap, new_key_type};

use crate::{
    math::{
        transform::{Transform, TransformUpdate},
        vector::Vector,
    },
    render::ray::{Ray, raycast_result::RaycastResult},
};

use light::Light;
use object::{Shape, material::Material};

new_key_type! {
    /// Handle of a shape added to a scene
    pub struct ShapeKey;
    /// Handle of a light added to a scene
    pub struct LightKey;
}

/// Set of shapes and lights, itself placeable as a shape.
/// Rays that hit nothing take the color of the scene's material, the sky.
#[derive(Debug, Clone)]
pub struct Scene {
    transform: Transform,
    material: Material,
    shapes: SlotMap<ShapeKey, Shape>,
    lights: SlotMap<LightKey, Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::with_material(Material::default_sky())
    }

    pub fn with_material(material: Material) -> Self {
        Self {
            transform: Transform::default(),
            material,
            shapes: SlotMap::with_key(),
            lights: SlotMap::with_key(),
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

    pub fn add_shape(&mut self, shape: Shape) -> ShapeKey {
        let key = self.shapes.insert(shape);
        trace!("added shape {key:?}, {} in scene", self.shapes.len());
        key
    }

    pub fn remove_shape(&mut self, key: ShapeKey) -> Option<Shape> {
        let removed = self.shapes.remove(key);
        if removed.is_some() {
            trace!("removed shape {key:?}, {} in scene", self.shapes.len());
        }
        removed
    }

    pub fn shape(&self, key: ShapeKey) -> Option<&Shape> {
        self.shapes.get(key)
    }
    pub fn shape_mut(&mut self, key: ShapeKey) -> Option<&mut Shape> {
        self.shapes.get_mut(key)
    }
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeKey, &Shape)> {
        self.shapes.iter()
    }

    pub fn add_light(&mut self, light: Light) -> LightKey {
        let key = self.lights.insert(light);
        trace!("added light {key:?}, {} in scene", self.lights.len());
        key
    }

    pub fn remove_light(&mut self, key: LightKey) -> Option<Light> {
        let removed = self.lights.remove(key);
        if removed.is_some() {
            trace!("removed light {key:?}, {} in scene", self.lights.len());
        }
        removed
    }

    pub fn light(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }
    pub fn light_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        self.lights.get_mut(key)
    }
    pub fn lights(&self) -> impl Iterator<Item = (LightKey, &Light)> {
        self.lights.iter()
    }

    /// Nearest hit among all shapes.
    /// The ray and the result are in the space the scene is placed in.
    pub fn raycast(&self, ray: &Ray) -> RaycastResult<'_> {
        let local_ray = self.transform.inverse_transform_ray(ray);

        self.shapes
            .values()
            .map(|shape| shape.raycast(&local_ray))
            .filter(RaycastResult::is_hit)
            .min_by(|a, b| a.distance().total_cmp(&b.distance()))
            .map_or(RaycastResult::NO_HIT, |hit| {
                hit.transformed(&self.transform, *ray.origin())
            })
    }

    /// Casts the ray with its origin moved by `bias`
    pub fn raycast_with_bias(&self, ray: &Ray, bias: Vector) -> RaycastResult<'_> {
        self.raycast(&Ray::new(*ray.origin() + bias, *ray.direction()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{approx_eq::ApproxEq, color::Color},
        scene::light::DirectionalLight,
    };

    fn sphere_at(position: Vector, color: Color) -> Shape {
        Shape::sphere_with(
            Transform::new(position, Vector::ZERO, Vector::ONE),
            Material::diffuse(color),
        )
    }

    #[test]
    fn returns_nearer_hit() {
        let mut scene = Scene::new();
        let far = scene.add_shape(sphere_at(Vector::new(0., 10., 0.), Color::blue()));
        let near = scene.add_shape(sphere_at(Vector::new(0., 4., 0.), Color::green()));

        let hit = scene.raycast(&Ray::new(Vector::ZERO, Vector::FORWARD));
        assert!(hit.is_hit());
        assert!(std::ptr::eq(hit.shape().unwrap(), scene.shape(near).unwrap()));
        assert!(!std::ptr::eq(hit.shape().unwrap(), scene.shape(far).unwrap()));
        assert_approx_eq_low_prec!(hit.distance(), 3.);
        assert_approx_eq_low_prec!(hit.point(), Vector::new(0., 3., 0.));
    }

    #[test]
    fn empty_scene_misses() {
        let scene = Scene::new();
        let hit = scene.raycast(&Ray::new(Vector::ZERO, Vector::FORWARD));
        assert!(!hit.is_hit());
    }

    #[test]
    fn scene_transform_applies_to_children() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::sphere());
        scene.set_transform(Transform::new(
            Vector::new(0., 5., 0.),
            Vector::ZERO,
            Vector::new(2., 2., 2.),
        ));

        let hit = scene.raycast(&Ray::new(Vector::ZERO, Vector::FORWARD));
        assert_approx_eq_low_prec!(hit.distance(), 3.);
        assert_approx_eq_low_prec!(hit.point(), Vector::new(0., 3., 0.));
        assert_approx_eq_low_prec!(hit.normal(), Vector::BACKWARD);
    }

    #[test]
    fn nested_scene_hit_reports_leaf_shape() {
        let mut inner = Scene::new();
        inner.add_shape(sphere_at(Vector::ZERO, Color::green()));
        inner.update_transform(TransformUpdate::new().position(Vector::new(0., 0., -3.)));

        let mut outer = Scene::new();
        outer.add_shape(inner.into());

        let hit = outer.raycast(&Ray::new(Vector::ZERO, Vector::DOWN));
        assert_approx_eq_low_prec!(hit.distance(), 2.);
        assert_eq!(
            *hit.shape().unwrap().material(),
            Material::diffuse(Color::green())
        );
    }

    #[test]
    fn bias_moves_origin() {
        let mut scene = Scene::new();
        scene.add_shape(Shape::sphere());

        // starting on the surface, without bias the ray hits the sphere itself
        let ray = Ray::new(Vector::UP, Vector::UP);
        assert!(scene.raycast(&ray).is_hit());
        assert!(!scene.raycast_with_bias(&ray, Vector::UP * 0.005).is_hit());
    }

    #[test]
    fn add_and_remove() {
        let mut scene = Scene::new();
        let shape = scene.add_shape(Shape::cube());
        let light = scene.add_light(DirectionalLight::default().into());
        assert_eq!(scene.shapes().count(), 1);
        assert_eq!(scene.lights().count(), 1);

        scene
            .light_mut(light)
            .unwrap()
            .set_color(Color::red());
        assert_approx_eq_low_prec!(scene.light(light).unwrap().color(), Color::red());

        assert!(scene.remove_shape(shape).is_some());
        assert!(scene.remove_shape(shape).is_none());
        assert!(scene.shape(shape).is_none());
        assert!(scene.remove_light(light).is_some());
        assert_eq!(scene.shapes().count(), 0);
        assert_eq!(scene.lights().count(), 0);
    }

    #[test]
    fn default_sky() {
        let mut scene = Scene::new();
        assert_eq!(*scene.material(), Material::default_sky());

        scene.set_material(Material::Sky(Color::black().into()));
        assert_eq!(*scene.material(), Material::Sky(Color::black().into()));
    }
}
