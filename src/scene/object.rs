pub mod material;
pub mod primitive;

use crate::{
    math::transform::{Transform, TransformUpdate},
    render::ray::{Ray, raycast_result::RaycastResult},
    scene::Scene,
};

use material::Material;
use primitive::{LocalHit, Primitive, cube::UnitCube, sphere::UnitSphere};

/// Anything a ray can be cast against.
/// A scene is a shape too, so scenes nest.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Primitive),
    Cube(Primitive),
    Scene(Scene),
}

impl Shape {
    pub fn sphere() -> Self {
        Self::Sphere(Primitive::default())
    }

    pub fn cube() -> Self {
        Self::Cube(Primitive::default())
    }

    pub fn sphere_with(transform: Transform, material: Material) -> Self {
        Self::Sphere(Primitive::new(transform, material))
    }

    pub fn cube_with(transform: Transform, material: Material) -> Self {
        Self::Cube(Primitive::new(transform, material))
    }

    pub fn transform(&self) -> &Transform {
        match self {
            Shape::Sphere(primitive) | Shape::Cube(primitive) => primitive.transform(),
            Shape::Scene(scene) => scene.transform(),
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        match self {
            Shape::Sphere(primitive) | Shape::Cube(primitive) => primitive.set_transform(transform),
            Shape::Scene(scene) => scene.set_transform(transform),
        }
    }

    pub fn update_transform(&mut self, update: TransformUpdate) {
        match self {
            Shape::Sphere(primitive) | Shape::Cube(primitive) => primitive.update_transform(update),
            Shape::Scene(scene) => scene.update_transform(update),
        }
    }

    /// For scenes this is the sky
    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere(primitive) | Shape::Cube(primitive) => primitive.material(),
            Shape::Scene(scene) => scene.material(),
        }
    }

    pub fn set_material(&mut self, material: Material) {
        match self {
            Shape::Sphere(primitive) | Shape::Cube(primitive) => primitive.set_material(material),
            Shape::Scene(scene) => scene.set_material(material),
        }
    }

    /// Casts a ray given in the space this shape is placed in.
    /// The result is in that same space.
    pub fn raycast(&self, ray: &Ray) -> RaycastResult<'_> {
        match self {
            Shape::Sphere(primitive) => {
                self.raycast_primitive(primitive, ray, UnitSphere::local_intersect)
            }
            Shape::Cube(primitive) => {
                self.raycast_primitive(primitive, ray, UnitCube::local_intersect)
            }
            Shape::Scene(scene) => scene.raycast(ray),
        }
    }

    fn raycast_primitive(
        &self,
        primitive: &Primitive,
        ray: &Ray,
        local_intersect: fn(&Ray) -> Option<LocalHit>,
    ) -> RaycastResult<'_> {
        let transform = primitive.transform();
        let object_ray = transform.inverse_transform_ray(ray);

        local_intersect(&object_ray).map_or(RaycastResult::NO_HIT, |hit| {
            RaycastResult::new(self, hit.distance, hit.point, hit.normal, hit.texcoords)
                .transformed(transform, *ray.origin())
        })
    }
}

impl From<Scene> for Shape {
    fn from(scene: Scene) -> Self {
        Shape::Scene(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{approx_eq::ApproxEq, color::Color, vector::Vector},
    };

    fn down_from_above() -> Ray {
        Ray::new(Vector::new(0., 0., 5.), Vector::new(0., 0., -1.))
    }

    #[test]
    fn unit_cube_hit() {
        let cube = Shape::cube();
        let hit = cube.raycast(&down_from_above());

        assert!(hit.is_hit());
        assert!(std::ptr::eq(hit.shape().unwrap(), &cube));
        assert_approx_eq_low_prec!(hit.distance(), 4.);
        assert_approx_eq_low_prec!(hit.point(), Vector::new(0., 0., 1.));
        assert_approx_eq_low_prec!(hit.normal(), Vector::new(0., 0., 1.));
    }

    #[test]
    fn unit_sphere_hit() {
        let sphere = Shape::sphere();
        let hit = sphere.raycast(&down_from_above());

        assert!(hit.is_hit());
        assert_approx_eq_low_prec!(hit.distance(), 4.);
        assert_approx_eq_low_prec!(hit.point(), Vector::new(0., 0., 1.));
        assert_approx_eq_low_prec!(hit.normal(), Vector::new(0., 0., 1.));
        assert_approx_eq_low_prec!(hit.normal().length(), 1.);
    }

    #[test]
    fn transformed_sphere_hit_is_in_world_space() {
        let sphere = Shape::sphere_with(
            Transform::new(Vector::new(1., 0., 0.), Vector::ZERO, Vector::new(2., 2., 2.)),
            Material::default(),
        );
        let hit = sphere.raycast(&Ray::new(Vector::new(1., 0., 10.), Vector::DOWN));

        assert_approx_eq_low_prec!(hit.distance(), 8.);
        assert_approx_eq_low_prec!(hit.point(), Vector::new(1., 0., 2.));
        assert_approx_eq_low_prec!(hit.normal(), Vector::UP);
    }

    #[test]
    fn stretched_sphere_normal_is_unit_length() {
        let sphere = Shape::sphere_with(
            Transform::new(Vector::ZERO, Vector::new(0., 0., 30.), Vector::new(1., 3., 0.5)),
            Material::default(),
        );
        let hit = sphere.raycast(&Ray::look_at(Vector::new(4., 5., 6.), Vector::ZERO));

        assert!(hit.is_hit());
        assert_approx_eq_low_prec!(hit.normal().length(), 1.);
    }

    #[test]
    fn rotated_cube_hit() {
        let cube = Shape::cube_with(
            Transform::new(Vector::ZERO, Vector::new(0., 0., 45.), Vector::ONE),
            Material::default(),
        );
        let hit = cube.raycast(&Ray::new(Vector::new(5., 0., 0.), Vector::LEFT));

        assert_approx_eq_low_prec!(hit.distance(), 5. - std::f64::consts::SQRT_2);
    }

    #[test]
    fn miss_is_no_hit() {
        let sphere = Shape::sphere();
        let hit = sphere.raycast(&Ray::new(Vector::new(3., 0., 5.), Vector::DOWN));

        assert!(!hit.is_hit());
        assert_approx_eq_low_prec!(hit.distance(), -1.);
    }

    #[test]
    fn material_and_transform_accessors() {
        let mut shape = Shape::cube();
        shape.set_material(Material::diffuse(Color::blue()));
        shape.update_transform(TransformUpdate::new().position(Vector::new(0., 0., 2.)));

        assert_eq!(*shape.material(), Material::diffuse(Color::blue()));
        assert_approx_eq_low_prec!(shape.transform().position(), Vector::new(0., 0., 2.));
    }
}
