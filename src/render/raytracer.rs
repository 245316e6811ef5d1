use std::time::Instant;

use log::debug;

use crate::{
    math::color::Color,
    render::{canvas::Canvas, display::DisplaySurface, ray::Ray},
    scene::{Scene, camera::PerspectiveCamera},
    shading::integrator::Integrator,
};

/// Renders a scene as seen by a camera into a display surface
pub struct Raytracer<D: DisplaySurface> {
    scene: Scene,
    camera: PerspectiveCamera,
    display: D,
    ray_depth_limit: usize,
}

impl<D: DisplaySurface> Raytracer<D> {
    /// Empty scene, default camera fitted to the display's aspect ratio
    pub fn new(display: D) -> Self {
        let mut camera = PerspectiveCamera::default();
        if display.height() > 0 {
            camera.set_aspect_ratio_from_size(display.width(), display.height());
        }
        Self {
            scene: Scene::new(),
            camera,
            display,
            ray_depth_limit: Integrator::DEFAULT_RAY_DEPTH_LIMIT,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }
    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }
    pub fn set_camera(&mut self, camera: PerspectiveCamera) {
        self.camera = camera;
    }

    /// Both at once, for updates that move the camera along with the scene
    pub fn scene_and_camera_mut(&mut self) -> (&mut Scene, &mut PerspectiveCamera) {
        (&mut self.scene, &mut self.camera)
    }

    pub fn display(&self) -> &D {
        &self.display
    }
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
    pub fn set_display(&mut self, display: D) {
        self.display = display;
    }
    pub fn into_display(self) -> D {
        self.display
    }

    pub fn ray_depth_limit(&self) -> usize {
        self.ray_depth_limit
    }
    pub fn set_ray_depth_limit(&mut self, ray_depth_limit: usize) {
        self.ray_depth_limit = ray_depth_limit;
    }

    /// Color seen along a world space ray
    pub fn evaluate_ray(&self, ray: Ray) -> Color {
        Integrator::new(&self.scene, self.ray_depth_limit).color_at(ray)
    }

    /// World space ray through the center of a pixel
    pub fn pixel_ray(&self, x: usize, y: usize) -> Ray {
        camera_ray(
            &self.camera,
            x,
            y,
            self.display.width(),
            self.display.height(),
        )
    }

    pub fn render(&mut self) {
        self.render_with_progress(indicatif::ProgressBar::hidden());
    }

    /// Renders one frame, pixels are computed in parallel and then written to the display.
    /// Does not present the display.
    pub fn render_with_progress(&mut self, progressbar: indicatif::ProgressBar) {
        let width = self.display.width();
        let height = self.display.height();
        if width == 0 || height == 0 {
            return;
        }

        let now = Instant::now();
        let integrator = Integrator::new(&self.scene, self.ray_depth_limit);
        let camera = &self.camera;

        let mut frame = Canvas::new(width, height);
        frame.set_each_pixel(
            |x: usize, y: usize| integrator.color_at(camera_ray(camera, x, y, width, height)),
            progressbar,
        );

        for (id, color) in frame.pixels().iter().enumerate() {
            self.display.set_pixel(id % width, id / width, *color);
        }
        debug!(
            "rendered {width}x{height} pixels ({} rays max depth {}) in {:?}",
            width * height,
            self.ray_depth_limit,
            now.elapsed()
        );
    }
}

fn camera_ray(
    camera: &PerspectiveCamera,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Ray {
    let u = (x as f64 + 0.5) / width as f64;
    let v = (y as f64 + 0.5) / height as f64;
    camera.transform().transform_ray(&camera.ray(u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        math::{
            approx_eq::ApproxEq,
            transform::{Transform, TransformUpdate},
            vector::Vector,
        },
        scene::{
            light::DirectionalLight,
            object::{Shape, material::Material},
        },
    };

    fn raytracer(width: usize, height: usize) -> Raytracer<Canvas> {
        let mut scene = Scene::with_material(Material::Sky(Color::blue().into()));
        scene.add_shape(Shape::sphere_with(
            Transform::default(),
            Material::diffuse(Color::white()),
        ));
        scene.add_light(DirectionalLight::new(Vector::FORWARD, Color::white(), 1.).into());

        let mut raytracer = Raytracer::new(Canvas::new(width, height));
        raytracer.set_scene(scene);
        raytracer
            .camera_mut()
            .update_transform(TransformUpdate::new().position(Vector::new(0., -5., 0.)));
        raytracer
    }

    #[test]
    fn camera_fits_display() {
        let raytracer = Raytracer::new(Canvas::new(200, 100));
        assert_approx_eq_low_prec!(raytracer.camera().aspect_ratio(), 2.);
        assert_eq!(raytracer.ray_depth_limit(), 4);
    }

    #[test]
    fn pixel_ray_goes_through_camera_transform() {
        let raytracer = raytracer(5, 5);
        let ray = raytracer.pixel_ray(2, 2);

        assert_approx_eq_low_prec!(*ray.origin(), Vector::new(0., -5., 0.));
        assert_approx_eq_low_prec!(*ray.direction(), Vector::FORWARD);
    }

    #[test]
    fn render_fills_display() {
        let mut raytracer = raytracer(5, 5);
        raytracer.render();
        let canvas = raytracer.into_display();

        assert_approx_eq_low_prec!(canvas.pixel(2, 2), Color::white());
        assert_approx_eq_low_prec!(canvas.pixel(0, 0), Color::blue());
        assert_approx_eq_low_prec!(canvas.pixel(4, 4), Color::blue());
    }

    #[test]
    fn evaluate_ray() {
        let raytracer = raytracer(5, 5);

        assert_approx_eq_low_prec!(
            raytracer.evaluate_ray(Ray::new(Vector::new(0., -5., 0.), Vector::FORWARD)),
            Color::white()
        );
        assert_approx_eq_low_prec!(
            raytracer.evaluate_ray(Ray::new(Vector::new(0., -5., 0.), Vector::BACKWARD)),
            Color::blue()
        );
    }

    #[test]
    fn rotated_camera_looks_elsewhere() {
        let mut raytracer = raytracer(5, 5);
        raytracer
            .camera_mut()
            .update_transform(TransformUpdate::new().rotation(Vector::new(0., 0., 180.)));
        raytracer.render();

        assert_approx_eq_low_prec!(raytracer.display().pixel(2, 2), Color::blue());
    }

    #[test]
    fn zero_sized_display_is_noop() {
        let mut raytracer = Raytracer::new(Canvas::new(0, 0));
        raytracer.render();
        assert_eq!(raytracer.display().width(), 0);
    }
}
