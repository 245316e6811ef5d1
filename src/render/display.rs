use crate::{error::Result, math::color::Color};

/// Surface a raytracer draws into.
/// Pixels are only written during a render, presenting is up to the caller.
pub trait DisplaySurface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixel(&self, x: usize, y: usize) -> Color;
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
    /// Publishes what was drawn so far
    fn present(&mut self) -> Result<()>;
}
