use std::ops;

use super::approx_eq::{self, ApproxEq, EPSILON};

#[derive(Copy, Clone, Debug)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }
    pub fn red() -> Self {
        Self::new(1., 0., 0.)
    }
    pub fn green() -> Self {
        Self::new(0., 1., 0.)
    }
    pub fn blue() -> Self {
        Self::new(0., 0., 1.)
    }
    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }
    pub fn gray() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }
    pub fn r(&self) -> f64 {
        self.r
    }
    pub fn b(&self) -> f64 {
        self.b
    }
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Linear interpolation, `t = 0` gives `self`, `t = 1` gives `other`.
    /// `t` is not clamped.
    pub fn mix(&self, other: Color, t: f64) -> Self {
        *self * (1. - t) + other * t
    }

    /// Clamps every channel to [0; 1]
    pub fn saturate(&self) -> Self {
        Self::new(
            approx_eq::saturate(self.r),
            approx_eq::saturate(self.g),
            approx_eq::saturate(self.b),
        )
    }

    fn scale_val_to_u8(v: f64) -> u8 {
        let v = approx_eq::saturate(v);
        (v * 255.).round() as u8
    }

    pub fn as_scaled_values(&self) -> [u8; 3] {
        [
            Self::scale_val_to_u8(self.r),
            Self::scale_val_to_u8(self.g),
            Self::scale_val_to_u8(self.b),
        ]
    }

    /// Packs the color into `0xAARRGGBB` with full opacity
    pub fn as_argb(&self) -> u32 {
        let [r, g, b] = self.as_scaled_values();
        0xff00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl ApproxEq for Color {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.r.approx_eq_epsilon(&other.r, epsilon)
            && self.g.approx_eq_epsilon(&other.g, epsilon)
            && self.b.approx_eq_epsilon(&other.b, epsilon)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl ops::Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}
impl ops::Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}
impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}
impl ops::Div<f64> for Color {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}
