use std::ops::{self, Index};

use super::approx_eq::{ApproxEq, EPSILON};

const MAX_DIMENSIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Immutable 2, 3 or 4 dimensional vector.
/// Its length is computed once, at construction.
///
/// Operations on two vectors require both to have the same dimensions,
/// mixing them up is a programming error and panics.
#[derive(Clone, Copy, Debug)]
pub struct Vector {
    data: [f64; MAX_DIMENSIONS],
    dimensions: usize,
    length: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::with_length([0., 0., 0., 0.], 3, 0.);
    pub const ZERO_2D: Vector = Vector::with_length([0., 0., 0., 0.], 2, 0.);
    pub const ONE: Vector = Vector::with_length([1., 1., 1., 0.], 3, 1.732_050_807_568_877_2);
    pub const NEGATIVE_ONE: Vector =
        Vector::with_length([-1., -1., -1., 0.], 3, 1.732_050_807_568_877_2);

    // right handed: RIGHT x FORWARD = UP
    pub const RIGHT: Vector = Vector::with_length([1., 0., 0., 0.], 3, 1.);
    pub const FORWARD: Vector = Vector::with_length([0., 1., 0., 0.], 3, 1.);
    pub const UP: Vector = Vector::with_length([0., 0., 1., 0.], 3, 1.);

    pub const LEFT: Vector = Vector::with_length([-1., 0., 0., 0.], 3, 1.);
    pub const BACKWARD: Vector = Vector::with_length([0., -1., 0., 0.], 3, 1.);
    pub const DOWN: Vector = Vector::with_length([0., 0., -1., 0.], 3, 1.);

    const fn with_length(data: [f64; MAX_DIMENSIONS], dimensions: usize, length: f64) -> Self {
        Self {
            data,
            dimensions,
            length,
        }
    }

    fn from_data(data: [f64; MAX_DIMENSIONS], dimensions: usize) -> Self {
        let length = data[..dimensions].iter().map(|v| v * v).sum::<f64>().sqrt();
        Self::with_length(data, dimensions, length)
    }

    pub fn new2(x: f64, y: f64) -> Self {
        Self::from_data([x, y, 0., 0.], 2)
    }

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_data([x, y, z, 0.], 3)
    }

    pub fn new4(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_data([x, y, z, w], 4)
    }

    pub fn from_slice(values: &[f64]) -> Self {
        assert!(
            (2..=MAX_DIMENSIONS).contains(&values.len()),
            "vectors must have 2 to {MAX_DIMENSIONS} components, got {}",
            values.len()
        );
        let mut data = [0.; MAX_DIMENSIONS];
        data[..values.len()].copy_from_slice(values);
        Self::from_data(data, values.len())
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data[..self.dimensions]
    }

    pub fn get(&self, index: usize) -> f64 {
        assert!(
            index < self.dimensions,
            "component index {index} out of bounds for {}D vector",
            self.dimensions
        );
        self.data[index]
    }

    pub fn x(&self) -> f64 {
        self.get(0)
    }

    pub fn y(&self) -> f64 {
        self.get(1)
    }

    pub fn z(&self) -> f64 {
        self.get(2)
    }

    pub fn w(&self) -> f64 {
        self.get(3)
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mut data = [0.; MAX_DIMENSIONS];
        for (dest, src) in data.iter_mut().zip(self.as_slice()) {
            *dest = f(*src);
        }
        Self::from_data(data, self.dimensions)
    }

    fn zip_with<F>(&self, rhs: &Self, operation: &str, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(
            self.dimensions, rhs.dimensions,
            "can't {operation} vectors with mismatching dimensions"
        );
        let mut data = [0.; MAX_DIMENSIONS];
        for (i, dest) in data.iter_mut().enumerate().take(self.dimensions) {
            *dest = f(self.data[i], rhs.data[i]);
        }
        Self::from_data(data, self.dimensions)
    }

    pub fn reciprocal(&self) -> Self {
        self.map(|v| 1. / v)
    }

    pub fn dot(&self, rhs: Self) -> f64 {
        assert_eq!(
            self.dimensions, rhs.dimensions,
            "can't compute dot product of vectors with mismatching dimensions"
        );
        self.as_slice()
            .iter()
            .zip(rhs.as_slice())
            .map(|(a, b)| a * b)
            .sum()
    }

    pub fn cross(&self, rhs: Self) -> Self {
        assert!(
            self.dimensions == 3 && rhs.dimensions == 3,
            "cross product is only defined for 3D vectors"
        );
        Self::new(
            self.data[1] * rhs.data[2] - self.data[2] * rhs.data[1],
            self.data[2] * rhs.data[0] - self.data[0] * rhs.data[2],
            self.data[0] * rhs.data[1] - self.data[1] * rhs.data[0],
        )
    }

    pub fn is_normalized(&self) -> bool {
        self.length.approx_eq(&1.)
    }

    /// Zero vectors normalize to NaN components.
    pub fn normalize(&self) -> Self {
        if self.is_normalized() {
            return *self;
        }
        *self * (1. / self.length)
    }

    pub fn distance(&self, rhs: Self) -> f64 {
        (*self - rhs).length()
    }

    /// Reflects an incoming direction off a surface with the given normal
    pub fn reflect(&self, normal: Self) -> Self {
        *self - normal * (2. * self.dot(normal))
    }

    /// Lifts a point into homogeneous coordinates (w = 1)
    pub fn as_homogeneous_point(&self) -> Self {
        self.extended(1.)
    }

    /// Lifts a direction or normal into homogeneous coordinates (w = 0)
    pub fn as_homogeneous_direction(&self) -> Self {
        self.extended(0.)
    }

    fn extended(&self, w: f64) -> Self {
        let mut data = [0.; MAX_DIMENSIONS];
        let copied = self.dimensions.min(3);
        data[..copied].copy_from_slice(&self.data[..copied]);
        data[3] = w;
        Self::from_data(data, 4)
    }

    /// Drops the homogeneous component, returning the 3D part
    pub fn as_cartesian(&self) -> Self {
        let mut data = [0.; MAX_DIMENSIONS];
        let copied = self.dimensions.min(3);
        data[..copied].copy_from_slice(&self.data[..copied]);
        Self::from_data(data, 3)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ApproxEq for Vector {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.dimensions == other.dimensions
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| a.approx_eq_epsilon(b, epsilon))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.dimensions,
            "component index {index} out of bounds for {}D vector",
            self.dimensions
        );
        &self.data[index]
    }
}

impl Index<Axis> for Vector {
    type Output = f64;

    fn index(&self, index: Axis) -> &Self::Output {
        &self[index.index()]
    }
}

impl ops::Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, "add", |a, b| a + b)
    }
}

impl ops::Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, "subtract", |a, b| a - b)
    }
}

/// Componentwise product
impl ops::Mul for Vector {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, "multiply", |a, b| a * b)
    }
}

/// Componentwise quotient
impl ops::Div for Vector {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, "divide", |a, b| a / b)
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

impl ops::Div<f64> for Vector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.map(|v| v / rhs)
    }
}

impl ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}
