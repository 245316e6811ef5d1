use std::ops;

use super::{
    approx_eq::{ApproxEq, EPSILON},
    vector::Vector,
};

const MAX_SIZE: usize = 4;

#[derive(Debug, Clone, Copy)]
/// Row major matrix of up to 4x4 elements.
/// Like vectors, matrices are never mutated after construction.
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: [f64; MAX_SIZE * MAX_SIZE],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity(MAX_SIZE)
    }
}

impl Matrix {
    fn empty(rows: usize, columns: usize) -> Self {
        assert!(
            (1..=MAX_SIZE).contains(&rows) && (1..=MAX_SIZE).contains(&columns),
            "matrices can be at most {MAX_SIZE}x{MAX_SIZE}, got {rows}x{columns}"
        );
        Self {
            rows,
            columns,
            data: [0.; MAX_SIZE * MAX_SIZE],
        }
    }

    /// Builds a matrix from row major data
    pub fn from_rows(rows: usize, columns: usize, data: &[f64]) -> Self {
        assert_eq!(
            rows * columns,
            data.len(),
            "matrix size doesn't match data length"
        );
        let mut matrix = Self::empty(rows, columns);
        for (id, value) in data.iter().enumerate() {
            matrix[(id / columns, id % columns)] = *value;
        }
        matrix
    }

    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::empty(size, size);
        for i in 0..size {
            matrix[(i, i)] = 1.;
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn transpose(&self) -> Self {
        let mut res = Self::empty(self.columns, self.rows);
        for row in 0..self.rows {
            for col in 0..self.columns {
                res[(col, row)] = self[(row, col)];
            }
        }
        res
    }

    /// Multiplies the vector from the right, `self * vector`
    pub fn transform(&self, vector: Vector) -> Vector {
        assert_eq!(
            self.columns,
            vector.dimensions(),
            "can't transform {}D vector with {}x{} matrix",
            vector.dimensions(),
            self.rows,
            self.columns
        );
        let mut values = [0.; MAX_SIZE];
        for (row, value) in values.iter_mut().enumerate().take(self.rows) {
            *value = (0..self.columns)
                .map(|col| self[(row, col)] * vector[col])
                .sum();
        }
        Vector::from_slice(&values[..self.rows])
    }

    /// Translation by an n dimensional offset, giving a (n+1)x(n+1) matrix
    pub fn translation(offset: Vector) -> Self {
        let size = offset.dimensions() + 1;
        let mut matrix = Self::identity(size);
        for (row, value) in offset.as_slice().iter().enumerate() {
            matrix[(row, size - 1)] = *value;
        }
        matrix
    }

    /// Axis aligned scaling by an n dimensional vector, giving a (n+1)x(n+1) matrix
    pub fn scaling(factors: Vector) -> Self {
        let size = factors.dimensions() + 1;
        let mut matrix = Self::identity(size);
        for (i, factor) in factors.as_slice().iter().enumerate() {
            matrix[(i, i)] = *factor;
        }
        matrix
    }

    pub fn scaling_uniform(factor: f64, dimensions: usize) -> Self {
        let size = dimensions + 1;
        let mut matrix = Self::identity(size);
        for i in 0..dimensions {
            matrix[(i, i)] = factor;
        }
        matrix
    }

    #[rustfmt::skip]
    pub fn rotation_x(radians: f64) -> Self {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Self::from_rows(4, 4, &[
            1., 0., 0., 0.,
            0., cos_r, -sin_r, 0.,
            0., sin_r, cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(radians: f64) -> Self {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Self::from_rows(4, 4, &[
            cos_r, 0., sin_r, 0.,
            0., 1., 0., 0.,
            -sin_r, 0., cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(radians: f64) -> Self {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Self::from_rows(4, 4, &[
            cos_r, -sin_r, 0., 0.,
            sin_r, cos_r, 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && (0..self.rows).all(|row| {
                (0..self.columns)
                    .all(|col| self[(row, col)].approx_eq_epsilon(&other[(row, col)], epsilon))
            })
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows, "row index out of bounds");
        assert!(col < self.columns, "column index out of bounds");
        &self.data[row * MAX_SIZE + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows, "row index out of bounds");
        assert!(col < self.columns, "column index out of bounds");
        &mut self.data[row * MAX_SIZE + col]
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        assert_eq!(
            self.columns, rhs.rows,
            "can't multiply matrices with mismatching sizes"
        );
        let mut output = Matrix::empty(self.rows, rhs.columns);
        for row in 0..self.rows {
            for col in 0..rhs.columns {
                output[(row, col)] = (0..self.columns)
                    .map(|i| self[(row, i)] * rhs[(i, col)])
                    .sum();
            }
        }
        output
    }
}

impl ops::Mul<Matrix> for Matrix {
    type Output = Self;

    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl ops::Mul<Vector> for &Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        self.transform(rhs)
    }
}

impl ops::Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        self.transform(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    #[rustfmt::skip]
    fn create_and_index() {
        let matrix = Matrix::from_rows(4, 4, &[
            1.0, 2.0, 3.0, 4.0,
            5.5, 6.5, 7.5, 8.5,
            9.0, 10.0, 11.0, 12.0,
            13.5, 14.5, 15.5, 16.5,
        ]);

        assert_approx_eq_low_prec!(matrix[(0, 0)], 1.0);
        assert_approx_eq_low_prec!(matrix[(0, 3)], 4.0);
        assert_approx_eq_low_prec!(matrix[(1, 2)], 7.5);
        assert_approx_eq_low_prec!(matrix[(3, 2)], 15.5);
    }

    #[test]
    fn identity_times_matrix_is_matrix() {
        let matrix = Matrix::from_rows(2, 2, &[1., 2., 3., 4.]);
        assert_eq!(Matrix::identity(2) * matrix, matrix);
    }

    #[test]
    fn identity_transform_keeps_vector() {
        let vectors = [
            Vector::new2(-1., 7.),
            Vector::new(1., 2., 3.),
            Vector::new4(4., -3., 2., 1.),
        ];
        for v in vectors {
            assert_eq!(Matrix::identity(v.dimensions()).transform(v), v);
        }
    }

    #[test]
    #[rustfmt::skip]
    fn translation_from_2d_offset() {
        let expected = Matrix::from_rows(3, 3, &[
            1., 0., 2.,
            0., 1., 3.,
            0., 0., 1.,
        ]);
        assert_eq!(Matrix::translation(Vector::new2(2., 3.)), expected);
    }

    #[test]
    fn translation_adds_offset() {
        let translation = Matrix::translation(Vector::new2(2., 3.));
        assert_eq!(
            translation.transform(Vector::new(1., 2., 1.)),
            Vector::new(3., 5., 1.)
        );
    }

    #[test]
    fn translation_does_not_move_directions() {
        let translation = Matrix::translation(Vector::new(5., -3., 2.));
        let direction = Vector::new(-3., 4., 5.).as_homogeneous_direction();
        assert_eq!(translation * direction, direction);
    }

    #[test]
    #[rustfmt::skip]
    fn scaling() {
        let expected = Matrix::from_rows(4, 4, &[
            2., 0., 0., 0.,
            0., 3., 0., 0.,
            0., 0., 4., 0.,
            0., 0., 0., 1.,
        ]);
        assert_eq!(Matrix::scaling(Vector::new(2., 3., 4.)), expected);
    }

    #[test]
    #[rustfmt::skip]
    fn uniform_scaling() {
        let expected = Matrix::from_rows(4, 4, &[
            4., 0., 0., 0.,
            0., 4., 0., 0.,
            0., 0., 4., 0.,
            0., 0., 0., 1.,
        ]);
        assert_eq!(Matrix::scaling_uniform(4., 3), expected);
    }

    #[test]
    #[rustfmt::skip]
    fn multiply() {
        let left = Matrix::scaling_uniform(4., 3);
        let right = Matrix::translation(Vector::new(1., 2., 3.));
        let expected = Matrix::from_rows(4, 4, &[
            4., 0., 0., 4.,
            0., 4., 0., 8.,
            0., 0., 4., 12.,
            0., 0., 0., 1.,
        ]);
        assert_eq!(left * right, expected);
    }

    #[test]
    fn multiply_non_square() {
        let left = Matrix::from_rows(2, 3, &[1., 2., 3., 4., 5., 6.]);
        let right = Matrix::from_rows(3, 2, &[7., 8., 9., 10., 11., 12.]);
        assert_eq!(
            left * right,
            Matrix::from_rows(2, 2, &[58., 64., 139., 154.])
        );
    }

    #[test]
    #[should_panic(expected = "mismatching sizes")]
    fn multiply_mismatching_sizes_panics() {
        let _ = Matrix::identity(3) * Matrix::identity(4);
    }

    #[test]
    #[should_panic(expected = "can't transform")]
    fn transform_mismatching_dimensions_panics() {
        Matrix::identity(4).transform(Vector::new(1., 2., 3.));
    }

    #[test]
    fn rotations() {
        let point = Vector::new(0., 1., 0.).as_homogeneous_point();
        assert_approx_eq_low_prec!(
            Matrix::rotation_x(FRAC_PI_4) * point,
            Vector::new4(0., FRAC_1_SQRT_2, FRAC_1_SQRT_2, 1.)
        );
        assert_approx_eq_low_prec!(
            Matrix::rotation_z(FRAC_PI_2) * point,
            Vector::new4(-1., 0., 0., 1.)
        );
        let point = Vector::new(0., 0., 1.).as_homogeneous_point();
        assert_approx_eq_low_prec!(
            Matrix::rotation_y(FRAC_PI_2) * point,
            Vector::new4(1., 0., 0., 1.)
        );
    }

    #[test]
    fn transpose() {
        let matrix = Matrix::from_rows(2, 3, &[1., 2., 3., 4., 5., 6.]);
        let transposed = matrix.transpose();
        assert_eq!(transposed.rows(), 3);
        assert_eq!(transposed, Matrix::from_rows(3, 2, &[1., 4., 2., 5., 3., 6.]));
        assert_eq!(transposed.transpose(), matrix);
    }
}
