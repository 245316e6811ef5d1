pub const EPSILON: f64 = 1.0e-6;
pub const LOW_PREC_EPSILON: f64 = 1.0e-4;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq_epsilon(&self, other: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, EPSILON)
    }

    fn approx_eq_low_prec(&self, other: &Rhs) -> bool {
        self.approx_eq_epsilon(other, LOW_PREC_EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() <= epsilon
    }
}

/// Clamps to [0; 1]
pub fn saturate(value: f64) -> f64 {
    value.clamp(0., 1.)
}

#[macro_export]
macro_rules! assert_approx_eq_low_prec {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    $crate::math::approx_eq::ApproxEq::approx_eq_low_prec(left, right),
                    "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                    left,
                    right
                );
            }
        }
    };
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    $crate::math::approx_eq::ApproxEq::approx_eq(left, right),
                    "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                    left,
                    right
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_within_epsilon() {
        assert!(1.0_f64.approx_eq(&(1.0 + EPSILON / 2.)));
        assert!(!1.0_f64.approx_eq(&(1.0 + EPSILON * 2.)));
        assert!(1.0_f64.approx_eq_low_prec(&1.00001));
    }

    #[test]
    fn saturate_clamps() {
        assert_approx_eq!(saturate(-2.), 0.);
        assert_approx_eq!(saturate(0.25), 0.25);
        assert_approx_eq!(saturate(7.), 1.);
    }
}
