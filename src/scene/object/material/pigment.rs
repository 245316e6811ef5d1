use crate::math::{approx_eq::saturate, color::Color, vector::Vector};

/// Color as a pure function of surface coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pigment {
    Solid(Color),
    /// Blends from `start` to `end` along `direction`,
    /// which must have as many dimensions as the evaluated coordinates
    Gradient {
        start: Color,
        end: Color,
        direction: Vector,
    },
}

impl Pigment {
    pub fn gradient(start: Color, end: Color, direction: Vector) -> Self {
        Self::Gradient {
            start,
            end,
            direction: direction.normalize(),
        }
    }

    pub fn color_at(&self, coords: Vector) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Gradient {
                start,
                end,
                direction,
            } => start.mix(*end, saturate(direction.dot(coords))),
        }
    }
}

impl From<Color> for Pigment {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}
