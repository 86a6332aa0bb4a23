use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign};

/// A distance on the canvas, in physical pixels. Measured text widths are
/// fractional, so the unit wraps an `f32` even though the canvas itself has
/// integer dimensions
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, From, Into,
    Display,
)]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// The larger of two distances
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Px {
        Px(value as f32)
    }
}

impl std::ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}
