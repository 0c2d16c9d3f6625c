use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Wraps an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    let wrapped = if wrapped < 0.0 { TAU + wrapped } else { wrapped };
    // TAU + (-tiny) rounds up to TAU itself.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// A 2D vector in screen coordinates (y grows downward).
///
/// In-place arithmetic goes through the compound-assignment operators
/// (`+=`, `-=`, `*=`, `/=`); the named `*_by`, `sum`, `difference` and `dot`
/// helpers never touch their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from a length and an angle measured from +x with the
    /// y-axis inverted.
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self::new(magnitude * angle.cos(), -magnitude * angle.sin())
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// N-ary dot product: the product of all x components plus the product
    /// of all y components. Zero for an empty slice.
    pub fn dot_all(vectors: &[Vec2]) -> f64 {
        match vectors.split_first() {
            None => 0.0,
            Some((first, rest)) => {
                let (px, py) = rest
                    .iter()
                    .fold((first.x, first.y), |(px, py), v| (px * v.x, py * v.y));
                px + py
            }
        }
    }

    /// Sum of every vector in the slice.
    pub fn sum(vectors: &[Vec2]) -> Self {
        vectors.iter().copied().sum()
    }

    /// `vectors[0] - vectors[1] - ... - vectors[n-1]`.
    pub fn difference(vectors: &[Vec2]) -> Self {
        match vectors.split_first() {
            None => Self::ZERO,
            Some((first, rest)) => rest.iter().fold(*first, |acc, v| acc - *v),
        }
    }

    pub fn multiplied_by(self, scalar: f64) -> Self {
        self * scalar
    }

    pub fn divided_by(self, scalar: f64) -> Self {
        self / scalar
    }

    /// Calculates the squared magnitude (length) of the vector.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Rescales the vector to `magnitude`, keeping its angle.
    pub fn set_magnitude(&mut self, magnitude: f64) {
        *self = Self::from_polar(magnitude, self.angle());
    }

    /// Angle from the positive x-axis (y inverted), in `[0, 2π)`.
    pub fn angle(self) -> f64 {
        normalize_angle((-self.y).atan2(self.x))
    }

    /// Points the vector at `angle`, keeping its magnitude.
    pub fn set_angle(&mut self, angle: f64) {
        *self = Self::from_polar(self.magnitude(), angle);
    }

    /// Unit vector in the same direction. A zero vector yields NaN components.
    pub fn unit(self) -> Self {
        self / self.magnitude()
    }

    /// Calculates the squared distance between two vector points.
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Returns a vector perpendicular to this one.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates the point about `origin` so that its angle grows by `angle`.
    pub fn rotate(self, angle: f64, origin: Vec2) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        let rel = self - origin;
        Self::new(
            rel.x * cos_a + rel.y * sin_a,
            -rel.x * sin_a + rel.y * cos_a,
        ) + origin
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

// Division by zero is left to IEEE semantics (INFINITY or NaN).
impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::ZERO, |acc, v| acc + v)
    }
}
