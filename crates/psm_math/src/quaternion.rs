//! Quaternion for representing 3D rotations
//!
//! Components are stored as (x, y, z, w) with w the scalar part.
//! Construction does not normalize; callers normalize explicitly.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rotation quaternion, not necessarily of unit length
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new quaternion from its components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Compute the squared length of the quaternion
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Compute the length of the quaternion
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scale to unit length
    ///
    /// A zero quaternion is not guarded against: every component of the
    /// result is NaN.
    pub fn normalize(self) -> Self {
        let length = self.length();
        Self::new(
            self.x / length,
            self.y / length,
            self.z / length,
            self.w / length,
        )
    }

    /// Four-component dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Negate the vector part, keep the scalar part
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Compute the inverse: conjugate / length²
    ///
    /// Works for non-unit quaternions. A zero quaternion yields
    /// [`Quaternion::IDENTITY`] instead of failing.
    pub fn inverse(self) -> Self {
        let length_squared = self.length_squared();
        if length_squared > 0.0 {
            let c = self.conjugate();
            return Self::new(
                c.x / length_squared,
                c.y / length_squared,
                c.z / length_squared,
                c.w / length_squared,
            );
        }
        log::debug!("Inverse of zero-length quaternion requested, returning identity");
        Self::IDENTITY
    }
}

/// Hamilton product `a * b`
///
/// Not commutative. Composed as a rotation, `b` is applied first, then `a`.
impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn quat_approx_eq(a: Quaternion, b: Quaternion) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    /// Rotation of `angle` radians around a unit axis
    fn axis_angle(x: f32, y: f32, z: f32, angle: f32) -> Quaternion {
        let (s, c) = (angle * 0.5).sin_cos();
        Quaternion::new(x * s, y * s, z * s, c)
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_length() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(q.length_squared(), 25.0);
        assert_eq!(q.length(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let q = Quaternion::new(0.0, 0.0, 3.0, 4.0).normalize();
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.6, 0.8));
        assert!(approx_eq(q.length(), 1.0));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize();
        assert!(q.x.is_nan());
        assert!(q.y.is_nan());
        assert!(q.z.is_nan());
        assert!(q.w.is_nan());
    }

    #[test]
    fn test_dot() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-1.0, 0.5, 2.0, 1.0);
        assert_eq!(a.dot(b), 10.0);
        assert_eq!(Quaternion::dot(b, a), a.dot(b));
    }

    #[test]
    fn test_identity_is_neutral() {
        let q = Quaternion::new(0.1, -0.2, 0.3, 0.9);
        assert_eq!(Quaternion::IDENTITY * q, q);
        assert_eq!(q * Quaternion::IDENTITY, q);
    }

    #[test]
    fn test_basis_products() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, Quaternion::new(0.0, 0.0, -1.0, 0.0));
        assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_mul_not_commutative() {
        let a = axis_angle(1.0, 0.0, 0.0, 0.7);
        let b = axis_angle(0.0, 1.0, 0.0, 1.1);
        assert!(!quat_approx_eq(a * b, b * a));
    }

    #[test]
    fn test_mul_associative() {
        let a = axis_angle(1.0, 0.0, 0.0, 0.7);
        let b = axis_angle(0.0, 1.0, 0.0, 1.1);
        let c = Quaternion::new(0.3, -0.4, 0.5, 2.0);
        assert!(quat_approx_eq((a * b) * c, a * (b * c)));
    }

    #[test]
    fn test_half_turns_compose() {
        use std::f32::consts::FRAC_PI_2;

        let quarter = axis_angle(0.0, 0.0, 1.0, FRAC_PI_2);
        let half = axis_angle(0.0, 0.0, 1.0, FRAC_PI_2 * 2.0);
        assert!(quat_approx_eq(quarter * quarter, half));
    }

    #[test]
    fn test_conjugate() {
        let q = Quaternion::new(1.0, -2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_inverse_of_unit() {
        let q = axis_angle(0.0, 1.0, 0.0, 0.8);
        assert!(quat_approx_eq(q.inverse(), q.conjugate()));
        assert!(quat_approx_eq(q * q.inverse(), Quaternion::IDENTITY));
    }

    #[test]
    fn test_inverse_of_non_unit() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert!(quat_approx_eq(q * q.inverse(), Quaternion::IDENTITY));
        assert!(quat_approx_eq(q.inverse() * q, Quaternion::IDENTITY));
    }

    #[test]
    fn test_inverse_of_zero_is_identity() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 0.0).inverse();
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quaternion::IDENTITY.to_string(), "(0, 0, 0, 1)");
    }
}
