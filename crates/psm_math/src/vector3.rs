//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::MathError;

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const UNIT_Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Alias of [`Vector3::length`]
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.length()
    }

    /// Normalize to unit length
    ///
    /// Fails only when the magnitude is exactly zero. Tiny non-zero
    /// magnitudes are divided through as-is.
    pub fn normalize(self) -> Result<Self, MathError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::ZeroLengthVector);
        }
        Ok(Self::new(
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
        ))
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Operator overloads

impl std::ops::Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_cross_axes() {
        assert_eq!(Vector3::UNIT_X.cross(Vector3::UNIT_Y), Vector3::UNIT_Z);
        assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_Z), Vector3::UNIT_X);
        assert_eq!(Vector3::UNIT_Z.cross(Vector3::UNIT_X), Vector3::UNIT_Y);
    }

    #[test]
    fn test_cross_anti_commutes() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        assert_eq!(Vector3::cross(a, b), -Vector3::cross(b, a));
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert!(approx_eq(a.dot(c), 0.0));
        assert!(approx_eq(b.dot(c), 0.0));
    }

    #[test]
    fn test_length_and_magnitude() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length(), 7.0);
        assert_eq!(v.magnitude(), v.length());
        assert_eq!(v.length_squared(), 49.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector3::new(0.0, 3.0, 4.0).normalize().unwrap();
        assert_eq!(n, Vector3::new(0.0, 0.6, 0.8));
        assert!(approx_eq(n.length(), 1.0));
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert_eq!(Vector3::ZERO.normalize(), Err(MathError::ZeroLengthVector));
    }

    #[test]
    fn test_normalize_tiny_vector_succeeds() {
        // Only an exact zero is rejected
        let tiny = Vector3::new(1.0e-20, 0.0, 0.0);
        assert!(tiny.normalize().is_ok());
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_array_conversion() {
        let v: Vector3 = [1.0, 2.0, 3.0].into();
        let arr: [f32; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 2.0, 3.5).to_string(), "(1, 2, 3.5)");
    }
}
