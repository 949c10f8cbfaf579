//! Plane in 3D space
//!
//! A plane is stored as the coefficients of `a*x + b*y + c*z + d = 0`, with
//! `(a, b, c)` held in `normal`. Construction from a normal and offset does
//! not normalize; call [`Plane::normalize`] when unit length is required.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MathError, Vector3};

/// Smallest positive subnormal `f32` (bit pattern `0x0000_0001`)
///
/// This is the containment threshold of [`Plane::is_point_on_plane`], which
/// therefore only accepts points that evaluate to (almost) exactly zero.
/// Not to be confused with `f32::EPSILON`.
#[allow(clippy::excessive_precision)]
pub const FLOAT_EPSILON: f32 = 1.401_298_5e-45;

/// Plane defined by a normal and an offset
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Plane {
    /// Normal vector, the (a, b, c) coefficients
    pub normal: Vector3,
    /// The d coefficient
    pub d: f32,
}

impl Plane {
    /// Create a plane from a normal and offset
    #[inline]
    pub const fn new(normal: Vector3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Create a plane from the normal's components and offset
    #[inline]
    pub const fn from_components(nx: f32, ny: f32, nz: f32, d: f32) -> Self {
        Self::new(Vector3::new(nx, ny, nz), d)
    }

    /// Create a plane through three points
    ///
    /// The normal is `(p2 - p1) x (p3 - p1)`, normalized, so the winding of
    /// the points picks its direction. Collinear or coincident points give
    /// a zero cross product and fail with [`MathError::ZeroLengthVector`].
    pub fn from_points(p1: Vector3, p2: Vector3, p3: Vector3) -> Result<Self, MathError> {
        let v1 = p2 - p1;
        let v2 = p3 - p1;
        let normal = v1.cross(v2).normalize()?;
        let d = -normal.dot(p1);
        Ok(Self::new(normal, d))
    }

    /// Rescale normal and offset so the normal has unit length
    ///
    /// A zero-length normal leaves the plane untouched.
    pub fn normalize(&mut self) {
        let length = self.normal.length();
        if length > 0.0 {
            self.normal = self.normal / length;
            self.d /= length;
        } else {
            log::debug!("Skipping normalization of plane with zero-length normal");
        }
    }

    /// Evaluate the plane equation at a point
    ///
    /// Equals the signed distance when the normal has unit length.
    #[inline]
    pub fn evaluate(&self, point: Vector3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Check whether a point satisfies the plane equation
    ///
    /// Uses [`FLOAT_EPSILON`] as tolerance, so accumulated rounding error
    /// will usually make this return `false`.
    pub fn is_point_on_plane(&self, point: Vector3) -> bool {
        self.evaluate(point).abs() < FLOAT_EPSILON
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normal: {}, D: {}", self.normal, self.d)
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
    fn test_float_epsilon_is_smallest_subnormal() {
        assert_eq!(FLOAT_EPSILON, f32::from_bits(1));
        assert!(FLOAT_EPSILON > 0.0);
        assert!(FLOAT_EPSILON < f32::EPSILON);
    }

    #[test]
    fn test_constructors_agree() {
        let a = Plane::new(Vector3::new(0.0, 2.0, 0.0), -4.0);
        let b = Plane::from_components(0.0, 2.0, 0.0, -4.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_does_not_normalize() {
        let p = Plane::new(Vector3::new(0.0, 2.0, 0.0), -4.0);
        assert_eq!(p.normal.length(), 2.0);
        assert_eq!(p.d, -4.0);
    }

    #[test]
    fn test_from_points() {
        let p1 = Vector3::new(0.0, 0.0, 1.0);
        let p2 = Vector3::new(1.0, 0.0, 0.0);
        let p3 = Vector3::new(0.0, 1.0, 0.0);
        let plane = Plane::from_points(p1, p2, p3).unwrap();

        let k = 1.0 / 3.0f32.sqrt();
        assert!(approx_eq(plane.normal.x, k));
        assert!(approx_eq(plane.normal.y, k));
        assert!(approx_eq(plane.normal.z, k));
        assert!(approx_eq(plane.d, -k));

        assert!(plane.is_point_on_plane(p1));
        assert!(plane.is_point_on_plane(p2));
        assert!(plane.is_point_on_plane(p3));
        assert!(!plane.is_point_on_plane(Vector3::ZERO));
    }

    #[test]
    fn test_from_points_winding_flips_normal() {
        let p1 = Vector3::new(0.0, 0.0, 0.0);
        let p2 = Vector3::new(1.0, 0.0, 0.0);
        let p3 = Vector3::new(0.0, 1.0, 0.0);

        let ccw = Plane::from_points(p1, p2, p3).unwrap();
        let cw = Plane::from_points(p1, p3, p2).unwrap();
        assert_eq!(ccw.normal, Vector3::UNIT_Z);
        assert_eq!(cw.normal, -Vector3::UNIT_Z);
    }

    #[test]
    fn test_from_collinear_points_fails() {
        let p1 = Vector3::new(0.0, 0.0, 0.0);
        let p2 = Vector3::new(1.0, 1.0, 1.0);
        let p3 = Vector3::new(2.0, 2.0, 2.0);
        assert_eq!(
            Plane::from_points(p1, p2, p3),
            Err(MathError::ZeroLengthVector)
        );
    }

    #[test]
    fn test_normalize() {
        let mut plane = Plane::from_components(0.0, 3.0, 4.0, 10.0);
        plane.normalize();
        assert_eq!(plane.normal, Vector3::new(0.0, 0.6, 0.8));
        assert_eq!(plane.d, 2.0);
    }

    #[test]
    fn test_normalize_zero_normal_is_noop() {
        let mut plane = Plane::from_components(0.0, 0.0, 0.0, 5.0);
        plane.normalize();
        assert_eq!(plane.normal, Vector3::ZERO);
        assert_eq!(plane.d, 5.0);
    }

    #[test]
    fn test_is_point_on_axis_plane() {
        let floor = Plane::new(Vector3::UNIT_Y, 2.0);
        assert!(floor.is_point_on_plane(Vector3::new(3.0, -2.0, 7.5)));
        assert!(!floor.is_point_on_plane(Vector3::new(3.0, -1.5, 7.5)));
    }

    #[test]
    fn test_tolerance_is_exact() {
        // A point off by the smallest float step is rejected
        let floor = Plane::new(Vector3::UNIT_Y, 0.0);
        assert!(!floor.is_point_on_plane(Vector3::new(0.0, 1.0e-30, 0.0)));
        assert!(floor.is_point_on_plane(Vector3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_display() {
        let plane = Plane::from_components(0.0, 1.0, 0.0, -2.0);
        assert_eq!(plane.to_string(), "Normal: (0, 1, 0), D: -2");
    }
}
