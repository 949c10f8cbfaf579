//! 4x4 Matrix for general transforms
//!
//! Storage is row-major: `m11..m14` is the first row, `m41..m44` the last.
//! Matrices are combined with [`Matrix4x4::multiply`]; there is deliberately
//! no `*` operator.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::MathError;

/// 4x4 matrix with sixteen named row-major components
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[rustfmt::skip]
pub struct Matrix4x4 {
    pub m11: f32, pub m12: f32, pub m13: f32, pub m14: f32,
    pub m21: f32, pub m22: f32, pub m23: f32, pub m24: f32,
    pub m31: f32, pub m32: f32, pub m33: f32, pub m34: f32,
    pub m41: f32, pub m42: f32, pub m43: f32, pub m44: f32,
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    /// Create a matrix from its sixteen components, row by row
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m11: f32, m12: f32, m13: f32, m14: f32,
        m21: f32, m22: f32, m23: f32, m24: f32,
        m31: f32, m32: f32, m33: f32, m34: f32,
        m41: f32, m42: f32, m43: f32, m44: f32,
    ) -> Self {
        Self {
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        }
    }

    /// Create a matrix from an array of rows
    #[rustfmt::skip]
    pub const fn from_rows(r: [[f32; 4]; 4]) -> Self {
        Self::new(
            r[0][0], r[0][1], r[0][2], r[0][3],
            r[1][0], r[1][1], r[1][2], r[1][3],
            r[2][0], r[2][1], r[2][2], r[2][3],
            r[3][0], r[3][1], r[3][2], r[3][3],
        )
    }

    /// Get the matrix as an array of rows
    pub const fn to_rows(&self) -> [[f32; 4]; 4] {
        [
            [self.m11, self.m12, self.m13, self.m14],
            [self.m21, self.m22, self.m23, self.m24],
            [self.m31, self.m32, self.m33, self.m34],
            [self.m41, self.m42, self.m43, self.m44],
        ]
    }

    /// Matrix product `left * right` (row by column)
    #[rustfmt::skip]
    pub fn multiply(left: Self, right: Self) -> Self {
        let l = left;
        let r = right;
        Self::new(
            l.m11 * r.m11 + l.m12 * r.m21 + l.m13 * r.m31 + l.m14 * r.m41,
            l.m11 * r.m12 + l.m12 * r.m22 + l.m13 * r.m32 + l.m14 * r.m42,
            l.m11 * r.m13 + l.m12 * r.m23 + l.m13 * r.m33 + l.m14 * r.m43,
            l.m11 * r.m14 + l.m12 * r.m24 + l.m13 * r.m34 + l.m14 * r.m44,

            l.m21 * r.m11 + l.m22 * r.m21 + l.m23 * r.m31 + l.m24 * r.m41,
            l.m21 * r.m12 + l.m22 * r.m22 + l.m23 * r.m32 + l.m24 * r.m42,
            l.m21 * r.m13 + l.m22 * r.m23 + l.m23 * r.m33 + l.m24 * r.m43,
            l.m21 * r.m14 + l.m22 * r.m24 + l.m23 * r.m34 + l.m24 * r.m44,

            l.m31 * r.m11 + l.m32 * r.m21 + l.m33 * r.m31 + l.m34 * r.m41,
            l.m31 * r.m12 + l.m32 * r.m22 + l.m33 * r.m32 + l.m34 * r.m42,
            l.m31 * r.m13 + l.m32 * r.m23 + l.m33 * r.m33 + l.m34 * r.m43,
            l.m31 * r.m14 + l.m32 * r.m24 + l.m33 * r.m34 + l.m34 * r.m44,

            l.m41 * r.m11 + l.m42 * r.m21 + l.m43 * r.m31 + l.m44 * r.m41,
            l.m41 * r.m12 + l.m42 * r.m22 + l.m43 * r.m32 + l.m44 * r.m42,
            l.m41 * r.m13 + l.m42 * r.m23 + l.m43 * r.m33 + l.m44 * r.m43,
            l.m41 * r.m14 + l.m42 * r.m24 + l.m43 * r.m34 + l.m44 * r.m44,
        )
    }

    /// Determinant by cofactor expansion along the first row
    #[rustfmt::skip]
    pub fn determinant(&self) -> f32 {
        let m = self;
        m.m11 * (m.m22 * (m.m33 * m.m44 - m.m34 * m.m43) - m.m23 * (m.m32 * m.m44 - m.m34 * m.m42) + m.m24 * (m.m32 * m.m43 - m.m33 * m.m42))
            - m.m12 * (m.m21 * (m.m33 * m.m44 - m.m34 * m.m43) - m.m23 * (m.m31 * m.m44 - m.m34 * m.m41) + m.m24 * (m.m31 * m.m43 - m.m33 * m.m41))
            + m.m13 * (m.m21 * (m.m32 * m.m44 - m.m34 * m.m42) - m.m22 * (m.m31 * m.m44 - m.m34 * m.m41) + m.m24 * (m.m31 * m.m42 - m.m32 * m.m41))
            - m.m14 * (m.m21 * (m.m32 * m.m43 - m.m33 * m.m42) - m.m22 * (m.m31 * m.m43 - m.m33 * m.m41) + m.m23 * (m.m31 * m.m42 - m.m32 * m.m41))
    }

    /// Inverse via the adjugate scaled by `1 / determinant`
    ///
    /// Fails with [`MathError::SingularMatrix`] only when the determinant is
    /// exactly zero; nearly singular matrices are inverted as-is.
    #[rustfmt::skip]
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == 0.0 {
            log::debug!("Rejecting inversion of singular matrix");
            return Err(MathError::SingularMatrix);
        }

        let inv_det = 1.0 / det;
        let m = self;

        Ok(Self::new(
            inv_det * (m.m22 * (m.m33 * m.m44 - m.m34 * m.m43) - m.m23 * (m.m32 * m.m44 - m.m34 * m.m42) + m.m24 * (m.m32 * m.m43 - m.m33 * m.m42)),
            inv_det * -(m.m12 * (m.m33 * m.m44 - m.m34 * m.m43) - m.m13 * (m.m32 * m.m44 - m.m34 * m.m42) + m.m14 * (m.m32 * m.m43 - m.m33 * m.m42)),
            inv_det * (m.m12 * (m.m23 * m.m44 - m.m24 * m.m43) - m.m13 * (m.m22 * m.m44 - m.m24 * m.m42) + m.m14 * (m.m22 * m.m43 - m.m23 * m.m42)),
            inv_det * -(m.m12 * (m.m23 * m.m34 - m.m24 * m.m33) - m.m13 * (m.m22 * m.m34 - m.m24 * m.m32) + m.m14 * (m.m22 * m.m33 - m.m23 * m.m32)),

            inv_det * -(m.m21 * (m.m33 * m.m44 - m.m34 * m.m43) - m.m23 * (m.m31 * m.m44 - m.m34 * m.m41) + m.m24 * (m.m31 * m.m43 - m.m33 * m.m41)),
            inv_det * (m.m11 * (m.m33 * m.m44 - m.m34 * m.m43) - m.m13 * (m.m31 * m.m44 - m.m34 * m.m41) + m.m14 * (m.m31 * m.m43 - m.m33 * m.m41)),
            inv_det * -(m.m11 * (m.m23 * m.m44 - m.m24 * m.m43) - m.m13 * (m.m21 * m.m44 - m.m24 * m.m41) + m.m14 * (m.m21 * m.m43 - m.m23 * m.m41)),
            inv_det * (m.m11 * (m.m23 * m.m34 - m.m24 * m.m33) - m.m13 * (m.m21 * m.m34 - m.m24 * m.m31) + m.m14 * (m.m21 * m.m33 - m.m23 * m.m31)),

            inv_det * (m.m21 * (m.m32 * m.m44 - m.m34 * m.m42) - m.m22 * (m.m31 * m.m44 - m.m34 * m.m41) + m.m24 * (m.m31 * m.m42 - m.m32 * m.m41)),
            inv_det * -(m.m11 * (m.m32 * m.m44 - m.m34 * m.m42) - m.m12 * (m.m31 * m.m44 - m.m34 * m.m41) + m.m14 * (m.m31 * m.m42 - m.m32 * m.m41)),
            inv_det * (m.m11 * (m.m22 * m.m44 - m.m24 * m.m42) - m.m12 * (m.m21 * m.m44 - m.m24 * m.m41) + m.m14 * (m.m21 * m.m42 - m.m22 * m.m41)),
            inv_det * -(m.m11 * (m.m22 * m.m34 - m.m24 * m.m32) - m.m12 * (m.m21 * m.m34 - m.m24 * m.m31) + m.m14 * (m.m21 * m.m32 - m.m22 * m.m31)),

            inv_det * -(m.m21 * (m.m32 * m.m43 - m.m33 * m.m42) - m.m22 * (m.m31 * m.m43 - m.m33 * m.m41) + m.m23 * (m.m31 * m.m42 - m.m32 * m.m41)),
            inv_det * (m.m11 * (m.m32 * m.m43 - m.m33 * m.m42) - m.m12 * (m.m31 * m.m43 - m.m33 * m.m41) + m.m13 * (m.m31 * m.m42 - m.m32 * m.m41)),
            inv_det * -(m.m11 * (m.m22 * m.m43 - m.m23 * m.m42) - m.m12 * (m.m21 * m.m43 - m.m23 * m.m41) + m.m13 * (m.m21 * m.m42 - m.m22 * m.m41)),
            inv_det * (m.m11 * (m.m22 * m.m33 - m.m23 * m.m32) - m.m12 * (m.m21 * m.m33 - m.m23 * m.m31) + m.m13 * (m.m21 * m.m32 - m.m22 * m.m31)),
        ))
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {} {}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
