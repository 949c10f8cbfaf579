//! Linear Algebra Library
//!
//! This crate provides the vector, rotation and transform value types shared
//! by the PSM platform layer. Every operation returns a new value; the only
//! in-place operation is [`Plane::normalize`].
//!
//! ## Core Types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - 2D/3D/4D vectors
//! - [`Quaternion`] - rotation quaternion (Hamilton product via `*`)
//! - [`Matrix4x4`] - row-major 4x4 matrix
//! - [`Plane`] - plane equation `a*x + b*y + c*z + d = 0`
//!
//! ## Degenerate input
//!
//! | Operation | Degenerate input | Result |
//! |---|---|---|
//! | [`Vector3::normalize`] | magnitude == 0 | `Err(MathError::ZeroLengthVector)` |
//! | [`Quaternion::normalize`] | length == 0 | NaN components |
//! | [`Quaternion::inverse`] | length² == 0 | [`Quaternion::IDENTITY`] |
//! | [`Matrix4x4::inverse`] | determinant == 0 | `Err(MathError::SingularMatrix)` |
//! | [`Plane::normalize`] | length == 0 | plane unchanged |

mod error;
mod vector2;
mod vector3;
mod vector4;
mod quaternion;
pub mod matrix4x4;
pub mod plane;

pub use error::MathError;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
pub use quaternion::Quaternion;
pub use matrix4x4::Matrix4x4;
pub use plane::{Plane, FLOAT_EPSILON};
