//! Precision-oriented **3D rotation algebra** in `f64`: vectors, unit quaternions and
//! orthogonal 3x3 matrices, with mutually consistent conversions between them.
//!
//! Intended for technical and engineering computation rather than real-time graphics:
//! every type is an immutable value, every comparison goes through one crate-wide
//! tolerance ([`float_types::tolerance`]) via the [`IsClose`] trait, and undefined
//! constructions (a zero rotation axis, a non-orthogonal matrix given to
//! [`Quaternion::create_from_matrix`], a singular matrix given to
//! [`Matrix3::inverse`]) return `None`.
//!
//! ```
//! use orient3::{IsClose, Matrix3, Quaternion, Vector3, float_types::FRAC_PI_2};
//!
//! let axis = Vector3::new(1.0, 2.0, 3.0);
//! let q = Quaternion::create_rotation(axis, FRAC_PI_2).unwrap();
//! let m = Matrix3::create_rotation(axis, FRAC_PI_2).unwrap();
//! assert!(q.to_matrix().is_close(&m));
//! assert!(Quaternion::create_from_matrix(&m).unwrap().is_equivalent(&q));
//! ```
//!
//! # Features
//! #### Default
//! - **nalgebra**: conversions to and from `nalgebra`'s `Vector3`, `Matrix3`,
//!   `Rotation3`, `Quaternion` and `UnitQuaternion`

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod format;
pub mod matrix;
pub mod quaternion;
pub mod traits;
pub mod vector;

#[cfg(feature = "nalgebra")]
pub mod nalgebra_interop;

pub use errors::ConversionError;
pub use matrix::{Matrix3, Orthogonality};
pub use quaternion::Quaternion;
pub use traits::IsClose;
pub use vector::Vector3;
