//! vec3d: a three-dimensional vector value type
//!
//! This crate provides [`Vector`], a small `Copy` type with the arithmetic,
//! geometric and spherical-coordinate operations used by graphics, physics
//! and simulation code.
//!
//! Operations are offered both as methods (`a.add(b)`) and as free functions
//! in [`ops`] (`ops::add(a, b)`), the latter with `_into` variants that write
//! into a caller-supplied output vector. Arithmetic accepts either a vector or
//! a scalar on the right-hand side through [`Operand`].
//!
//! Floating-point anomalies are never converted into errors: normalizing a
//! zero vector yields NaN components and so does measuring an angle against a
//! zero-length vector. [`VectorError`] is reserved for building vectors from
//! malformed input.
//!
//! ```rust
//! use vec3d::{ops, Vector};
//!
//! let v1 = Vector::new(1.0, 2.0, 3.0);
//! let v2 = Vector::new(4.0, 5.0, 6.0);
//!
//! assert!(ops::add(v1, v2).equals(Vector::new(5.0, 7.0, 9.0)));
//! assert_eq!(v1.length(), 14f64.sqrt());
//! ```

pub mod errors;
pub mod ops;
pub mod vector;

// Re-export commonly used types
pub use errors::{Result, VectorError};
pub use vector::{Operand, Vector};
