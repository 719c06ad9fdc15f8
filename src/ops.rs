//! Free-function forms of the vector operations
//!
//! Every function here takes its left operand explicitly and has the same
//! numeric semantics as the corresponding [`Vector`] method. Functions that
//! produce a vector come in two flavours:
//!
//! - `op(a, b)` returns a freshly built vector
//! - `op_into(a, b, &mut out)` writes the result into `out` and returns it,
//!   so a caller can reuse one output vector across many calls
//!
//! Operands are taken by value, so the output may be one of the inputs:
//!
//! ```rust
//! use vec3d::{ops, Vector};
//!
//! let mut acc = Vector::new(1.0, 2.0, 3.0);
//! ops::add_into(acc, 1.0, &mut acc);
//! assert_eq!(acc, Vector::new(2.0, 3.0, 4.0));
//! ```

use crate::vector::{nan_max, nan_min, Operand, Vector};

macro_rules! arithmetic {
    ($($(#[$meta:meta])* $name:ident, $into:ident, $method:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name<O: Into<Operand>>(a: Vector, b: O) -> Vector {
                a.$method(b)
            }

            #[doc = concat!("Like [`", stringify!($name), "`], writing the result into `out`")]
            pub fn $into<O: Into<Operand>>(a: Vector, b: O, out: &mut Vector) -> &mut Vector {
                *out = a.$method(b);
                out
            }
        )*
    };
}

arithmetic! {
    /// Component-wise sum with a vector, or a scalar added to every component
    add, add_into, add;
    /// Component-wise difference with a vector, or a scalar subtracted from every component
    subtract, subtract_into, subtract;
    /// Component-wise product with a vector, or scaling by a scalar
    multiply, multiply_into, multiply;
    /// Component-wise quotient with a vector, or division by a scalar
    divide, divide_into, divide;
}

/// Cross product `a × b`
pub fn cross(a: Vector, b: Vector) -> Vector {
    a.cross(b)
}

/// Like [`cross`], writing the result into `out`
pub fn cross_into(a: Vector, b: Vector, out: &mut Vector) -> &mut Vector {
    *out = a.cross(b);
    out
}

/// Component-wise negation
pub fn negative(a: Vector) -> Vector {
    a.negative()
}

/// Like [`negative`], writing the result into `out`
pub fn negative_into(a: Vector, out: &mut Vector) -> &mut Vector {
    *out = a.negative();
    out
}

/// `a` divided by its length; NaN components for a zero vector
pub fn unit(a: Vector) -> Vector {
    a.unit()
}

/// Like [`unit`], writing the result into `out`
pub fn unit_into(a: Vector, out: &mut Vector) -> &mut Vector {
    *out = a.unit();
    out
}

/// Component-wise maximum of two vectors
///
/// Each component of the result is the larger of the corresponding
/// components; the magnitudes of `a` and `b` play no role. A NaN in either
/// input yields NaN in that component.
///
/// ```rust
/// use vec3d::{ops, Vector};
///
/// let a = Vector::new(1.0, 5.0, 3.0);
/// let b = Vector::new(4.0, 2.0, 6.0);
/// assert_eq!(ops::max(a, b), Vector::new(4.0, 5.0, 6.0));
/// assert_eq!(ops::min(a, b), Vector::new(1.0, 2.0, 3.0));
/// ```
pub fn max(a: Vector, b: Vector) -> Vector {
    Vector::new(nan_max(a.x, b.x), nan_max(a.y, b.y), nan_max(a.z, b.z))
}

/// Component-wise minimum of two vectors
pub fn min(a: Vector, b: Vector) -> Vector {
    Vector::new(nan_min(a.x, b.x), nan_min(a.y, b.y), nan_min(a.z, b.z))
}

/// Linear interpolation `a * (1 - t) + b * t`, with `t` unclamped
pub fn lerp(a: Vector, b: Vector, t: f64) -> Vector {
    a.lerp(b, t)
}

/// Dot product
pub fn dot(a: Vector, b: Vector) -> f64 {
    a.dot(b)
}

/// Euclidean length of `a`
#[doc(alias = "magnitude")]
pub fn length(a: Vector) -> f64 {
    a.length()
}

/// Angle between `a` and `b` in radians; NaN if either has zero length
#[doc(alias = "angle_to")]
pub fn angle_between(a: Vector, b: Vector) -> f64 {
    a.angle_to(b)
}

/// Exact component-wise equality
pub fn equals(a: Vector, b: Vector) -> bool {
    a.equals(b)
}
