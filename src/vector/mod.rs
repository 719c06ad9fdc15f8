//! # Three-Dimensional Vector Module
//!
//! This module provides `Vector`, a plain `(x, y, z)` value type with the
//! arithmetic, geometric and spherical-coordinate operations needed by
//! rendering, physics and simulation code.
//!
//! ## Value Semantics
//!
//! Vectors are `Copy` and logically immutable. Every operation returns a new
//! vector and leaves its operands untouched. The single exception is
//! [`Vector::init`], which reinitializes an existing instance in place (for
//! example when recycling vectors from a pool).
//!
//! ## Calling Conventions
//!
//! Each operation is available in two forms with identical numerics:
//! - as a method on the left operand, `a.add(b)`
//! - as a free function in [`crate::ops`], `ops::add(a, b)`, with an
//!   `_into` variant that writes into a caller-supplied output vector
//!
//! Arithmetic methods accept anything convertible into an [`Operand`]: a
//! vector combines component-wise, an `f64` is broadcast to all components.
//!
//! ## Floating-Point Anomalies
//!
//! Nothing here is guarded. Normalizing a zero vector, dividing by zero or
//! measuring the angle to a zero-length vector produce NaN or infinite
//! components exactly as IEEE 754 prescribes.
//!
//! ## Examples
//!
//! ```rust
//! use vec3d::Vector;
//!
//! let v1 = Vector::new(1.0, 2.0, 3.0);
//! let v2 = Vector::new(4.0, 5.0, 6.0);
//!
//! assert!(v1.add(v2).equals(Vector::new(5.0, 7.0, 9.0)));
//! assert!(v1.subtract(1.0).equals(Vector::new(0.0, 1.0, 2.0)));
//! assert_eq!(v1.dot(v2), 32.0);
//! assert_eq!(v1.cross(v2), Vector::new(-3.0, 6.0, -3.0));
//! ```

mod convert;
mod operand;

pub use operand::Operand;

use crate::errors::{Result, VectorError};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Three-dimensional vector of `f64` components
///
/// The type has no hidden state: two vectors are the same vector exactly
/// when their components compare equal. `Vector::default()` is the zero
/// vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);
    /// Unit vector along X (1, 0, 0)
    pub const UNIT_X: Vector = Vector::new(1.0, 0.0, 0.0);
    /// Unit vector along Y (0, 1, 0)
    pub const UNIT_Y: Vector = Vector::new(0.0, 1.0, 0.0);
    /// Unit vector along Z (0, 0, 1)
    pub const UNIT_Z: Vector = Vector::new(0.0, 0.0, 1.0);

    /// Creates a new vector from its components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    ///
    /// let v = Vector::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Creates a vector from an array, taking indices 0, 1 and 2 as x, y and z
    pub const fn from_array(components: [f64; 3]) -> Self {
        Vector::new(components[0], components[1], components[2])
    }

    /// Creates a vector from the first three values of a slice
    ///
    /// Values beyond the third are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InsufficientComponents`] when the slice holds
    /// fewer than three values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(v, Vector::new(1.0, 2.0, 3.0));
    ///
    /// assert!(Vector::from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [x, y, z, ..] => Ok(Vector::new(*x, *y, *z)),
            _ => {
                log::debug!("rejecting slice of {} values as a vector", values.len());
                Err(VectorError::InsufficientComponents {
                    expected: 3,
                    found: values.len(),
                })
            }
        }
    }

    /// Creates an independent copy of another vector
    pub fn from_vector(other: Vector) -> Self {
        Vector::new(other.x, other.y, other.z)
    }

    /// Creates a unit vector from spherical angles
    ///
    /// `phi` is the elevation above the XZ plane and `theta` the azimuth
    /// measured from +X towards +Z, both in radians.
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = cos(phi) * cos(theta)`
    /// - `y = sin(phi)`
    /// - `z = cos(phi) * sin(theta)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    /// use std::f64::consts::PI;
    ///
    /// let up = Vector::from_phi_theta(PI / 2.0, 0.0);
    /// assert!(up.x.abs() < 1e-15);
    /// assert_eq!(up.y, 1.0);
    /// ```
    #[doc(alias = "from_angles")]
    pub fn from_phi_theta(phi: f64, theta: f64) -> Self {
        let cos_phi = phi.cos();
        Vector {
            x: cos_phi * theta.cos(),
            y: phi.sin(),
            z: cos_phi * theta.sin(),
        }
    }

    /// Returns a unit vector uniformly distributed over the sphere
    ///
    /// Uses the thread-local random number generator. See
    /// [`Vector::random_direction_with`] for a reproducible variant.
    pub fn random_direction() -> Self {
        Vector::random_direction_with(&mut rand::thread_rng())
    }

    /// Returns a uniformly distributed unit vector drawn from `rng`
    ///
    /// Draws `phi = asin(2u - 1)` and `theta = 2πu'` with `u`, `u'`
    /// independent and uniform on `[0, 1)`. Taking the arcsine of a uniform
    /// value keeps the density uniform in area rather than clustering at the
    /// poles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use vec3d::Vector;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let v = Vector::random_direction_with(&mut rng);
    /// assert!((v.length() - 1.0).abs() < 1e-12);
    /// ```
    pub fn random_direction_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let unit = Uniform::new(0.0_f64, 1.0);
        let phi = (2.0 * unit.sample(rng) - 1.0).asin();
        let theta = 2.0 * PI * unit.sample(rng);
        log::trace!("random direction phi={phi} theta={theta}");
        Vector::from_phi_theta(phi, theta)
    }

    /// Overwrites all three components in place and returns `self`
    ///
    /// This is the only operation that mutates an existing vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    ///
    /// let mut v = Vector::ZERO;
    /// let len = v.init(3.0, 4.0, 0.0).length();
    /// assert_eq!(len, 5.0);
    /// assert_eq!(v, Vector::new(3.0, 4.0, 0.0));
    /// ```
    pub fn init(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Adds a vector component-wise or a scalar to every component
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    ///
    /// let v = Vector::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.add(1.0), Vector::new(2.0, 3.0, 4.0));
    /// assert_eq!(v.add(Vector::new(4.0, 5.0, 6.0)), Vector::new(5.0, 7.0, 9.0));
    /// ```
    pub fn add<O: Into<Operand>>(self, rhs: O) -> Vector {
        rhs.into().zip_with(self, |a, b| a + b)
    }

    /// Subtracts a vector component-wise or a scalar from every component
    pub fn subtract<O: Into<Operand>>(self, rhs: O) -> Vector {
        rhs.into().zip_with(self, |a, b| a - b)
    }

    /// Multiplies component-wise by a vector or scales by a scalar
    pub fn multiply<O: Into<Operand>>(self, rhs: O) -> Vector {
        rhs.into().zip_with(self, |a, b| a * b)
    }

    /// Divides component-wise by a vector or by a scalar
    ///
    /// Division by zero follows IEEE 754 and yields infinite or NaN components.
    pub fn divide<O: Into<Operand>>(self, rhs: O) -> Vector {
        rhs.into().zip_with(self, |a, b| a / b)
    }

    /// Cross product `self × other`
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(self, other: Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Component-wise negation
    pub fn negative(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }

    /// Returns this vector divided by its length
    ///
    /// A zero vector is not special-cased: every component becomes `0 / 0`,
    /// i.e. NaN. Use [`Vector::checked_unit`] when a zero input is expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    ///
    /// let unit = Vector::new(3.0, 4.0, 0.0).unit();
    /// assert_eq!(unit, Vector::new(0.6, 0.8, 0.0));
    ///
    /// assert!(Vector::ZERO.unit().x.is_nan());
    /// ```
    pub fn unit(self) -> Vector {
        self.divide(self.length())
    }

    /// Returns the unit vector, or `None` if the length is zero
    pub fn checked_unit(self) -> Option<Vector> {
        let len = self.length();
        if len == 0.0 {
            None
        } else {
            Some(self.divide(len))
        }
    }

    /// Largest of the three components
    ///
    /// NaN if any component is NaN.
    pub fn max(self) -> f64 {
        nan_max(nan_max(self.x, self.y), self.z)
    }

    /// Smallest of the three components
    ///
    /// NaN if any component is NaN.
    pub fn min(self) -> f64 {
        nan_min(nan_min(self.x, self.y), self.z)
    }

    /// Linear interpolation `self * (1 - t) + other * t`
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    ///
    /// let a = Vector::ZERO;
    /// let b = Vector::new(2.0, 4.0, 6.0);
    /// assert_eq!(a.lerp(b, 0.5), Vector::new(1.0, 2.0, 3.0));
    /// assert_eq!(a.lerp(b, 2.0), Vector::new(4.0, 8.0, 12.0));
    /// ```
    pub fn lerp(self, other: Vector, t: f64) -> Vector {
        self.multiply(1.0 - t).add(other.multiply(t))
    }

    /// Dot product `x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length `sqrt(x² + y² + z²)`
    ///
    /// Also known as the magnitude or norm of the vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    ///
    /// assert_eq!(Vector::new(3.0, 4.0, 0.0).length(), 5.0);
    /// assert_eq!(Vector::new(1.0, 2.0, 3.0).length(), 14f64.sqrt());
    /// ```
    #[doc(alias = "magnitude")]
    #[doc(alias = "norm")]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Angle between this vector and `other` in radians
    ///
    /// Computed as `acos(dot / (|self| * |other|))`. If either vector has zero
    /// length the quotient is `0 / 0` and the result is NaN. Rounding can
    /// also push the quotient just outside `[-1, 1]` for nearly parallel
    /// vectors, which likewise gives NaN; the value is not clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    /// use std::f64::consts::PI;
    ///
    /// let angle = Vector::UNIT_X.angle_to(Vector::UNIT_Y);
    /// assert!((angle - PI / 2.0).abs() < 1e-15);
    /// assert!(Vector::ZERO.angle_to(Vector::UNIT_X).is_nan());
    /// ```
    #[doc(alias = "angle_between")]
    pub fn angle_to(self, other: Vector) -> f64 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Converts the direction of this vector to spherical angles
    ///
    /// Returns `(phi, theta)` with `phi = asin(y / length)` in
    /// `[-π/2, π/2]` and `theta = atan2(z, x)` in `[-π, π]`. This inverts
    /// [`Vector::from_phi_theta`] for unit vectors away from the poles.
    #[doc(alias = "to_angles")]
    pub fn to_phi_theta(self) -> (f64, f64) {
        let phi = (self.y / self.length()).asin();
        let theta = self.z.atan2(self.x);
        (phi, theta)
    }

    /// Returns the first `n` components as a vector of values
    ///
    /// `n` is clamped to 3, and `n == 0` is treated as 3 so that the default
    /// request returns every component.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vec3d::Vector;
    ///
    /// let v = Vector::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.to_array(2), vec![1.0, 2.0]);
    /// assert_eq!(v.to_array(0), vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v.to_array(7), vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn to_array(self, n: usize) -> Vec<f64> {
        let n = if n == 0 { 3 } else { n.min(3) };
        [self.x, self.y, self.z][..n].to_vec()
    }

    /// Exact component-wise equality, without any tolerance
    ///
    /// Equivalent to `==`. NaN components never compare equal, and `0.0`
    /// equals `-0.0`.
    pub fn equals(self, other: Vector) -> bool {
        self == other
    }
}

/// Larger of `a` and `b`, or NaN if either is NaN
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Smaller of `a` and `b`, or NaN if either is NaN
pub(crate) fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

macro_rules! impl_binary_ops {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt;)*) => {
        $(
            impl std::ops::$trait<Vector> for Vector {
                type Output = Vector;

                fn $method(self, rhs: Vector) -> Vector {
                    Operand::Vector(rhs).zip_with(self, |a, b| a $op b)
                }
            }

            impl std::ops::$trait<f64> for Vector {
                type Output = Vector;

                fn $method(self, rhs: f64) -> Vector {
                    Operand::Scalar(rhs).zip_with(self, |a, b| a $op b)
                }
            }

            impl std::ops::$assign_trait<Vector> for Vector {
                fn $assign_method(&mut self, rhs: Vector) {
                    *self = Operand::Vector(rhs).zip_with(*self, |a, b| a $op b);
                }
            }

            impl std::ops::$assign_trait<f64> for Vector {
                fn $assign_method(&mut self, rhs: f64) {
                    *self = Operand::Scalar(rhs).zip_with(*self, |a, b| a $op b);
                }
            }
        )*
    };
}

// Operator sugar for the arithmetic methods
impl_binary_ops! {
    Add, add, AddAssign, add_assign, +;
    Sub, sub, SubAssign, sub_assign, -;
    Mul, mul, MulAssign, mul_assign, *;
    Div, div, DivAssign, div_assign, /;
}

impl std::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn v1() -> Vector {
        Vector::new(1.0, 2.0, 3.0)
    }

    fn v2() -> Vector {
        Vector::new(4.0, 5.0, 6.0)
    }

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vector::default(), Vector::ZERO);
        assert_eq!(Vector::from_array([1.0, 2.0, 3.0]), v);
        assert_eq!(Vector::from_vector(v), v);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap(), v1());
        assert_eq!(Vector::from_slice(&[1.0, 2.0, 3.0, 9.0]).unwrap(), v1());
        assert_eq!(
            Vector::from_slice(&[1.0]),
            Err(VectorError::InsufficientComponents {
                expected: 3,
                found: 1
            })
        );
        assert!(Vector::from_slice(&[]).is_err());
    }

    #[test]
    fn test_init_mutates_in_place() {
        let mut v = v1();
        let copy = v;
        v.init(7.0, 8.0, 9.0).init(-1.0, 0.0, 1.0);
        assert_eq!(v, Vector::new(-1.0, 0.0, 1.0));
        // Copies taken before init are unaffected
        assert_eq!(copy, v1());
    }

    #[test]
    fn test_reference_scenarios() {
        assert!(v1().add(1.0).equals(Vector::new(2.0, 3.0, 4.0)));
        assert!(v1().add(v2()).equals(Vector::new(5.0, 7.0, 9.0)));
        assert!(v1().subtract(1.0).equals(Vector::new(0.0, 1.0, 2.0)));
        assert!(v1().subtract(v2()).equals(Vector::new(-3.0, -3.0, -3.0)));
        assert_eq!(v1().dot(v2()), 32.0);
        assert!(v1().cross(v2()).equals(Vector::new(-3.0, 6.0, -3.0)));
        assert_eq!(v1().length(), 14f64.sqrt());
    }

    #[test]
    fn test_multiply_and_divide() {
        assert_eq!(v1().multiply(2.0), Vector::new(2.0, 4.0, 6.0));
        assert_eq!(v1().multiply(v2()), Vector::new(4.0, 10.0, 18.0));
        assert_eq!(v1().divide(2.0), Vector::new(0.5, 1.0, 1.5));
        assert_eq!(v2().divide(v1()), Vector::new(4.0, 2.5, 2.0));

        let inf = v1().divide(0.0);
        assert!(inf.x.is_infinite() && inf.y.is_infinite() && inf.z.is_infinite());
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = v1();
        let b = v2();
        let _ = a.add(b);
        let _ = a.cross(b);
        let _ = a.unit();
        assert_eq!(a, v1());
        assert_eq!(b, v2());
    }

    #[test]
    fn test_cross_product_axes() {
        assert_eq!(Vector::UNIT_X.cross(Vector::UNIT_Y), Vector::UNIT_Z);
        assert_eq!(Vector::UNIT_Y.cross(Vector::UNIT_Z), Vector::UNIT_X);
        assert_eq!(Vector::UNIT_Z.cross(Vector::UNIT_X), Vector::UNIT_Y);
    }

    #[test]
    fn test_unit() {
        let unit = Vector::new(3.0, 4.0, 0.0).unit();
        assert!((unit.length() - 1.0).abs() < 1e-15);
        assert_eq!(unit, Vector::new(0.6, 0.8, 0.0));

        // Zero vector is not guarded
        let nan = Vector::ZERO.unit();
        assert!(nan.x.is_nan() && nan.y.is_nan() && nan.z.is_nan());
        assert!(Vector::ZERO.checked_unit().is_none());
        assert_eq!(Vector::new(0.0, 0.0, 2.0).checked_unit(), Some(Vector::UNIT_Z));
    }

    #[test]
    fn test_component_extrema() {
        let v = Vector::new(-2.0, 7.0, 3.0);
        assert_eq!(v.max(), 7.0);
        assert_eq!(v.min(), -2.0);
    }

    #[test]
    fn test_component_extrema_propagate_nan() {
        let v = Vector::new(f64::NAN, 1.0, 2.0);
        assert!(v.max().is_nan());
        assert!(v.min().is_nan());

        let v = Vector::new(1.0, 2.0, f64::NAN);
        assert!(v.max().is_nan());
        assert!(v.min().is_nan());

        // NaN left by normalizing a zero vector is not swallowed
        assert!(Vector::ZERO.unit().max().is_nan());
    }

    #[test]
    fn test_lerp_extrapolates() {
        let a = v1();
        let b = v2();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, -1.0), Vector::new(-2.0, -1.0, 0.0));
    }

    #[test]
    fn test_angle_to() {
        let angle = Vector::UNIT_X.angle_to(Vector::new(-3.0, 0.0, 0.0));
        assert!((angle - PI).abs() < 1e-15);
        assert!(Vector::UNIT_X.angle_to(Vector::ZERO).is_nan());
    }

    #[test]
    fn test_spherical_axes() {
        let v = Vector::from_phi_theta(0.0, 0.0);
        assert_eq!(v, Vector::UNIT_X);

        let v = Vector::from_phi_theta(0.0, PI / 2.0);
        assert!(v.x.abs() < 1e-15);
        assert_eq!(v.y, 0.0);
        assert!((v.z - 1.0).abs() < 1e-15);

        let (phi, theta) = Vector::new(0.0, 0.0, 2.0).to_phi_theta();
        assert_eq!(phi, 0.0);
        assert!((theta - PI / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_theta_range_is_closed() {
        let (_, theta) = Vector::new(-1.0, 0.0, 0.0).to_phi_theta();
        assert_eq!(theta, PI);
        let (_, theta) = Vector::new(-1.0, 0.0, -0.0).to_phi_theta();
        assert_eq!(theta, -PI);
    }

    #[test]
    fn test_random_direction_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = Vector::random_direction_with(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
        assert!((Vector::random_direction().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_direction_is_reproducible() {
        let a = Vector::random_direction_with(&mut StdRng::seed_from_u64(42));
        let b = Vector::random_direction_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_array() {
        assert_eq!(v1().to_array(1), vec![1.0]);
        assert_eq!(v1().to_array(3), vec![1.0, 2.0, 3.0]);
        assert_eq!(v1().to_array(0), vec![1.0, 2.0, 3.0]);
        assert_eq!(v1().to_array(usize::MAX), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Vector::new(0.1 + 0.2, 0.0, 0.0);
        assert!(!a.equals(Vector::new(0.3, 0.0, 0.0)));
        assert!(Vector::new(0.0, 0.0, 0.0).equals(Vector::new(-0.0, 0.0, 0.0)));
        let nan = Vector::new(f64::NAN, 0.0, 0.0);
        assert!(!nan.equals(nan));
    }

    #[test]
    fn test_operator_traits() {
        assert_eq!(v1() + v2(), Vector::new(5.0, 7.0, 9.0));
        assert_eq!(v2() - v1(), Vector::new(3.0, 3.0, 3.0));
        assert_eq!(v1() * 2.0, Vector::new(2.0, 4.0, 6.0));
        assert_eq!(v1() / 2.0, Vector::new(0.5, 1.0, 1.5));
        assert_eq!(v1() + 1.0, Vector::new(2.0, 3.0, 4.0));
        assert_eq!(-v1(), Vector::new(-1.0, -2.0, -3.0));

        let mut v = v1();
        v += v2();
        v -= 1.0;
        v *= 2.0;
        v /= Vector::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vector::new(4.0, 6.0, 8.0));
    }
}
