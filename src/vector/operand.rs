//! Right-hand operand of the arithmetic operations
//!
//! `add`, `subtract`, `multiply` and `divide` accept either another vector,
//! combined component by component, or a scalar broadcast to all three
//! components. `Operand` carries that choice in the type system so callers
//! can simply pass a `Vector`, a `&Vector` or an `f64`.

use super::Vector;

/// Either a vector or a scalar on the right-hand side of an arithmetic operation
///
/// # Examples
///
/// ```rust
/// use vec3d::{Operand, Vector};
///
/// let v = Vector::new(1.0, 2.0, 3.0);
/// assert_eq!(Operand::from(2.0), Operand::Scalar(2.0));
/// assert_eq!(Operand::from(v), Operand::Vector(v));
/// assert_eq!(Operand::from(2.0).broadcast(), Vector::new(2.0, 2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Combine component-wise with this vector
    Vector(Vector),
    /// Broadcast this value to all three components
    Scalar(f64),
}

impl Operand {
    /// Expands the operand to a full vector
    ///
    /// A scalar `s` becomes `(s, s, s)`; a vector is returned unchanged.
    pub fn broadcast(self) -> Vector {
        match self {
            Operand::Vector(v) => v,
            Operand::Scalar(s) => Vector::new(s, s, s),
        }
    }

    /// Applies `f` to each component pair of `lhs` and this operand
    pub(crate) fn zip_with<F>(self, lhs: Vector, f: F) -> Vector
    where
        F: Fn(f64, f64) -> f64,
    {
        let rhs = self.broadcast();
        Vector {
            x: f(lhs.x, rhs.x),
            y: f(lhs.y, rhs.y),
            z: f(lhs.z, rhs.z),
        }
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<&Vector> for Operand {
    fn from(v: &Vector) -> Self {
        Operand::Vector(*v)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}
