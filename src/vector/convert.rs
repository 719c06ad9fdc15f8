//! Conversions between `Vector` and other representations

use super::Vector;
use crate::errors::VectorError;
use nalgebra::Vector3;
use std::fmt;
use std::str::FromStr;

impl From<[f64; 3]> for Vector {
    fn from(components: [f64; 3]) -> Self {
        Vector::from_array(components)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Vector {
    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nalgebra::Vector3;
    /// use vec3d::Vector;
    ///
    /// let vec: Vector3<f64> = Vector::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn to_vector3(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vector::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(vec: Vector3<f64>) -> Self {
        Vector::from_vector3(vec)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        v.to_vector3()
    }
}

impl num_traits::Zero for Vector {
    fn zero() -> Self {
        Vector::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Vector::ZERO
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parses `"x, y, z"`, optionally wrapped in parentheses
///
/// This accepts the output of `Display`, so `v.to_string().parse()` yields `v`
/// for every finite vector.
impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let values = parts
            .iter()
            .filter(|part| !part.is_empty() || parts.len() > 1)
            .map(|part| {
                part.parse::<f64>()
                    .map_err(|source| VectorError::InvalidComponent {
                        value: part.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<f64>, VectorError>>()
            .map_err(|err| {
                log::debug!("rejecting {s:?}: {err}");
                err
            })?;

        if values.len() > 3 {
            log::debug!("rejecting {s:?}: {} components", values.len());
            return Err(VectorError::TooManyComponents {
                expected: 3,
                found: values.len(),
            });
        }

        Vector::from_slice(&values)
    }
}
