//! Validated 3D coordinates.
//!
//! [`Vector3d`] is the coordinate type used by every other part of the crate.
//! It is a plain, immutable triple of `f64` components, checked once at
//! construction: every component must be finite. After that, operations can
//! assume well-formed values and never re-validate.
//!
//! # Example
//!
//! ```
//! use wirecube::Vector3d;
//!
//! # fn main() -> Result<(), wirecube::GeometryError> {
//! // From explicit components
//! let v = Vector3d::new(1.0, 2.0, 3.0)?;
//! assert_eq!(v.x(), 1.0);
//!
//! // From a slice, relative to an origin
//! let origin = Vector3d::new(2.0, 2.0, 1.0)?;
//! let w = Vector3d::from_slice_at(&[1.0, 0.0, 0.0], origin)?;
//! assert_eq!(w.to_array(), [3.0, 2.0, 1.0]);
//! # Ok(())
//! # }
//! ```

use crate::error::GeometryError;
use glam::DVec3;
use std::ops::{Add, Neg, Sub};

/// An immutable 3D coordinate with finite `f64` components.
///
/// The struct is `#[repr(C)]` and [`bytemuck::Pod`], so slices of vectors can
/// be reinterpreted as flat `f64` buffers for renderer hand-off without
/// copying.
///
/// # Memory Layout
///
/// Each vector occupies 24 bytes: `x`, `y`, `z` as consecutive `f64` values.
///
/// # Validation
///
/// All public constructors reject NaN and infinite components with
/// [`GeometryError::NonFiniteComponent`]. Slice constructors additionally
/// reject inputs that do not have exactly three elements. Value arithmetic
/// (`Add`, `Sub`, `Neg`) does not re-validate; at the magnitudes this crate
/// works with, sums of finite coordinates stay finite.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector3d {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3d {
    /// The zero vector, also the default origin.
    pub const ZERO: Vector3d = Vector3d {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector from explicit components.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFiniteComponent`] if any component is NaN
    /// or infinite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            x: ensure_finite(0, x)?,
            y: ensure_finite(1, y)?,
            z: ensure_finite(2, z)?,
        })
    }

    /// Creates a vector from a slice of exactly three components.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ComponentCount`] if the slice does not have
    /// exactly three elements, or [`GeometryError::NonFiniteComponent`] if
    /// any element is NaN or infinite.
    pub fn from_slice(coords: &[f64]) -> Result<Self, GeometryError> {
        log::trace!("vector from {:?}", coords);
        let [x, y, z]: [f64; 3] = coords
            .try_into()
            .map_err(|_| GeometryError::ComponentCount(coords.len()))?;
        Self::new(x, y, z)
    }

    /// Creates a vector from a slice, offset component-wise by `origin`.
    ///
    /// The result equals `coords[i] + origin[i]` for each axis. Validation
    /// applies to `coords` exactly as in [`Vector3d::from_slice`]; the origin
    /// is already a valid vector by construction.
    pub fn from_slice_at(coords: &[f64], origin: Vector3d) -> Result<Self, GeometryError> {
        Ok(Self::from_slice(coords)? + origin)
    }

    /// The x component.
    pub fn x(self) -> f64 {
        self.x
    }

    /// The y component.
    pub fn y(self) -> f64 {
        self.y
    }

    /// The z component.
    pub fn z(self) -> f64 {
        self.z
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    // Used internally for values that are finite by construction, such as
    // rotation results and bounding-box corners.
    pub(crate) fn from_dvec3(v: DVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

fn ensure_finite(axis: usize, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFiniteComponent { axis, value })
    }
}

impl From<Vector3d> for DVec3 {
    fn from(v: Vector3d) -> DVec3 {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl Add for Vector3d {
    type Output = Vector3d;

    fn add(self, rhs: Vector3d) -> Vector3d {
        Vector3d {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3d {
    type Output = Vector3d;

    fn sub(self, rhs: Vector3d) -> Vector3d {
        Vector3d {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vector3d {
    type Output = Vector3d;

    fn neg(self) -> Vector3d {
        Vector3d {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::fmt::Display for Vector3d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_preserves_components_exactly() {
        let v = Vector3d::from_slice(&[1.5, -2.25, 0.125]).unwrap();
        assert_eq!(v.to_array(), [1.5, -2.25, 0.125]);
    }

    #[test]
    fn from_slice_at_adds_origin_componentwise() {
        let origin = Vector3d::new(2.0, 2.0, 1.0).unwrap();
        let v = Vector3d::from_slice_at(&[0.5, -0.5, 0.5], origin).unwrap();
        assert_eq!(v.to_array(), [2.5, 1.5, 1.5]);
    }

    #[test]
    fn wrong_length_slices_are_rejected() {
        assert_eq!(
            Vector3d::from_slice(&[1.0, 2.0]),
            Err(GeometryError::ComponentCount(2))
        );
        assert_eq!(
            Vector3d::from_slice(&[1.0, 2.0, 3.0, 4.0]),
            Err(GeometryError::ComponentCount(4))
        );
    }

    #[test]
    fn non_finite_components_are_rejected() {
        let err = Vector3d::new(0.0, f64::NAN, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::NonFiniteComponent { axis: 1, .. }
        ));

        let err = Vector3d::from_slice(&[f64::INFINITY, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::NonFiniteComponent { axis: 0, .. }
        ));
    }

    #[test]
    fn value_arithmetic() {
        let a = Vector3d::new(1.0, 2.0, 3.0).unwrap();
        let b = Vector3d::new(0.5, 0.5, 0.5).unwrap();
        assert_eq!((a + b).to_array(), [1.5, 2.5, 3.5]);
        assert_eq!((a - b).to_array(), [0.5, 1.5, 2.5]);
        assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0]);
    }

    #[test]
    fn display_is_a_plain_triple() {
        let v = Vector3d::new(1.0, -2.0, 3.5).unwrap();
        assert_eq!(v.to_string(), "(1, -2, 3.5)");
    }
}
