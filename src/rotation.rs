//! Axis-plane rotation matrices.
//!
//! A [`RotationMatrix`] rotates the projection of a vector onto the plane
//! spanned by two coordinate axes, leaving the third axis unchanged. Multiple
//! rotations compose through ordinary matrix multiplication; see
//! [`RotationMatrix::then`] for the sequencing convention.
//!
//! **All angles are in radians.** Callers working in degrees should convert
//! with [`f64::to_radians`].
//!
//! # Example
//!
//! ```
//! use wirecube::{RotationMatrix, Vector3d};
//!
//! # fn main() -> Result<(), wirecube::GeometryError> {
//! let quarter = RotationMatrix::xy(std::f64::consts::FRAC_PI_2);
//! let v = quarter.apply(Vector3d::new(1.0, 0.0, 0.0)?);
//! assert!((v.y() - 1.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

use crate::error::GeometryError;
use crate::vector::Vector3d;
use glam::{DMat3, DVec3};
use std::ops::Mul;

/// A 3×3 orthonormal matrix rotating one axis-pair plane.
///
/// The matrix is the identity everywhere except the 2×2 block at the chosen
/// axis pair, so its determinant is 1 and its transpose is its inverse.
/// Rotations are always about the world origin; to spin geometry about its
/// own center, rotate it while centered and translate afterwards (the cube
/// builder stages exactly that order).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotationMatrix {
    mat: DMat3,
}

impl RotationMatrix {
    /// The identity rotation.
    pub const IDENTITY: RotationMatrix = RotationMatrix {
        mat: DMat3::IDENTITY,
    };

    /// Builds a rotation by `angle` radians in the plane spanned by the two
    /// given axes (0 = x, 1 = y, 2 = z).
    ///
    /// With row index `r` and column index `c`, the result differs from the
    /// identity only at `M[axis_a, axis_a] = cos θ`, `M[axis_a, axis_b] =
    /// −sin θ`, `M[axis_b, axis_a] = sin θ` and `M[axis_b, axis_b] = cos θ`.
    /// A positive angle turns axis `axis_a` toward axis `axis_b`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::RotationAxisOutOfRange`] for an axis index
    /// above 2, and [`GeometryError::DegenerateRotationPlane`] when both
    /// axes are the same (two distinct axes are needed to span a plane).
    pub fn in_plane(axis_a: usize, axis_b: usize, angle: f64) -> Result<Self, GeometryError> {
        for axis in [axis_a, axis_b] {
            if axis > 2 {
                return Err(GeometryError::RotationAxisOutOfRange(axis));
            }
        }
        if axis_a == axis_b {
            return Err(GeometryError::DegenerateRotationPlane(axis_a));
        }
        Ok(Self::plane_unchecked(axis_a, axis_b, angle))
    }

    /// Rotation in the xy plane (about the z axis).
    pub fn xy(angle: f64) -> Self {
        Self::plane_unchecked(0, 1, angle)
    }

    /// Rotation in the xz plane (about the y axis).
    pub fn xz(angle: f64) -> Self {
        Self::plane_unchecked(0, 2, angle)
    }

    /// Rotation in the yz plane (about the x axis).
    pub fn yz(angle: f64) -> Self {
        Self::plane_unchecked(1, 2, angle)
    }

    // Axes must be distinct and in 0..3.
    fn plane_unchecked(axis_a: usize, axis_b: usize, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut mat = DMat3::IDENTITY;
        // glam matrices are column-major: col_mut(c)[r] addresses M[r, c]
        mat.col_mut(axis_a)[axis_a] = cos;
        mat.col_mut(axis_b)[axis_a] = -sin;
        mat.col_mut(axis_a)[axis_b] = sin;
        mat.col_mut(axis_b)[axis_b] = cos;
        Self { mat }
    }

    /// Rotates a vector about the world origin.
    pub fn apply(&self, v: Vector3d) -> Vector3d {
        Vector3d::from_dvec3(self.mat * DVec3::from(v))
    }

    /// Composes two rotations so that `self` is applied first.
    ///
    /// `a.then(&b).apply(v)` equals `b.apply(a.apply(v))`. Both rotations
    /// act about the fixed world axes (global frame). The `Mul` operator
    /// offers the same composition in the standard column-vector convention,
    /// where `a * b` applies `b` first.
    pub fn then(&self, next: &RotationMatrix) -> RotationMatrix {
        RotationMatrix {
            mat: next.mat * self.mat,
        }
    }

    /// Returns the transpose, which for a rotation is also the inverse.
    pub fn transposed(&self) -> RotationMatrix {
        RotationMatrix {
            mat: self.mat.transpose(),
        }
    }

    /// The determinant (1 for every proper rotation).
    pub fn determinant(&self) -> f64 {
        self.mat.determinant()
    }

    /// The underlying matrix, for interop with glam-based code.
    pub fn matrix(&self) -> DMat3 {
        self.mat
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    /// Matrix product; `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix {
            mat: self.mat * rhs.mat,
        }
    }
}

impl Mul<Vector3d> for RotationMatrix {
    type Output = Vector3d;

    fn mul(self, v: Vector3d) -> Vector3d {
        self.apply(v)
    }
}
