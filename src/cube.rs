//! Cube wireframe construction.

use crate::error::GeometryError;
use crate::rotation::RotationMatrix;
use crate::vector::Vector3d;
use crate::wireframe::{Edge, Wireframe};

/// A fluent builder for the 12-edge wireframe of a cube.
///
/// Defaults produce a unit cube centered on the world origin. Both defaults
/// are resolved inside [`CubeBuilder::build`], never at static-init time.
///
/// # Transformation Order
///
/// `build` applies its stages in a fixed order:
///
/// 1. The 12 edges are produced centered on the world origin, with every
///    endpoint at `±size/2` along each axis.
/// 2. Staged rotations apply in the order they were added, while the cube is
///    still centered. Rotating therefore always spins the cube about its own
///    center, never about the final position.
/// 3. The wireframe is translated to `origin`.
///
/// To rotate a cube about the world origin instead, build it without staged
/// rotations and call [`Wireframe::rotate`] on the result.
///
/// # Edge Order
///
/// The edge sequence is fixed and reproducible for identical inputs: a ring
/// of four edges around the top face (y = +size/2), the matching ring around
/// the bottom face, then the four vertical connectors. Golden-output tests
/// can rely on both edge order and endpoint order.
///
/// # Example
///
/// ```
/// use wirecube::{CubeBuilder, RotationMatrix, Vector3d};
///
/// # fn main() -> Result<(), wirecube::GeometryError> {
/// let cube = CubeBuilder::new()
///     .size(2.0)
///     .rotated(RotationMatrix::xy(45f64.to_radians()))
///     .origin(Vector3d::new(1.0, 1.0, 1.0)?)
///     .build()?;
///
/// assert_eq!(cube.len(), 12);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct CubeBuilder {
    size: Option<f64>,
    origin: Option<Vector3d>,
    rotations: Vec<RotationMatrix>,
}

impl CubeBuilder {
    /// Creates a builder with default size 1 and the world origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge length.
    ///
    /// Non-positive sizes are accepted: zero collapses the cube to a point
    /// and a negative size mirrors it through its center. Neither case is an
    /// error geometrically, so neither is validated.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the center the cube is translated to after rotation.
    pub fn origin(mut self, origin: Vector3d) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Stages a rotation, applied while the cube is centered.
    ///
    /// May be called repeatedly; rotations apply in call order.
    pub fn rotated(mut self, rotation: RotationMatrix) -> Self {
        self.rotations.push(rotation);
        self
    }

    /// Builds the wireframe.
    ///
    /// # Errors
    ///
    /// The only failure path is coordinate validation: a non-finite size
    /// surfaces as [`GeometryError::NonFiniteComponent`] from vertex
    /// construction.
    pub fn build(self) -> Result<Wireframe, GeometryError> {
        let size = self.size.unwrap_or(1.0);
        let origin = self.origin.unwrap_or(Vector3d::ZERO);
        let h = size / 2.0;

        // The 8 corners, named by sign along (x, y, z).
        let ppp = Vector3d::new(h, h, h)?;
        let mpp = Vector3d::new(-h, h, h)?;
        let pmp = Vector3d::new(h, -h, h)?;
        let mmp = Vector3d::new(-h, -h, h)?;
        let ppm = Vector3d::new(h, h, -h)?;
        let mpm = Vector3d::new(-h, h, -h)?;
        let pmm = Vector3d::new(h, -h, -h)?;
        let mmm = Vector3d::new(-h, -h, -h)?;

        #[rustfmt::skip]
        let edges = vec![
            // top ring (y = +h)
            Edge::new(ppp, mpp),
            Edge::new(mpp, mpm),
            Edge::new(mpm, ppm),
            Edge::new(ppm, ppp),
            // bottom ring (y = -h)
            Edge::new(pmp, mmp),
            Edge::new(mmp, mmm),
            Edge::new(mmm, pmm),
            Edge::new(pmm, pmp),
            // vertical connectors
            Edge::new(ppp, pmp),
            Edge::new(mpp, mmp),
            Edge::new(mpm, mmm),
            Edge::new(ppm, pmm),
        ];

        let mut wireframe = Wireframe::new(edges);
        for rotation in &self.rotations {
            wireframe.rotate(rotation);
        }
        wireframe.translate(origin);

        log::debug!(
            "cube wireframe built: size {}, origin {}, {} rotations, {} edges",
            size,
            origin,
            self.rotations.len(),
            wireframe.len()
        );
        Ok(wireframe)
    }
}
