//! # Wirecube
//!
//! **Cube wireframe geometry: build it, spin it, hand it to any renderer.**
//!
//! Wirecube produces the 12 edges of a cube as plain line segments, rotates
//! them through axis-plane rotations, and passes them to whatever 3D plotting
//! surface you point it at. No window, no GPU, no event loop.
//!
//! ## Quick Start
//!
//! ```
//! use wirecube::{CubeBuilder, RotationMatrix, Vector3d};
//!
//! # fn main() -> Result<(), wirecube::GeometryError> {
//! let quarter = 45f64.to_radians();
//!
//! let cube = CubeBuilder::new()
//!     .size(1.0)
//!     .rotated(RotationMatrix::xy(quarter))
//!     .rotated(RotationMatrix::xz(quarter))
//!     .origin(Vector3d::new(2.0, 2.0, 1.0)?)
//!     .build()?;
//!
//! assert_eq!(cube.len(), 12);
//! for edge in &cube {
//!     // each edge is a (tail, head) pair of validated coordinates
//!     assert!(edge.length() > 0.0);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Philosophy
//!
//! - **Validate once, at the edges** — coordinates are checked when they
//!   enter the system; everything downstream works with known-finite values.
//! - **Rotate first, place second** — builders rotate origin-centered
//!   geometry and translate afterwards, so "spin the cube" always means
//!   about its own center. The ordering is part of the API contract, not a
//!   surprise.
//! - **Bring your own renderer** — [`RenderSurface`] is one method; SVG,
//!   terminal, or GPU backends all fit behind it. See `demos/` for a
//!   plotters-based example.

mod cube;
mod error;
mod render;
mod rotation;
mod vector;
mod wireframe;

pub use cube::CubeBuilder;
pub use error::GeometryError;
pub use render::{Color, RenderSurface};
pub use rotation::RotationMatrix;
pub use vector::Vector3d;
pub use wireframe::{Edge, Wireframe};

// Re-export glam math types for convenience
pub use glam::{DMat3, DVec3};
