//! Error types for geometry construction.

/// Errors that can occur when constructing geometry.
///
/// All errors surface synchronously to the immediate caller; nothing is
/// retried or recovered internally. Valid constructions never fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A coordinate component was NaN or infinite.
    NonFiniteComponent {
        /// Index of the offending component (0 = x, 1 = y, 2 = z).
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// A coordinate slice did not have exactly three elements.
    ComponentCount(usize),
    /// Both rotation-plane axes were the same index.
    DegenerateRotationPlane(usize),
    /// A rotation-plane axis index was outside `0..3`.
    RotationAxisOutOfRange(usize),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::NonFiniteComponent { axis, value } => {
                write!(f, "component {} must be finite, got {}", axis, value)
            }
            GeometryError::ComponentCount(count) => {
                write!(f, "expected exactly 3 components, got {}", count)
            }
            GeometryError::DegenerateRotationPlane(axis) => {
                write!(
                    f,
                    "rotation plane axes must be distinct, got axis {} twice",
                    axis
                )
            }
            GeometryError::RotationAxisOutOfRange(axis) => {
                write!(f, "rotation axis {} is out of range (valid: 0, 1, 2)", axis)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
