//! The renderer seam.
//!
//! The core never draws anything itself. It hands an ordered list of edges
//! and a color to a [`RenderSurface`], and the surface decides projection,
//! styling, and output medium. The demo program in `demos/` implements the
//! trait with an SVG plotting backend; a GPU line list or a terminal plot
//! would implement it just as well.

use crate::wireframe::Edge;

/// RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    /// The traditional wireframe draw color.
    pub const VIOLET: Color = Color::rgb(0.933, 0.51, 0.933);
}

/// A 3D plotting surface that accepts line segments.
///
/// Implementations draw each edge as a line segment in the given color.
/// Nothing is returned to the caller; how and where the lines end up is
/// entirely the surface's business.
pub trait RenderSurface {
    /// Draws each edge as a line segment.
    fn draw_edges(&mut self, edges: &[Edge], color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3d;

    /// Records draw calls instead of drawing.
    struct Recorder {
        calls: Vec<(Vec<Edge>, Color)>,
    }

    impl RenderSurface for Recorder {
        fn draw_edges(&mut self, edges: &[Edge], color: Color) {
            self.calls.push((edges.to_vec(), color));
        }
    }

    #[test]
    fn surfaces_receive_edges_and_color_unchanged() {
        let edge = Edge::new(
            Vector3d::new(0.0, 0.0, 0.0).unwrap(),
            Vector3d::new(1.0, 0.0, 0.0).unwrap(),
        );
        let mut surface = Recorder { calls: Vec::new() };

        surface.draw_edges(&[edge], Color::VIOLET);

        assert_eq!(surface.calls.len(), 1);
        assert_eq!(surface.calls[0].0, vec![edge]);
        assert_eq!(surface.calls[0].1, Color::VIOLET);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(0.1, 0.2, 0.3).a, 1.0);
    }
}
