//! Edges and edge collections.
//!
//! An [`Edge`] is one line segment; a [`Wireframe`] is an ordered list of
//! them with bulk geometric operations (translate, rotate, bounds). The
//! wireframe is the unit renderers consume: either as a slice of edges or,
//! for buffer-oriented backends, as a flat `f64` coordinate list via
//! [`Wireframe::as_line_list`].

use crate::rotation::RotationMatrix;
use crate::vector::Vector3d;
use glam::DVec3;

/// A line segment between two 3D points, ordered tail to head.
///
/// The ordering only matters for draw order; no operation in this crate
/// depends on which endpoint is which.
///
/// # Memory Layout
///
/// `#[repr(C)]` and [`bytemuck::Pod`]: 48 bytes per edge, laid out as the
/// tail's `x`, `y`, `z` followed by the head's `x`, `y`, `z`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Edge {
    /// Starting endpoint.
    pub tail: Vector3d,
    /// Ending endpoint.
    pub head: Vector3d,
}

impl Edge {
    /// Creates an edge from tail to head.
    pub fn new(tail: Vector3d, head: Vector3d) -> Self {
        Self { tail, head }
    }

    /// Returns this edge rotated about the world origin.
    ///
    /// Both endpoints are rotated independently; an edge whose endpoints
    /// straddle the origin changes direction as a whole.
    pub fn rotated(&self, rotation: &RotationMatrix) -> Edge {
        Edge {
            tail: rotation.apply(self.tail),
            head: rotation.apply(self.head),
        }
    }

    /// Returns this edge shifted by `offset`.
    pub fn translated(&self, offset: Vector3d) -> Edge {
        Edge {
            tail: self.tail + offset,
            head: self.head + offset,
        }
    }

    /// The distance between the two endpoints.
    pub fn length(&self) -> f64 {
        DVec3::from(self.head - self.tail).length()
    }
}

/// An ordered collection of edges.
///
/// Mutating operations mirror the transformation set renderers expect:
/// translate, rotate about the world origin, recenter. Order is
/// preserved throughout, so a wireframe built from deterministic input
/// stays byte-for-byte reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wireframe {
    edges: Vec<Edge>,
}

impl Wireframe {
    /// Creates a wireframe from an edge list, preserving order.
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// The edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the wireframe has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the edges.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Computes the axis-aligned bounding box over all endpoints.
    ///
    /// Returns `(min, max)` corners. An empty wireframe reports a degenerate
    /// box at the origin.
    pub fn bounds(&self) -> (Vector3d, Vector3d) {
        if self.edges.is_empty() {
            return (Vector3d::ZERO, Vector3d::ZERO);
        }

        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for edge in &self.edges {
            for endpoint in [edge.tail, edge.head] {
                let p = DVec3::from(endpoint);
                min = min.min(p);
                max = max.max(p);
            }
        }

        (Vector3d::from_dvec3(min), Vector3d::from_dvec3(max))
    }

    /// Returns the center point of the bounding box.
    pub fn center(&self) -> Vector3d {
        let (min, max) = self.bounds();
        Vector3d::from_dvec3((DVec3::from(min) + DVec3::from(max)) * 0.5)
    }

    /// Shifts every edge by the given offset.
    pub fn translate(&mut self, offset: Vector3d) {
        for edge in &mut self.edges {
            *edge = edge.translated(offset);
        }
    }

    /// Rotates every edge about the world origin.
    ///
    /// To rotate a wireframe about its own center, recenter it first (or
    /// build it centered), rotate, then translate back into place.
    pub fn rotate(&mut self, rotation: &RotationMatrix) {
        for edge in &mut self.edges {
            *edge = edge.rotated(rotation);
        }
    }

    /// Moves the wireframe so its bounding-box center sits at the origin.
    pub fn recenter(&mut self) {
        let center = self.center();
        self.translate(-center);
    }

    /// The distinct endpoints, in first-seen order.
    ///
    /// Comparison is exact, which is what cube geometry wants: shared
    /// corners are constructed from identical component values, not
    /// re-derived through arithmetic that could drift.
    pub fn vertices(&self) -> Vec<Vector3d> {
        let mut seen: Vec<Vector3d> = Vec::new();
        for edge in &self.edges {
            for endpoint in [edge.tail, edge.head] {
                if !seen.contains(&endpoint) {
                    seen.push(endpoint);
                }
            }
        }
        seen
    }

    /// Reinterprets the edge list as a flat coordinate buffer.
    ///
    /// Six `f64` values per edge (tail xyz, head xyz), zero-copy. Useful for
    /// renderers that upload raw vertex data.
    pub fn as_line_list(&self) -> &[f64] {
        bytemuck::cast_slice(&self.edges)
    }
}

impl<'a> IntoIterator for &'a Wireframe {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
