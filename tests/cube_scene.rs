//! End-to-end scene: a unit cube placed at (2, 2, 1) and spun 45 degrees in
//! the xy plane, then 45 degrees in the xz plane. Expected coordinates are
//! recomputed here directly from the rotation formulas, independently of the
//! library's matrix code.

use approx::assert_relative_eq;
use std::f64::consts::FRAC_PI_4;
use wirecube::{Color, CubeBuilder, Edge, RenderSurface, RotationMatrix, Vector3d};

const ORIGIN: [f64; 3] = [2.0, 2.0, 1.0];

fn scene_cube() -> wirecube::Wireframe {
    CubeBuilder::new()
        .size(1.0)
        .rotated(RotationMatrix::xy(FRAC_PI_4))
        .rotated(RotationMatrix::xz(FRAC_PI_4))
        .origin(Vector3d::new(ORIGIN[0], ORIGIN[1], ORIGIN[2]).unwrap())
        .build()
        .unwrap()
}

/// Applies the scene transform to one centered corner, from first principles:
/// rotate the (x, y) projection, rotate the (x, z) projection, translate.
fn reference(corner: [f64; 3]) -> [f64; 3] {
    let (s, c) = FRAC_PI_4.sin_cos();
    let [x, y, z] = corner;
    let (x, y) = (x * c - y * s, x * s + y * c);
    let (x, z) = (x * c - z * s, x * s + z * c);
    [x + ORIGIN[0], y + ORIGIN[1], z + ORIGIN[2]]
}

fn assert_close(got: Vector3d, expected: [f64; 3]) {
    let got = got.to_array();
    for axis in 0..3 {
        assert_relative_eq!(got[axis], expected[axis], epsilon = 1e-9);
    }
}

#[test]
fn rotated_cube_matches_the_reference_transform() {
    let cube = scene_cube();
    let centered = CubeBuilder::new().size(1.0).build().unwrap();

    assert_eq!(cube.len(), 12);
    for (got, base) in cube.edges().iter().zip(centered.edges()) {
        assert_close(got.tail, reference(base.tail.to_array()));
        assert_close(got.head, reference(base.head.to_array()));
    }
}

#[test]
fn first_corner_lands_where_hand_computation_says() {
    // (0.5, 0.5, 0.5): the xy turn moves it onto the y axis, the xz turn
    // then splits the remaining x extent between x and z.
    let cube = scene_cube();
    let half_diag = 0.5 * FRAC_PI_4.cos();
    assert_close(
        cube.edges()[0].tail,
        [
            ORIGIN[0] - half_diag,
            ORIGIN[1] + 2.0 * half_diag,
            ORIGIN[2] + half_diag,
        ],
    );
}

#[test]
fn staged_rotations_equal_rotating_a_centered_cube_by_hand() {
    let staged = scene_cube();

    let mut manual = CubeBuilder::new().size(1.0).build().unwrap();
    manual.rotate(&RotationMatrix::xy(FRAC_PI_4));
    manual.rotate(&RotationMatrix::xz(FRAC_PI_4));
    manual.translate(Vector3d::new(ORIGIN[0], ORIGIN[1], ORIGIN[2]).unwrap());

    assert_eq!(staged, manual);
}

#[test]
fn composed_matrix_equals_sequential_application() {
    let combined = RotationMatrix::xy(FRAC_PI_4).then(&RotationMatrix::xz(FRAC_PI_4));

    let mut sequential = CubeBuilder::new().size(1.0).build().unwrap();
    sequential.rotate(&RotationMatrix::xy(FRAC_PI_4));
    sequential.rotate(&RotationMatrix::xz(FRAC_PI_4));

    let mut single = CubeBuilder::new().size(1.0).build().unwrap();
    single.rotate(&combined);

    for (a, b) in sequential.edges().iter().zip(single.edges()) {
        assert_close(a.tail, b.tail.to_array());
        assert_close(a.head, b.head.to_array());
    }
}

#[test]
fn rotation_preserves_edge_lengths() {
    for edge in scene_cube().edges() {
        assert_relative_eq!(edge.length(), 1.0, epsilon = 1e-9);
    }
}

/// A surface that records what it was asked to draw.
#[derive(Default)]
struct Recorder {
    segments: usize,
    colors: Vec<Color>,
}

impl RenderSurface for Recorder {
    fn draw_edges(&mut self, edges: &[Edge], color: Color) {
        self.segments += edges.len();
        self.colors.push(color);
    }
}

#[test]
fn a_surface_sees_twelve_segments_and_the_requested_color() {
    let cube = scene_cube();
    let mut surface = Recorder::default();

    surface.draw_edges(cube.edges(), Color::VIOLET);

    assert_eq!(surface.segments, 12);
    assert_eq!(surface.colors, vec![Color::VIOLET]);

    // buffer-oriented backends get the same geometry as flat coordinates
    assert_eq!(cube.as_line_list().len(), 12 * 6);
}
