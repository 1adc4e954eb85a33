//! Builds a unit cube at (2, 2, 1), spins it 45 degrees in the xy and xz
//! planes, and plots the wireframe to `spinning_cube.svg`.
//!
//! Run with `cargo run --example spinning_cube`; set `RUST_LOG=debug` to see
//! the build diagnostics.

use plotters::prelude::{ChartBuilder, IntoDrawingArea, LineSeries, SVGBackend};
use plotters::style::{Color as _, RGBColor, WHITE};
use wirecube::{Color, CubeBuilder, Edge, RenderSurface, RotationMatrix, Vector3d};

/// A plotters-backed SVG surface.
///
/// Draw calls are collected so the chart range can be fitted around
/// everything before any line is emitted; `finish` writes the file.
struct SvgSurface {
    path: String,
    batches: Vec<(Vec<Edge>, Color)>,
}

impl SvgSurface {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            batches: Vec::new(),
        }
    }

    fn finish(self) -> Result<(), Box<dyn std::error::Error>> {
        let (min, max) = padded_bounds(&self.batches);

        let root = SVGBackend::new(&self.path, (800, 600)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption("cube wireframe", ("sans-serif", 24))
            .margin(20)
            .build_cartesian_3d(min[0]..max[0], min[1]..max[1], min[2]..max[2])?;
        chart.with_projection(|mut pb| {
            pb.pitch = 0.25;
            pb.yaw = 0.7;
            pb.scale = 0.9;
            pb.into_matrix()
        });
        chart.configure_axes().draw()?;

        for (edges, color) in &self.batches {
            let style = to_rgb(*color).stroke_width(2);
            for edge in edges {
                chart.draw_series(LineSeries::new(
                    [edge.tail, edge.head].map(|p| (p.x(), p.y(), p.z())),
                    style,
                ))?;
            }
        }

        root.present()?;
        Ok(())
    }
}

impl RenderSurface for SvgSurface {
    fn draw_edges(&mut self, edges: &[Edge], color: Color) {
        self.batches.push((edges.to_vec(), color));
    }
}

fn to_rgb(color: Color) -> RGBColor {
    RGBColor(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
    )
}

/// Chart range fitted around every batch, with 20% breathing room per axis.
fn padded_bounds(batches: &[(Vec<Edge>, Color)]) -> ([f64; 3], [f64; 3]) {
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for (edges, _) in batches {
        for edge in edges {
            for endpoint in [edge.tail, edge.head] {
                let p = endpoint.to_array();
                for axis in 0..3 {
                    min[axis] = min[axis].min(p[axis]);
                    max[axis] = max[axis].max(p[axis]);
                }
            }
        }
    }
    for axis in 0..3 {
        let pad = (max[axis] - min[axis]).abs() * 0.2 + 1e-6;
        min[axis] -= pad;
        max[axis] += pad;
    }
    (min, max)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let quarter = 45f64.to_radians();
    let cube = CubeBuilder::new()
        .size(1.0)
        .rotated(RotationMatrix::xy(quarter))
        .rotated(RotationMatrix::xz(quarter))
        .origin(Vector3d::new(2.0, 2.0, 1.0)?)
        .build()?;

    let mut surface = SvgSurface::new("spinning_cube.svg");
    surface.draw_edges(cube.edges(), Color::VIOLET);
    surface.finish()?;

    println!("wrote spinning_cube.svg");
    Ok(())
}
