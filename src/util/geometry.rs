//! Boundary line math for the plot.
//!
//! The decision boundary is modeled as a direction angle plus a signed
//! perpendicular displacement from the plot center. All helpers work in plot
//! coordinates (origin top-left, y down), matching the SVG viewport.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Logical side length of the square plot viewport, in plot units.
pub const PLOT_SIZE: f64 = 400.0;

/// Half-length of a rendered boundary segment. At 1.5x the plot side overall,
/// a segment crosses the viewport at any angle and displacement reachable by
/// dragging inside the plot.
const SEGMENT_HALF_LENGTH: f64 = PLOT_SIZE * 0.75;

/// Endpoints of one rendered boundary segment, in plot coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    /// SVG path data for this segment (`M x1 y1 L x2 y2`).
    #[must_use]
    pub fn to_path_data(self) -> String {
        format!("M {} {} L {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Unit direction of a boundary line at `angle_deg` degrees.
#[must_use]
pub fn direction(angle_deg: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    (radians.cos(), radians.sin())
}

/// Unit normal of a boundary line at `angle_deg` degrees (the direction
/// rotated a quarter turn).
#[must_use]
pub fn normal(angle_deg: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    (-radians.sin(), radians.cos())
}

/// Segment of the line at `angle_deg`, displaced `displacement` plot units
/// along the normal from the plot center.
#[must_use]
pub fn boundary_segment(angle_deg: f64, displacement: f64) -> Segment {
    let (dir_x, dir_y) = direction(angle_deg);
    let (norm_x, norm_y) = normal(angle_deg);
    let center = PLOT_SIZE * 0.5;
    let cx = center + (norm_x * displacement);
    let cy = center + (norm_y * displacement);
    Segment {
        x1: cx - (dir_x * SEGMENT_HALF_LENGTH),
        y1: cy - (dir_y * SEGMENT_HALF_LENGTH),
        x2: cx + (dir_x * SEGMENT_HALF_LENGTH),
        y2: cy + (dir_y * SEGMENT_HALF_LENGTH),
    }
}

/// Project a pointer position, given as a delta from the plot center, onto
/// the boundary normal. The result is the perpendicular displacement that
/// puts the line directly under the pointer.
#[must_use]
pub fn project_offset(angle_deg: f64, dx: f64, dy: f64) -> f64 {
    let (norm_x, norm_y) = normal(angle_deg);
    (dx * norm_x) + (dy * norm_y)
}
