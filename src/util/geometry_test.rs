#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn segment_direction(seg: Segment) -> (f64, f64) {
    let dx = seg.x2 - seg.x1;
    let dy = seg.y2 - seg.y1;
    let len = dx.hypot(dy);
    (dx / len, dy / len)
}

/// Perpendicular distance from `(x, y)` to the infinite line through `seg`.
fn distance_to_line(seg: Segment, x: f64, y: f64) -> f64 {
    let (dir_x, dir_y) = segment_direction(seg);
    let to_point_x = x - seg.x1;
    let to_point_y = y - seg.y1;
    ((to_point_x * dir_y) - (to_point_y * dir_x)).abs()
}

// --- direction / normal ---

#[test]
fn direction_at_zero_is_horizontal() {
    let (x, y) = direction(0.0);
    assert!(approx_eq(x, 1.0));
    assert!(approx_eq(y, 0.0));
}

#[test]
fn normal_is_perpendicular_to_direction() {
    for angle in [0.0, 17.0, 45.0, 90.0, 133.5, 180.0] {
        let (dir_x, dir_y) = direction(angle);
        let (norm_x, norm_y) = normal(angle);
        let dot = (dir_x * norm_x) + (dir_y * norm_y);
        assert!(dot.abs() < EPSILON, "angle {angle}: dot {dot}");
        assert!(approx_eq(norm_x.hypot(norm_y), 1.0));
    }
}

#[test]
fn normal_at_zero_points_down_screen() {
    let (x, y) = normal(0.0);
    assert!(approx_eq(x, 0.0));
    assert!(approx_eq(y, 1.0));
}

#[test]
fn normal_at_ninety_points_left() {
    let (x, y) = normal(90.0);
    assert!(approx_eq(x, -1.0));
    assert!(approx_eq(y, 0.0));
}

// --- boundary_segment ---

#[test]
fn segment_is_centered_on_plot_midpoint_without_displacement() {
    for angle in [0.0, 30.0, 45.0, 90.0, 160.0] {
        let seg = boundary_segment(angle, 0.0);
        assert!(approx_eq((seg.x1 + seg.x2) * 0.5, PLOT_SIZE * 0.5));
        assert!(approx_eq((seg.y1 + seg.y2) * 0.5, PLOT_SIZE * 0.5));
    }
}

#[test]
fn segment_spans_one_and_a_half_plot_sides() {
    let seg = boundary_segment(72.0, 33.0);
    let length = (seg.x2 - seg.x1).hypot(seg.y2 - seg.y1);
    assert!(approx_eq(length, PLOT_SIZE * 1.5));
}

#[test]
fn three_boundary_lines_are_parallel() {
    for angle in [0.0, 12.0, 45.0, 90.0, 101.0, 180.0] {
        for offset in [-120.0, 0.0, 35.5] {
            let margin = 50.0;
            let lower = boundary_segment(angle, offset - (margin * 0.5));
            let decision = boundary_segment(angle, offset);
            let upper = boundary_segment(angle, offset + (margin * 0.5));
            let (dx, dy) = segment_direction(decision);
            for seg in [lower, upper] {
                let (ox, oy) = segment_direction(seg);
                let cross = (dx * oy) - (dy * ox);
                assert!(cross.abs() < EPSILON, "angle {angle} offset {offset}");
            }
        }
    }
}

#[test]
fn margin_lines_sit_half_a_margin_from_the_decision_line() {
    for angle in [0.0, 33.0, 45.0, 90.0, 150.0] {
        for margin in [10.0, 50.0, 100.0] {
            let offset = 20.0;
            let decision = boundary_segment(angle, offset);
            let lower = boundary_segment(angle, offset - (margin * 0.5));
            let upper = boundary_segment(angle, offset + (margin * 0.5));
            assert!(approx_eq(distance_to_line(decision, lower.x1, lower.y1), margin * 0.5));
            assert!(approx_eq(distance_to_line(decision, upper.x1, upper.y1), margin * 0.5));
            // The two margin lines are a full margin apart.
            assert!(approx_eq(distance_to_line(lower, upper.x1, upper.y1), margin));
        }
    }
}

#[test]
fn displacement_moves_the_segment_along_the_normal() {
    let seg = boundary_segment(0.0, 25.0);
    // At angle 0 the normal is (0, 1): pure vertical displacement.
    assert!(approx_eq(seg.y1, (PLOT_SIZE * 0.5) + 25.0));
    assert!(approx_eq(seg.y2, (PLOT_SIZE * 0.5) + 25.0));
}

// --- project_offset ---

#[test]
fn projection_at_angle_zero_tracks_vertical_delta_only() {
    assert!(approx_eq(project_offset(0.0, 37.0, 12.0), 12.0));
    assert!(approx_eq(project_offset(0.0, -250.0, 12.0), 12.0));
}

#[test]
fn projection_at_angle_ninety_tracks_negated_horizontal_delta() {
    assert!(approx_eq(project_offset(90.0, 40.0, 999.0), -40.0));
    assert!(approx_eq(project_offset(90.0, -15.0, -3.0), 15.0));
}

#[test]
fn projection_is_idempotent_for_repeated_pointer_positions() {
    let first = project_offset(63.0, 88.0, -41.0);
    let second = project_offset(63.0, 88.0, -41.0);
    assert_eq!(first, second);
}

#[test]
fn projection_matches_diagonal_drag_scenario() {
    // Default 45 degree boundary, pointer 100 units right of center.
    let offset = project_offset(45.0, 100.0, 0.0);
    assert!((offset - (-100.0 * 45.0_f64.to_radians().sin())).abs() < EPSILON);
    assert!((offset + 70.710_678).abs() < 1e-5);
}

// --- Segment ---

#[test]
fn path_data_renders_move_and_line_commands() {
    let seg = Segment { x1: 1.5, y1: 2.0, x2: 3.0, y2: 4.25 };
    assert_eq!(seg.to_path_data(), "M 1.5 2 L 3 4.25");
}
