//! Interactive boundary plot state.
//!
//! DESIGN
//! ======
//! One `RwSignal<PlotState>` is provided from `App` and shared by the plot
//! surface, the controls, and the explanation panel, so no component pair
//! needs to talk to another directly. All mutation happens synchronously
//! inside event handlers.

#[cfg(test)]
#[path = "plot_test.rs"]
mod plot_test;

use rand::Rng;

use crate::util::dataset::{self, Sample};
use crate::util::geometry;

/// Default boundary direction, in degrees.
pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
/// Default margin width, in plot units.
pub const DEFAULT_MARGIN: f64 = 50.0;

/// Margin slider range.
pub const MARGIN_MIN: f64 = 10.0;
pub const MARGIN_MAX: f64 = 100.0;

/// Angle slider range, in degrees.
pub const ANGLE_MIN_DEG: f64 = 0.0;
pub const ANGLE_MAX_DEG: f64 = 180.0;

/// Pointer interaction state for the plot surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Which visual element the pointer most recently entered. Selects the
/// explanation string shown beside the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusTopic {
    #[default]
    General,
    Points,
    Hyperplane,
    Margin,
    Angle,
    Interaction,
}

/// State of the boundary visualizer.
#[derive(Clone, Debug)]
pub struct PlotState {
    /// Boundary direction in degrees, set by the angle slider.
    pub angle_deg: f64,
    /// Margin width in plot units, set by the margin slider.
    pub margin: f64,
    /// Signed perpendicular displacement of the decision line from the plot
    /// center, set by dragging. Unbounded; the rendered segments stay long
    /// enough to cross the viewport for any reachable value.
    pub offset: f64,
    pub samples: Vec<Sample>,
    pub drag: DragState,
    pub focus: FocusTopic,
}

impl Default for PlotState {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ANGLE_DEG,
            margin: DEFAULT_MARGIN,
            offset: 0.0,
            samples: Vec::new(),
            drag: DragState::default(),
            focus: FocusTopic::default(),
        }
    }
}

impl PlotState {
    /// Replace the dataset with uniform random samples. Re-centers the
    /// boundary but keeps its angle.
    pub fn regenerate_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.samples = dataset::uniform_samples(rng);
        self.offset = 0.0;
    }

    /// Replace the dataset with two separable clusters and reset the
    /// boundary to its default diagonal.
    pub fn regenerate_separable<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.samples = dataset::separable_samples(rng);
        self.angle_deg = DEFAULT_ANGLE_DEG;
        self.offset = 0.0;
    }

    /// Enter drag mode.
    pub fn begin_drag(&mut self) {
        self.drag = DragState::Dragging;
    }

    /// Leave drag mode (pointer up, cancel, or leaving the plot).
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Track the pointer while dragging. `dx`/`dy` are the pointer's position
    /// relative to the plot center; the offset is recomputed from them on
    /// every move, never accumulated, so the line follows the pointer's
    /// perpendicular distance exactly. Ignored outside drag mode.
    pub fn drag_to(&mut self, dx: f64, dy: f64) {
        if self.drag != DragState::Dragging {
            return;
        }
        self.offset = geometry::project_offset(self.angle_deg, dx, dy);
    }
}
