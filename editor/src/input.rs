//! Input model: per-frame snapshot types, layer toggles, and the gesture
//! state machine.
//!
//! The host samples its windowing library once per frame into an
//! [`InputFrame`] — edge flags and held state, never raw events — so the
//! engine tick is a pure function of snapshot plus current state.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Edge and held state of one mouse button over a single frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    /// Went down this frame.
    pub pressed: bool,
    /// Is currently down.
    pub held: bool,
    /// Went up this frame.
    pub released: bool,
}

/// Key press edges observed this frame.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEdges {
    /// Toggle the polygon fill layer.
    pub fill: bool,
    /// Toggle the vertex markers.
    pub points: bool,
    /// Toggle the boundary stroke.
    pub stroke: bool,
    /// Toggle the triangulation wireframe.
    pub wire: bool,
    /// Delete the hovered point.
    pub delete: bool,
    /// Save the model to a file.
    pub save: bool,
}

/// Immutable snapshot of one frame's input, sampled by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    /// Mouse position in screen pixels.
    pub mouse: Point,
    /// Primary (place/drag) mouse button.
    pub primary: ButtonState,
    /// Pan mouse button.
    pub pan: ButtonState,
    /// Signed wheel scroll delta for this frame.
    pub wheel: f64,
    /// Key press edges.
    pub keys: KeyEdges,
    /// Seconds elapsed since the previous frame.
    pub dt: f64,
    /// Viewport width in screen pixels.
    pub viewport_w: f64,
    /// Viewport height in screen pixels.
    pub viewport_h: f64,
}

/// Which render layers are drawn.
///
/// All layers start enabled; each flips on its toggle key's press edge and
/// lives for the process lifetime only (toggle state is never persisted).
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerToggles {
    /// Filled polygon interior.
    pub fill: bool,
    /// Vertex markers and index labels.
    pub points: bool,
    /// Closed boundary outline.
    pub stroke: bool,
    /// Internal triangulation edges.
    pub wire: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self { fill: true, points: true, stroke: true, wire: true }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next press.
    Idle,
    /// The user is repositioning an existing point with the primary button
    /// held.
    Dragging {
        /// Index of the point being dragged.
        index: usize,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
