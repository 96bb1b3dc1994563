//! Editor engine: the per-frame controller state machine.
//!
//! `EngineCore` owns all editor state and no windowing types, so the full
//! state machine runs headless under test. The host calls [`EngineCore::tick`]
//! once per frame with an input snapshot and executes the returned
//! [`Action`]s; the modal file dialog and file I/O never run inside the tick.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, Point};
use crate::consts::{HIT_RADIUS, ZOOM_RATE};
use crate::input::{InputFrame, InputState, LayerToggles};
use crate::model::PointModel;

/// Effects returned from [`EngineCore::tick`] for the host to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The user pressed the save key: run the file dialog and write the
    /// model. A cancelled dialog short-circuits with no side effects.
    SaveRequested,
}

/// Core editor state — everything that doesn't depend on the window.
#[derive(Debug, Clone)]
pub struct EngineCore {
    /// The ordered point sequence being edited.
    pub model: PointModel,
    /// Pan/zoom view state.
    pub camera: Camera,
    /// Which render layers are enabled.
    pub layers: LayerToggles,
    /// Active gesture.
    pub state: InputState,
    /// Index of the point under the cursor, recomputed every tick.
    pub hover: Option<usize>,
    /// Mouse position snapped to the grid, in world coordinates.
    pub cursor: Point,
    last_mouse: Point,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            model: PointModel::new(),
            camera: Camera::default(),
            layers: LayerToggles::default(),
            state: InputState::Idle,
            hover: None,
            cursor: Point::default(),
            last_mouse: Point::default(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose camera starts with the world origin at the center of a
    /// viewport of the given size.
    #[must_use]
    pub fn centered(viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            camera: Camera::centered(viewport_w, viewport_h),
            ..Self::default()
        }
    }

    /// Advance one frame.
    ///
    /// Steps run in a fixed order; later steps read state set by earlier
    /// ones (hover feeds both the press and the delete handling).
    pub fn tick(&mut self, input: &InputFrame) -> Vec<Action> {
        let mut actions = Vec::new();

        // 1. Hover and cursor follow the mouse unconditionally. Hover
        // matches against the unsnapped position; placement uses the
        // snapped one.
        let mouse_world = self.camera.screen_to_world(input.mouse);
        self.cursor = mouse_world.grid_snapped();
        self.hover = self.model.nearest(mouse_world, HIT_RADIUS);

        // 2. Pan by the delta since the previous frame while held. The
        // press frame anchors the gesture and contributes nothing.
        if input.pan.held && !input.pan.pressed {
            self.camera.pan(
                input.mouse.x - self.last_mouse.x,
                input.mouse.y - self.last_mouse.y,
            );
        }

        // 3. Primary press: pick up the hovered point, or place a new one.
        // A fresh point is not auto-selected.
        if input.primary.pressed && self.state == InputState::Idle {
            match self.hover {
                Some(index) => self.state = InputState::Dragging { index },
                None => {
                    self.model.add(self.cursor);
                    tracing::debug!(x = self.cursor.x, y = self.cursor.y, "point added");
                }
            }
        }

        // 4–5. Drag-follow every held frame; selection is transient to the
        // gesture and clears on release.
        if let InputState::Dragging { index } = self.state {
            if input.primary.held {
                self.model.move_at(index, self.cursor);
            }
            if input.primary.released {
                self.state = InputState::Idle;
            }
        }

        // 6. Delete the hovered point. A drag at that or a higher index
        // would dangle after the shift, so it is cleared.
        if input.keys.delete {
            if let Some(hovered) = self.hover {
                self.model.remove_at(hovered);
                if let InputState::Dragging { index } = self.state {
                    if index >= hovered {
                        self.state = InputState::Idle;
                    }
                }
                self.hover = None;
                tracing::debug!(index = hovered, remaining = self.model.len(), "point removed");
            }
        }

        // 7. Layer toggles.
        if input.keys.fill {
            self.layers.fill = !self.layers.fill;
        }
        if input.keys.points {
            self.layers.points = !self.layers.points;
        }
        if input.keys.stroke {
            self.layers.stroke = !self.layers.stroke;
        }
        if input.keys.wire {
            self.layers.wire = !self.layers.wire;
        }

        // 8. Save runs host-side.
        if input.keys.save {
            actions.push(Action::SaveRequested);
        }

        // Wheel zoom is consumed regardless of gesture state, pivoting on
        // the mouse.
        if input.wheel != 0.0 {
            self.camera
                .zoom_by(input.wheel * ZOOM_RATE * input.dt, input.mouse);
        }

        self.last_mouse = input.mouse;
        actions
    }

    /// The point currently being dragged, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            InputState::Dragging { index } => Some(index),
            InputState::Idle => None,
        }
    }
}
