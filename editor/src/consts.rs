//! Shared numeric constants for the editor crate.

// ── Camera ──────────────────────────────────────────────────────

/// Initial zoom, in screen pixels per world unit.
pub const ZOOM_INIT: f64 = 10.0;

/// Lower zoom bound.
pub const ZOOM_MIN: f64 = 4.0;

/// Upper zoom bound.
pub const ZOOM_MAX: f64 = 50.0;

/// Zoom change per wheel notch, per second of frame time.
pub const ZOOM_RATE: f64 = 3.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// World-space radius within which the cursor hovers a point.
pub const HIT_RADIUS: f64 = 0.5;

// ── Grid ────────────────────────────────────────────────────────

/// Every n-th world-unit line is drawn in the major color.
pub const GRID_MAJOR_EVERY: i64 = 10;

/// Below this zoom every other minor line is skipped (fixed stride 2).
pub const GRID_SKIP_BELOW_ZOOM: f64 = 40.0;

// ── Vertex markers ──────────────────────────────────────────────

/// Screen radius of a vertex marker when the camera is at maximum zoom.
pub const POINT_RADIUS_SCALE: f64 = 20.0;

/// Label glyph height relative to the marker radius.
pub const LABEL_SIZE_FACTOR: f64 = 2.0;

// ── Persistence ─────────────────────────────────────────────────

/// World units per persisted file unit.
pub const FILE_SCALE_DIVISOR: f64 = 10.0;
