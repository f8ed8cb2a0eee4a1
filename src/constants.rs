// Drawing and DOM constants for the browser shell.
// Pacing and simulation tuning lives in core::constants.

// Element ids
pub const CANVAS_ID: &str = "art-canvas";
pub const HUD_ID: &str = "hud-overlay";

// Shown in place of the page when the canvas cannot be used
pub const FATAL_NOTICE: &str =
    "This visualizer needs a <canvas id=\"art-canvas\"> with 2D drawing support.";

// Fade-trail overdraw painted before every accepted frame
pub const FADE_ALPHA: f64 = 0.08;
pub const FADE_RGB: &str = "0, 0, 0";

// Polygons
pub const POLYGON_SIDES_MIN: u32 = 3;
pub const POLYGON_SIDES_SPAN: u32 = 5; // sides cycle through MIN..MIN+SPAN
pub const POLYGON_SPIN_RATE: f32 = 0.9; // radians per sim second at ring 0
pub const POLYGON_LINE_WIDTH: f64 = 1.5;

// Flow field
pub const FLOW_CELL_MIN_PX: f64 = 18.0;
pub const FLOW_CELL_MAX_PX: f64 = 42.0;
pub const FLOW_STROKE_FRACTION: f64 = 0.8; // stroke length relative to cell size

// Swarm
pub const SWARM_LINK_WIDTH: f64 = 0.6;

// Fractal
pub const FRACTAL_MAX_ITER_MIN: u32 = 12;
pub const FRACTAL_MAX_ITER_SPAN: u32 = 36;
pub const FRACTAL_ZOOM: f32 = 1.6; // half-width of the sampled complex plane
pub const FRACTAL_ALPHA: f32 = 0.35;

// Glitch
pub const GLITCH_SLICES_MAX: usize = 8;
pub const GLITCH_SHIFT_FRACTION: f64 = 0.06; // max shift as a fraction of width
pub const GLITCH_BAR_ALPHA: f32 = 0.25;
