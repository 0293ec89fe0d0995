/// Presentation tuning constants: camera, colors, layout and the DOM ids
/// the frontend expects in index.html.
// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const REACT_BUTTON_ID: &str = "react-button";
pub const BUBBLE_NECO_ID: &str = "bubble-neco";
pub const BUBBLE_QUESTION_ID: &str = "bubble-hatena";
pub const BUBBLE_IDEA_ID: &str = "bubble-idea";

// Camera: elevated diagonal view at the tree base, orthographic feel via a
// narrow field of view from far out
pub const CAMERA_EYE: [f32; 3] = [16.0, 14.0, 16.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 2.5, 0.0];
pub const CAMERA_FOVY_RADIANS: f32 = 0.35;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Scene layout (world units); actor spots match the original staging
pub const NECO_POS: [f32; 3] = [0.0, 0.0, -2.5];
pub const NEWTON_POS: [f32; 3] = [1.5, 0.0, 2.5];
pub const TREE_POS: [f32; 3] = [0.0, 0.0, 0.0];

// Colors (RGBA)
pub const CLEAR_COLOR: [f64; 4] = [0.787, 0.820, 0.721, 1.0]; // #c9d1b8
pub const GROUND_COLOR: [f32; 4] = [0.64, 0.69, 0.55, 1.0];
pub const TRUNK_COLOR: [f32; 4] = [0.42, 0.30, 0.20, 1.0];
pub const CANOPY_COLOR: [f32; 4] = [0.30, 0.48, 0.26, 1.0];
pub const NECO_COLOR: [f32; 4] = [0.92, 0.88, 0.82, 1.0];
pub const NEWTON_COLOR: [f32; 4] = [0.45, 0.40, 0.55, 1.0];
pub const APPLE_COLOR: [f32; 4] = [0.82, 0.18, 0.14, 1.0];

// Actor sizing and idle bob
pub const GROUND_SCALE: f32 = 24.0;
pub const ACTOR_SCALE: f32 = 0.9;
pub const APPLE_SCALE: f32 = 0.22;
pub const BOB_AMPLITUDE: f32 = 0.06;
// Brighten factor applied to Newton while the inspiration clip dominates
pub const INSPIRE_BRIGHTEN: f32 = 1.35;
// Brighten factor applied to Neco while the meow bubble is up
pub const MEOW_BRIGHTEN: f32 = 1.15;

// Renderer instance buffer capacity. The apple set itself is unbounded for
// the session; uploads are capped here.
pub const MAX_INSTANCES: usize = 256;
