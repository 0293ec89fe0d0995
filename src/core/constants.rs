/// Tuning constants for the garden's core logic.
///
/// These constants express intended behavior (clip timings, physics tuned
/// against a 60 Hz reference frame, spawn ranges) and keep magic numbers out
/// of the code.
// Named animation clips on the Newton model
pub const CLIP_IDLE: &str = "idle";
pub const CLIP_HATENA: &str = "hatena";
pub const CLIP_TURN: &str = "rightturn";
pub const CLIP_INSPIRATION: &str = "inspiration";

// Reaction sequence
// Probability of the "surprised" branch; remainder goes to "inspired"
pub const SURPRISED_WEIGHT: f32 = 0.7;
pub const SURPRISE_HOLD_SEC: f32 = 4.0;
pub const INSPIRE_HOLD_SEC: f32 = 6.0;
// The turn clip is 49 frames authored at 30 fps; an asset property, not a
// free parameter
pub const TURN_CLIP_SEC: f32 = 49.0 / 30.0;
// Normal cross-fade between clips; the yaw-flip switch always uses zero
pub const CROSS_FADE_SEC: f32 = 0.5;

// Apple fall. Per-frame constants are tuned for a 60 Hz reference frame and
// get scaled by dt * REFERENCE_FPS at integration time.
pub const REFERENCE_FPS: f32 = 60.0;
pub const APPLE_GRAVITY_PER_FRAME: f32 = 0.005;
pub const APPLE_HOMING_PER_FRAME: f32 = 0.02;

// Spawn scheduling (seconds)
pub const APPLE_SPAWN_MIN_SEC: f32 = 3.0;
pub const APPLE_SPAWN_MAX_SEC: f32 = 10.0;

// Drop point jitter and landing spread
pub const APPLE_JITTER_X: f32 = 0.4;
pub const APPLE_JITTER_Z: f32 = 0.1;
pub const APPLE_TARGET_RANGE: f32 = 0.75;
pub const APPLE_GROUND_OFFSET_MAX: f32 = 0.1;

// Drop center sits inside the tree canopy; ground height is where an apple
// with zero per-instance offset comes to rest
pub const APPLE_DROP_X: f32 = 0.5;
pub const APPLE_DROP_Y: f32 = 3.6;
pub const APPLE_DROP_Z: f32 = -0.5;
pub const APPLE_GROUND_Y: f32 = 0.1;

// Neco's meow bubble (seconds)
pub const MEOW_WAIT_MIN_SEC: f32 = 8.0;
pub const MEOW_WAIT_MAX_SEC: f32 = 15.0;
pub const MEOW_SHOW_SEC: f32 = 3.0;
