//! Falling apples.
//!
//! Each apple is integrated independently: constant gravity on the vertical
//! axis, plus a homing nudge of the horizontal position toward a per-apple
//! end offset so simultaneous drops do not land on the same spot. Constants
//! are tuned for a 60 Hz reference frame and scaled by `dt * 60` so the fall
//! speed does not depend on display refresh rate.

use super::constants::*;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Apple {
    pub id: u32,
    pub position: Vec3,
    pub velocity_y: f32,
    // Horizontal end offset the apple drifts toward while falling
    pub target_x: f32,
    // Per-apple landing height above the ground plane, drawn once at spawn
    pub ground_offset: f32,
    // Monotonic false -> true; once set the apple never moves again
    pub landed: bool,
    // Random rest orientation assigned exactly once, at landing
    pub rest_euler: Vec3,
}

#[derive(Clone, Debug)]
pub struct OrchardConfig {
    pub drop_center: Vec3,
    pub ground_y: f32,
}

impl Default for OrchardConfig {
    fn default() -> Self {
        Self {
            drop_center: Vec3::new(APPLE_DROP_X, APPLE_DROP_Y, APPLE_DROP_Z),
            ground_y: APPLE_GROUND_Y,
        }
    }
}

pub struct AppleFall {
    config: OrchardConfig,
    apples: Vec<Apple>,
    // Seconds until the next scheduled spawn; None until activated
    next_spawn_in: Option<f32>,
    next_id: u32,
    rng: StdRng,
}

impl AppleFall {
    pub fn new(config: OrchardConfig, seed: u64) -> Self {
        Self {
            config,
            apples: Vec::new(),
            next_spawn_in: None,
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn apples(&self) -> &[Apple] {
        &self.apples
    }

    pub fn next_spawn_in(&self) -> Option<f32> {
        self.next_spawn_in
    }

    /// Start the spawner: first apple drops immediately, the next after a
    /// uniform random delay in [3, 10) seconds.
    pub fn activate(&mut self) {
        if self.next_spawn_in.is_some() {
            return;
        }
        self.spawn();
        self.schedule_next();
    }

    /// Drop a new apple from the configured center with random jitter and a
    /// random horizontal end offset.
    pub fn spawn(&mut self) -> u32 {
        let start = self.config.drop_center
            + Vec3::new(
                self.rng.gen_range(-APPLE_JITTER_X..APPLE_JITTER_X),
                0.0,
                self.rng.gen_range(-APPLE_JITTER_Z..APPLE_JITTER_Z),
            );
        let target_x = self.config.drop_center.x
            + self.rng.gen_range(-APPLE_TARGET_RANGE..APPLE_TARGET_RANGE);
        let ground_offset = self.rng.gen_range(0.0..APPLE_GROUND_OFFSET_MAX);
        self.spawn_at(start, target_x, ground_offset)
    }

    /// Drop an apple with explicit parameters (the random draws happen in
    /// `spawn`).
    pub fn spawn_at(&mut self, start: Vec3, target_x: f32, ground_offset: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.apples.push(Apple {
            id,
            position: start,
            velocity_y: 0.0,
            target_x,
            ground_offset,
            landed: false,
            rest_euler: Vec3::ZERO,
        });
        log::debug!("[apples] spawn #{id} at ({:.2},{:.2},{:.2})", start.x, start.y, start.z);
        id
    }

    /// Advance the spawner countdown and every live, unlanded apple by
    /// `dt_sec`. Landed apples are frozen and never revisited.
    pub fn step(&mut self, dt_sec: f32) {
        if dt_sec <= 0.0 {
            return;
        }
        if let Some(t) = self.next_spawn_in {
            let t = t - dt_sec;
            if t <= 0.0 {
                self.spawn();
                self.schedule_next();
            } else {
                self.next_spawn_in = Some(t);
            }
        }

        let scale = dt_sec * REFERENCE_FPS;
        let ground_y = self.config.ground_y;
        let rng = &mut self.rng;
        for apple in &mut self.apples {
            if apple.landed {
                continue;
            }
            apple.velocity_y -= APPLE_GRAVITY_PER_FRAME * scale;
            apple.position.y += apple.velocity_y * scale;
            apple.position.x +=
                (apple.target_x - apple.position.x) * APPLE_HOMING_PER_FRAME * scale;
            let threshold = ground_y + apple.ground_offset;
            if apple.position.y <= threshold {
                apple.position.y = threshold;
                apple.landed = true;
                apple.rest_euler = Vec3::new(
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..TAU),
                );
            }
        }
    }

    fn schedule_next(&mut self) {
        self.next_spawn_in = Some(self.rng.gen_range(APPLE_SPAWN_MIN_SEC..APPLE_SPAWN_MAX_SEC));
    }
}
