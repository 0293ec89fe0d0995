//! Neco's meow bubble scheduler.
//!
//! The cat meows at a uniform random interval in [8, 15) seconds and the
//! bubble stays up for 3 seconds, forever. Independent of the reaction
//! sequence and the apples.

use super::constants::*;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeowState {
    Waiting { remaining: f32 },
    Showing { remaining: f32 },
}

pub struct MeowScheduler {
    state: MeowState,
    rng: StdRng,
}

impl MeowScheduler {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = MeowState::Waiting {
            remaining: draw_wait(&mut rng),
        };
        Self { state, rng }
    }

    pub fn state(&self) -> MeowState {
        self.state
    }

    pub fn bubble_visible(&self) -> bool {
        matches!(self.state, MeowState::Showing { .. })
    }

    /// Advance by `dt_sec`; returns whether the bubble is visible.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        if dt_sec > 0.0 {
            match self.state {
                MeowState::Waiting { remaining } => {
                    let remaining = remaining - dt_sec;
                    self.state = if remaining > 0.0 {
                        MeowState::Waiting { remaining }
                    } else {
                        MeowState::Showing {
                            remaining: MEOW_SHOW_SEC,
                        }
                    };
                }
                MeowState::Showing { remaining } => {
                    let remaining = remaining - dt_sec;
                    self.state = if remaining > 0.0 {
                        MeowState::Showing { remaining }
                    } else {
                        MeowState::Waiting {
                            remaining: draw_wait(&mut self.rng),
                        }
                    };
                }
            }
        }
        self.bubble_visible()
    }
}

fn draw_wait(rng: &mut StdRng) -> f32 {
    rng.gen_range(MEOW_WAIT_MIN_SEC..MEOW_WAIT_MAX_SEC)
}
