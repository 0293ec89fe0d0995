//! Newton's reaction sequence.
//!
//! A small state machine over {Idle, Surprised, Inspired}. A user trigger
//! locks the machine, picks a branch by weighted random choice and walks a
//! timed sequence of clip switches, speech-bubble flags and yaw flips, then
//! resets itself. All timing is driven by `tick(dt, ..)` from the frame
//! loop; the controller owns exactly one pending deadline at a time, so
//! dropping it cancels the whole sequence.

use super::constants::*;
use rand::prelude::*;
use std::f32::consts::PI;

/// Capability the controller needs from the animation side: play a named
/// clip with a cross-fade and loop mode, and ask whether a clip exists.
/// Playing a clip that does not exist must be a silent no-op.
pub trait ClipSink {
    fn has_clip(&self, name: &str) -> bool;
    fn play(&mut self, name: &str, fade_sec: f32, looping: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionState {
    Idle,
    Surprised,
    Inspired,
}

// One in-flight sequence step awaiting its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    SurpriseHold,
    InspireTurnOut,
    InspireHold,
    InspireTurnBack,
}

pub struct ReactionController {
    state: ReactionState,
    play_lock: bool,
    // Base yaw of the model in radians, relative to its reference facing.
    // The authored turn clip always visually turns right, so the controller
    // compensates with +/- pi flips; across a full sequence these cancel and
    // the net apparent rotation is zero.
    yaw: f32,
    question_bubble: bool,
    idea_bubble: bool,
    // The single current timer: step and seconds remaining. Replaced on
    // every transition, never accumulated.
    pending: Option<(Step, f32)>,
    rng: StdRng,
}

impl ReactionController {
    pub fn new(seed: u64) -> Self {
        Self {
            state: ReactionState::Idle,
            play_lock: false,
            yaw: 0.0,
            question_bubble: false,
            idea_bubble: false,
            pending: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> ReactionState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.play_lock
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn question_bubble_visible(&self) -> bool {
        self.question_bubble
    }

    pub fn idea_bubble_visible(&self) -> bool {
        self.idea_bubble
    }

    /// Start a reaction sequence. No-op while one is already playing; the
    /// PlayLock check-then-set is a single step on this one logical thread.
    /// Returns whether a sequence actually started.
    pub fn trigger(&mut self, sink: &mut impl ClipSink) -> bool {
        if self.play_lock {
            log::info!("[reaction] trigger ignored while locked");
            return false;
        }
        self.play_lock = true;
        if self.rng.gen::<f32>() < SURPRISED_WEIGHT {
            self.state = ReactionState::Surprised;
            self.question_bubble = true;
            sink.play(CLIP_HATENA, CROSS_FADE_SEC, true);
            self.pending = Some((Step::SurpriseHold, SURPRISE_HOLD_SEC));
        } else {
            self.state = ReactionState::Inspired;
            sink.play(CLIP_TURN, CROSS_FADE_SEC, false);
            self.pending = Some((Step::InspireTurnOut, TURN_CLIP_SEC));
        }
        log::info!("[reaction] started {:?}", self.state);
        true
    }

    /// Advance the pending deadline. Timers advance whether or not the sink
    /// actually has the requested clips; a missing asset desynchronizes the
    /// visuals but never stalls the sequence.
    pub fn tick(&mut self, dt_sec: f32, sink: &mut impl ClipSink) {
        let Some((step, remaining)) = self.pending else {
            return;
        };
        let remaining = remaining - dt_sec;
        if remaining > 0.0 {
            self.pending = Some((step, remaining));
            return;
        }
        match step {
            Step::SurpriseHold => {
                sink.play(CLIP_IDLE, CROSS_FADE_SEC, true);
                self.reset();
            }
            Step::InspireTurnOut => {
                // The turn clip's final pose faces the other way. Flip the
                // base yaw and switch clips with zero fade in the same
                // instant; a nonzero fade here shows a wrong-direction
                // flash from the turn clip's residual pose.
                self.yaw += PI;
                sink.play(CLIP_INSPIRATION, 0.0, true);
                self.idea_bubble = true;
                self.pending = Some((Step::InspireHold, INSPIRE_HOLD_SEC));
            }
            Step::InspireHold => {
                self.idea_bubble = false;
                sink.play(CLIP_TURN, CROSS_FADE_SEC, false);
                self.pending = Some((Step::InspireTurnBack, TURN_CLIP_SEC));
            }
            Step::InspireTurnBack => {
                self.yaw -= PI;
                sink.play(CLIP_IDLE, CROSS_FADE_SEC, true);
                self.reset();
            }
        }
    }

    fn reset(&mut self) {
        self.state = ReactionState::Idle;
        self.play_lock = false;
        self.question_bubble = false;
        self.idea_bubble = false;
        self.pending = None;
    }
}
