// Host-side tests for the clip mixer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/reaction.rs"]
mod reaction;
#[path = "../src/core/anim.rs"]
mod anim;

use anim::*;
use constants::*;
use reaction::ClipSink;

fn mixer_with_clips() -> ClipMixer {
    let mut mixer = ClipMixer::new();
    mixer.register(CLIP_IDLE, 2.0);
    mixer.register(CLIP_HATENA, 1.2);
    mixer.register(CLIP_TURN, TURN_CLIP_SEC);
    mixer.register(CLIP_INSPIRATION, 2.4);
    mixer
}

#[test]
fn unknown_clip_request_is_a_silent_noop() {
    let mut mixer = mixer_with_clips();
    mixer.play(CLIP_IDLE, 0.0, true);
    assert!(!mixer.has_clip("moonwalk"));
    mixer.play("moonwalk", 0.5, true);
    assert_eq!(mixer.active_clip(), Some(CLIP_IDLE));
    assert_eq!(mixer.weight_of(CLIP_IDLE), 1.0);
}

#[test]
fn zero_fade_switch_is_immediate() {
    let mut mixer = mixer_with_clips();
    mixer.play(CLIP_IDLE, 0.5, true);
    mixer.advance(1.0);
    mixer.play(CLIP_INSPIRATION, 0.0, true);
    assert_eq!(mixer.active_clip(), Some(CLIP_INSPIRATION));
    assert_eq!(mixer.weight_of(CLIP_INSPIRATION), 1.0);
    assert_eq!(mixer.weight_of(CLIP_IDLE), 0.0);
}

#[test]
fn cross_fade_ramps_weights_linearly() {
    let mut mixer = mixer_with_clips();
    mixer.play(CLIP_IDLE, 0.0, true);
    mixer.play(CLIP_HATENA, 0.5, true);

    // Halfway through the fade both clips carry half weight
    mixer.advance(0.25);
    assert!((mixer.weight_of(CLIP_HATENA) - 0.5).abs() < 1e-5);
    assert!((mixer.weight_of(CLIP_IDLE) - 0.5).abs() < 1e-5);

    // Past the end of the fade the outgoing clip is gone
    mixer.advance(0.3);
    assert_eq!(mixer.weight_of(CLIP_HATENA), 1.0);
    assert_eq!(mixer.weight_of(CLIP_IDLE), 0.0);
}

#[test]
fn looping_clip_wraps_its_phase() {
    let mut mixer = mixer_with_clips();
    mixer.play(CLIP_IDLE, 0.0, true);
    mixer.advance(2.5); // idle is 2.0 s long
    assert!((mixer.active_time() - 0.5).abs() < 1e-5);
    assert!((mixer.active_phase() - 0.25).abs() < 1e-5);
}

#[test]
fn one_shot_clip_clamps_at_its_final_frame() {
    let mut mixer = mixer_with_clips();
    mixer.play(CLIP_TURN, 0.0, false);
    mixer.advance(TURN_CLIP_SEC + 5.0);
    assert_eq!(mixer.active_time(), TURN_CLIP_SEC);
    assert_eq!(mixer.active_phase(), 1.0);
}

#[test]
fn replaying_the_active_clip_restarts_it() {
    let mut mixer = mixer_with_clips();
    mixer.play(CLIP_IDLE, 0.0, true);
    mixer.advance(1.0);
    assert!(mixer.active_time() > 0.0);
    mixer.play(CLIP_IDLE, 0.0, true);
    assert_eq!(mixer.active_time(), 0.0);
}

#[test]
fn empty_mixer_reports_nothing_active() {
    let mixer = ClipMixer::new();
    assert_eq!(mixer.active_clip(), None);
    assert_eq!(mixer.active_time(), 0.0);
    assert_eq!(mixer.active_phase(), 0.0);
    assert_eq!(mixer.weight_of(CLIP_IDLE), 0.0);
}
