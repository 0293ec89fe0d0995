// Host-side tests for the reaction state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/reaction.rs"]
mod reaction;

use constants::*;
use reaction::*;
use std::f32::consts::PI;

/// Records every play request; pretends all clips exist.
#[derive(Default)]
struct RecordingSink {
    plays: Vec<(String, f32, bool)>,
}

impl ClipSink for RecordingSink {
    fn has_clip(&self, _name: &str) -> bool {
        true
    }
    fn play(&mut self, name: &str, fade_sec: f32, looping: bool) {
        self.plays.push((name.to_string(), fade_sec, looping));
    }
}

/// Pretends no clips exist and drops every request.
struct EmptySink;

impl ClipSink for EmptySink {
    fn has_clip(&self, _name: &str) -> bool {
        false
    }
    fn play(&mut self, _name: &str, _fade_sec: f32, _looping: bool) {}
}

/// Find a seed whose first branch choice lands on `branch` and return the
/// controller right after triggering. The weighting is random but both
/// branches have probability well above 1/256.
fn triggered(branch: ReactionState) -> (ReactionController, RecordingSink) {
    for seed in 0..256 {
        let mut controller = ReactionController::new(seed);
        let mut sink = RecordingSink::default();
        assert!(controller.trigger(&mut sink));
        if controller.state() == branch {
            return (controller, sink);
        }
    }
    panic!("no seed produced {branch:?}");
}

fn clip_names(sink: &RecordingSink) -> Vec<&str> {
    sink.plays.iter().map(|(n, _, _)| n.as_str()).collect()
}

#[test]
fn trigger_locks_and_sets_a_single_non_idle_state() {
    let mut controller = ReactionController::new(7);
    let mut sink = RecordingSink::default();
    assert_eq!(controller.state(), ReactionState::Idle);
    assert!(!controller.is_locked());

    assert!(controller.trigger(&mut sink));
    assert!(controller.is_locked());
    assert_ne!(controller.state(), ReactionState::Idle);
    assert_eq!(sink.plays.len(), 1);
}

#[test]
fn second_trigger_while_locked_has_no_observable_effect() {
    let mut controller = ReactionController::new(7);
    let mut sink = RecordingSink::default();
    assert!(controller.trigger(&mut sink));

    let state = controller.state();
    let yaw = controller.yaw();
    let question = controller.question_bubble_visible();
    let idea = controller.idea_bubble_visible();
    let plays = sink.plays.len();

    // Rapid re-trigger, same tick
    assert!(!controller.trigger(&mut sink));
    assert_eq!(controller.state(), state);
    assert_eq!(controller.yaw(), yaw);
    assert_eq!(controller.question_bubble_visible(), question);
    assert_eq!(controller.idea_bubble_visible(), idea);
    assert_eq!(sink.plays.len(), plays);
    assert!(controller.is_locked());
}

#[test]
fn surprised_branch_runs_to_completion() {
    let (mut controller, mut sink) = triggered(ReactionState::Surprised);
    assert!(controller.question_bubble_visible());
    assert!(!controller.idea_bubble_visible());
    assert_eq!(clip_names(&sink), vec![CLIP_HATENA]);

    // Just before the hold expires nothing changes
    controller.tick(SURPRISE_HOLD_SEC - 0.01, &mut sink);
    assert!(controller.is_locked());
    assert!(controller.question_bubble_visible());

    controller.tick(0.02, &mut sink);
    assert_eq!(controller.state(), ReactionState::Idle);
    assert!(!controller.is_locked());
    assert!(!controller.question_bubble_visible());
    assert_eq!(clip_names(&sink), vec![CLIP_HATENA, CLIP_IDLE]);
    assert_eq!(controller.yaw(), 0.0);
}

#[test]
fn inspired_branch_clip_order_and_yaw_flips() {
    let (mut controller, mut sink) = triggered(ReactionState::Inspired);
    assert_eq!(clip_names(&sink), vec![CLIP_TURN]);
    assert_eq!(controller.yaw(), 0.0);
    assert!(!controller.idea_bubble_visible());

    // Turn clip finishes: +pi flip paired with a zero-fade switch
    controller.tick(TURN_CLIP_SEC + 0.001, &mut sink);
    assert!((controller.yaw() - PI).abs() < 1e-6);
    assert!(controller.idea_bubble_visible());
    let (name, fade, looping) = sink.plays.last().unwrap().clone();
    assert_eq!(name, CLIP_INSPIRATION);
    assert_eq!(fade, 0.0);
    assert!(looping);

    // Inspiration hold ends: bubble down, turn replayed with a normal fade
    controller.tick(INSPIRE_HOLD_SEC + 0.001, &mut sink);
    assert!(!controller.idea_bubble_visible());
    let (name, fade, _) = sink.plays.last().unwrap().clone();
    assert_eq!(name, CLIP_TURN);
    assert!(fade > 0.0);

    // Second turn finishes: yaw restored exactly, idle, reset
    controller.tick(TURN_CLIP_SEC + 0.001, &mut sink);
    assert_eq!(controller.yaw(), 0.0);
    assert_eq!(controller.state(), ReactionState::Idle);
    assert!(!controller.is_locked());
    assert_eq!(
        clip_names(&sink),
        vec![CLIP_TURN, CLIP_INSPIRATION, CLIP_TURN, CLIP_IDLE]
    );
}

#[test]
fn retrigger_works_after_a_completed_sequence() {
    let (mut controller, mut sink) = triggered(ReactionState::Surprised);
    controller.tick(SURPRISE_HOLD_SEC + 0.01, &mut sink);
    assert!(!controller.is_locked());
    assert!(controller.trigger(&mut sink));
    assert!(controller.is_locked());
}

#[test]
fn sequence_advances_even_when_no_clips_exist() {
    // A missing asset desynchronizes visuals but never stalls the timers.
    let mut sink = EmptySink;
    for seed in [1_u64, 2, 3, 4, 5, 6, 7, 8] {
        let mut controller = ReactionController::new(seed);
        assert!(controller.trigger(&mut sink));
        // Longest possible sequence is turn + hold + turn
        let total = TURN_CLIP_SEC + INSPIRE_HOLD_SEC + TURN_CLIP_SEC + 1.0;
        let mut t = 0.0;
        while t < total {
            controller.tick(1.0 / 60.0, &mut sink);
            t += 1.0 / 60.0;
        }
        assert_eq!(controller.state(), ReactionState::Idle);
        assert!(!controller.is_locked());
        assert_eq!(controller.yaw(), 0.0);
    }
}

#[test]
fn tick_without_pending_sequence_is_a_noop() {
    let mut controller = ReactionController::new(1);
    let mut sink = RecordingSink::default();
    controller.tick(100.0, &mut sink);
    assert_eq!(controller.state(), ReactionState::Idle);
    assert!(sink.plays.is_empty());
}

#[test]
fn branch_choice_covers_both_branches_across_seeds() {
    let mut surprised = 0;
    let mut inspired = 0;
    for seed in 0..200 {
        let mut controller = ReactionController::new(seed);
        let mut sink = RecordingSink::default();
        controller.trigger(&mut sink);
        match controller.state() {
            ReactionState::Surprised => surprised += 1,
            ReactionState::Inspired => inspired += 1,
            ReactionState::Idle => panic!("trigger left the controller idle"),
        }
    }
    assert!(surprised > 0);
    assert!(inspired > 0);
    // 70/30 weighting: surprised should dominate over 200 draws
    assert!(surprised > inspired);
}
