//! Garden scene assembly: turns core state (reaction controller, clip
//! mixer, apple simulator, meow flag) into the per-frame instance list the
//! renderer consumes. Everything is stylized discs; no mesh assets.

use crate::constants::*;
use crate::core::{AppleFall, ClipMixer, ReactionController, CLIP_INSPIRATION};
use crate::render::InstanceData;
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::TAU;

struct Part {
    offset: Vec3,
    scale: f32,
    color: [f32; 4],
}

fn push(out: &mut Vec<InstanceData>, pos: Vec3, scale: f32, color: [f32; 4]) {
    out.push(InstanceData {
        pos: pos.to_array(),
        scale,
        color,
        spin: 0.0,
        flat: 0.0,
    });
}

fn brighten(c: [f32; 4], f: f32) -> [f32; 4] {
    [
        (c[0] * f).min(1.0),
        (c[1] * f).min(1.0),
        (c[2] * f).min(1.0),
        c[3],
    ]
}

fn actor_parts(color: [f32; 4]) -> SmallVec<[Part; 4]> {
    let mut parts = SmallVec::new();
    parts.push(Part {
        offset: Vec3::new(0.0, 0.5, 0.0),
        scale: ACTOR_SCALE,
        color,
    });
    parts.push(Part {
        offset: Vec3::new(0.0, 1.15, 0.0),
        scale: ACTOR_SCALE * 0.6,
        color: brighten(color, 1.1),
    });
    parts
}

pub fn build_instances(
    controller: &ReactionController,
    mixer: &ClipMixer,
    orchard: &AppleFall,
    meow_visible: bool,
) -> Vec<InstanceData> {
    let mut out = Vec::with_capacity(16 + orchard.apples().len());

    // Ground plane disc
    out.push(InstanceData {
        pos: TREE_POS,
        scale: GROUND_SCALE,
        color: GROUND_COLOR,
        spin: 0.0,
        flat: 1.0,
    });

    // Tree: stacked trunk segments and a clustered canopy
    let tree = Vec3::from(TREE_POS);
    for i in 0..3 {
        push(
            &mut out,
            tree + Vec3::new(0.0, 0.5 + i as f32 * 0.8, 0.0),
            0.55,
            TRUNK_COLOR,
        );
    }
    for (dx, dy, dz, s) in [
        (0.0, 3.6, 0.0, 2.6),
        (-1.0, 3.1, 0.3, 1.8),
        (1.1, 3.2, -0.3, 1.9),
    ] {
        push(&mut out, tree + Vec3::new(dx, dy, dz), s, CANOPY_COLOR);
    }

    // Neco, glowing slightly while the meow bubble is up
    let neco_color = if meow_visible {
        brighten(NECO_COLOR, MEOW_BRIGHTEN)
    } else {
        NECO_COLOR
    };
    let neco = Vec3::from(NECO_POS);
    for part in actor_parts(neco_color) {
        push(&mut out, neco + part.offset, part.scale * 0.8, part.color);
    }

    // Newton: idle bob from the active clip's phase, emphasis while the
    // inspiration clip dominates the blend, facing marker driven by the
    // controller's compensated yaw
    let inspire_w = mixer.weight_of(CLIP_INSPIRATION);
    let bob = (mixer.active_phase() * TAU).sin() * BOB_AMPLITUDE;
    let newton_color = brighten(NEWTON_COLOR, 1.0 + (INSPIRE_BRIGHTEN - 1.0) * inspire_w);
    let newton = Vec3::from(NEWTON_POS) + Vec3::new(0.0, bob, 0.0);
    for part in actor_parts(newton_color) {
        push(&mut out, newton + part.offset, part.scale, part.color);
    }
    let yaw = controller.yaw();
    let face = newton + Vec3::new(0.0, 1.15, 0.0) + Vec3::new(yaw.sin(), 0.0, yaw.cos()) * 0.28;
    push(&mut out, face, 0.2, [0.12, 0.1, 0.1, 1.0]);

    // Apples, live and landed; landed ones keep their one-time rest spin
    for apple in orchard.apples() {
        out.push(InstanceData {
            pos: apple.position.to_array(),
            scale: APPLE_SCALE,
            color: APPLE_COLOR,
            spin: if apple.landed { apple.rest_euler.z } else { 0.0 },
            flat: 0.0,
        });
    }

    out
}
