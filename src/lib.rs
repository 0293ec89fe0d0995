#![cfg(target_arch = "wasm32")]
use crate::core::{
    AppleFall, ClipMixer, ClipSink, MeowScheduler, OrchardConfig, ReactionController,
    CLIP_HATENA, CLIP_IDLE, CLIP_INSPIRATION, CLIP_TURN, CROSS_FADE_SEC, TURN_CLIP_SEC,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod scene;

use constants::CANVAS_ID;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// Clip lengths as authored on the Newton model. The turn clip's length is
// load-bearing (the yaw flip lands on its final frame); the rest only pace
// the idle bob.
fn build_mixer() -> ClipMixer {
    let mut mixer = ClipMixer::new();
    mixer.register(CLIP_IDLE, 2.0);
    mixer.register(CLIP_HATENA, 1.2);
    mixer.register(CLIP_TURN, TURN_CLIP_SEC);
    mixer.register(CLIP_INSPIRATION, 2.4);
    mixer.play(CLIP_IDLE, CROSS_FADE_SEC, true);
    mixer
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("newton-garden starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Fresh session, fresh randomness
    let seed = js_sys::Date::now() as u64;
    let controller = Rc::new(RefCell::new(ReactionController::new(seed)));
    let mixer = Rc::new(RefCell::new(build_mixer()));
    let mut orchard = AppleFall::new(OrchardConfig::default(), seed ^ 0x5DEECE66D);
    orchard.activate();
    let meow = MeowScheduler::new(seed ^ 0x9E3779B97F4A7C15);
    log::info!("[scene] orchard active, {} apple(s) live", orchard.apples().len());

    events::wire_react_button(&document, controller.clone(), mixer.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        mixer,
        orchard,
        meow,
        canvas,
        gpu,
        last_instant: Instant::now(),
        dom_question: false,
        dom_idea: false,
        dom_meow: false,
        dom_button_enabled: true,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
