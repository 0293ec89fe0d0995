use crate::constants::*;
use crate::core::{AppleFall, ClipMixer, MeowScheduler, ReactionController};
use crate::render;
use crate::{dom, overlay, scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    // Shared with the reaction button handler
    pub controller: Rc<RefCell<ReactionController>>,
    pub mixer: Rc<RefCell<ClipMixer>>,
    // Owned: only the frame loop touches these
    pub orchard: AppleFall,
    pub meow: MeowScheduler,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,

    // Last DOM state pushed, to skip redundant attribute writes
    pub dom_question: bool,
    pub dom_idea: bool,
    pub dom_meow: bool,
    pub dom_button_enabled: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        {
            let mut controller = self.controller.borrow_mut();
            let mut mixer = self.mixer.borrow_mut();
            controller.tick(dt_sec, &mut *mixer);
            mixer.advance(dt_sec);
        }
        self.orchard.step(dt_sec);
        let meow_visible = self.meow.tick(dt_sec);

        self.sync_dom(meow_visible);

        let controller = self.controller.borrow();
        let mixer = self.mixer.borrow();
        let instances = scene::build_instances(&controller, &mixer, &self.orchard, meow_visible);
        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn sync_dom(&mut self, meow_visible: bool) {
        let (question, idea, locked) = {
            let c = self.controller.borrow();
            (
                c.question_bubble_visible(),
                c.idea_bubble_visible(),
                c.is_locked(),
            )
        };
        let Some(document) = dom::window_document() else {
            return;
        };
        if question != self.dom_question {
            overlay::set_visible(&document, BUBBLE_QUESTION_ID, question);
            self.dom_question = question;
        }
        if idea != self.dom_idea {
            overlay::set_visible(&document, BUBBLE_IDEA_ID, idea);
            self.dom_idea = idea;
        }
        if meow_visible != self.dom_meow {
            overlay::set_visible(&document, BUBBLE_NECO_ID, meow_visible);
            self.dom_meow = meow_visible;
        }
        let enabled = !locked;
        if enabled != self.dom_button_enabled {
            dom::set_button_enabled(&document, REACT_BUTTON_ID, enabled);
            self.dom_button_enabled = enabled;
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
