use crate::constants::REACT_BUTTON_ID;
use crate::core::{ClipMixer, ReactionController};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire the reaction button: one click maps to one `trigger()`. The button
/// also carries the `disabled` attribute while a sequence is playing (the
/// frame loop keeps that in sync), but the PlayLock inside the controller is
/// the actual guard.
pub fn wire_react_button(
    document: &web::Document,
    controller: Rc<RefCell<ReactionController>>,
    mixer: Rc<RefCell<ClipMixer>>,
) {
    dom::add_click_listener(document, REACT_BUTTON_ID, move || {
        let mut controller = controller.borrow_mut();
        let mut mixer = mixer.borrow_mut();
        controller.trigger(&mut *mixer);
    });
}
