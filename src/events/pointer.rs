use super::{with_mounted, Listeners};
use crate::constants::{
    EVENT_MOUSE_LEAVE, EVENT_MOUSE_MOVE, EVENT_TOUCH_CANCEL, EVENT_TOUCH_END, EVENT_TOUCH_MOVE,
};
use crate::frame::Mounted;
use starfield_core::PointerKind;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client position of the first active touch.
#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<(f32, f32)> {
    let touch = ev.touches().get(0)?;
    Some((touch.client_x() as f32, touch.client_y() as f32))
}

pub fn wire_pointer(
    listeners: &mut Listeners,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<Mounted>>,
) -> anyhow::Result<()> {
    let weak = Rc::downgrade(state);
    listeners.listen(canvas, EVENT_MOUSE_MOVE, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        with_mounted(&weak, |m| m.engine.pointer_moved(x, y, PointerKind::Mouse));
    })?;

    let weak = Rc::downgrade(state);
    listeners.listen_active(canvas, EVENT_TOUCH_MOVE, move |ev| {
        let Some(touch_ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some((x, y)) = first_touch(touch_ev) {
            with_mounted(&weak, |m| m.engine.pointer_moved(x, y, PointerKind::Touch));
        }
        ev.prevent_default();
    })?;

    for kind in [EVENT_TOUCH_END, EVENT_TOUCH_CANCEL] {
        let weak = Rc::downgrade(state);
        listeners.listen(canvas, kind, move |_ev| {
            with_mounted(&weak, |m| m.engine.pointer_released());
        })?;
    }

    let weak = Rc::downgrade(state);
    listeners.listen(document, EVENT_MOUSE_LEAVE, move |_ev| {
        with_mounted(&weak, |m| {
            log::trace!("[input] pointer left");
            m.engine.pointer_released();
        });
    })?;
    Ok(())
}
