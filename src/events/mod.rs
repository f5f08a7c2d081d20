use crate::constants::EVENT_RESIZE;
use crate::frame::Mounted;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event subscriptions owned by one mount. Dropping the registry detaches them.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn listen<T, F>(&mut self, target: &T, kind: &'static str, handler: F) -> anyhow::Result<()>
    where
        T: AsRef<web::EventTarget>,
        F: FnMut(web::Event) + 'static,
    {
        let target = target.as_ref().clone();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        self.entries.push(Listener {
            target,
            kind,
            closure,
        });
        Ok(())
    }

    /// Like [`Listeners::listen`] but non-passive, so the handler may call `preventDefault`.
    pub fn listen_active<T, F>(
        &mut self,
        target: &T,
        kind: &'static str,
        handler: F,
    ) -> anyhow::Result<()>
    where
        T: AsRef<web::EventTarget>,
        F: FnMut(web::Event) + 'static,
    {
        let target = target.as_ref().clone();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        self.entries.push(Listener {
            target,
            kind,
            closure,
        });
        Ok(())
    }

    pub fn detach_all(&mut self) {
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach_all();
    }
}

/// Run `f` on the mount if it is still alive and running.
pub(crate) fn with_mounted(state: &Weak<RefCell<Mounted>>, f: impl FnOnce(&mut Mounted)) {
    if let Some(state) = state.upgrade() {
        let mut m = state.borrow_mut();
        if !m.frame_loop.is_stopped() {
            f(&mut m);
        }
    }
}

/// Attach resize, pointer and touch listeners for one mount.
pub fn wire_listeners(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<Mounted>>,
) -> anyhow::Result<Listeners> {
    let mut listeners = Listeners::default();

    let weak = Rc::downgrade(state);
    listeners.listen(window, EVENT_RESIZE, move |_ev| {
        with_mounted(&weak, |m| m.resize());
    })?;

    pointer::wire_pointer(&mut listeners, document, canvas, state)?;
    log::debug!("[mount] {} listeners attached", listeners.len());
    Ok(listeners)
}
