//! Leptos DragDrop Utilities
//!
//! Mouse-driven dragging of absolutely positioned elements.
//! Document-level move/up listeners are owned by a guard and detached when
//! the guard drops, so a widget can tie them to its own lifetime.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Pointer position in client (viewport) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn of(ev: &web_sys::MouseEvent) -> Self {
        Self {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
        }
    }
}

/// Top-left corner of an element in client coordinates
pub fn element_origin(el: &web_sys::Element) -> ClientPoint {
    let rect = el.get_bounding_client_rect();
    ClientPoint {
        x: rect.left(),
        y: rect.top(),
    }
}

/// Event target as an element, if it is one
pub fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()?.dyn_into::<web_sys::Element>().ok()
}

/// Whether the event target lies inside `container` (itself included)
pub fn target_within(ev: &web_sys::Event, container: &web_sys::Node) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// Drag state signals for styling the widget while a drag is active
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
}

pub fn create_drag_signals() -> DragSignals {
    let (dragging_read, dragging_write) = signal(false);
    DragSignals {
        dragging_read,
        dragging_write,
    }
}

type MouseClosure = Closure<dyn FnMut(web_sys::MouseEvent)>;

/// Document mousemove/mouseup listeners, removed on drop
pub struct DocumentPointerListeners {
    document: web_sys::Document,
    on_mousemove: MouseClosure,
    on_mouseup: MouseClosure,
}

impl Drop for DocumentPointerListeners {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "mousemove",
            self.on_mousemove.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "mouseup",
            self.on_mouseup.as_ref().unchecked_ref(),
        );
    }
}

/// Bind global mousemove/mouseup handlers.
/// Returns `None` outside a browser document.
pub fn bind_document_pointer<M, U>(on_move: M, on_up: U) -> Option<DocumentPointerListeners>
where
    M: FnMut(web_sys::MouseEvent) + 'static,
    U: FnMut(web_sys::MouseEvent) + 'static,
{
    let document = web_sys::window()?.document()?;

    let on_mousemove = MouseClosure::new(on_move);
    let on_mouseup = MouseClosure::new(on_up);

    let _ = document
        .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    let _ =
        document.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());

    Some(DocumentPointerListeners {
        document,
        on_mousemove,
        on_mouseup,
    })
}
