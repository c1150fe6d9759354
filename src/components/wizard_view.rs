//! Schema Wizard View
//!
//! Widget skeleton plus delegated event handling. Item and info elements are
//! outside the reactive tree: the wizard renders them into the field and
//! tray through `DomSurface`.

use club_schema_core::{ArrowKey, EntityKind, Point, PointerDown, PointerTarget, PointerUp};
use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragdrop::{
    bind_document_pointer, create_drag_signals, element_origin, event_element, ClientPoint,
    DocumentPointerListeners,
};
use tracing::debug;
use wasm_bindgen::JsCast;

use crate::components::AddInfoButtons;
use crate::context::{DomWizard, WizardContext};
use crate::surface::{to_point, Layers};

// ========================
// Event target helpers
// ========================

/// Kind and id of the item/info element containing `el`
fn entity_of(el: &web_sys::Element) -> Option<(EntityKind, String)> {
    let entity = el.closest(".csw-item, .csw-info").ok().flatten()?;
    let id = entity.get_attribute("data-id")?;
    let kind = if entity.class_list().contains("csw-item") {
        EntityKind::Item
    } else {
        EntityKind::Info
    };
    Some((kind, id))
}

/// What a press landed on, and the origin of the pressed element
fn pointer_target(ev: &web_sys::MouseEvent) -> (PointerTarget, Point) {
    let Some(el) = event_element(ev) else {
        return (PointerTarget::Elsewhere, Point::default());
    };
    let origin = to_point(element_origin(&el));

    let target = if el.matches(".csw-item .csw-item-title").unwrap_or(false) {
        entity_of(&el).map(|(_, id)| PointerTarget::ItemTitle(id))
    } else if el.matches(".csw-info, .csw-info .csw-info-text").unwrap_or(false) {
        entity_of(&el).map(|(_, id)| PointerTarget::InfoBody(id))
    } else {
        None
    };
    (target.unwrap_or(PointerTarget::Elsewhere), origin)
}

/// Owned by the view's reactive owner. Dropping it detaches the document
/// listeners and clears the wizard.
struct ViewTeardown {
    handle: DomWizard,
    _listeners: Option<DocumentPointerListeners>,
}

impl Drop for ViewTeardown {
    fn drop(&mut self) {
        self.handle.dispose();
        self.handle.update_surface(|surface| surface.detach());
        debug!("schema wizard view torn down");
    }
}

// ========================
// Component
// ========================

#[component]
pub fn SchemaWizardView(handle: DomWizard) -> impl IntoView {
    let options = handle.with(|w| w.options().clone()).unwrap_or_default();
    let drag = create_drag_signals();
    let ctx = WizardContext::new(handle.clone(), drag);
    provide_context(ctx);

    let root_ref = NodeRef::<Div>::new();
    let field_ref = NodeRef::<Div>::new();
    let sandbox_ref = NodeRef::<Div>::new();
    let hover_ref = NodeRef::<Div>::new();

    // Hand the mounted skeleton to the surface and place pending elements
    Effect::new(move |_| {
        let (Some(root), Some(field), Some(sandbox), Some(hover)) =
            (root_ref.get(), field_ref.get(), sandbox_ref.get(), hover_ref.get())
        else {
            return;
        };
        if let Some(handle) = ctx.handle() {
            handle.update_surface(|surface| {
                surface.attach(Layers {
                    root: root.into(),
                    field: field.into(),
                    sandbox: sandbox.into(),
                    hover: hover.into(),
                })
            });
            debug!("schema wizard layers attached");
        }
    });

    // Drag tracking continues outside the widget
    let move_handle = handle.clone();
    let up_handle = handle.clone();
    let listeners = bind_document_pointer(
        move |ev: web_sys::MouseEvent| {
            if !move_handle.is_dragging() {
                return;
            }
            if let Ok(Some(root_origin)) = move_handle.with(|w| w.surface().root_origin()) {
                move_handle.pointer_move(to_point(ClientPoint::of(&ev)), root_origin);
            }
        },
        move |ev: web_sys::MouseEvent| {
            if !up_handle.is_dragging() {
                return;
            }
            let (field_origin, over_field) = up_handle
                .with(|w| w.surface().field_hit(&ev))
                .ok()
                .flatten()
                .unwrap_or_default();
            up_handle.pointer_up(&PointerUp {
                pointer: to_point(ClientPoint::of(&ev)),
                over_field,
                field_origin,
            });
            drag.dragging_write.set(false);
        },
    );
    StoredValue::new_local(ViewTeardown {
        handle,
        _listeners: listeners,
    });

    let on_mousedown = move |ev: web_sys::MouseEvent| {
        let Some(handle) = ctx.handle() else {
            return;
        };
        let root_origin = handle
            .with(|w| w.surface().root_origin())
            .ok()
            .flatten()
            .unwrap_or_default();
        let (target, target_origin) = pointer_target(&ev);

        handle.pointer_down(&PointerDown {
            target,
            pointer: to_point(ClientPoint::of(&ev)),
            buttons: ev.buttons(),
            target_origin,
            root_origin,
        });
        drag.dragging_write.set(handle.is_dragging());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = ArrowKey::from_key(&ev.key()) else {
            return;
        };
        let Some(active) = document().active_element() else {
            return;
        };
        if !active.matches(".csw-item").unwrap_or(false) {
            return;
        }
        let (Some(id), Some(handle)) = (active.get_attribute("data-id"), ctx.handle()) else {
            return;
        };
        if handle.nudge(&id, key) {
            ev.prevent_default();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) =
            event_element(&ev).and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if input.type_() != "color" {
            return;
        }
        let (Some((kind, id)), Some(handle)) = (entity_of(&input), ctx.handle()) else {
            return;
        };
        match kind {
            EntityKind::Item => handle.change_item_color(&id, &input.value()),
            EntityKind::Info => handle.change_info_color(&id, &input.value()),
        }
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(el) = event_element(&ev) else {
            return;
        };
        if !el.matches(".csw-remove").unwrap_or(false) {
            return;
        }
        let (Some((kind, id)), Some(handle)) = (entity_of(&el), ctx.handle()) else {
            return;
        };
        match kind {
            EntityKind::Item => handle.remove_item(&id),
            EntityKind::Info => handle.remove_info(&id),
        }
    };

    let root_style = options
        .css_variables()
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <div
            class="club-schema-wizard"
            class:csw-dragging=move || drag.dragging_read.get()
            style=root_style
            node_ref=root_ref
            on:mousedown=on_mousedown
            on:keydown=on_keydown
            on:change=on_change
            on:click=on_click
        >
            <div class="csw-wrapper">
                <div class="csw-field" node_ref=field_ref></div>
                <div class="csw-controls">
                    <AddInfoButtons
                        text_label=options.add_text_label.clone()
                        admin_label=options.add_admin_label.clone()
                    />
                    <div class="csw-sandbox" node_ref=sandbox_ref></div>
                    <div class="csw-hover-container" node_ref=hover_ref></div>
                </div>
            </div>
        </div>
    }
}
