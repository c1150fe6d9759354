//! DOM Surface
//!
//! Renders wizard elements as real DOM nodes. The skeleton layers (field,
//! tray and hover container) are attached once the view has mounted; until
//! then elements are created detached and placed on the next render.

use club_schema_core::{ElementBlueprint, Point, Position, Surface};
use leptos_dragdrop::{element_origin, target_within, ClientPoint};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

/// Mounted skeleton nodes the surface renders into
#[derive(Clone)]
pub struct Layers {
    /// Widget root, the hover layer's coordinate space
    pub root: HtmlElement,
    pub field: HtmlElement,
    /// Tray of not yet placed items
    pub sandbox: HtmlElement,
    pub hover: HtmlElement,
}

#[derive(Default)]
pub struct DomSurface {
    layers: Option<Layers>,
    proxy: Option<HtmlElement>,
}

impl DomSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, layers: Layers) {
        self.layers = Some(layers);
    }

    /// Forget the skeleton, e.g. when the view unmounts
    pub fn detach(&mut self) {
        self.clear_hover();
        self.layers = None;
    }

    pub fn is_attached(&self) -> bool {
        self.layers.is_some()
    }

    pub fn root_origin(&self) -> Option<Point> {
        self.layers
            .as_ref()
            .map(|layers| to_point(element_origin(&layers.root)))
    }

    /// Field origin, and whether the event landed inside the field
    pub fn field_hit(&self, ev: &web_sys::Event) -> Option<(Point, bool)> {
        let layers = self.layers.as_ref()?;
        Some((
            to_point(element_origin(&layers.field)),
            target_within(ev, &layers.field),
        ))
    }
}

pub(crate) fn to_point(point: ClientPoint) -> Point {
    Point::new(point.x, point.y)
}

fn set_offset(el: &HtmlElement, position: Position) {
    let style = el.style();
    let _ = style.set_property("top", &format!("{}px", position.top));
    let _ = style.set_property("left", &format!("{}px", position.left));
}

/// Append `el` to `parent` unless it is already there
fn move_into(parent: &HtmlElement, el: &HtmlElement) {
    if !parent.is_same_node(el.parent_node().as_ref()) {
        let _ = parent.append_child(el);
    }
}

impl Surface for DomSurface {
    type Element = HtmlElement;

    fn create_element(&mut self, blueprint: &ElementBlueprint) -> Option<HtmlElement> {
        let document = web_sys::window()?.document()?;
        let el = match document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Some(el) => el,
            None => {
                warn!("could not create element for {:?}", blueprint.key);
                return None;
            }
        };

        el.set_class_name(&blueprint.classes.join(" "));
        let _ = el.set_attribute("data-id", &blueprint.key.id);
        el.set_tab_index(1);
        el.set_inner_html(&blueprint.inner_html);
        Some(el)
    }

    fn apply_color(&mut self, element: &HtmlElement, color: &str) {
        let _ = element.style().set_property("--color", color);

        let input = element
            .query_selector("input[type=color]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            input.set_value(color);
        }
    }

    fn place_on_field(&mut self, element: &HtmlElement, position: Position) {
        if let Some(layers) = &self.layers {
            move_into(&layers.field, element);
        }
        set_offset(element, position);
    }

    fn place_in_tray(&mut self, element: &HtmlElement) {
        if let Some(layers) = &self.layers {
            move_into(&layers.sandbox, element);
        }
        let style = element.style();
        let _ = style.remove_property("top");
        let _ = style.remove_property("left");
    }

    fn destroy(&mut self, element: &HtmlElement) {
        element.remove();
    }

    fn focus(&mut self, element: &HtmlElement) {
        let _ = element.focus();
    }

    fn show_hover(&mut self, proxy: HtmlElement, position: Position) {
        self.clear_hover();
        set_offset(&proxy, position);
        if let Some(layers) = &self.layers {
            let _ = layers.hover.append_child(&proxy);
        }
        self.proxy = Some(proxy);
    }

    fn move_hover(&mut self, position: Position) {
        if let Some(proxy) = &self.proxy {
            set_offset(proxy, position);
        }
    }

    fn clear_hover(&mut self) {
        if let Some(proxy) = self.proxy.take() {
            proxy.remove();
        }
        if let Some(layers) = &self.layers {
            layers.hover.set_inner_html("");
        }
    }
}
