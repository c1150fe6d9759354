//! Render Surface
//!
//! The wizard keeps its own element table and tells a `Surface` what to do
//! with each element. The browser crate implements this over the DOM;
//! `MemorySurface` keeps everything in memory for headless hosts and tests.

use crate::markup::ElementBlueprint;
use crate::models::{EntityKey, Position};

/// Rendering backend driven by the wizard
pub trait Surface {
    /// Handle to one visual element
    type Element: Clone;

    /// Build a detached element. `None` if the backend could not create it,
    /// in which case the entity is skipped until the next render.
    fn create_element(&mut self, blueprint: &ElementBlueprint) -> Option<Self::Element>;

    /// Set the element's display color (already canonical hex)
    fn apply_color(&mut self, element: &Self::Element, color: &str);

    /// Move into the field at an already clamped position
    fn place_on_field(&mut self, element: &Self::Element, position: Position);

    /// Move into the tray, clearing any position styling
    fn place_in_tray(&mut self, element: &Self::Element);

    /// Detach and drop the element
    fn destroy(&mut self, element: &Self::Element);

    fn focus(&mut self, element: &Self::Element);

    /// Put `proxy` in the hover layer, replacing any previous proxy
    fn show_hover(&mut self, proxy: Self::Element, position: Position);

    fn move_hover(&mut self, position: Position);

    /// Remove the hover proxy, if any
    fn clear_hover(&mut self);
}

/// Where a `MemorySurface` element currently lives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    Detached,
    Field(Position),
    Tray,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryElement {
    pub blueprint: ElementBlueprint,
    pub color: String,
    pub placement: Placement,
    pub destroyed: bool,
    pub proxy: bool,
}

/// In-memory surface; elements are indices into `elements`
#[derive(Debug, Default)]
pub struct MemorySurface {
    pub elements: Vec<MemoryElement>,
    pub hover: Option<(usize, Position)>,
    pub focused: Option<usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live (non-proxy, not destroyed) element of an entity
    pub fn element_for(&self, key: &EntityKey) -> Option<&MemoryElement> {
        self.elements
            .iter()
            .find(|el| !el.proxy && !el.destroyed && el.blueprint.key == *key)
    }

    /// Number of real (non-proxy) elements ever created for an entity
    pub fn created_for(&self, key: &EntityKey) -> usize {
        self.elements
            .iter()
            .filter(|el| !el.proxy && el.blueprint.key == *key)
            .count()
    }

    pub fn focused_key(&self) -> Option<&EntityKey> {
        self.focused
            .and_then(|index| self.elements.get(index))
            .map(|el| &el.blueprint.key)
    }

    pub fn hover_key(&self) -> Option<&EntityKey> {
        self.hover
            .and_then(|(index, _)| self.elements.get(index))
            .map(|el| &el.blueprint.key)
    }
}

impl Surface for MemorySurface {
    type Element = usize;

    fn create_element(&mut self, blueprint: &ElementBlueprint) -> Option<usize> {
        self.elements.push(MemoryElement {
            blueprint: blueprint.clone(),
            color: blueprint.color.clone(),
            placement: Placement::Detached,
            destroyed: false,
            proxy: false,
        });
        Some(self.elements.len() - 1)
    }

    fn apply_color(&mut self, element: &usize, color: &str) {
        if let Some(el) = self.elements.get_mut(*element) {
            el.color = color.to_string();
        }
    }

    fn place_on_field(&mut self, element: &usize, position: Position) {
        if let Some(el) = self.elements.get_mut(*element) {
            el.placement = Placement::Field(position);
        }
    }

    fn place_in_tray(&mut self, element: &usize) {
        if let Some(el) = self.elements.get_mut(*element) {
            el.placement = Placement::Tray;
        }
    }

    fn destroy(&mut self, element: &usize) {
        if let Some(el) = self.elements.get_mut(*element) {
            el.destroyed = true;
            el.placement = Placement::Detached;
        }
        if self.focused == Some(*element) {
            self.focused = None;
        }
    }

    fn focus(&mut self, element: &usize) {
        self.focused = Some(*element);
    }

    fn show_hover(&mut self, proxy: usize, position: Position) {
        self.clear_hover();
        if let Some(el) = self.elements.get_mut(proxy) {
            el.proxy = true;
        }
        self.hover = Some((proxy, position));
    }

    fn move_hover(&mut self, position: Position) {
        if let Some((_, current)) = self.hover.as_mut() {
            *current = position;
        }
    }

    fn clear_hover(&mut self) {
        if let Some((index, _)) = self.hover.take() {
            if let Some(el) = self.elements.get_mut(index) {
                el.destroyed = true;
            }
        }
    }
}
