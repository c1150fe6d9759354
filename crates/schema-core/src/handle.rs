//! Shared Wizard Handle
//!
//! Cheap-to-clone handle used by event listeners. It owns the callbacks and
//! the text provider, forwards each call to the wizard, and fires callbacks
//! only after the wizard borrow is released, so a callback may call back
//! into the handle.
//!
//! A call made while the wizard is still borrowed (a DOM focus handler fired
//! from inside a render, for instance) never panics: loads and reads return
//! `WizardError::Busy`, interactions are dropped with a warning.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::callbacks::WizardCallbacks;
use crate::drag::{ArrowKey, PointerDown, PointerUp};
use crate::error::{WizardError, WizardResult};
use crate::geometry::Point;
use crate::models::{Info, InfoKind, LoadItem, NotPlacedItem, Schema};
use crate::surface::Surface;
use crate::text::{InfoTextProvider, ADMIN_LABEL};
use crate::wizard::SchemaWizard;

pub struct WizardHandle<S: Surface> {
    wizard: Rc<RefCell<SchemaWizard<S>>>,
    callbacks: Rc<WizardCallbacks>,
    text_provider: Rc<dyn InfoTextProvider>,
}

impl<S: Surface> Clone for WizardHandle<S> {
    fn clone(&self) -> Self {
        Self {
            wizard: self.wizard.clone(),
            callbacks: self.callbacks.clone(),
            text_provider: self.text_provider.clone(),
        }
    }
}

impl<S: Surface> WizardHandle<S> {
    pub fn new(
        wizard: SchemaWizard<S>,
        callbacks: WizardCallbacks,
        text_provider: Rc<dyn InfoTextProvider>,
    ) -> Self {
        Self {
            wizard: Rc::new(RefCell::new(wizard)),
            callbacks: Rc::new(callbacks),
            text_provider,
        }
    }

    /// Read-only access to the wizard
    pub fn with<R>(&self, f: impl FnOnce(&SchemaWizard<S>) -> R) -> WizardResult<R> {
        let wizard = self.wizard.try_borrow().map_err(|_| {
            warn!("schema wizard is busy, read refused");
            WizardError::Busy
        })?;
        Ok(f(&wizard))
    }

    pub fn load_items(&self, items: &[LoadItem]) -> WizardResult<()> {
        self.try_mutate(|w| w.load_items(items))
    }

    pub fn load_schema(&self, schema: &Schema) -> WizardResult<()> {
        self.try_mutate(|w| w.load_schema(schema))
    }

    pub fn build_schema(&self) -> WizardResult<Schema> {
        self.with(|w| w.build_schema())
    }

    pub fn not_placed_items(&self) -> WizardResult<Vec<NotPlacedItem>> {
        self.with(|w| w.not_placed_items())
    }

    /// `false` while the wizard is busy
    pub fn is_dragging(&self) -> bool {
        self.with(|w| w.is_dragging()).unwrap_or(false)
    }

    pub fn render(&self) {
        self.mutate(|w| w.render());
    }

    /// Reconfigure the surface, then re-render into it
    pub fn update_surface(&self, f: impl FnOnce(&mut S)) {
        self.mutate(|w| {
            f(w.surface_mut());
            w.render();
        });
    }

    pub fn pointer_down(&self, down: &PointerDown) {
        self.mutate(|w| w.pointer_down(down));
    }

    pub fn pointer_move(&self, pointer: Point, root_origin: Point) {
        self.mutate(|w| w.pointer_move(pointer, root_origin));
    }

    pub fn pointer_up(&self, up: &PointerUp) {
        self.mutate(|w| w.pointer_up(up));
    }

    pub fn nudge(&self, item_id: &str, key: ArrowKey) -> bool {
        self.mutate(|w| w.nudge(item_id, key))
    }

    pub fn remove_item(&self, id: &str) {
        self.mutate(|w| w.remove_item(id));
    }

    pub fn remove_info(&self, id: &str) {
        self.mutate(|w| w.remove_info(id));
    }

    pub fn change_item_color(&self, id: &str, color: &str) {
        self.mutate(|w| w.change_item_color(id, color));
    }

    pub fn change_info_color(&self, id: &str, color: &str) {
        self.mutate(|w| w.change_info_color(id, color));
    }

    /// Resolve label text and create the entry. Nothing happens if the text
    /// provider declines. Concurrent calls are independent of each other.
    pub async fn add_info(&self, kind: InfoKind) -> Option<Info> {
        let text = match kind {
            InfoKind::Admin => ADMIN_LABEL.to_string(),
            InfoKind::Text => match self.text_provider.info_text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!("add info cancelled: {}", e);
                    return None;
                }
            },
        };
        self.mutate(|w| Some(w.add_info(kind, text)))
    }

    /// Drop all wizard state and elements
    pub fn dispose(&self) {
        self.mutate(|w| w.dispose());
    }

    /// Interaction entry point: a busy wizard drops the call
    fn mutate<R: Default>(&self, f: impl FnOnce(&mut SchemaWizard<S>) -> R) -> R {
        self.try_mutate(|w| Ok(f(w))).unwrap_or_default()
    }

    fn try_mutate<R>(
        &self,
        f: impl FnOnce(&mut SchemaWizard<S>) -> WizardResult<R>,
    ) -> WizardResult<R> {
        let (result, events) = {
            let mut wizard = self.wizard.try_borrow_mut().map_err(|_| {
                warn!("schema wizard is busy, call ignored");
                WizardError::Busy
            })?;
            let result = f(&mut wizard);
            (result, wizard.take_events())
        };

        for event in events {
            self.callbacks.dispatch(event);
        }
        result
    }
}
