//! Mounting
//!
//! Resolves the host container and mounts `SchemaWizardView` into it.

use std::any::Any;
use std::rc::Rc;

use club_schema_core::{
    InfoTextProvider, SchemaWizard, WizardCallbacks, WizardError, WizardHandle, WizardOptions,
    WizardResult,
};
use leptos::prelude::*;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::SchemaWizardView;
use crate::context::DomWizard;
use crate::surface::DomSurface;

/// Where the widget goes
#[derive(Debug, Clone)]
pub enum MountTarget {
    /// CSS selector that must match exactly one element
    Selector(String),
    Element(HtmlElement),
}

impl MountTarget {
    pub fn resolve(&self) -> WizardResult<HtmlElement> {
        let selector = match self {
            MountTarget::Element(el) => return Ok(el.clone()),
            MountTarget::Selector(selector) => selector,
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| WizardError::InvalidTarget("no document available".to_string()))?;
        let found = document.query_selector_all(selector).map_err(|_| {
            WizardError::InvalidTarget(format!("{:?} is not a valid selector", selector))
        })?;

        if found.length() != 1 {
            return Err(WizardError::InvalidTarget(format!(
                "{:?} matched {} elements, expected exactly one",
                selector,
                found.length()
            )));
        }
        found
            .item(0)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| {
                WizardError::InvalidTarget(format!("{:?} is not an HTML element", selector))
            })
    }
}

/// Wizard handle rendering into the DOM, not yet mounted anywhere
pub fn create_wizard(
    options: WizardOptions,
    callbacks: WizardCallbacks,
    text_provider: Rc<dyn InfoTextProvider>,
) -> WizardResult<DomWizard> {
    let wizard = SchemaWizard::new(options, DomSurface::new())?;
    Ok(WizardHandle::new(wizard, callbacks, text_provider))
}

/// A wizard mounted outside any Leptos app
pub struct MountedWizard {
    handle: DomWizard,
    unmount: Option<Box<dyn Any>>,
}

impl MountedWizard {
    pub fn handle(&self) -> &DomWizard {
        &self.handle
    }

    /// Unmount the view and drop all state. Safe to call twice.
    pub fn dispose(&mut self) {
        match self.unmount.take() {
            Some(unmount) => drop(unmount),
            None => warn!("schema wizard already disposed"),
        }
        self.handle.dispose();
    }
}

/// Validate everything, then mount. Nothing is rendered on error.
pub fn mount_wizard(
    target: &MountTarget,
    options: WizardOptions,
    callbacks: WizardCallbacks,
    text_provider: Rc<dyn InfoTextProvider>,
) -> WizardResult<MountedWizard> {
    let parent = target.resolve()?;
    let handle = create_wizard(options, callbacks, text_provider)?;

    let view_handle = handle.clone();
    let unmount = leptos::mount::mount_to(parent, move || {
        view! { <SchemaWizardView handle=view_handle /> }
    });
    info!("schema wizard mounted");

    Ok(MountedWizard {
        handle,
        unmount: Some(Box::new(unmount)),
    })
}
