//! Wizard Context
//!
//! Shared wizard handle and drag signals provided via Leptos Context API.

use club_schema_core::WizardHandle;
use leptos::prelude::*;
use leptos_dragdrop::DragSignals;

use crate::surface::DomSurface;

/// Wizard handle rendering into the DOM
pub type DomWizard = WizardHandle<DomSurface>;

#[derive(Clone, Copy)]
pub struct WizardContext {
    handle: StoredValue<DomWizard, LocalStorage>,
    /// Whether a drag is in progress - styling only
    pub drag: DragSignals,
}

impl WizardContext {
    pub fn new(handle: DomWizard, drag: DragSignals) -> Self {
        Self {
            handle: StoredValue::new_local(handle),
            drag,
        }
    }

    /// `None` once the owning view has been disposed
    pub fn handle(&self) -> Option<DomWizard> {
        self.handle.try_get_value()
    }
}
