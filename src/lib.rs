//! Club Schema Wizard UI
//!
//! Browser side of the schema wizard:
//! - surface: DOM rendering of items, info labels and the drag proxy
//! - components: `SchemaWizardView` skeleton and its event wiring
//! - mount / bindings: Leptos and JavaScript entry points

mod bindings;
pub mod components;
mod context;
pub mod logging;
mod mount;
mod prompt;
mod surface;

pub use bindings::ClubSchemaWizard;
pub use components::SchemaWizardView;
pub use context::{DomWizard, WizardContext};
pub use mount::{create_wizard, mount_wizard, MountTarget, MountedWizard};
pub use prompt::PromptTextProvider;
pub use surface::{DomSurface, Layers};
