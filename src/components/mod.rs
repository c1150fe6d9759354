//! UI Components
//!
//! Leptos components of the schema wizard widget.

mod add_info_buttons;
mod wizard_view;

pub use add_info_buttons::AddInfoButtons;
pub use wizard_view::SchemaWizardView;
