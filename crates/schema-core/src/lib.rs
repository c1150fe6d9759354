//! Club Schema Wizard Core
//!
//! Headless layer of the schema wizard:
//! - models / validation: items, info labels and the schema format
//! - wizard: state store, drag/nudge/remove/recolor controller, render pass
//! - handle: shared handle with callbacks and async add-info
//! - surface: rendering backend trait (DOM in the UI crate, memory here)

mod callbacks;
mod color;
mod drag;
mod error;
mod geometry;
mod handle;
mod markup;
mod models;
mod options;
mod surface;
mod text;
mod validation;
mod wizard;


pub use callbacks::{Callback, WizardCallbacks, WizardEvent};
pub use color::{canonical_hex, resolve_color};
pub use drag::{
    ActiveDrag, ArrowKey, DragState, PointerDown, PointerTarget, PointerUp, PRIMARY_BUTTON,
};
pub use error::{WizardError, WizardResult};
pub use geometry::{clamp_axis, snap_to_grid, Point};
pub use handle::WizardHandle;
pub use markup::{html_escape, ElementBlueprint};
pub use models::{
    EntityKey, EntityKind, Info, InfoKind, Item, LoadItem, NotPlacedItem, Position, Schema,
    SchemaInfo, SchemaItem,
};
pub use options::WizardOptions;
pub use surface::{MemoryElement, MemorySurface, Placement, Surface};
pub use text::{normalize_prompt_text, InfoTextProvider, NoTextSource, TextRejected, ADMIN_LABEL};
pub use validation::{validate_load_items, validate_schema};
pub use wizard::{generate_info_id, SchemaWizard};
