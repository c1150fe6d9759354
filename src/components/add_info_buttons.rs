//! Add Info Buttons Component

use club_schema_core::InfoKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::WizardContext;

/// "Add text" / "Add admin" buttons.
///
/// Text labels are resolved asynchronously; a second click while the first
/// prompt is pending starts an independent request.
#[component]
pub fn AddInfoButtons(
    #[prop(into)] text_label: String,
    #[prop(into)] admin_label: String,
) -> impl IntoView {
    let ctx = use_context::<WizardContext>().expect("WizardContext should be provided");

    let add_info = move |kind: InfoKind| {
        let Some(handle) = ctx.handle() else {
            return;
        };
        spawn_local(async move {
            handle.add_info(kind).await;
        });
    };

    view! {
        <div class="csw-buttons">
            <button
                type="button"
                class="csw-button"
                data-add-info="text"
                on:click=move |_| add_info(InfoKind::Text)
            >
                {text_label}
            </button>
            <button
                type="button"
                class="csw-button"
                data-add-info="admin"
                on:click=move |_| add_info(InfoKind::Admin)
            >
                {admin_label}
            </button>
        </div>
    }
}
