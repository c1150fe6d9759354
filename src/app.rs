//! Club Schema Wizard Demo App
//!
//! Sample gym floor with an event log and a schema preview.

use std::rc::Rc;

use club_schema_core::{LoadItem, Schema, WizardCallbacks, WizardOptions};
use club_schema_ui::{create_wizard, PromptTextProvider, SchemaWizardView};
use leptos::prelude::*;

const LOG_LINES: usize = 12;

fn sample_items() -> Vec<LoadItem> {
    vec![
        LoadItem::new("bench-1", "Bench 1", "bench"),
        LoadItem::new("bench-2", "Bench 2", "bench"),
        LoadItem::new("rack-1", "Squat rack", "rack"),
        LoadItem::new("bike-1", "Bike", "cardio"),
        LoadItem::new("row-1", "Rower", "cardio"),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    let (log, set_log) = signal(Vec::<String>::new());
    let (changes, set_changes) = signal(0u32);
    let (schema_json, set_schema_json) = signal(String::new());
    let saved = StoredValue::new(None::<Schema>);

    let push = move |line: String| {
        set_log.update(|lines| {
            lines.push(line);
            if lines.len() > LOG_LINES {
                lines.remove(0);
            }
        })
    };

    let callbacks = WizardCallbacks::new()
        .on_add_info(move |info| {
            push(format!("added {} label {:?}", info.kind.as_str(), info.text))
        })
        .on_remove_info(move |info| push(format!("removed label {:?}", info.text)))
        .on_change_item_color(move |item| push(format!("{} color {:?}", item.id, item.color)))
        .on_change_info_color(move |info| push(format!("{} color {}", info.id, info.color)))
        .on_change_item_position(move |item| {
            push(match item.position() {
                Some(p) => format!("{} at {}x{}", item.id, p.left, p.top),
                None => format!("{} back to tray", item.id),
            })
        })
        .on_change_info_position(move |info| {
            push(format!("{} at {}x{}", info.id, info.left, info.top))
        })
        .on_change(move || set_changes.update(|n| *n += 1));

    let provider = Rc::new(PromptTextProvider);
    let handle = match create_wizard(WizardOptions::default(), callbacks, provider) {
        Ok(handle) => handle,
        Err(e) => return view! { <p class="error">{e.to_string()}</p> }.into_any(),
    };
    if let Err(e) = handle.load_items(&sample_items()) {
        push(e.to_string());
    }
    let stored = StoredValue::new_local(handle.clone());

    let build = move |_| {
        if let Some(handle) = stored.try_get_value() {
            match handle.build_schema() {
                Ok(schema) => {
                    set_schema_json.set(schema.to_json_pretty());
                    saved.set_value(Some(schema));
                }
                Err(e) => push(e.to_string()),
            }
        }
    };

    let reset = move |_| {
        if let Some(handle) = stored.try_get_value() {
            if let Err(e) = handle.load_items(&sample_items()) {
                push(e.to_string());
            }
        }
    };

    let restore = move |_| {
        let (Some(handle), Some(schema)) = (stored.try_get_value(), saved.get_value()) else {
            return;
        };
        if let Err(e) = handle.load_schema(&schema) {
            push(e.to_string());
        }
    };

    view! {
        <div class="demo-layout">
            <h1>"Club schema"</h1>
            <SchemaWizardView handle=handle />
            <div class="demo-actions">
                <button on:click=build>"Build schema"</button>
                <button on:click=reset>"Reset items"</button>
                <button on:click=restore>"Restore saved"</button>
                <span class="demo-changes">{move || format!("{} changes", changes.get())}</span>
            </div>
            <ul class="demo-log">
                {move || log.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
            <pre class="demo-schema">{move || schema_json.get()}</pre>
        </div>
    }
    .into_any()
}
