//! JavaScript API
//!
//! `new ClubSchemaWizard(elementOrSelector, options)` for pages that are not
//! Leptos apps. Plain option values map onto `WizardOptions`; function values
//! become callbacks, and `getInfoText` (returning a Promise of a string)
//! replaces the default prompt.

use std::rc::Rc;

use club_schema_core::{
    Info, InfoTextProvider, Item, LoadItem, Schema, TextRejected, WizardCallbacks, WizardError,
    WizardOptions, WizardResult,
};
use futures::future::LocalBoxFuture;
use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::mount::{mount_wizard, MountTarget, MountedWizard};
use crate::prompt::PromptTextProvider;

// ========================
// Conversions
// ========================

/// Serialize with `None` as `null`, the shape JS callers expect
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true))
}

fn js_hook<T: Serialize + 'static>(name: &'static str, f: Function) -> impl Fn(T) + 'static {
    move |value: T| {
        let arg = match to_js(&value) {
            Ok(arg) => arg,
            Err(e) => {
                warn!("{}: could not convert argument: {}", name, e);
                return;
            }
        };
        if let Err(e) = f.call1(&JsValue::NULL, &arg) {
            warn!("{} threw: {:?}", name, e);
        }
    }
}

/// Text source backed by a JS function returning a string or a Promise of one
struct JsTextProvider(Function);

impl InfoTextProvider for JsTextProvider {
    fn info_text(&self) -> LocalBoxFuture<'static, Result<String, TextRejected>> {
        let returned = self.0.call0(&JsValue::NULL);
        Box::pin(async move {
            let returned = returned.map_err(|_| TextRejected)?;
            let text = JsFuture::from(Promise::resolve(&returned))
                .await
                .map_err(|_| TextRejected)?;
            text.as_string().ok_or(TextRejected)
        })
    }
}

/// Split a JS options object into plain options, callbacks and text source
fn parse_options(
    raw: &JsValue,
) -> WizardResult<(WizardOptions, WizardCallbacks, Rc<dyn InfoTextProvider>)> {
    if raw.is_undefined() || raw.is_null() {
        return Ok((
            WizardOptions::default(),
            WizardCallbacks::new(),
            Rc::new(PromptTextProvider),
        ));
    }
    let object = raw
        .dyn_ref::<Object>()
        .ok_or_else(|| WizardError::InvalidOptions("options should be an object".to_string()))?;

    let plain = Object::new();
    for entry in Object::entries(object).iter() {
        let pair = Array::from(&entry);
        let value = pair.get(1);
        if !value.is_function() {
            let _ = Reflect::set(&plain, &pair.get(0), &value);
        }
    }
    let options: WizardOptions = serde_wasm_bindgen::from_value(plain.into())
        .map_err(|e| WizardError::InvalidOptions(e.to_string()))?;

    let function = |name: &str| {
        Reflect::get(raw, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    };

    let mut callbacks = WizardCallbacks::new();
    if let Some(f) = function("onAddInfo") {
        callbacks = callbacks.on_add_info(js_hook::<Info>("onAddInfo", f));
    }
    if let Some(f) = function("onRemoveInfo") {
        callbacks = callbacks.on_remove_info(js_hook::<Info>("onRemoveInfo", f));
    }
    if let Some(f) = function("onChangeItemColor") {
        callbacks = callbacks.on_change_item_color(js_hook::<Item>("onChangeItemColor", f));
    }
    if let Some(f) = function("onChangeInfoColor") {
        callbacks = callbacks.on_change_info_color(js_hook::<Info>("onChangeInfoColor", f));
    }
    if let Some(f) = function("onChangeItemPosition") {
        callbacks = callbacks.on_change_item_position(js_hook::<Item>("onChangeItemPosition", f));
    }
    if let Some(f) = function("onChangeInfoPosition") {
        callbacks = callbacks.on_change_info_position(js_hook::<Info>("onChangeInfoPosition", f));
    }
    if let Some(f) = function("onChange") {
        callbacks = callbacks.on_change(move || {
            if let Err(e) = f.call0(&JsValue::NULL) {
                warn!("onChange threw: {:?}", e);
            }
        });
    }

    let provider: Rc<dyn InfoTextProvider> = match function("getInfoText") {
        Some(f) => Rc::new(JsTextProvider(f)),
        None => Rc::new(PromptTextProvider),
    };
    Ok((options, callbacks, provider))
}

fn mount_target(target: JsValue) -> WizardResult<MountTarget> {
    if let Some(selector) = target.as_string() {
        return Ok(MountTarget::Selector(selector));
    }
    target
        .dyn_into::<web_sys::HtmlElement>()
        .map(MountTarget::Element)
        .map_err(|_| {
            WizardError::InvalidTarget("expected an HTML element or a selector".to_string())
        })
}

// ========================
// Exported class
// ========================

#[wasm_bindgen]
pub struct ClubSchemaWizard {
    mounted: MountedWizard,
}

#[wasm_bindgen]
impl ClubSchemaWizard {
    #[wasm_bindgen(constructor)]
    pub fn new(target: JsValue, options: JsValue) -> Result<ClubSchemaWizard, JsError> {
        crate::logging::init();

        let target = mount_target(target)?;
        let (options, callbacks, provider) = parse_options(&options)?;
        let mounted = mount_wizard(&target, options, callbacks, provider)?;
        Ok(Self { mounted })
    }

    /// Replace the item collection; every item starts in the tray
    #[wasm_bindgen(js_name = loadItems)]
    pub fn load_items(&self, items: JsValue) -> Result<(), JsError> {
        let items: Vec<LoadItem> = serde_wasm_bindgen::from_value(items)
            .map_err(|e| WizardError::InvalidItems(e.to_string()))?;
        self.mounted.handle().load_items(&items)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = loadSchema)]
    pub fn load_schema(&self, schema: JsValue) -> Result<(), JsError> {
        let schema: Schema = serde_wasm_bindgen::from_value(schema)
            .map_err(|e| WizardError::InvalidSchema(e.to_string()))?;
        self.mounted.handle().load_schema(&schema)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = buildSchema)]
    pub fn build_schema(&self) -> Result<JsValue, JsError> {
        Ok(to_js(&self.mounted.handle().build_schema()?)?)
    }

    #[wasm_bindgen(js_name = getNotPlacedItems)]
    pub fn not_placed_items(&self) -> Result<JsValue, JsError> {
        Ok(to_js(&self.mounted.handle().not_placed_items()?)?)
    }

    /// Remove the widget, detach document listeners and clear all state
    pub fn dispose(&mut self) {
        self.mounted.dispose();
    }
}
