//! Browser entry point for the Everymode landing page
//!
//! Registers a one-shot `DOMContentLoaded` hook that mounts the feature,
//! statistic and team cards, and exports the registries and renderers for
//! other modules on the page.

mod dom;

use everymode_content::{
    hex_to_rgb, render_features, render_statistics, render_team, Lifecycle, PageConfig, Registry,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

pub use crate::dom::DomPage;

thread_local! {
    static LIFECYCLE: Lifecycle = const { Lifecycle::new() };
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let document = dom::get_document().ok_or("no document on window")?;

    // Already parsed (script loaded late or deferred): run now
    if document.ready_state() != "loading" {
        initialize();
        return Ok(());
    }

    let callback = Closure::once(Box::new(move || {
        initialize();
    }) as Box<dyn FnOnce()>);

    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.as_ref().unchecked_ref(),
        &opts,
    )?;
    callback.forget();

    Ok(())
}

/// Mount all content with the default page ids.
/// Returns false if content was already initialized for this page load.
#[wasm_bindgen]
pub fn initialize() -> bool {
    let Some(mut page) = DomPage::current() else {
        tracing::error!("No document available, skipping initialization");
        return false;
    };
    LIFECYCLE.with(|lifecycle| {
        lifecycle
            .fire(&mut page, Registry::builtin(), &PageConfig::default())
            .is_some()
    })
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

fn current_page() -> Result<DomPage, JsValue> {
    DomPage::current().ok_or_else(|| JsValue::from_str("no document on window"))
}

// ===== Module bundle =====

#[wasm_bindgen]
pub fn features() -> Result<JsValue, JsValue> {
    to_js(&Registry::builtin().features)
}

#[wasm_bindgen]
pub fn statistics() -> Result<JsValue, JsValue> {
    to_js(&Registry::builtin().statistics)
}

#[wasm_bindgen(js_name = teamMembers)]
pub fn team_members() -> Result<JsValue, JsValue> {
    to_js(&Registry::builtin().team_members)
}

#[wasm_bindgen(js_name = generateFeatureCards)]
pub fn generate_feature_cards() -> Result<(), JsValue> {
    let mut page = current_page()?;
    let config = PageConfig::default();
    render_features(&mut page, &config.features_mount, &Registry::builtin().features);
    Ok(())
}

#[wasm_bindgen(js_name = generateStatistics)]
pub fn generate_statistics() -> Result<(), JsValue> {
    let mut page = current_page()?;
    let config = PageConfig::default();
    render_statistics(&mut page, &config.stats_mount, &Registry::builtin().statistics);
    Ok(())
}

#[wasm_bindgen(js_name = generateTeamCards)]
pub fn generate_team_cards() -> Result<(), JsValue> {
    let mut page = current_page()?;
    let config = PageConfig::default();
    render_team(&mut page, &config.team_mount, &Registry::builtin().team_members);
    Ok(())
}

#[wasm_bindgen(js_name = hexToRgb)]
pub fn hex_to_rgb_js(hex: &str) -> String {
    hex_to_rgb(hex)
}
