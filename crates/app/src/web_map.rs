//! WASM map loading from URL query parameters.
//!
//! Usage:
//! `index.html?lots=maps/lots.json&blocks=maps/blocks.json`
//!
//! Either parameter falls back to the bundled asset document.

#![cfg(target_arch = "wasm32")]

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use town::map_state::{fail_map_load, MapLoadError, MapState, PendingMapDocuments};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const DEFAULT_LOTS_URL: &str = "assets/town/lots.json";
const DEFAULT_BLOCKS_URL: &str = "assets/town/blocks.json";

/// URLs of the two simulator documents.
#[derive(Resource, Debug, Clone)]
pub struct WebMapSources {
    pub lots: String,
    pub blocks: String,
}

impl WebMapSources {
    pub fn from_query() -> Self {
        Self {
            lots: query_param("lots").unwrap_or_else(|| DEFAULT_LOTS_URL.to_string()),
            blocks: query_param("blocks").unwrap_or_else(|| DEFAULT_BLOCKS_URL.to_string()),
        }
    }
}

/// Shared slot used to bridge async fetch -> ECS world.
#[derive(Resource, Default, Clone)]
pub struct WebMapLoadBuffer(pub Arc<Mutex<Option<Result<PendingMapDocuments, String>>>>);

fn query_param(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let value = params.get(name)?;
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Startup system: fetch both documents.
pub fn begin_web_map_load(sources: Res<WebMapSources>, buffer: Res<WebMapLoadBuffer>) {
    let sources = sources.clone();
    let slot = buffer.0.clone();

    info!("Fetching map from {} and {}", sources.lots, sources.blocks);
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_documents(&sources).await;
        if let Ok(mut guard) = slot.lock() {
            *guard = Some(result);
        }
    });
}

/// Move a finished fetch into the town loader.
pub fn poll_web_map_load(
    buffer: Res<WebMapLoadBuffer>,
    mut commands: Commands,
    mut load_error: ResMut<MapLoadError>,
    mut next_state: ResMut<NextState<MapState>>,
) {
    let Ok(mut slot) = buffer.0.lock() else {
        return;
    };
    let Some(result) = slot.take() else {
        return;
    };

    match result {
        Ok(documents) => commands.insert_resource(documents),
        Err(e) => fail_map_load(&mut load_error, &mut next_state, e),
    }
}

async fn fetch_documents(sources: &WebMapSources) -> Result<PendingMapDocuments, String> {
    Ok(PendingMapDocuments {
        lots_json: fetch_text(&sources.lots).await?,
        blocks_json: fetch_text(&sources.blocks).await?,
    })
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch failed: {:?}", e))?;

    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| "failed to cast fetch response".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {} while fetching {}", response.status(), url));
    }

    let text_promise = response
        .text()
        .map_err(|e| format!("response.text() failed: {:?}", e))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| format!("await response text failed: {:?}", e))?;
    text_value
        .as_string()
        .ok_or_else(|| "response text was not a string".to_string())
}
