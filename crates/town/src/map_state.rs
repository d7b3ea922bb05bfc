//! Map loading lifecycle.
//!
//! Whoever fetches the simulator documents (filesystem on desktop, `fetch`
//! in the browser) drops them into [`PendingMapDocuments`]. The next frame
//! decodes them into a [`WorldMap`] and moves [`MapState`] to `Ready`, or to
//! `Failed` with the reason kept in [`MapLoadError`].

use bevy::prelude::*;

use crate::params::TownParams;
use crate::world_map::WorldMap;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapState {
    /// Waiting for the lots and blocks documents.
    #[default]
    Loading,
    /// A `WorldMap` resource is present.
    Ready,
    /// The documents could not be fetched or decoded.
    Failed,
}

/// Raw documents waiting to be decoded.
#[derive(Resource, Debug, Clone)]
pub struct PendingMapDocuments {
    pub lots_json: String,
    pub blocks_json: String,
}

/// Why the last load failed.
#[derive(Resource, Debug, Default, Clone)]
pub struct MapLoadError(pub Option<String>);

impl MapLoadError {
    pub fn set(&mut self, message: impl Into<String>) {
        self.0 = Some(message.into());
    }
}

/// System: decode pending documents into the world map.
pub fn install_pending_map(
    mut commands: Commands,
    pending: Option<Res<PendingMapDocuments>>,
    params: Res<TownParams>,
    mut load_error: ResMut<MapLoadError>,
    mut next_state: ResMut<NextState<MapState>>,
) {
    let Some(pending) = pending else {
        return;
    };
    commands.remove_resource::<PendingMapDocuments>();

    match WorldMap::load(&pending.lots_json, &pending.blocks_json, params.layout()) {
        Ok(map) => {
            info!(
                "Map loaded: {} lots, {} blocks, world {}px",
                map.lots.len(),
                map.blocks.len(),
                map.layout.world_size
            );
            if map.lots.is_empty() {
                warn!("Map has no lots; building contacts will not resolve");
            }
            load_error.0 = None;
            commands.insert_resource(map);
            next_state.set(MapState::Ready);
        }
        Err(e) => {
            error!("Rejected map: {e}");
            load_error.set(e.to_string());
            next_state.set(MapState::Failed);
        }
    }
}

/// Called by loaders that never got as far as decoding (missing file, HTTP error).
pub fn fail_map_load(
    load_error: &mut MapLoadError,
    next_state: &mut NextState<MapState>,
    message: impl Into<String>,
) {
    let message = message.into();
    error!("Map load failed: {message}");
    load_error.set(message);
    next_state.set(MapState::Failed);
}
