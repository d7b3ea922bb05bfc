//! # TestTown — headless harness for the town core
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `TownPlugin` so map
//! loading and contact reporting can be driven frame by frame without a
//! window, renderer or keyboard.

use bevy::app::App;
use bevy::ecs::event::Events;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::collision::{CollisionState, CollisionTrigger, LastLotReport, LotReport, PlayerContact};
use crate::grid::PixelPosition;
use crate::map_state::{MapLoadError, MapState, PendingMapDocuments};
use crate::params::TownParams;
use crate::world_map::WorldMap;
use crate::TownPlugin;

pub struct TestTown {
    app: App,
}

impl Default for TestTown {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTown {
    /// An app with no map loaded yet (`MapState::Loading`).
    pub fn new() -> Self {
        Self::with_params(TownParams::default())
    }

    pub fn with_params(params: TownParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(params);
        app.add_plugins(TownPlugin);
        app.update();
        Self { app }
    }

    /// Hand both documents to the loader and run until the state settles.
    pub fn load(mut self, lots_json: &str, blocks_json: &str) -> Self {
        self.app.insert_resource(PendingMapDocuments {
            lots_json: lots_json.to_string(),
            blocks_json: blocks_json.to_string(),
        });
        // One frame to decode, one for the state transition to apply.
        self.tick(2);
        self
    }

    pub fn tick(&mut self, frames: u32) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    /// Report the player touching a building at `position` on every frame
    /// until [`TestTown::release`] is called.
    pub fn touch_at(&mut self, x: f32, y: f32) -> &mut Self {
        self.app
            .insert_resource(PlayerContact(Some(PixelPosition::new(x, y))));
        self
    }

    pub fn release(&mut self) -> &mut Self {
        self.app.insert_resource(PlayerContact(None));
        self
    }

    pub fn state(&self) -> MapState {
        *self.app.world().resource::<State<MapState>>().get()
    }

    pub fn map(&self) -> Option<&WorldMap> {
        self.app.world().get_resource::<WorldMap>()
    }

    pub fn load_error(&self) -> Option<String> {
        self.app.world().resource::<MapLoadError>().0.clone()
    }

    pub fn collision_state(&self) -> CollisionState {
        self.app.world().resource::<CollisionTrigger>().state
    }

    pub fn last_report(&self) -> Option<LotReport> {
        self.app.world().resource::<LastLotReport>().0.clone()
    }

    /// Take every `LotReport` event sent since the last drain.
    pub fn drain_reports(&mut self) -> Vec<LotReport> {
        self.app
            .world_mut()
            .resource_mut::<Events<LotReport>>()
            .drain()
            .collect()
    }
}
