use bevy::prelude::*;

pub mod blocks;
pub mod collision;
pub mod config;
pub mod error;
pub mod grid;
pub mod lots;
pub mod map_state;
pub mod params;
pub mod player;
pub mod proximity;
pub mod world_map;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use collision::{CollisionTrigger, LastLotReport, LotReport, PlayerContact};
use map_state::{MapLoadError, MapState};
use params::TownParams;

/// Ordered per-frame phases.
///
/// Configured as a chain: `Input` → `Motion` → `Collision` → `Report`.
/// The renderer polls keys in `Input`, moves the player in `Motion` and
/// writes [`PlayerContact`] in `Collision`; the town resolves and reports
/// the touched lot in `Report`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TownSet {
    Input,
    Motion,
    Collision,
    Report,
}

pub struct TownPlugin;

impl Plugin for TownPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MapState>()
            .init_resource::<TownParams>()
            .init_resource::<MapLoadError>()
            .init_resource::<PlayerContact>()
            .init_resource::<CollisionTrigger>()
            .init_resource::<LastLotReport>()
            .add_event::<LotReport>()
            .configure_sets(
                Update,
                (
                    TownSet::Input,
                    TownSet::Motion,
                    TownSet::Collision,
                    TownSet::Report,
                )
                    .chain()
                    .run_if(in_state(MapState::Ready)),
            )
            .add_systems(
                Update,
                map_state::install_pending_map.run_if(in_state(MapState::Loading)),
            )
            .add_systems(
                Update,
                collision::report_lot_contacts.in_set(TownSet::Report),
            );
    }
}
