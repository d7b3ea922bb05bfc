use bevy::prelude::*;

use town::map_state::MapState;
use town::TownSet;

pub mod camera;
pub mod coords;
pub mod player;
pub mod sprites;

use player::PlayerInput;
use sprites::TownSprite;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .insert_resource(ClearColor(Color::srgb(0.18, 0.32, 0.16)))
            .add_systems(
                Startup,
                (camera::setup_camera, sprites::load_sprite_assets),
            )
            .add_systems(
                OnEnter(MapState::Ready),
                (sprites::spawn_town, player::spawn_player).chain(),
            )
            .add_systems(OnExit(MapState::Ready), despawn_town)
            .add_systems(Update, player::poll_keyboard.in_set(TownSet::Input))
            .add_systems(Update, player::move_player.in_set(TownSet::Motion))
            .add_systems(
                Update,
                player::collide_with_buildings.in_set(TownSet::Collision),
            )
            .add_systems(
                Update,
                camera::follow_player
                    .after(TownSet::Report)
                    .run_if(in_state(MapState::Ready)),
            );
    }
}

fn despawn_town(mut commands: Commands, query: Query<Entity, With<TownSprite>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
