//! The walking player: keyboard polling, motion and building collision.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use town::collision::{collide, Aabb, PlayerContact};
use town::config::{PLAYER_SCALE_X, PLAYER_SCALE_Y, PLAYER_SPRITE_SIZE};
use town::grid::PixelPosition;
use town::params::TownParams;
use town::player::{advance, velocity_for, DirectionalInput};
use town::world_map::WorldMap;

use crate::coords::{pixel_to_world, Z_PLAYER};
use crate::sprites::{Building, SpriteAssets, SpriteKind, TownSprite};

/// The player box in pixel space. `Transform` is derived from this each frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    pub top_left: PixelPosition,
    pub size: Vec2,
}

impl Player {
    pub fn at_origin() -> Self {
        Self {
            top_left: PixelPosition::new(0.0, 0.0),
            size: player_size(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.top_left, self.size)
    }
}

/// Pixel-space velocity (y down).
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Velocity(pub Vec2);

/// This frame's arrow keys.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerInput(pub DirectionalInput);

pub fn player_size() -> Vec2 {
    Vec2::new(
        PLAYER_SPRITE_SIZE * PLAYER_SCALE_X,
        PLAYER_SPRITE_SIZE * PLAYER_SCALE_Y,
    )
}

/// Spawn the player in the top-left corner of the world.
pub fn spawn_player(mut commands: Commands, assets: Res<SpriteAssets>) {
    let player = Player::at_origin();
    commands.spawn((
        player,
        Velocity::default(),
        TownSprite,
        Sprite {
            image: assets.get(SpriteKind::Player),
            custom_size: Some(player.size),
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_translation(pixel_to_world(player.top_left, Z_PLAYER)),
    ));
}

pub fn poll_keyboard(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    input.0 = DirectionalInput {
        up: keys.pressed(KeyCode::ArrowUp),
        down: keys.pressed(KeyCode::ArrowDown),
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
    };
}

pub fn move_player(
    time: Res<Time>,
    input: Res<PlayerInput>,
    params: Res<TownParams>,
    map: Res<WorldMap>,
    mut query: Query<(&mut Player, &mut Velocity)>,
) {
    let dt = time.delta_secs();
    for (mut player, mut velocity) in &mut query {
        velocity.0 = velocity_for(input.0, params.player_speed);
        player.top_left = advance(&map.layout, player.top_left, player.size, velocity.0, dt);
    }
}

/// Push the player out of any building it walked into and publish the
/// contact for the lot report. Runs every frame so a release is seen too.
pub fn collide_with_buildings(
    map: Res<WorldMap>,
    buildings: Query<&Building>,
    mut players: Query<(&mut Player, &mut Transform)>,
    mut contact: ResMut<PlayerContact>,
) {
    let Ok((mut player, mut transform)) = players.get_single_mut() else {
        contact.0 = None;
        return;
    };

    let mut bounds = player.bounds();
    let touched = collide(&mut bounds, buildings.iter().map(|b| b.bounds));
    if touched {
        player.top_left = map.layout.clamp_to_world(bounds.top_left(), player.size);
    }

    contact.0 = touched.then_some(player.top_left);
    transform.translation = pixel_to_world(player.top_left, Z_PLAYER);
}
