use bevy::prelude::*;

use town::grid::PixelPosition;
use town::world_map::WorldMap;

use crate::coords::pixel_to_world;
use crate::player::Player;

/// Camera z, above every sprite layer.
const CAMERA_Z: f32 = 100.0;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep the viewport centre on `target` without showing anything outside
/// the world. A viewport larger than the world is centred on it instead.
pub fn clamp_camera_center(target: PixelPosition, half_view: Vec2, world_size: f32) -> PixelPosition {
    fn clamp_axis(value: f32, half: f32, size: f32) -> f32 {
        if half * 2.0 >= size {
            size * 0.5
        } else {
            value.clamp(half, size - half)
        }
    }
    PixelPosition::new(
        clamp_axis(target.x, half_view.x, world_size),
        clamp_axis(target.y, half_view.y, world_size),
    )
}

/// System: follow the player, clamped to the world square.
pub fn follow_player(
    windows: Query<&Window>,
    map: Res<WorldMap>,
    players: Query<&Player>,
    mut cameras: Query<(&mut Transform, &OrthographicProjection), With<Camera2d>>,
) {
    let Ok(player) = players.get_single() else {
        return;
    };
    let Ok((mut transform, projection)) = cameras.get_single_mut() else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };

    let half_view = Vec2::new(window.width(), window.height()) * 0.5 * projection.scale;
    let target = player.bounds();
    let center = clamp_camera_center(
        PixelPosition::new(target.center_x, target.center_y),
        half_view,
        map.layout.world_size,
    );
    transform.translation = pixel_to_world(center, CAMERA_Z);
}
