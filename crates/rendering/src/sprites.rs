//! Spawning the static town: grass, street blocks and buildings.

use bevy::prelude::*;
use bevy::sprite::{Anchor, SpriteImageMode};

use town::collision::Aabb;
use town::grid::Axis;
use town::lots::{LotKind, LotPlacement};
use town::world_map::WorldMap;

use crate::coords::{pixel_to_world, sprite_anchor, Z_BACKGROUND, Z_BLOCK, Z_BUILDING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Background,
    Player,
    House,
    EmptyLot,
    Business,
    VerticalBlock,
    HorizontalBlock,
}

impl SpriteKind {
    pub fn asset_path(self) -> &'static str {
        match self {
            SpriteKind::Background => "sprites/grass.png",
            SpriteKind::Player => "sprites/player.png",
            SpriteKind::House => "sprites/house.png",
            SpriteKind::EmptyLot => "sprites/empty_lot.png",
            SpriteKind::Business => "sprites/business.png",
            SpriteKind::VerticalBlock => "sprites/ver_block.png",
            SpriteKind::HorizontalBlock => "sprites/hor_block.png",
        }
    }

    pub fn for_lot(kind: LotKind) -> Self {
        match kind {
            LotKind::House => SpriteKind::House,
            LotKind::Empty => SpriteKind::EmptyLot,
            LotKind::Business => SpriteKind::Business,
        }
    }

    pub fn for_block(axis: Axis) -> Self {
        match axis {
            Axis::Vertical => SpriteKind::VerticalBlock,
            Axis::Horizontal => SpriteKind::HorizontalBlock,
        }
    }
}

/// Image handles for every sprite kind, loaded once at startup.
#[derive(Resource)]
pub struct SpriteAssets {
    pub background: Handle<Image>,
    pub player: Handle<Image>,
    pub house: Handle<Image>,
    pub empty_lot: Handle<Image>,
    pub business: Handle<Image>,
    pub vertical_block: Handle<Image>,
    pub horizontal_block: Handle<Image>,
}

impl SpriteAssets {
    pub fn get(&self, kind: SpriteKind) -> Handle<Image> {
        match kind {
            SpriteKind::Background => self.background.clone(),
            SpriteKind::Player => self.player.clone(),
            SpriteKind::House => self.house.clone(),
            SpriteKind::EmptyLot => self.empty_lot.clone(),
            SpriteKind::Business => self.business.clone(),
            SpriteKind::VerticalBlock => self.vertical_block.clone(),
            SpriteKind::HorizontalBlock => self.horizontal_block.clone(),
        }
    }
}

pub fn load_sprite_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SpriteAssets {
        background: asset_server.load(SpriteKind::Background.asset_path()),
        player: asset_server.load(SpriteKind::Player.asset_path()),
        house: asset_server.load(SpriteKind::House.asset_path()),
        empty_lot: asset_server.load(SpriteKind::EmptyLot.asset_path()),
        business: asset_server.load(SpriteKind::Business.asset_path()),
        vertical_block: asset_server.load(SpriteKind::VerticalBlock.asset_path()),
        horizontal_block: asset_server.load(SpriteKind::HorizontalBlock.asset_path()),
    });
}

/// A placed building. The player collides with `bounds`.
#[derive(Component, Debug)]
pub struct Building {
    pub bounds: Aabb,
}

impl Building {
    pub fn from_placement(placement: &LotPlacement) -> Self {
        Self {
            bounds: Aabb::from_top_left(placement.top_left(), Vec2::splat(placement.size)),
        }
    }
}

#[derive(Component)]
pub struct BlockTile;

#[derive(Component)]
pub struct Background;

/// Everything spawned for the current map, despawned together.
#[derive(Component)]
pub struct TownSprite;

/// System: spawn grass, blocks and buildings for the loaded map.
pub fn spawn_town(mut commands: Commands, map: Res<WorldMap>, assets: Res<SpriteAssets>) {
    let layout = map.layout;

    commands.spawn((
        Background,
        TownSprite,
        Sprite {
            image: assets.get(SpriteKind::Background),
            custom_size: Some(Vec2::splat(layout.world_size)),
            image_mode: SpriteImageMode::Tiled {
                tile_x: true,
                tile_y: true,
                stretch_value: 1.0,
            },
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, Z_BACKGROUND)),
    ));

    let tile_size = Vec2::splat(layout.block_tile_size());
    let mut tiles = 0usize;
    for (axis, position) in map.block_tiles() {
        commands.spawn((
            BlockTile,
            TownSprite,
            Sprite {
                image: assets.get(SpriteKind::for_block(axis)),
                custom_size: Some(tile_size),
                anchor: Anchor::TopLeft,
                ..default()
            },
            Transform::from_translation(pixel_to_world(position, Z_BLOCK)),
        ));
        tiles += 1;
    }

    for placement in map.lot_placements() {
        commands.spawn((
            Building::from_placement(&placement),
            TownSprite,
            Sprite {
                image: assets.get(SpriteKind::for_lot(placement.kind)),
                custom_size: Some(Vec2::splat(placement.size)),
                anchor: sprite_anchor(placement.anchor),
                ..default()
            },
            Transform::from_translation(pixel_to_world(placement.position, Z_BUILDING)),
        ));
    }

    info!(
        "Spawned {} buildings and {} block tiles",
        map.lots.len(),
        tiles
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use town::grid::{GridCoordinate, WorldLayout};
    use town::lots::LotRecord;

    #[test]
    fn test_lot_kinds_map_to_sprites() {
        assert_eq!(SpriteKind::for_lot(LotKind::House), SpriteKind::House);
        assert_eq!(SpriteKind::for_lot(LotKind::Empty), SpriteKind::EmptyLot);
        assert_eq!(SpriteKind::for_lot(LotKind::Business), SpriteKind::Business);
        assert_eq!(SpriteKind::for_block(Axis::Vertical), SpriteKind::VerticalBlock);
    }

    #[test]
    fn test_building_bounds_follow_anchor() {
        let layout = WorldLayout::new(1300.0);
        let lot = LotRecord::new(
            &layout,
            GridCoordinate::new(2.25, 1.0),
            LotKind::House,
            None,
            None,
        );
        let placement = lot.placement(&layout);
        let building = Building::from_placement(&placement);

        // 1300 / 26 = 50px sprite, shifted right by 10% of its width.
        let tl = building.bounds.top_left();
        assert!((tl.x - (lot.position.x + 5.0)).abs() < 1e-3);
        assert!((tl.y - lot.position.y).abs() < 1e-3);
        assert!((building.bounds.size().x - 50.0).abs() < 1e-3);
    }
}
