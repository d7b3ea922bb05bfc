use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{
    BLOCK_SIZE_DIVISOR, BUILDING_SIZE_DIVISOR, CENTER_DIVISOR, GRID_DIVISIONS,
    QUARTER_ANCHOR, THREE_QUARTER_ANCHOR, WORLD_SIZE,
};

/// Position in simulator grid units. Grid indices are 1-based and may sit on
/// a quarter cell (`.25` / `.75`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub x: f32,
    pub y: f32,
}

impl GridCoordinate {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position in world pixel space. Origin is the top-left corner of the world,
/// `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPosition {
    pub x: f32,
    pub y: f32,
}

impl PixelPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Snap to whole pixels, the resolution the game loop samples the player at.
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }
}

impl From<PixelPosition> for Vec2 {
    fn from(p: PixelPosition) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for PixelPosition {
    fn from(v: Vec2) -> Self {
        PixelPosition::new(v.x, v.y)
    }
}

/// Rendering anchor of a sprite as a fraction of its size, measured from the
/// top-left corner. `(0, 0)` is the default top-left anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorAdjustment {
    pub x: f32,
    pub y: f32,
}

impl AnchorAdjustment {
    /// Anchor for a sprite placed at `coord`. Quarter positions shift outward
    /// and three-quarter positions shift inward so adjacent half-cell
    /// buildings nest instead of overlapping.
    pub fn for_coordinate(coord: GridCoordinate) -> Self {
        Self {
            x: sub_cell_anchor(coord.x),
            y: sub_cell_anchor(coord.y),
        }
    }

    pub fn is_default(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

fn sub_cell_anchor(value: f32) -> f32 {
    let fraction = value.rem_euclid(1.0);
    if fraction == 0.25 {
        QUARTER_ANCHOR
    } else if fraction == 0.75 {
        THREE_QUARTER_ANCHOR
    } else {
        0.0
    }
}

/// Which axis a straight run follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn component(self, p: PixelPosition) -> f32 {
        match self {
            Axis::Horizontal => p.x,
            Axis::Vertical => p.y,
        }
    }

    pub fn with_component(self, p: PixelPosition, value: f32) -> PixelPosition {
        match self {
            Axis::Horizontal => PixelPosition::new(value, p.y),
            Axis::Vertical => PixelPosition::new(p.x, value),
        }
    }
}

/// Affine mapping between simulator grid units and world pixels for a square
/// world of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldLayout {
    pub world_size: f32,
}

impl Default for WorldLayout {
    fn default() -> Self {
        Self::new(WORLD_SIZE)
    }
}

impl WorldLayout {
    pub const fn new(world_size: f32) -> Self {
        Self { world_size }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.world_size / GRID_DIVISIONS
    }

    /// Margin that centers the town inside the world.
    #[inline]
    pub fn center(&self) -> f32 {
        self.world_size / CENTER_DIVISOR
    }

    #[inline]
    pub fn grid_to_pixel_axis(&self, grid: f32) -> f32 {
        (grid - 1.0) * self.cell_size() + self.center()
    }

    #[inline]
    pub fn pixel_to_grid_axis(&self, pixel: f32) -> f32 {
        (pixel - self.center()) / self.cell_size() + 1.0
    }

    pub fn grid_to_pixel(&self, coord: GridCoordinate) -> PixelPosition {
        PixelPosition::new(
            self.grid_to_pixel_axis(coord.x),
            self.grid_to_pixel_axis(coord.y),
        )
    }

    pub fn pixel_to_grid(&self, pixel: PixelPosition) -> GridCoordinate {
        GridCoordinate::new(
            self.pixel_to_grid_axis(pixel.x),
            self.pixel_to_grid_axis(pixel.y),
        )
    }

    /// Edge length of a rendered building sprite.
    pub fn building_size(&self) -> f32 {
        self.world_size / BUILDING_SIZE_DIVISOR
    }

    /// Edge length of a rendered block tile.
    pub fn block_tile_size(&self) -> f32 {
        self.world_size / BLOCK_SIZE_DIVISOR
    }

    /// Clamp a box of `size` with its top-left corner at `p` inside the world.
    pub fn clamp_to_world(&self, p: PixelPosition, size: Vec2) -> PixelPosition {
        PixelPosition::new(
            p.x.clamp(0.0, (self.world_size - size.x).max(0.0)),
            p.y.clamp(0.0, (self.world_size - size.y).max(0.0)),
        )
    }
}
