//! Pixel space (origin top-left, y down) to Bevy world space (y up).
//!
//! The world square spans `x in [0, size]`, `y in [-size, 0]` in Bevy units,
//! so a pixel position maps to `(x, -y)` with no scaling.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use town::grid::{AnchorAdjustment, PixelPosition};

// Draw order, back to front.
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_BLOCK: f32 = 1.0;
pub const Z_BUILDING: f32 = 2.0;
pub const Z_PLAYER: f32 = 3.0;

#[inline]
pub fn pixel_to_world(p: PixelPosition, z: f32) -> Vec3 {
    Vec3::new(p.x, -p.y, z)
}

#[inline]
pub fn world_to_pixel(v: Vec3) -> PixelPosition {
    PixelPosition::new(v.x, -v.y)
}

/// Convert a top-left-relative anchor fraction into a Bevy sprite anchor,
/// which is centre-relative with y up.
pub fn sprite_anchor(anchor: AnchorAdjustment) -> Anchor {
    if anchor.is_default() {
        return Anchor::TopLeft;
    }
    Anchor::Custom(Vec2::new(anchor.x - 0.5, 0.5 - anchor.y))
}
