use bevy::math::Vec2;

use crate::grid::{PixelPosition, WorldLayout};

/// Arrow-key state sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Pixel-space velocity (y down) for this frame's input.
///
/// Movement is 4-way: up beats down, left beats right, and a horizontal key
/// cancels any vertical motion.
pub fn velocity_for(input: DirectionalInput, speed: f32) -> Vec2 {
    let mut velocity = Vec2::ZERO;

    if input.up {
        velocity.y = -speed;
    } else if input.down {
        velocity.y = speed;
    }

    if input.left {
        velocity = Vec2::new(-speed, 0.0);
    } else if input.right {
        velocity = Vec2::new(speed, 0.0);
    }

    velocity
}

/// Advance a player box by `velocity` for `dt` seconds, keeping it inside the world.
pub fn advance(
    layout: &WorldLayout,
    top_left: PixelPosition,
    size: Vec2,
    velocity: Vec2,
    dt: f32,
) -> PixelPosition {
    let moved = PixelPosition::new(top_left.x + velocity.x * dt, top_left.y + velocity.y * dt);
    layout.clamp_to_world(moved, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: f32 = 310.0;

    fn input(up: bool, down: bool, left: bool, right: bool) -> DirectionalInput {
        DirectionalInput {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn test_no_input_stops() {
        assert_eq!(velocity_for(DirectionalInput::default(), SPEED), Vec2::ZERO);
    }

    #[test]
    fn test_single_directions() {
        assert_eq!(velocity_for(input(true, false, false, false), SPEED), Vec2::new(0.0, -SPEED));
        assert_eq!(velocity_for(input(false, true, false, false), SPEED), Vec2::new(0.0, SPEED));
        assert_eq!(velocity_for(input(false, false, true, false), SPEED), Vec2::new(-SPEED, 0.0));
        assert_eq!(velocity_for(input(false, false, false, true), SPEED), Vec2::new(SPEED, 0.0));
    }

    #[test]
    fn test_up_beats_down_and_left_beats_right() {
        assert_eq!(velocity_for(input(true, true, false, false), SPEED), Vec2::new(0.0, -SPEED));
        assert_eq!(velocity_for(input(false, false, true, true), SPEED), Vec2::new(-SPEED, 0.0));
    }

    #[test]
    fn test_horizontal_cancels_vertical() {
        assert_eq!(velocity_for(input(true, false, false, true), SPEED), Vec2::new(SPEED, 0.0));
    }

    #[test]
    fn test_advance_clamps_to_world() {
        let layout = WorldLayout::new(100.0);
        let size = Vec2::new(10.0, 10.0);
        let p = advance(&layout, PixelPosition::new(85.0, 5.0), size, Vec2::new(310.0, -310.0), 0.1);
        assert_eq!(p, PixelPosition::new(90.0, 0.0));
    }
}
