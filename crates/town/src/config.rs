/// Side length of the square world, in pixels.
pub const WORLD_SIZE: f32 = 1200.0;
/// The simulator grid is 8 cells wide, but one cell unit is 1/9 of the world so
/// the last column is not cut off. The leftover space is absorbed by `center`.
pub const GRID_DIVISIONS: f32 = 9.0;
pub const CENTER_DIVISOR: f32 = 26.0;

/// Buildings render at `world_size / 26`, blocks at `world_size / 33`.
pub const BUILDING_SIZE_DIVISOR: f32 = 26.0;
pub const BLOCK_SIZE_DIVISOR: f32 = 33.0;

/// Player movement speed in pixels per second.
pub const PLAYER_SPEED: f32 = 310.0;
/// Unscaled player sprite edge length.
pub const PLAYER_SPRITE_SIZE: f32 = 32.0;
pub const PLAYER_SCALE_X: f32 = 0.8;
pub const PLAYER_SCALE_Y: f32 = 0.7;

/// Lot kind token the simulator emits for a house.
pub const HOUSE_TOKEN: &str = "House";
/// Lot kind token the simulator emits when no building is present.
pub const EMPTY_LOT_TOKEN: &str = "NoneType";
/// Label value meaning "no primary designation".
pub const NONE_LABEL: &str = "None";

/// Sub-cell anchor offsets (fraction of sprite size) for quarter positions.
pub const QUARTER_ANCHOR: f32 = -0.1;
pub const THREE_QUARTER_ANCHOR: f32 = 0.3;
