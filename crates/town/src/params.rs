//! Tunable town parameters.
//!
//! Defaults come from [`crate::config`]. The app may override them from a
//! JSON file before the map is loaded; missing fields keep their defaults.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{PLAYER_SPEED, WORLD_SIZE};
use crate::grid::WorldLayout;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TownParams {
    /// Side length of the square world in pixels.
    pub world_size: f32,
    /// Player speed in pixels/second.
    pub player_speed: f32,
}

impl Default for TownParams {
    fn default() -> Self {
        Self {
            world_size: WORLD_SIZE,
            player_speed: PLAYER_SPEED,
        }
    }
}

impl TownParams {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let params: TownParams =
            serde_json::from_str(json).map_err(|e| format!("JSON decode error: {e}"))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return Err(format!("world_size must be positive, got {}", self.world_size));
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(format!(
                "player_speed must be non-negative, got {}",
                self.player_speed
            ));
        }
        Ok(())
    }

    pub fn layout(&self) -> WorldLayout {
        WorldLayout::new(self.world_size)
    }
}
