//! Lots: one grid cell's building designation plus its descriptive labels.
//!
//! The simulator dumps lots as a JSON object keyed by `"(x, y)"` with a
//! `[kind, primary, secondary]` triple per entry. [`parse_lots`] turns that
//! into an ordered list of [`LotRecord`]s; each record knows its pixel
//! position and the [`LotPlacement`] the renderer should spawn for it.

mod decode;

#[cfg(test)]
mod tests;

pub use decode::{decode_coordinate_key, decode_lots, parse_lots};

use serde::{Deserialize, Serialize};

use crate::config::{EMPTY_LOT_TOKEN, HOUSE_TOKEN, NONE_LABEL};
use crate::error::LayoutError;
use crate::grid::{AnchorAdjustment, GridCoordinate, PixelPosition, WorldLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotKind {
    House,
    Empty,
    Business,
}

impl LotKind {
    /// Strict classification of a simulator kind token.
    ///
    /// Any non-blank token other than the house and empty-lot tokens names a
    /// business. Blank tokens are rejected; callers fall back to `Business`.
    pub fn classify(token: &str) -> Result<Self, LayoutError> {
        let token = token.trim();
        if token == HOUSE_TOKEN {
            Ok(LotKind::House)
        } else if token == EMPTY_LOT_TOKEN {
            Ok(LotKind::Empty)
        } else if token.is_empty() {
            Err(LayoutError::UnknownBuildingKind(token.to_string()))
        } else {
            Ok(LotKind::Business)
        }
    }

    pub fn from_token(token: &str) -> Self {
        match Self::classify(token) {
            Ok(kind) => kind,
            Err(e) => {
                bevy::log::warn!("{e}, treating lot as a business");
                LotKind::Business
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LotKind::House => "House",
            LotKind::Empty => "Empty lot",
            LotKind::Business => "Business",
        }
    }
}

/// A decoded lot. Immutable once the map is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotRecord {
    pub grid: GridCoordinate,
    pub position: PixelPosition,
    pub kind: LotKind,
    pub anchor: AnchorAdjustment,
    pub primary_label: Option<String>,
    pub secondary_label: Option<String>,
}

impl LotRecord {
    pub fn new(
        layout: &WorldLayout,
        grid: GridCoordinate,
        kind: LotKind,
        primary_label: Option<String>,
        secondary_label: Option<String>,
    ) -> Self {
        Self {
            grid,
            position: layout.grid_to_pixel(grid),
            kind,
            anchor: AnchorAdjustment::for_coordinate(grid),
            primary_label,
            secondary_label,
        }
    }

    /// The label reported when the player bumps into this lot: the primary
    /// label unless it is the "None" sentinel, in which case the secondary.
    pub fn designation(&self) -> Option<&str> {
        match self.primary_label.as_deref() {
            Some(primary) if primary != NONE_LABEL => Some(primary),
            _ => self.secondary_label.as_deref(),
        }
    }

    pub fn placement(&self, layout: &WorldLayout) -> LotPlacement {
        LotPlacement {
            kind: self.kind,
            position: self.position,
            anchor: self.anchor,
            size: layout.building_size(),
        }
    }
}

/// What the renderer needs to spawn one building sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotPlacement {
    pub kind: LotKind,
    pub position: PixelPosition,
    pub anchor: AnchorAdjustment,
    /// Rendered edge length in pixels.
    pub size: f32,
}

impl LotPlacement {
    /// Top-left corner of the rendered sprite once the anchor is applied.
    pub fn top_left(&self) -> PixelPosition {
        PixelPosition::new(
            self.position.x - self.anchor.x * self.size,
            self.position.y - self.anchor.y * self.size,
        )
    }
}
