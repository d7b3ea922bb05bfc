use bevy::prelude::*;

use crate::blocks::{self, BlockSpec};
use crate::error::LayoutError;
use crate::grid::{Axis, PixelPosition, WorldLayout};
use crate::lots::{self, LotPlacement, LotRecord};
use crate::proximity;

/// Everything decoded from one pair of simulator documents.
///
/// Owned by the ECS world as a resource and passed by reference to layout
/// and lookup code. Replaced wholesale when another map is loaded.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WorldMap {
    pub layout: WorldLayout,
    /// Lots in document order. Lookup tie-breaks depend on this order.
    pub lots: Vec<LotRecord>,
    pub blocks: Vec<BlockSpec>,
}

impl WorldMap {
    pub fn new(layout: WorldLayout, lots: Vec<LotRecord>, blocks: Vec<BlockSpec>) -> Self {
        Self {
            layout,
            lots,
            blocks,
        }
    }

    /// Decode both documents. Either one failing rejects the whole map.
    pub fn load(
        lots_json: &str,
        blocks_json: &str,
        layout: WorldLayout,
    ) -> Result<Self, LayoutError> {
        let lots = lots::parse_lots(lots_json, &layout)?;
        let blocks = blocks::parse_blocks(blocks_json)?;
        Ok(Self::new(layout, lots, blocks))
    }

    /// Index of the lot under the player, sampled at whole-pixel resolution.
    pub fn resolve(&self, player: PixelPosition) -> Result<usize, LayoutError> {
        proximity::nearest_lot_index(&self.lots, player.floor())
    }

    pub fn nearest_lot(&self, player: PixelPosition) -> Result<&LotRecord, LayoutError> {
        let index = self.resolve(player)?;
        Ok(&self.lots[index])
    }

    pub fn lot_placements(&self) -> impl Iterator<Item = LotPlacement> + '_ {
        self.lots.iter().map(|lot| lot.placement(&self.layout))
    }

    /// Tile positions for every block, one tile width apart.
    pub fn block_tiles(&self) -> impl Iterator<Item = (Axis, PixelPosition)> + '_ {
        let step = self.layout.block_tile_size();
        self.blocks.iter().flat_map(move |block| {
            let run = block.tiles(&self.layout, step);
            let axis = run.axis();
            run.map(move |p| (axis, p))
        })
    }
}
