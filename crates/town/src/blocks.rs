//! Street blocks: straight runs of road tiles between two grid endpoints.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::grid::{Axis, GridCoordinate, PixelPosition, WorldLayout};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub start: GridCoordinate,
    pub end: GridCoordinate,
    pub axis: Axis,
}

impl BlockSpec {
    /// Build a block from two endpoints. Endpoints that share neither
    /// coordinate describe a diagonal and are rejected. The endpoints are
    /// reordered so `start` is never past `end` along the axis.
    pub fn from_endpoints(
        raw: &str,
        start: GridCoordinate,
        end: GridCoordinate,
    ) -> Result<Self, LayoutError> {
        let axis = if start.x == end.x {
            Axis::Vertical
        } else if start.y == end.y {
            Axis::Horizontal
        } else {
            return Err(LayoutError::DegenerateBlock {
                raw: raw.to_string(),
                start,
                end,
            });
        };

        let reversed = match axis {
            Axis::Vertical => start.y > end.y,
            Axis::Horizontal => start.x > end.x,
        };
        let (start, end) = if reversed { (end, start) } else { (start, end) };
        Ok(Self { start, end, axis })
    }

    /// Last pixel coordinate a tile may start at along the axis: the cell
    /// before the far endpoint.
    pub fn run_limit(&self, layout: &WorldLayout) -> f32 {
        let end = match self.axis {
            Axis::Horizontal => self.end.x,
            Axis::Vertical => self.end.y,
        };
        layout.grid_to_pixel_axis(end - 1.0)
    }

    /// Tile positions one pixel apart, from the start endpoint to the run limit.
    pub fn run(&self, layout: &WorldLayout) -> BlockRun {
        BlockRun::new(self, layout, 1.0, false)
    }

    /// Tile positions `step` pixels apart. The last tile is pulled back onto
    /// the run limit so the run covers the same extent as [`BlockSpec::run`].
    pub fn tiles(&self, layout: &WorldLayout, step: f32) -> BlockRun {
        BlockRun::new(self, layout, step.max(1.0), true)
    }
}

/// One-pass iterator over tile placements for a block.
#[derive(Debug, Clone)]
pub struct BlockRun {
    axis: Axis,
    origin: PixelPosition,
    limit: f32,
    step: f32,
    snap_to_limit: bool,
    emitted: u32,
    done: bool,
}

impl BlockRun {
    fn new(spec: &BlockSpec, layout: &WorldLayout, step: f32, snap_to_limit: bool) -> Self {
        Self {
            axis: spec.axis,
            origin: layout.grid_to_pixel(spec.start),
            limit: spec.run_limit(layout),
            step,
            snap_to_limit,
            emitted: 0,
            done: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    fn offset(&self, index: u32) -> f32 {
        self.axis.component(self.origin) + index as f32 * self.step
    }
}

impl Iterator for BlockRun {
    type Item = PixelPosition;

    fn next(&mut self) -> Option<PixelPosition> {
        if self.done {
            return None;
        }
        // The start tile is always placed, even for zero-length blocks.
        if self.emitted == 0 {
            self.emitted = 1;
            return Some(self.origin);
        }

        let next = self.offset(self.emitted);
        if next <= self.limit {
            self.emitted += 1;
            return Some(self.axis.with_component(self.origin, next));
        }

        self.done = true;
        let current = self.offset(self.emitted - 1);
        if self.snap_to_limit && current < self.limit {
            return Some(self.axis.with_component(self.origin, self.limit));
        }
        None
    }
}

/// Decode one `"(startX, startY), (endX, endY)"` string.
pub fn parse_block(raw: &str) -> Result<BlockSpec, LayoutError> {
    let malformed = || LayoutError::MalformedBlock(raw.to_string());

    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '"' | '\''))
        .collect();
    let numbers = cleaned
        .split(',')
        .map(|token| token.trim().parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .map_err(|_| malformed())?;

    let &[sx, sy, ex, ey] = numbers.as_slice() else {
        return Err(malformed());
    };
    if numbers.iter().any(|n| !n.is_finite()) {
        return Err(malformed());
    }

    BlockSpec::from_endpoints(raw, GridCoordinate::new(sx, sy), GridCoordinate::new(ex, ey))
}

/// Decode a blocks document: a JSON array of block strings. Any malformed or
/// diagonal block rejects the whole document.
pub fn parse_blocks(json: &str) -> Result<Vec<BlockSpec>, LayoutError> {
    let raw: Vec<String> = serde_json::from_str(json)?;
    decode_blocks(&raw)
}

pub fn decode_blocks<S: AsRef<str>>(raw: &[S]) -> Result<Vec<BlockSpec>, LayoutError> {
    raw.iter().map(|s| parse_block(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> WorldLayout {
        WorldLayout::new(1200.0)
    }

    #[test]
    fn test_vertical_block() {
        let block = parse_block("(1, 1), (1, 5)").unwrap();
        assert_eq!(block.axis, Axis::Vertical);
        assert_eq!(block.start, GridCoordinate::new(1.0, 1.0));
        assert_eq!(block.end, GridCoordinate::new(1.0, 5.0));
    }

    #[test]
    fn test_horizontal_block() {
        let block = parse_block("(1, 1), (5, 1)").unwrap();
        assert_eq!(block.axis, Axis::Horizontal);
    }

    #[test]
    fn test_diagonal_block_is_degenerate() {
        let err = parse_block("(1,1),(5,5)").unwrap_err();
        assert!(matches!(err, LayoutError::DegenerateBlock { .. }), "got {err:?}");
    }

    #[test]
    fn test_wrong_token_count_is_malformed() {
        for raw in ["(1, 1), (5)", "(1, 1), (5, 1), (2, 2)", "(a, 1), (1, 5)", ""] {
            let err = parse_block(raw).unwrap_err();
            assert!(matches!(err, LayoutError::MalformedBlock(_)), "{raw:?} gave {err:?}");
        }
    }

    #[test]
    fn test_reversed_endpoints_are_normalized() {
        let block = parse_block("(2, 6), (2, 3)").unwrap();
        assert_eq!(block.axis, Axis::Vertical);
        assert_eq!(block.start.y, 3.0);
        assert_eq!(block.end.y, 6.0);
    }

    #[test]
    fn test_parse_blocks_document() {
        let json = r#"["(1, 1), (1, 5)", "(1, 1), (5, 1)"]"#;
        let blocks = parse_blocks(json).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].axis, Axis::Vertical);
        assert_eq!(blocks[1].axis, Axis::Horizontal);

        let bad = r#"["(1, 1), (1, 5)", "(1, 1), (5, 5)"]"#;
        assert!(parse_blocks(bad).is_err());
    }

    #[test]
    fn test_vertical_run_is_monotonic_and_reaches_limit() {
        let layout = layout();
        let block = parse_block("(1, 1), (1, 5)").unwrap();
        let run: Vec<PixelPosition> = block.run(&layout).collect();

        let start = layout.grid_to_pixel(GridCoordinate::new(1.0, 1.0));
        let limit = layout.grid_to_pixel(GridCoordinate::new(1.0, 4.0)).y;
        assert_eq!(run[0], start);
        assert!(run.windows(2).all(|w| w[1].y > w[0].y));
        assert!(run.iter().all(|p| p.x == start.x));

        let last = run.last().unwrap().y;
        assert!(last <= limit && last > limit - 1.01, "last {last}, limit {limit}");
        // One tile per pixel between the endpoints, plus the start tile.
        let expected = limit - start.y + 1.0;
        assert!((run.len() as f32 - expected).abs() <= 1.0, "len {}", run.len());
    }

    #[test]
    fn test_horizontal_run_moves_along_x() {
        let layout = layout();
        let block = parse_block("(2, 3), (4, 3)").unwrap();
        let run: Vec<PixelPosition> = block.run(&layout).collect();
        let y = layout.grid_to_pixel_axis(3.0);
        assert!(run.iter().all(|p| p.y == y));
        assert!(run.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn test_zero_length_block_places_start_tile() {
        let layout = layout();
        let block = parse_block("(3, 3), (3, 3)").unwrap();
        assert_eq!(block.run(&layout).count(), 1);
    }

    #[test]
    fn test_tile_step_covers_same_extent() {
        let layout = layout();
        let block = parse_block("(1, 2), (6, 2)").unwrap();
        let fine_last = block.run(&layout).last().unwrap();
        let step = layout.block_tile_size();
        let coarse: Vec<PixelPosition> = block.tiles(&layout, step).collect();

        let limit = block.run_limit(&layout);
        let coarse_last = coarse.last().unwrap();
        assert!((coarse_last.x - limit).abs() < 1e-3);
        assert!(coarse_last.x >= fine_last.x);
        assert!(coarse.len() < 20);
        assert!(coarse.windows(2).all(|w| w[1].x - w[0].x <= step + 1e-3));
    }

    #[test]
    fn test_run_carries_block_axis() {
        let layout = layout();
        let vertical = parse_block("(2, 1), (2, 4)").unwrap();
        let horizontal = parse_block("(1, 2), (4, 2)").unwrap();
        assert_eq!(vertical.run(&layout).axis(), Axis::Vertical);
        assert_eq!(horizontal.tiles(&layout, 10.0).axis(), Axis::Horizontal);
    }

    #[test]
    fn test_run_is_single_pass() {
        let layout = layout();
        let block = parse_block("(1, 1), (1, 2)").unwrap();
        let mut run = block.run(&layout);
        let n = run.by_ref().count();
        assert!(n >= 1);
        assert_eq!(run.next(), None);
    }
}
