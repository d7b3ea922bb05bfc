//! Which lot is the player standing on?
//!
//! Not a Euclidean nearest neighbour: the town is a grid, so X and Y are
//! resolved separately. First every lot on the nearest column is collected,
//! then the nearest row among them wins. On an exact Y tie the lot that comes
//! later in map order wins.

use crate::error::LayoutError;
use crate::grid::PixelPosition;
use crate::lots::LotRecord;

/// Indices of every lot sharing the X coordinate nearest to `x`.
///
/// When two distinct columns are equally near, the one encountered first is
/// kept.
pub fn nearest_x_indices(records: &[LotRecord], x: f32) -> Vec<usize> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let mut nearest = first.position.x;
    for record in &records[1..] {
        if (x - record.position.x).abs() < (x - nearest).abs() {
            nearest = record.position.x;
        }
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.position.x == nearest)
        .map(|(i, _)| i)
        .collect()
}

/// Among `candidates`, the index whose Y is nearest to `y`. Uses `<=`, so
/// the last candidate wins an exact tie.
pub fn nearest_among_y(records: &[LotRecord], candidates: &[usize], y: f32) -> Option<usize> {
    let (&first, rest) = candidates.split_first()?;
    let mut best = first;
    for &i in rest {
        if (y - records[i].position.y).abs() <= (y - records[best].position.y).abs() {
            best = i;
        }
    }
    Some(best)
}

/// Index of the lot under `position`.
pub fn nearest_lot_index(
    records: &[LotRecord],
    position: PixelPosition,
) -> Result<usize, LayoutError> {
    let candidates = nearest_x_indices(records, position.x);
    nearest_among_y(records, &candidates, position.y).ok_or(LayoutError::EmptyLotSet)
}

pub fn nearest_lot(
    records: &[LotRecord],
    position: PixelPosition,
) -> Result<&LotRecord, LayoutError> {
    let index = nearest_lot_index(records, position)?;
    Ok(&records[index])
}
