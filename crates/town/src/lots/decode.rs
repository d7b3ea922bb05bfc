use serde::Deserialize;
use serde_json::{Map, Value};

use super::{LotKind, LotRecord};
use crate::error::LayoutError;
use crate::grid::{GridCoordinate, WorldLayout};

/// Characters the simulator wraps around a `"x, y"` pair.
const KEY_WRAPPERS: &[char] = &['(', ')', '[', ']', '"', '\'', ' '];

/// `[kind, primary, secondary]`. Labels may come through as JSON `null`.
#[derive(Deserialize)]
struct RawLotValue(String, Option<String>, Option<String>);

/// Decode a lots document. Entries keep the order they appear in the JSON
/// object. Any malformed entry rejects the whole document.
pub fn parse_lots(json: &str, layout: &WorldLayout) -> Result<Vec<LotRecord>, LayoutError> {
    let map: Map<String, Value> = serde_json::from_str(json)?;
    decode_lots(&map, layout)
}

pub fn decode_lots(
    map: &Map<String, Value>,
    layout: &WorldLayout,
) -> Result<Vec<LotRecord>, LayoutError> {
    let mut records = Vec::with_capacity(map.len());
    for (key, value) in map {
        let grid = decode_coordinate_key(key)?;
        let RawLotValue(kind, primary, secondary) = RawLotValue::deserialize(value).map_err(
            |e| LayoutError::MalformedLotValue {
                key: key.clone(),
                reason: e.to_string(),
            },
        )?;
        records.push(LotRecord::new(
            layout,
            grid,
            LotKind::from_token(&kind),
            primary,
            secondary,
        ));
    }
    Ok(records)
}

/// Decode `"(x, y)"`, with or without surrounding quotes, into a grid coordinate.
pub fn decode_coordinate_key(key: &str) -> Result<GridCoordinate, LayoutError> {
    let malformed = || LayoutError::MalformedCoordinateKey(key.to_string());

    let inner = key.trim_matches(KEY_WRAPPERS);
    let mut tokens = inner.split(',').map(str::trim);
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let x: f32 = x.parse().map_err(|_| malformed())?;
    let y: f32 = y.parse().map_err(|_| malformed())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(malformed());
    }
    Ok(GridCoordinate::new(x, y))
}
