//! Desktop map loading from the asset folder.
//!
//! Usage:
//! `TOWNWALK_LOTS=/tmp/lots.json TOWNWALK_BLOCKS=/tmp/blocks.json cargo run -p townwalk`

#![cfg(not(target_arch = "wasm32"))]

use std::path::{Path, PathBuf};

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;

use town::map_state::{fail_map_load, MapLoadError, MapState, PendingMapDocuments};
use town::params::TownParams;

pub const LOTS_ENV: &str = "TOWNWALK_LOTS";
pub const BLOCKS_ENV: &str = "TOWNWALK_BLOCKS";

const LOTS_FILE: &str = "town/lots.json";
const BLOCKS_FILE: &str = "town/blocks.json";
const PARAMS_FILE: &str = "town/params.json";

/// Where the two simulator documents are read from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MapPaths {
    pub lots: PathBuf,
    pub blocks: PathBuf,
}

impl MapPaths {
    /// Bundled documents under `asset_root`, unless overridden.
    pub fn resolve(asset_root: &Path, lots: Option<String>, blocks: Option<String>) -> Self {
        Self {
            lots: lots
                .map(PathBuf::from)
                .unwrap_or_else(|| asset_root.join(LOTS_FILE)),
            blocks: blocks
                .map(PathBuf::from)
                .unwrap_or_else(|| asset_root.join(BLOCKS_FILE)),
        }
    }

    pub fn from_env() -> Self {
        Self::resolve(
            &asset_root(),
            std::env::var(LOTS_ENV).ok(),
            std::env::var(BLOCKS_ENV).ok(),
        )
    }

    pub fn read(&self) -> Result<PendingMapDocuments, String> {
        Ok(PendingMapDocuments {
            lots_json: read_document(&self.lots)?,
            blocks_json: read_document(&self.blocks)?,
        })
    }
}

fn read_document(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

/// Same folder Bevy's `AssetPlugin` serves from by default.
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join("assets")
}

/// Optional overrides from `assets/town/params.json`. A missing file means
/// defaults; an invalid one is logged and ignored.
pub fn load_params(asset_root: &Path) -> TownParams {
    let path = asset_root.join(PARAMS_FILE);
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return TownParams::default();
    };
    match TownParams::from_json(&contents) {
        Ok(params) => {
            info!("Loaded town params from {}", path.display());
            params
        }
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            TownParams::default()
        }
    }
}

/// Startup system: read both documents and hand them to the town loader.
pub fn load_map_from_disk(
    mut commands: Commands,
    paths: Res<MapPaths>,
    mut load_error: ResMut<MapLoadError>,
    mut next_state: ResMut<NextState<MapState>>,
) {
    match paths.read() {
        Ok(documents) => {
            info!(
                "Reading map from {} and {}",
                paths.lots.display(),
                paths.blocks.display()
            );
            commands.insert_resource(documents);
        }
        Err(e) => fail_map_load(&mut load_error, &mut next_state, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_live_under_asset_root() {
        let paths = MapPaths::resolve(Path::new("/srv/assets"), None, None);
        assert_eq!(paths.lots, PathBuf::from("/srv/assets/town/lots.json"));
        assert_eq!(paths.blocks, PathBuf::from("/srv/assets/town/blocks.json"));
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let paths = MapPaths::resolve(
            Path::new("/srv/assets"),
            Some("/tmp/l.json".into()),
            None,
        );
        assert_eq!(paths.lots, PathBuf::from("/tmp/l.json"));
        assert_eq!(paths.blocks, PathBuf::from("/srv/assets/town/blocks.json"));
    }

    #[test]
    fn test_missing_file_is_reported_with_path() {
        let paths = MapPaths::resolve(Path::new("/definitely/not/here"), None, None);
        let err = paths.read().unwrap_err();
        assert!(err.contains("/definitely/not/here/town/lots.json"), "got: {err}");
    }

    #[test]
    fn test_missing_params_file_uses_defaults() {
        assert_eq!(load_params(Path::new("/definitely/not/here")), TownParams::default());
    }

    #[test]
    fn test_bundled_documents_decode() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let docs = MapPaths::resolve(&root, None, None).read().unwrap();
        let map = town::world_map::WorldMap::load(
            &docs.lots_json,
            &docs.blocks_json,
            load_params(&root).layout(),
        )
        .unwrap();
        assert!(!map.lots.is_empty());
        assert!(!map.blocks.is_empty());
    }
}
