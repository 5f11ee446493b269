use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use util::Rect;

use crate::{Desert, Lake, River, Tile, TileKey, TileMap};

/// Format version written into generated documents.
pub const FORMAT_VERSION: &str = "1.0";

/// Terrain description read by the engine at startup.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainDocument {
    pub version: String,
    pub world_size: i32,
    pub metadata: Metadata,
    pub tiles: TileMap,
    pub features: Features,
}

#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub description: String,
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Clone, Default, PartialEq, Debug, Serialize, Deserialize)]
pub struct Features {
    pub lakes: Vec<Lake>,
    pub rivers: Vec<River>,
    pub deserts: Vec<Desert>,
}

/// Summary counts of a terrain document.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct TerrainStats {
    pub lakes: usize,
    pub rivers: usize,
    pub deserts: usize,
    /// Tiles with an explicit entry in the document.
    pub tiles: usize,
    /// All cells of the world grid.
    pub total_tiles: usize,
}

impl TerrainDocument {
    pub fn stats(&self) -> TerrainStats {
        let side = self.world_size.max(0) as usize;
        TerrainStats {
            lakes: self.features.lakes.len(),
            rivers: self.features.rivers.len(),
            deserts: self.features.deserts.len(),
            tiles: self.tiles.len(),
            total_tiles: side * side,
        }
    }

    /// Whether the position is inside the world grid.
    pub fn contains(&self, p: impl Into<IVec2>) -> bool {
        Rect::square(self.world_size).contains(p)
    }

    /// Tile at position, or the fallback tile if the document has no entry
    /// for it.
    pub fn tile(&self, p: impl Into<IVec2>) -> Tile {
        let key = TileKey::from(p.into());
        self.tiles.get(&key).cloned().unwrap_or_else(|| {
            log::warn!("no tile for {key}, using fallback");
            Tile::fallback()
        })
    }

    /// Serialize to JSON, either compact or indented.
    pub fn to_json(&self, pretty: bool) -> anyhow::Result<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        })
    }

    /// Write the document to a file, creating missing parent directories.
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        pretty: bool,
    ) -> anyhow::Result<()> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).with_context(|| {
                    format!("failed to create directory {}", dir.display())
                })?;
            }
            _ => {}
        }

        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::info!(
            "Terrain saved to {} ({})",
            path.display(),
            if pretty { "formatted" } else { "compact" }
        );
        Ok(())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}
