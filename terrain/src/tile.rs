use std::{fmt, str::FromStr};

use anyhow::{bail, Context};
use derive_more::{Deref, From};
use glam::{ivec2, IVec2};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString};

/// Ground and overlay textures known to the engine.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Texture {
    Grass,
    /// Vegetation overlay on grass.
    GrassBushes,
    Water,
    Dirt,
    /// Stone overlay on dirt.
    DirtStones,
}

/// One texture at a given stacking level.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Layer {
    pub level: u32,
    pub texture: Texture,
}

/// Visual description of a single grid cell as a stack of layers.
///
/// Level 0 is the ground, higher levels are drawn on top of it.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tile {
    pub levels: Vec<Layer>,
}

impl Tile {
    /// Tile with only a ground layer.
    pub fn ground(texture: Texture) -> Self {
        Tile {
            levels: vec![Layer { level: 0, texture }],
        }
    }

    /// Tile with a ground layer and a level 1 overlay.
    pub fn with_overlay(ground: Texture, overlay: Texture) -> Self {
        Tile {
            levels: vec![
                Layer {
                    level: 0,
                    texture: ground,
                },
                Layer {
                    level: 1,
                    texture: overlay,
                },
            ],
        }
    }

    /// Tile shown for coordinates that have no explicit entry.
    pub fn fallback() -> Self {
        Tile::ground(Texture::Dirt)
    }

    /// Texture of the level 0 layer.
    pub fn ground_texture(&self) -> Option<Texture> {
        self.texture_at(0)
    }

    /// Texture of the level 1 layer, if any.
    pub fn overlay(&self) -> Option<Texture> {
        self.texture_at(1)
    }

    pub fn is_water(&self) -> bool {
        self.ground_texture() == Some(Texture::Water)
    }

    fn texture_at(&self, level: u32) -> Option<Texture> {
        self.levels
            .iter()
            .find(|a| a.level == level)
            .map(|a| a.texture)
    }
}

/// Tile map key, serialized as `"x,y"`.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Deref,
    From,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct TileKey(IVec2);

impl TileKey {
    pub fn new(x: i32, y: i32) -> Self {
        TileKey(ivec2(x, y))
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

impl FromStr for TileKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((x, y)) = s.split_once(',') else {
            bail!("bad tile key {s:?}, expected \"x,y\"");
        };
        let x = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
        let y = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
        Ok(TileKey::new(x, y))
    }
}
