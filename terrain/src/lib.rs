//! Procedural terrain for a tile-based world.
//!
//! A run scatters named lakes, connects them with rivers, drops deserts on
//! top and paints the whole grid into a [`TerrainDocument`] that the engine
//! loads at startup.

mod document;
pub use document::{
    Features, Metadata, TerrainDocument, TerrainStats, FORMAT_VERSION,
};

pub mod features;
pub use features::{
    generate_deserts, generate_lakes, generate_rivers, is_connected, Desert,
    Lake, Point, River,
};

mod generate;
pub use generate::{
    generate, TerrainConfig, DEFAULT_DESERTS, DEFAULT_LAKES,
    DEFAULT_SAMPLE_RATE, DEFAULT_WORLD_SIZE, MIN_WORLD_SIZE,
};

mod names;
pub use names::NamePool;

pub mod paint;
pub use paint::{paint, Canvas, TileMap};

pub mod river;

mod tile;
pub use tile::{Layer, Texture, Tile, TileKey};
