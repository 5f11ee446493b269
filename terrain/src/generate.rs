use anyhow::bail;
use rand::Rng;

use crate::{
    generate_deserts, generate_lakes, generate_rivers, is_connected, paint,
    Features, Metadata, TerrainDocument, FORMAT_VERSION,
};

/// Smallest world that fits lakes away from the edges and whole deserts.
pub const MIN_WORLD_SIZE: i32 = 40;

pub const DEFAULT_WORLD_SIZE: i32 = 200;
pub const DEFAULT_LAKES: usize = 8;
pub const DEFAULT_DESERTS: usize = 4;
pub const DEFAULT_SAMPLE_RATE: f64 = 0.05;

/// Parameters for a terrain generation run.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TerrainConfig {
    /// Side length of the square world in tiles.
    pub world_size: i32,
    pub lakes: usize,
    pub deserts: usize,
    /// Fraction of tiles meant to be written out explicitly.
    ///
    /// Currently only reported, every tile of the grid is always written.
    pub sample_rate: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            world_size: DEFAULT_WORLD_SIZE,
            lakes: DEFAULT_LAKES,
            deserts: DEFAULT_DESERTS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl TerrainConfig {
    /// Check that the requested features fit in the world.
    ///
    /// Lakes and deserts both need at least [`MIN_WORLD_SIZE`] tiles of room,
    /// a featureless world can be any size.
    pub fn validate(&self) -> anyhow::Result<()> {
        let has_features = self.lakes > 0 || self.deserts > 0;
        if has_features && self.world_size < MIN_WORLD_SIZE {
            bail!(
                "world size {} is too small for lakes or deserts, \
                 must be at least {MIN_WORLD_SIZE}",
                self.world_size
            );
        }
        Ok(())
    }
}

/// Generate a complete terrain document.
///
/// Output is fully determined by the configuration, the state of `rng` and
/// the `created` timestamp.
pub fn generate<R: Rng + ?Sized>(
    config: &TerrainConfig,
    rng: &mut R,
    created: impl Into<String>,
) -> anyhow::Result<TerrainDocument> {
    config.validate()?;
    let size = config.world_size;

    log::info!("Generating terrain ({size}x{size})");

    log::info!("Generating {} lakes", config.lakes);
    let lakes = generate_lakes(rng, size, config.lakes);

    log::info!("Generating river network");
    let rivers = generate_rivers(rng, &lakes);
    debug_assert!(is_connected(&lakes, &rivers));

    log::info!("Generating {} deserts", config.deserts);
    let deserts = generate_deserts(rng, size, config.deserts);

    if config.sample_rate != DEFAULT_SAMPLE_RATE {
        log::warn!(
            "Sampling rate {:.1}% requested, writing all tiles anyway",
            config.sample_rate * 100.0
        );
    }
    let tiles = paint(rng, size, &lakes, &rivers, &deserts);

    let mut doc = TerrainDocument {
        version: FORMAT_VERSION.into(),
        world_size: size,
        metadata: Metadata {
            name: "Generiertes Terrain".into(),
            description: String::new(),
            created: created.into(),
            author: Some("TerrainGenerator".into()),
        },
        tiles,
        features: Features {
            lakes,
            rivers,
            deserts,
        },
    };

    let stats = doc.stats();
    doc.metadata.description = format!(
        "Terrain mit {} Seen, {} Flüssen, {} Wüsten und {} Beispiel-Tiles",
        stats.lakes, stats.rivers, stats.deserts, stats.tiles
    );

    log::info!(
        "Terrain generated: {} lakes, {} rivers, {} deserts",
        stats.lakes,
        stats.rivers,
        stats.deserts
    );
    log::info!("Tiles: {} of {} defined", stats.tiles, stats.total_tiles);

    Ok(doc)
}
