use std::path::PathBuf;

use clap::Parser;
use rand::Rng;
use terrain::TerrainConfig;

pub const APP_NAME: &str = "terraingen";

#[derive(Parser, Debug)]
#[command(
    name = APP_NAME,
    about = "Generate lake, river and desert terrain for the engine"
)]
struct Args {
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = terrain::DEFAULT_WORLD_SIZE
    )]
    /// World size in tiles along each side.
    size: i32,

    #[arg(long, default_value_t = terrain::DEFAULT_LAKES)]
    /// Number of lakes.
    lakes: usize,

    #[arg(long, default_value_t = terrain::DEFAULT_DESERTS)]
    /// Number of deserts.
    deserts: usize,

    #[arg(long, default_value_t = terrain::DEFAULT_SAMPLE_RATE)]
    /// Tile sampling rate. Reported only, all tiles are always written.
    sampling: f64,

    #[arg(long, default_value = "assets/terrain.json")]
    /// Output file.
    output: PathBuf,

    #[arg(long, value_name = "SEED")]
    /// Fixed RNG seed for reproducible output.
    seed: Option<u64>,

    #[arg(long)]
    /// Write indented JSON instead of compact.
    formatted: bool,

    #[arg(long, value_name = "TIMESTAMP")]
    /// Creation time written into the metadata, defaults to now.
    created: Option<String>,
}

impl Args {
    fn config(&self) -> TerrainConfig {
        TerrainConfig {
            world_size: self.size,
            lakes: self.lakes,
            deserts: self.deserts,
            sample_rate: self.sampling,
        }
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            util::srng(&std::time::SystemTime::now()).random()
        })
    }

    fn created(&self) -> String {
        self.created.clone().unwrap_or_else(|| {
            chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string()
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    let config = args.config();
    config.validate()?;

    let seed = args.seed();
    log::info!("seed: {seed}");

    let now = std::time::Instant::now();
    let mut rng = util::srng(&seed);
    let doc = terrain::generate(&config, &mut rng, args.created())?;
    log::info!("Terrain generated in {:.2?}", now.elapsed());

    doc.save(&args.output, args.formatted)?;

    let stats = doc.stats();
    log::info!("=== Terrain statistics ===");
    log::info!(
        "World size: {0}x{0} = {1} tiles",
        config.world_size,
        stats.total_tiles
    );
    log::info!("Lakes: {}", stats.lakes);
    log::info!("Rivers: {}", stats.rivers);
    log::info!("Deserts: {}", stats.deserts);
    log::info!(
        "Explicit tiles: {} ({:.1}% sampling requested)",
        stats.tiles,
        config.sample_rate * 100.0
    );

    Ok(())
}
