use std::path::PathBuf;

use clap::Parser;
use terrain::{TerrainDocument, TileKey};
use util::IndexMap;

#[derive(Parser, Debug)]
#[command(about = "Show the contents of a generated terrain file")]
struct Args {
    /// Terrain JSON file.
    file: PathBuf,

    #[arg(long = "at", value_name = "X,Y")]
    /// Print the tile at the given position, can be repeated.
    at: Vec<TileKey>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    let doc = TerrainDocument::load(&args.file)?;
    let stats = doc.stats();

    println!("{}", doc.metadata.name);
    println!("{}", doc.metadata.description);
    println!("created: {}", doc.metadata.created);
    if let Some(author) = &doc.metadata.author {
        println!("author: {author}");
    }
    println!("version: {}", doc.version);
    println!(
        "world: {0}x{0}, {1} of {2} tiles defined",
        doc.world_size, stats.tiles, stats.total_tiles
    );

    println!("lakes: {}", stats.lakes);
    for lake in &doc.features.lakes {
        println!("  {} ({}, {}) r={}", lake.name, lake.x, lake.y, lake.radius);
    }
    println!("rivers: {}", stats.rivers);
    for r in &doc.features.rivers {
        println!(
            "  {} ({}, {}) -> ({}, {}) w={}{}",
            r.name,
            r.from.x,
            r.from.y,
            r.to.x,
            r.to.y,
            r.width,
            if r.curved { " curved" } else { "" }
        );
    }
    println!("deserts: {}", stats.deserts);
    for d in &doc.features.deserts {
        println!(
            "  {} ({}, {}) {}x{}",
            d.name, d.x, d.y, d.width, d.height
        );
    }

    let mut textures: IndexMap<String, usize> = Default::default();
    for tile in doc.tiles.values() {
        for layer in &tile.levels {
            let name = format!("{}@{}", layer.texture, layer.level);
            *textures.entry(name).or_default() += 1;
        }
    }
    textures.sort_keys();
    println!("layers:");
    for (name, count) in &textures {
        println!("  {name}: {count}");
    }

    for key in &args.at {
        if !doc.contains(**key) {
            log::warn!("{key} is outside the {0}x{0} world", doc.world_size);
        }
        println!("{key}: {}", serde_json::to_string(&doc.tile(**key))?);
    }

    Ok(())
}
