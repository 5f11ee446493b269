//! Layered painting of the tile grid.
//!
//! Passes run in a fixed order and later passes overwrite earlier ones:
//! grass, then lakes, then rivers, then deserts. Deserts skip water cells so
//! water always survives.

use glam::IVec2;
use rand::Rng;
use util::{IndexMap, Rect, RngExt};

use crate::{Desert, Lake, River, Texture, Tile, TileKey};

/// Chance of a grass cell getting a bush overlay.
pub const BUSH_CHANCE: f64 = 0.6;

/// Chance of a desert cell getting a stone overlay.
pub const STONE_CHANCE: f64 = 0.3;

/// Tiles keyed by position, in the order they were first painted.
pub type TileMap = IndexMap<TileKey, Tile>;

/// A square grid of tiles being painted.
#[derive(Clone, Debug)]
pub struct Canvas {
    area: Rect,
    tiles: TileMap,
}

impl Canvas {
    /// Start a canvas with every cell covered in grass.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, world_size: i32) -> Self {
        let area = Rect::square(world_size);
        let mut tiles = TileMap::default();
        tiles.reserve(area.area() as usize);

        for p in area.iter() {
            let tile = if rng.chance(BUSH_CHANCE) {
                Tile::with_overlay(Texture::Grass, Texture::GrassBushes)
            } else {
                Tile::ground(Texture::Grass)
            };
            tiles.insert(p.into(), tile);
        }

        Canvas { area, tiles }
    }

    pub fn get(&self, p: IVec2) -> Option<&Tile> {
        self.tiles.get(&TileKey::from(p))
    }

    pub fn into_tiles(self) -> TileMap {
        self.tiles
    }

    /// Overwrite the cell if it's inside the canvas.
    ///
    /// Replacing a tile keeps its original position in the map order.
    fn set(&mut self, p: IVec2, tile: Tile) {
        if self.area.contains(p) {
            self.tiles.insert(p.into(), tile);
        }
    }

    /// Cells of `bounds` that are inside the canvas, in row-major order.
    fn cells(&self, bounds: &Rect) -> impl Iterator<Item = IVec2> {
        self.area.intersection(bounds).iter()
    }

    pub fn paint_lake(&mut self, lake: &Lake) {
        for p in self.cells(&lake.bounds()) {
            if lake.contains(p) {
                self.set(p, Tile::ground(Texture::Water));
            }
        }
    }

    pub fn paint_river(&mut self, river: &River) {
        for p in self.cells(&river.bounds()) {
            if river.contains(p) {
                self.set(p, Tile::ground(Texture::Water));
            }
        }
    }

    /// Cover the desert's rectangle in dirt, leaving water alone.
    pub fn paint_desert<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        desert: &Desert,
    ) {
        for p in self.cells(&desert.bounds()) {
            if self.get(p).is_some_and(Tile::is_water) {
                continue;
            }

            let tile = if rng.chance(STONE_CHANCE) {
                Tile::with_overlay(Texture::Dirt, Texture::DirtStones)
            } else {
                Tile::ground(Texture::Dirt)
            };
            self.set(p, tile);
        }
    }
}

/// Paint the full grid for the given features.
pub fn paint<R: Rng + ?Sized>(
    rng: &mut R,
    world_size: i32,
    lakes: &[Lake],
    rivers: &[River],
    deserts: &[Desert],
) -> TileMap {
    log::info!(
        "Generating base terrain ({world_size}x{world_size} = {} tiles)",
        world_size as i64 * world_size as i64
    );
    let mut canvas = Canvas::new(rng, world_size);

    log::info!("Base terrain done, painting features");
    for lake in lakes {
        canvas.paint_lake(lake);
    }
    for river in rivers {
        canvas.paint_river(river);
    }
    for desert in deserts {
        canvas.paint_desert(rng, desert);
    }

    let tiles = canvas.into_tiles();
    log::info!("Terrain painted: {} tiles", tiles.len());
    tiles
}
