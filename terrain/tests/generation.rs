use std::fs;

use glam::ivec2;
use pretty_assertions::assert_eq;
use terrain::{
    features::{desert_side_range, lake_radius_range, LAKE_MARGIN},
    generate, is_connected, paint, Desert, Lake, TerrainConfig,
    TerrainDocument, Texture, TileKey,
};
use util::srng;

const CREATED: &str = "2025-06-01T12:00:00.000000";

#[test]
fn same_seed_same_bytes() {
    let config = TerrainConfig {
        world_size: 120,
        lakes: 6,
        deserts: 3,
        ..Default::default()
    };

    let a = generate(&config, &mut srng(&1234u64), CREATED).unwrap();
    let b = generate(&config, &mut srng(&1234u64), CREATED).unwrap();

    assert_eq!(a.to_json(false).unwrap(), b.to_json(false).unwrap());
    assert_eq!(a.to_json(true).unwrap(), b.to_json(true).unwrap());
}

#[test]
fn default_world() {
    let doc =
        generate(&TerrainConfig::default(), &mut srng(&5u64), CREATED).unwrap();
    let size = doc.world_size;
    let (min_radius, max_radius) = lake_radius_range(size);
    let (min_side, max_side) = desert_side_range(size);

    assert_eq!(doc.tiles.len(), (size * size) as usize);
    assert_eq!(doc.features.lakes.len(), 8);
    assert_eq!(doc.features.deserts.len(), 4);
    assert!(is_connected(&doc.features.lakes, &doc.features.rivers));

    for lake in &doc.features.lakes {
        assert!((LAKE_MARGIN..=size - LAKE_MARGIN).contains(&lake.x));
        assert!((LAKE_MARGIN..=size - LAKE_MARGIN).contains(&lake.y));
        assert!((min_radius..=max_radius).contains(&lake.radius));
    }

    for d in &doc.features.deserts {
        assert!(d.x >= 0 && d.x + d.width <= size);
        assert!(d.y >= 0 && d.y + d.height <= size);
        assert!((min_side..=max_side).contains(&d.width));
        assert!((min_side..=max_side).contains(&d.height));
    }

    // Every tile has exactly one ground layer and at most one overlay that
    // matches its ground.
    for tile in doc.tiles.values() {
        assert_eq!(tile.levels.iter().filter(|a| a.level == 0).count(), 1);
        match (tile.ground_texture(), tile.overlay()) {
            (Some(Texture::Grass), None | Some(Texture::GrassBushes)) => {}
            (Some(Texture::Dirt), None | Some(Texture::DirtStones)) => {}
            (Some(Texture::Water), None) => {}
            other => panic!("unexpected layers {other:?}"),
        }
    }
}

#[test]
fn lake_inside_desert_stays_wet() {
    let lake = Lake {
        x: 30,
        y: 30,
        radius: 6,
        name: "Bergsee".into(),
    };
    let desert = Desert {
        x: 20,
        y: 20,
        width: 25,
        height: 25,
        name: "Sandmeer".into(),
    };
    let tiles =
        paint(&mut srng("overlap"), 50, &[lake.clone()], &[], &[desert]);

    for (key, tile) in &tiles {
        let p = **key;
        if lake.contains(p) {
            assert!(tile.is_water(), "{key} should be water");
        }
    }
    assert_eq!(
        tiles[&TileKey::from(ivec2(20, 20))].ground_texture(),
        Some(Texture::Dirt)
    );
}

#[test]
fn save_and_reload() {
    let config = TerrainConfig {
        world_size: 50,
        lakes: 2,
        deserts: 1,
        ..Default::default()
    };
    let doc = generate(&config, &mut srng(&99u64), CREATED).unwrap();

    let dir = std::env::temp_dir()
        .join(format!("terrain-gen-test-{}", std::process::id()));
    let compact = dir.join("compact.json");
    let pretty = dir.join("assets").join("pretty.json");

    doc.save(&compact, false).unwrap();
    doc.save(&pretty, true).unwrap();

    let compact_text = fs::read_to_string(&compact).unwrap();
    let pretty_text = fs::read_to_string(&pretty).unwrap();
    assert!(!compact_text.contains('\n'));
    assert!(pretty_text.contains("\n  \"worldSize\": 50,"));
    assert!(compact_text.len() < pretty_text.len());

    let reloaded = TerrainDocument::load(&pretty).unwrap();
    assert_eq!(reloaded, doc);
    assert_eq!(reloaded.to_json(false).unwrap(), compact_text);
    assert_eq!(reloaded.stats(), doc.stats());

    fs::remove_dir_all(&dir).unwrap();
}
