//! Placement of named lakes, rivers and deserts.

use glam::{ivec2, IVec2};
use rand::{seq::index, Rng};
use serde::{Deserialize, Serialize};
use util::{flood_fill, Rect, RngExt};

use crate::NamePool;

/// Minimum distance of lake centers from the world edge.
pub const LAKE_MARGIN: i32 = 20;

/// Probability of a river being generated with a meandering course.
pub const CURVED_RIVER_CHANCE: f64 = 0.4;

/// Upper limit for redundant rivers added on top of the spanning network.
pub const MAX_EXTRA_RIVERS: usize = 3;

#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl From<IVec2> for Point {
    fn from(p: IVec2) -> Self {
        Point { x: p.x, y: p.y }
    }
}

impl From<Point> for IVec2 {
    fn from(p: Point) -> Self {
        ivec2(p.x, p.y)
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Lake {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub name: String,
}

impl Lake {
    pub fn center(&self) -> IVec2 {
        ivec2(self.x, self.y)
    }

    /// Whether the cell is within the lake's radius of its center.
    pub fn contains(&self, p: IVec2) -> bool {
        let d = (p - self.center()).as_dvec2();
        d.length() <= self.radius as f64
    }

    /// Cells that may be covered by the lake.
    pub fn bounds(&self) -> Rect {
        Rect::new_inclusive(
            self.center() - self.radius,
            self.center() + self.radius,
        )
    }
}

/// A river connecting two lake centers.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct River {
    pub from: Point,
    pub to: Point,
    pub width: i32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub curved: bool,
    pub name: String,
}

impl River {
    /// Create a river running from lake `a` to lake `b`.
    ///
    /// Width grows with the distance between the lakes. Consumes one random
    /// number for the curvature roll before drawing the name.
    pub fn between<R: Rng + ?Sized>(
        rng: &mut R,
        a: &Lake,
        b: &Lake,
        names: &mut NamePool,
        idx: usize,
    ) -> Self {
        let curved = rng.chance(CURVED_RIVER_CHANCE);
        River {
            from: a.center().into(),
            to: b.center().into(),
            width: river_width(a.center(), b.center()),
            curved,
            name: names.draw(rng, idx),
        }
    }

    /// Whether the river runs between the two points, in either direction.
    pub fn connects(&self, a: IVec2, b: IVec2) -> bool {
        let (from, to) = (IVec2::from(self.from), IVec2::from(self.to));
        (from == a && to == b) || (from == b && to == a)
    }
}

/// River width for a river spanning the two points.
pub fn river_width(a: IVec2, b: IVec2) -> i32 {
    let distance = (b - a).as_dvec2().length();
    ((distance / 20.0) as i32).clamp(2, 8)
}

#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Desert {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub name: String,
}

impl Desert {
    pub fn bounds(&self) -> Rect {
        Rect::sized([self.x, self.y], [self.width, self.height])
    }
}

/// Inclusive range of lake radii for a world.
pub fn lake_radius_range(world_size: i32) -> (i32, i32) {
    (5.max(world_size / 40), 15.max(world_size / 15))
}

/// Inclusive range of desert side lengths for a world.
pub fn desert_side_range(world_size: i32) -> (i32, i32) {
    (20.max(world_size / 20), 40.max(world_size / 8))
}

/// Scatter lakes over the world, keeping their centers off the edges.
///
/// Lakes may overlap each other.
pub fn generate_lakes<R: Rng + ?Sized>(
    rng: &mut R,
    world_size: i32,
    count: usize,
) -> Vec<Lake> {
    let mut names = NamePool::lakes();
    let (min_radius, max_radius) = lake_radius_range(world_size);
    let span = LAKE_MARGIN..=(world_size - LAKE_MARGIN);

    (0..count)
        .map(|i| {
            let x = rng.random_range(span.clone());
            let y = rng.random_range(span.clone());
            let radius = rng.random_range(min_radius..=max_radius);
            let lake = Lake {
                x,
                y,
                radius,
                name: names.draw(rng, i),
            };
            log::debug!("lake {:?} at ({x}, {y}), radius {radius}", lake.name);
            lake
        })
        .collect()
}

/// Connect all lakes into a single river network.
///
/// Builds a spanning network first, then adds a few redundant rivers between
/// random lake pairs that aren't directly connected yet.
pub fn generate_rivers<R: Rng + ?Sized>(
    rng: &mut R,
    lakes: &[Lake],
) -> Vec<River> {
    let mut rivers = Vec::new();
    if lakes.len() < 2 {
        return rivers;
    }

    let mut names = NamePool::rivers();
    let mut connected = vec![false; lakes.len()];

    let pair = index::sample(rng, lakes.len(), 2);
    let (a, b) = (pair.index(0), pair.index(1));
    rivers.push(River::between(rng, &lakes[a], &lakes[b], &mut names, 0));
    connected[a] = true;
    connected[b] = true;

    for new in 0..lakes.len() {
        if connected[new] {
            continue;
        }
        let hubs: Vec<usize> =
            (0..lakes.len()).filter(|&i| connected[i]).collect();
        let hub = hubs[rng.random_range(0..hubs.len())];

        let idx = rivers.len();
        rivers.push(River::between(
            rng,
            &lakes[hub],
            &lakes[new],
            &mut names,
            idx,
        ));
        connected[new] = true;
    }

    for _ in 0..MAX_EXTRA_RIVERS.min(lakes.len() / 2) {
        let pair = index::sample(rng, lakes.len(), 2);
        let (a, b) = (&lakes[pair.index(0)], &lakes[pair.index(1)]);

        if rivers.iter().any(|r| r.connects(a.center(), b.center())) {
            continue;
        }
        let idx = rivers.len();
        rivers.push(River::between(rng, a, b, &mut names, idx));
    }

    for r in &rivers {
        log::debug!(
            "river {:?} ({}, {}) -> ({}, {}), width {}{}",
            r.name,
            r.from.x,
            r.from.y,
            r.to.x,
            r.to.y,
            r.width,
            if r.curved { ", curved" } else { "" }
        );
    }

    rivers
}

/// Scatter rectangular deserts fully inside the world.
///
/// Overlap with lakes is resolved when painting, deserts never cover water.
pub fn generate_deserts<R: Rng + ?Sized>(
    rng: &mut R,
    world_size: i32,
    count: usize,
) -> Vec<Desert> {
    let mut names = NamePool::deserts();
    let (min_side, max_side) = desert_side_range(world_size);

    (0..count)
        .map(|i| {
            let width = rng.random_range(min_side..=max_side);
            let height = rng.random_range(min_side..=max_side);
            let x = rng.random_range(0..=world_size - width);
            let y = rng.random_range(0..=world_size - height);
            let desert = Desert {
                x,
                y,
                width,
                height,
                name: names.draw(rng, i),
            };
            log::debug!(
                "desert {:?} at ({x}, {y}), {width}x{height}",
                desert.name
            );
            desert
        })
        .collect()
}

/// Whether every lake can be reached from every other lake along rivers.
///
/// Rivers are matched to lakes by endpoint coordinates.
pub fn is_connected(lakes: &[Lake], rivers: &[River]) -> bool {
    if lakes.len() < 2 {
        return true;
    }

    let neighbors = |&i: &usize| {
        let p = lakes[i].center();
        (0..lakes.len())
            .filter(|&j| {
                rivers.iter().any(|r| r.connects(p, lakes[j].center()))
            })
            .collect::<Vec<_>>()
    };

    flood_fill(neighbors, [0]).count() == lakes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use util::srng;

    fn lake(x: i32, y: i32) -> Lake {
        Lake {
            x,
            y,
            radius: 5,
            name: format!("{x},{y}"),
        }
    }

    fn river(a: &Lake, b: &Lake) -> River {
        River {
            from: a.center().into(),
            to: b.center().into(),
            width: 2,
            curved: false,
            name: String::new(),
        }
    }

    #[test]
    fn widths() {
        assert_eq!(river_width(ivec2(0, 0), ivec2(10, 0)), 2);
        assert_eq!(river_width(ivec2(0, 0), ivec2(79, 0)), 3);
        assert_eq!(river_width(ivec2(0, 0), ivec2(100, 0)), 5);
        assert_eq!(river_width(ivec2(0, 0), ivec2(300, 400)), 8);
    }

    #[test]
    fn lake_cells() {
        let a = lake(5, 5);
        let a = Lake { radius: 3, ..a };
        assert!(a.contains(ivec2(5, 8)));
        assert!(a.contains(ivec2(2, 5)));
        assert!(!a.contains(ivec2(5, 9)));
        assert!(!a.contains(ivec2(8, 8)));
        assert_eq!(a.bounds(), Rect::new([2, 2], [9, 9]));
    }

    #[test]
    fn river_json() {
        let mut r = river(&lake(1, 2), &lake(3, 4));
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"from":{"x":1,"y":2},"to":{"x":3,"y":4},"width":2,"name":""}"#
        );
        r.curved = true;
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains(r#""curved":true"#));
        assert_eq!(serde_json::from_str::<River>(&json).unwrap(), r);
    }

    #[test]
    fn too_few_lakes() {
        let mut rng = srng("few");
        assert!(generate_rivers(&mut rng, &[]).is_empty());
        assert!(generate_rivers(&mut rng, &[lake(30, 30)]).is_empty());
        assert!(is_connected(&[lake(30, 30)], &[]));
    }

    #[test]
    fn two_lakes() {
        let lakes = [lake(30, 30), lake(60, 30)];
        let rivers = generate_rivers(&mut srng("two"), &lakes);
        // Spanning river and possibly one redundant one that gets skipped.
        assert_eq!(rivers.len(), 1);
        assert!(rivers[0].connects(ivec2(30, 30), ivec2(60, 30)));
    }

    #[test]
    fn connectivity() {
        let lakes = [lake(30, 30), lake(60, 30), lake(90, 30), lake(30, 90)];
        let chain = [
            river(&lakes[0], &lakes[1]),
            river(&lakes[2], &lakes[1]),
            river(&lakes[3], &lakes[2]),
        ];
        assert!(is_connected(&lakes, &chain));
        assert!(!is_connected(&lakes, &chain[..2]));
        assert!(!is_connected(&lakes, &[]));
    }

    #[quickcheck]
    fn lakes_stay_inside(seed: u64, size: u8, count: u8) -> bool {
        let world_size = 40 + size as i32 * 4;
        let (min_radius, max_radius) = lake_radius_range(world_size);
        let lakes =
            generate_lakes(&mut srng(&seed), world_size, count as usize % 20);

        lakes.iter().all(|a| {
            (LAKE_MARGIN..=world_size - LAKE_MARGIN).contains(&a.x)
                && (LAKE_MARGIN..=world_size - LAKE_MARGIN).contains(&a.y)
                && (min_radius..=max_radius).contains(&a.radius)
        })
    }

    #[quickcheck]
    fn lake_names_are_unique(seed: u64, count: u8) -> bool {
        let lakes = generate_lakes(&mut srng(&seed), 200, count as usize % 30);
        let names: util::HashSet<&str> =
            lakes.iter().map(|a| a.name.as_str()).collect();
        names.len() == lakes.len()
    }

    #[quickcheck]
    fn deserts_stay_inside(seed: u64, size: u8, count: u8) -> bool {
        let world_size = 40 + size as i32 * 4;
        let world = Rect::square(world_size);
        let (min_side, max_side) = desert_side_range(world_size);
        let deserts =
            generate_deserts(&mut srng(&seed), world_size, count as usize % 16);

        deserts.iter().all(|d| {
            d.x >= 0
                && d.y >= 0
                && d.x + d.width <= world_size
                && d.y + d.height <= world_size
                && world.contains_rect(&d.bounds())
                && (min_side..=max_side).contains(&d.width)
                && (min_side..=max_side).contains(&d.height)
        })
    }

    #[quickcheck]
    fn river_network_is_connected(seed: u64, count: u8) -> bool {
        let mut rng = srng(&seed);
        let count = count as usize % 24;
        let lakes = generate_lakes(&mut rng, 200, count);
        let rivers = generate_rivers(&mut rng, &lakes);

        let expected_min = count.saturating_sub(1);
        let expected_max = expected_min + MAX_EXTRA_RIVERS.min(count / 2);

        is_connected(&lakes, &rivers)
            && (expected_min..=expected_max).contains(&rivers.len())
            && rivers.iter().all(|r| (2..=8).contains(&r.width))
    }
}
