//! Unopinionated standalone utilities.

mod geom;
pub use geom::Rect;

mod path;
pub use path::flood_fill;

mod rng;
pub use rng::{srng, RngExt};

pub type FastHasher = rustc_hash::FxHasher;

/// Set with an efficient hash function.
pub use rustc_hash::FxHashSet as HashSet;

type DefaultHashBuilder = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Insertion order preserving map with an efficient hash function.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, DefaultHashBuilder>;

/// Good default concrete rng.
pub type GameRng = rand_xorshift::XorShiftRng;
