use rand::Rng;

pub const LAKE_NAMES: &[&str] = &[
    "Kristallsee",
    "Tiefensee",
    "Bergsee",
    "Waldteich",
    "Mondschein-See",
    "Smaragd-See",
    "Nebelsee",
    "Stiller See",
    "Drachensee",
    "Gebirgssee",
    "Verborgener See",
    "Spiegel-See",
    "Azur-See",
    "Runen-See",
    "Echo-See",
];

pub const RIVER_NAMES: &[&str] = &[
    "Silberfluss",
    "Steinbach",
    "Waldstrom",
    "Bergbach",
    "Tiefenfluss",
    "Kristallbach",
    "Mondschein-Fluss",
    "Nebelstrom",
    "Drachenfluss",
    "Runenbach",
    "Echo-Fluss",
    "Zauberbach",
    "Himmelsstrom",
];

pub const DESERT_NAMES: &[&str] = &[
    "Große Wüste",
    "Feuerwüste",
    "Sandmeer",
    "Goldene Dünen",
    "Endlose Wüste",
    "Kristallwüste",
    "Mondwüste",
    "Dornenwüste",
    "Glühende Wüste",
    "Steinwüste",
];

/// Display names drawn without replacement.
///
/// Once the pool runs dry, names are synthesized from the fallback stem and
/// the one-based index of the feature being named.
#[derive(Clone, Debug)]
pub struct NamePool {
    names: Vec<&'static str>,
    stem: &'static str,
}

impl NamePool {
    pub fn new(names: &[&'static str], stem: &'static str) -> Self {
        NamePool {
            names: names.to_vec(),
            stem,
        }
    }

    pub fn lakes() -> Self {
        NamePool::new(LAKE_NAMES, "See")
    }

    pub fn rivers() -> Self {
        NamePool::new(RIVER_NAMES, "Fluss")
    }

    pub fn deserts() -> Self {
        NamePool::new(DESERT_NAMES, "Wüste")
    }

    /// Names left before falling back to synthesized ones.
    pub fn remaining(&self) -> usize {
        self.names.len()
    }

    /// Draw a name for the feature with zero-based index `idx`.
    ///
    /// Consumes one random number while the pool has names left, none after.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, idx: usize) -> String {
        if self.names.is_empty() {
            format!("{} {}", self.stem, idx + 1)
        } else {
            let i = rng.random_range(0..self.names.len());
            self.names.remove(i).to_owned()
        }
    }
}
