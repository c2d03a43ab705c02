use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use tracing::debug;

use crate::directory::StudentRecord;
use crate::errors::DirectoryError;

/// How the featured subset is ordered before truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturedMode {
    /// Most achievements first, ties broken by name
    #[default]
    Ranked,
    /// Uniform random permutation
    Shuffled,
}

impl FeaturedMode {
    /// Number of records the landing page shows for this mode
    pub fn default_count(self) -> NonZeroUsize {
        match self {
            FeaturedMode::Ranked => NonZeroUsize::new(5).unwrap(),
            FeaturedMode::Shuffled => NonZeroUsize::new(10).unwrap(),
        }
    }
}

impl FromStr for FeaturedMode {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ranked" => Ok(FeaturedMode::Ranked),
            "shuffled" => Ok(FeaturedMode::Shuffled),
            _ => Err(DirectoryError::invalid_mode(s)),
        }
    }
}

impl fmt::Display for FeaturedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeaturedMode::Ranked => f.write_str("ranked"),
            FeaturedMode::Shuffled => f.write_str("shuffled"),
        }
    }
}

/// Picks up to `count` records whose roll number starts with `prefix`.
///
/// Randomness is only consumed in [`FeaturedMode::Shuffled`]. When fewer
/// than `count` records match, all of them are returned.
pub fn select_featured<'a, I, R>(
    records: I,
    prefix: &str,
    count: NonZeroUsize,
    mode: FeaturedMode,
    rng: &mut R,
) -> Vec<&'a StudentRecord>
where
    I: IntoIterator<Item = &'a StudentRecord>,
    R: Rng + ?Sized,
{
    let mut picks: Vec<&StudentRecord> = records
        .into_iter()
        .filter(|r| r.id.starts_with(prefix))
        .collect();

    match mode {
        FeaturedMode::Ranked => picks.sort_by(|a, b| {
            b.achievement_count()
                .cmp(&a.achievement_count())
                .then_with(|| a.name.cmp(&b.name))
        }),
        FeaturedMode::Shuffled => picks.shuffle(rng),
    }

    picks.truncate(count.get());
    debug!(
        "Selected {} featured records with prefix {:?} ({})",
        picks.len(),
        prefix,
        mode
    );
    picks
}
