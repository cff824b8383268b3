//! Rubric evaluation: per-category score breakdowns and their aggregation.

mod california;
mod location;
mod ohio;

pub use california::score_california_project;
pub use location::score_location;
pub use ohio::score_ohio_project;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One scored rubric category. `max_score` is a fixed constant defined by the
/// rubric tables, never derived from input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
}

impl ScoreEntry {
    fn new(score: f64, max_score: f64) -> Self {
        Self {
            score,
            max_score,
            percentage: score / max_score * 100.0,
        }
    }
}

/// Per-category scores produced by one rubric pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBreakdown {
    entries: BTreeMap<String, ScoreEntry>,
}

impl ScoreBreakdown {
    pub(crate) fn insert(&mut self, category: &str, score: f64, max_score: f64) {
        self.entries
            .insert(category.to_string(), ScoreEntry::new(score, max_score));
    }

    pub fn entry(&self, category: &str) -> Option<&ScoreEntry> {
        self.entries.get(category)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ScoreEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weighted aggregate: points earned over points available. This is not
    /// the arithmetic mean of per-category percentages, which diverges from
    /// it whenever category maximums differ.
    pub fn total_percentage(&self) -> f64 {
        let earned: f64 = self.entries.values().map(|entry| entry.score).sum();
        let available: f64 = self.entries.values().map(|entry| entry.max_score).sum();
        if available == 0.0 {
            0.0
        } else {
            earned / available * 100.0
        }
    }
}

/// Equal-weight blend of a project's rubric and location percentages.
pub fn composite_score(rubric: &ScoreBreakdown, location: &ScoreBreakdown) -> f64 {
    (rubric.total_percentage() + location.total_percentage()) / 2.0
}
