mod config;
mod random;
mod rules;

pub use config::ScoringWeights;
pub use random::{FixedIndex, RandomSource, SeededRandom, ThreadRandom};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::catalog::Catalog;
use super::domain::{Answer, Item, MatchDimension};

/// Stateless engine ranking the catalog against a completed session.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores every item and sorts by score, highest first. Equal scores keep catalog order.
    pub fn rank<'c>(&self, answers: &[Answer], catalog: &'c Catalog) -> Vec<ScoredItem<'c>> {
        let mut ranked: Vec<ScoredItem<'c>> = catalog
            .iter()
            .map(|item| rules::score_item(item, answers, &self.weights))
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Picks the highest scoring item. When nothing scores above zero the pick is a uniform
    /// draw over the whole catalog.
    pub fn score<'c>(
        &self,
        answers: &[Answer],
        catalog: &'c Catalog,
        random: &dyn RandomSource,
    ) -> Recommendation<'c> {
        let ranked = self.rank(answers, catalog);
        trace!(
            answers = answers.len(),
            items = ranked.len(),
            "ranked catalog"
        );

        match ranked.into_iter().next() {
            Some(top) if top.score > 0 => Recommendation {
                item: top.item,
                score: top.score,
                selection: Selection::TopScore,
                components: top.components,
            },
            _ => {
                let index = random.pick_index(catalog.len()) % catalog.len();
                let item = &catalog.items()[index];
                debug!(item_id = %item.id, "no sweet matched; falling back to a random pick");
                Recommendation {
                    item,
                    score: 0,
                    selection: Selection::Fallback,
                    components: Vec::new(),
                }
            }
        }
    }

    pub fn recommend<'c>(
        &self,
        answers: &[Answer],
        catalog: &'c Catalog,
        random: &dyn RandomSource,
    ) -> &'c Item {
        self.score(answers, catalog, random).item
    }
}

/// A single matched answer, kept so a result can explain itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub dimension: MatchDimension,
    pub question_id: u32,
    pub value: String,
    pub points: u32,
}

/// Per-item score for one ranking pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredItem<'c> {
    pub item: &'c Item,
    pub score: u32,
    pub components: Vec<ScoreComponent>,
}

/// How the recommended item was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    TopScore,
    Fallback,
}

impl Selection {
    pub fn label(&self) -> &'static str {
        match self {
            Selection::TopScore => "best match",
            Selection::Fallback => "random pick",
        }
    }
}

/// Engine output; `item` borrows from the catalog that was scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation<'c> {
    pub item: &'c Item,
    pub score: u32,
    pub selection: Selection,
    pub components: Vec<ScoreComponent>,
}
