use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::catalog::Catalog;
use super::domain::{Answer, Item, ItemId};
use super::questions::QuestionSet;
use super::scoring::{
    RandomSource, ScoreComponent, ScoringEngine, SeededRandom, Selection, ThreadRandom,
};
use super::session::QuizSession;
use crate::config::QuizConfig;
use crate::error::AppError;

/// Service composing the catalog, question set, scoring engine and fallback random source.
pub struct DiagnosisService<R> {
    catalog: Arc<Catalog>,
    questions: Arc<QuestionSet>,
    engine: ScoringEngine,
    random: R,
}

impl<R> DiagnosisService<R>
where
    R: RandomSource + 'static,
{
    pub fn new(catalog: Arc<Catalog>, questions: Arc<QuestionSet>, random: R) -> Self {
        Self::with_engine(catalog, questions, ScoringEngine::default(), random)
    }

    pub fn with_engine(
        catalog: Arc<Catalog>,
        questions: Arc<QuestionSet>,
        engine: ScoringEngine,
        random: R,
    ) -> Self {
        Self {
            catalog,
            questions,
            engine,
            random,
        }
    }

    /// Scores one completed session.
    pub fn diagnose(&self, answers: &[Answer]) -> Diagnosis {
        let recommendation = self.engine.score(answers, &self.catalog, &self.random);

        info!(
            item_id = %recommendation.item.id,
            score = recommendation.score,
            selection = recommendation.selection.label(),
            answers = answers.len(),
            "diagnosis complete"
        );

        Diagnosis {
            item: recommendation.item.clone(),
            score: recommendation.score,
            selection: recommendation.selection,
            matches: recommendation.components,
            diagnosed_at: Utc::now(),
        }
    }

    /// Resolves a result id, e.g. one carried in a redirect after diagnosis.
    pub fn result(&self, id: ItemId) -> Result<&Item, DiagnosisError> {
        self.catalog.get(id).ok_or(DiagnosisError::NotFound(id))
    }

    pub fn session(&self) -> QuizSession<'_> {
        QuizSession::new(&self.questions)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }
}

impl DiagnosisService<Box<dyn RandomSource>> {
    /// Startup initialization: loads the catalog and questions named in `config` (or the
    /// bundled data) and picks the fallback random source.
    pub fn from_config(config: &QuizConfig) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };
        let questions = match &config.questions_path {
            Some(path) => QuestionSet::from_path(path)?,
            None => QuestionSet::builtin()?,
        };
        let random: Box<dyn RandomSource> = match config.random_seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        };

        info!(
            items = catalog.len(),
            questions = questions.len(),
            seeded = config.random_seed.is_some(),
            "quiz data loaded"
        );

        Ok(Self::new(Arc::new(catalog), Arc::new(questions), random))
    }
}

/// Owned summary of a diagnosis, suitable for responses and terminal output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub item: Item,
    pub score: u32,
    pub selection: Selection,
    pub matches: Vec<ScoreComponent>,
    pub diagnosed_at: DateTime<Utc>,
}

impl Diagnosis {
    pub fn result_path(&self) -> String {
        format!("/api/v1/sweets/{}", self.item.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosisError {
    #[error("sweet {0} not found")]
    NotFound(ItemId),
    #[error("sweet '{0}' not found")]
    UnknownId(String),
}
