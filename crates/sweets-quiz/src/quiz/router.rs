use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Answer, Item, ItemId};
use super::questions::Question;
use super::scoring::{RandomSource, ScoreComponent, Selection};
use super::service::{Diagnosis, DiagnosisError, DiagnosisService};
use crate::error::AppError;

/// Router builder exposing the question set, diagnosis and result lookup endpoints.
pub fn quiz_router<R>(service: Arc<DiagnosisService<R>>) -> Router
where
    R: RandomSource + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler::<R>))
        .route("/api/v1/quiz/diagnosis", post(diagnosis_handler::<R>))
        .route("/api/v1/sweets", get(catalog_handler::<R>))
        .route("/api/v1/sweets/:id", get(result_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsView<'a> {
    pub total: usize,
    pub questions: &'a [Question],
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisView {
    pub item: Item,
    pub score: u32,
    pub selection: Selection,
    pub matches: Vec<ScoreComponent>,
    pub diagnosed_at: chrono::DateTime<chrono::Utc>,
    pub result_path: String,
}

impl From<Diagnosis> for DiagnosisView {
    fn from(diagnosis: Diagnosis) -> Self {
        let result_path = diagnosis.result_path();
        Self {
            item: diagnosis.item,
            score: diagnosis.score,
            selection: diagnosis.selection,
            matches: diagnosis.matches,
            diagnosed_at: diagnosis.diagnosed_at,
            result_path,
        }
    }
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
) -> Response
where
    R: RandomSource + 'static,
{
    let questions = service.questions().questions();
    let view = QuestionsView {
        total: questions.len(),
        questions,
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn diagnosis_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
    Json(request): Json<DiagnosisRequest>,
) -> Result<Json<DiagnosisView>, AppError>
where
    R: RandomSource + 'static,
{
    let diagnosis = service.diagnose(&request.answers);
    Ok(Json(DiagnosisView::from(diagnosis)))
}

pub(crate) async fn catalog_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
) -> Response
where
    R: RandomSource + 'static,
{
    let items = service.catalog().items();
    (StatusCode::OK, Json(json!({ "total": items.len(), "sweets": items }))).into_response()
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<DiagnosisService<R>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>, AppError>
where
    R: RandomSource + 'static,
{
    let id = raw_id
        .trim()
        .parse::<u32>()
        .map_err(|_| DiagnosisError::UnknownId(raw_id.clone()))?;

    let item = service.result(ItemId(id))?;
    Ok(Json(item.clone()))
}
