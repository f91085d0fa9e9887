use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use sweets_quiz::config::AppConfig;
use sweets_quiz::error::AppError;
use sweets_quiz::quiz::{Answer, DiagnosisService, RandomSource};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration and quiz data for the one-shot terminal commands.
pub(crate) fn load_service() -> Result<DiagnosisService<Box<dyn RandomSource>>, AppError> {
    let config = AppConfig::load()?;
    DiagnosisService::from_config(&config.quiz)
}

/// Parses `QUESTION=VALUE`, e.g. `1=relax`.
pub(crate) fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{raw}'"))?;

    let question_id = question
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("question id in '{raw}' must be a number ({err})"))?;

    let value = value.trim();
    if value.is_empty() {
        return Err(format!("answer value in '{raw}' is empty"));
    }

    Ok(Answer::new(question_id, value))
}
