use std::collections::BTreeSet;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::quiz::{
    quiz_router, Answer, Catalog, DiagnosisService, FixedIndex, Item, ItemId, QuestionSet,
};

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn sweet(
    id: u32,
    mood: &[&str],
    time: &[&str],
    texture: &[&str],
    sweetness: &str,
) -> Item {
    Item {
        id: ItemId(id),
        name: format!("Sweet #{id}"),
        category: "Test".to_string(),
        description: "fixture".to_string(),
        price_range: "100-300 yen".to_string(),
        texture: tags(texture),
        sweetness: sweetness.to_string(),
        mood: tags(mood),
        time: tags(time),
        image: None,
        recommendation: "fixture".to_string(),
    }
}

/// Two-item catalog: a mild relaxing sweet and a sweet energetic one.
pub(super) fn pair_catalog() -> Catalog {
    Catalog::new(vec![
        sweet(1, &["relax"], &[], &[], "mild"),
        sweet(2, &["energetic"], &[], &[], "sweet"),
    ])
    .expect("valid catalog")
}

pub(super) fn layered_catalog() -> Catalog {
    Catalog::new(vec![
        sweet(10, &["relax"], &["evening"], &["smooth"], "bitter"),
        sweet(11, &["relax", "focus"], &["afternoon"], &["crunchy"], "mild"),
        sweet(12, &["reward"], &["evening"], &["fluffy"], "sweet"),
        sweet(13, &["relax"], &["evening"], &["smooth"], "bitter"),
    ])
    .expect("valid catalog")
}

pub(super) fn answer(question_id: u32, value: &str) -> Answer {
    Answer::new(question_id, value)
}

pub(super) fn builtin_service(fallback_index: usize) -> DiagnosisService<FixedIndex> {
    DiagnosisService::new(
        Arc::new(Catalog::builtin().expect("bundled catalog")),
        Arc::new(QuestionSet::builtin().expect("bundled questions")),
        FixedIndex(fallback_index),
    )
}

pub(super) fn builtin_router() -> axum::Router {
    quiz_router(Arc::new(builtin_service(0)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
