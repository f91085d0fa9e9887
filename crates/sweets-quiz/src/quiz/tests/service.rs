use std::sync::Arc;

use super::common::*;
use crate::config::QuizConfig;
use crate::quiz::{
    Catalog, DiagnosisError, DiagnosisService, FixedIndex, ItemId, QuestionSet, Selection,
};

#[test]
fn diagnose_returns_best_match_from_builtin_catalog() {
    let service = builtin_service(0);
    let answers = [
        answer(1, "relax"),
        answer(2, "evening"),
        answer(3, "alone"),
        answer(4, "smooth"),
        answer(5, "bitter"),
    ];

    let diagnosis = service.diagnose(&answers);

    assert_eq!(diagnosis.item.id, ItemId(1));
    assert_eq!(diagnosis.score, 9);
    assert_eq!(diagnosis.selection, Selection::TopScore);
    assert_eq!(diagnosis.matches.len(), 4);
    assert_eq!(diagnosis.result_path(), "/api/v1/sweets/1");
}

#[test]
fn diagnose_is_repeatable_when_something_matches() {
    let service = builtin_service(3);
    let answers = [answer(1, "energize"), answer(2, "morning"), answer(4, "fluffy")];

    let first = service.diagnose(&answers);
    let second = service.diagnose(&answers);

    assert_eq!(first.item.id, ItemId(7));
    assert_eq!(first.item, second.item);
}

#[test]
fn diagnose_falls_back_through_injected_source() {
    let service = builtin_service(4);

    let diagnosis = service.diagnose(&[]);

    assert_eq!(diagnosis.selection, Selection::Fallback);
    assert_eq!(diagnosis.item.id, service.catalog().items()[4].id);
}

#[test]
fn result_lookup_reports_missing_ids() {
    let service = builtin_service(0);

    assert_eq!(
        service.result(ItemId(3)).map(|item| item.name.as_str()),
        Ok("Strawberry Shortcake")
    );
    assert_eq!(
        service.result(ItemId(404)),
        Err(DiagnosisError::NotFound(ItemId(404)))
    );
}

#[test]
fn session_uses_the_service_question_set() {
    let questions = Arc::new(QuestionSet::builtin().expect("bundled questions"));
    let service = DiagnosisService::new(Arc::new(pair_catalog()), questions, FixedIndex(0));

    let mut session = service.session();
    for value in ["relax", "evening", "alone", "smooth", "bitter"] {
        session.answer(value).expect("valid option");
    }

    let diagnosis = service.diagnose(session.answers());
    assert_eq!(diagnosis.item.id, ItemId(1));
    assert_eq!(diagnosis.score, 3);
}

#[test]
fn from_config_uses_bundled_data_by_default() {
    let service = DiagnosisService::from_config(&QuizConfig {
        random_seed: Some(11),
        ..QuizConfig::default()
    })
    .expect("bundled data loads");

    assert_eq!(service.catalog().len(), 12);
    assert_eq!(service.questions().len(), 5);

    let picks: Vec<ItemId> = (0..8).map(|_| service.diagnose(&[]).item.id).collect();
    assert!(picks
        .iter()
        .all(|id| service.catalog().get(*id).is_some()));
}

#[test]
fn from_config_reports_missing_catalog_file() {
    let err = DiagnosisService::from_config(&QuizConfig {
        catalog_path: Some("/nonexistent/sweets.json".into()),
        ..QuizConfig::default()
    })
    .err()
    .expect("missing file fails");

    assert!(err.to_string().starts_with("catalog error"));
}

#[test]
fn service_catalog_is_shared_not_copied() {
    let catalog = Arc::new(Catalog::builtin().expect("bundled catalog"));
    let service = DiagnosisService::new(
        Arc::clone(&catalog),
        Arc::new(QuestionSet::builtin().expect("bundled questions")),
        FixedIndex(0),
    );

    assert!(std::ptr::eq(service.catalog(), catalog.as_ref()));
}
