mod common;

use common::catalog::{create_objective, create_subject, open_ended, true_false};
use common::connect;
use lumera_core::error::AssessmentError;
use lumera_core::questions;
use lumera_core::validation::ValidationError;
use lumera_entity::question::Usage;
use lumera_model::question::{QuestionInput, QuestionKind, QuestionListQuery, QuestionUsage};
use serde_json::json;
use test_log::test;

fn multiple_choice(objective_level_id: i32) -> QuestionInput {
    QuestionInput {
        objective_level_id,
        kind: QuestionKind::MultipleChoice,
        usage: QuestionUsage::Practice,
        question_data: json!({"pregunta": "¿Capital de Chile?", "opciones": ["Lima", "Santiago", "Quito"]}),
        validation_data: json!({"respuesta_correcta": "B"}),
        difficulty: 2,
        active: true,
        tags: vec!["geografía".to_owned()],
    }
}

#[test(tokio::test)]
async fn test_validate_manual_review_kind() {
    let db = connect().await;
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[5]).await;
    let question = open_ended(&db, objective.level(5).id, Usage::All).await;

    let response = questions::validate(&db, question.id, &json!({"text": "respuesta libre"}))
        .await
        .unwrap();
    assert!(!response.is_correct);
    assert!(response.score.abs() < f64::EPSILON);
    assert_eq!(
        response.explanation.as_deref(),
        Some("This question requires manual or AI validation")
    );
    assert_eq!(response.correct_answer, None);

    let stored = lumera_db::question::Query::find(&db, question.id).await.unwrap();
    assert_eq!(stored.times_used, 0);
}

#[test(tokio::test)]
async fn test_validate_counts_usage_and_explains() {
    let db = connect().await;
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[1]).await;
    let question = true_false(&db, objective.level(1).id, Usage::All).await;

    let wrong = questions::validate(&db, question.id, &json!({"answer": "falso"}))
        .await
        .unwrap();
    assert!(!wrong.is_correct);
    assert_eq!(wrong.explanation.as_deref(), Some("A una atmósfera."));
    assert_eq!(wrong.correct_answer, Some(json!(true)));

    let right = questions::validate(&db, question.id, &json!({"answer": "verdadero"}))
        .await
        .unwrap();
    assert!(right.is_correct);
    assert!((right.score - 100.0).abs() < f64::EPSILON);
    assert_eq!(right.correct_answer, None);

    let stored = lumera_db::question::Query::find(&db, question.id).await.unwrap();
    assert_eq!(stored.times_used, 2);

    let missing = questions::validate(&db, question.id + 100, &json!({"answer": true}))
        .await
        .unwrap_err();
    assert!(matches!(missing, AssessmentError::NotFound(_)), "{missing:?}");
}

#[test(tokio::test)]
async fn test_create_checks_structure() {
    let db = connect().await;
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[2]).await;
    let level_id = objective.level(2).id;

    let mut broken = multiple_choice(level_id);
    broken.question_data = json!({"pregunta": "¿Capital de Chile?"});
    let error = questions::create(&db, broken).await.unwrap_err();
    assert!(
        matches!(
            error,
            AssessmentError::Validation(ValidationError::MissingStructure { field: "opciones", .. })
        ),
        "{error:?}"
    );

    let mut hard = multiple_choice(level_id);
    hard.difficulty = 9;
    let error = questions::create(&db, hard).await.unwrap_err();
    assert!(matches!(error, AssessmentError::InvalidInput(_)), "{error:?}");

    let unknown_level = multiple_choice(level_id + 100);
    let error = questions::create(&db, unknown_level).await.unwrap_err();
    assert!(matches!(error, AssessmentError::NotFound(_)), "{error:?}");
}

#[test(tokio::test)]
async fn test_create_list_and_update() {
    let db = connect().await;
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[2]).await;
    let level_id = objective.level(2).id;
    true_false(&db, level_id, Usage::Diagnostic).await;

    let created = questions::create(&db, multiple_choice(level_id)).await.unwrap();
    assert_eq!(created.kind, "multiple_choice");
    assert_eq!(created.tags, vec!["geografía".to_owned()]);
    assert_eq!(created.validation_data, json!({"respuesta_correcta": "B"}));

    let listed = questions::list(
        &db,
        QuestionListQuery {
            kind: Some(QuestionKind::MultipleChoice),
            ..QuestionListQuery::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    let all = questions::list(&db, QuestionListQuery::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let response = questions::validate(&db, created.id, &json!({"selected": 1})).await.unwrap();
    assert!(response.is_correct);

    let mut input = multiple_choice(level_id);
    input.difficulty = 5;
    input.active = false;
    let updated = questions::update(&db, created.id, input).await.unwrap();
    assert_eq!(updated.difficulty, 5);
    assert!(!updated.active);
    assert_eq!(questions::list(&db, QuestionListQuery::default()).await.unwrap().len(), 1);

    let public = questions::get(&db, created.id).await.unwrap();
    assert_eq!(public.difficulty, 5);
}

#[test]
fn test_types_cover_every_kind() {
    let types = questions::types();
    assert_eq!(types.len(), 9);
    let manual: Vec<_> = types
        .iter()
        .filter(|info| !info.auto_scored)
        .map(|info| info.kind)
        .collect();
    assert_eq!(manual, vec![QuestionKind::OpenEnded, QuestionKind::ConceptMap]);
}
