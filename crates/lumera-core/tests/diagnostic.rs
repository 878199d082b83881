mod common;

use common::catalog::{create_objective, create_subject, open_ended, right, true_false, wrong};
use common::rewards::{Award, RecordingRewards};
use common::{connect, engines, engines_with};
use lumera_config::EngineConfig;
use lumera_core::error::AssessmentError;
use lumera_core::progress::ProgressProjector;
use lumera_entity::question::Usage;
use lumera_model::bloom::BloomLevel;
use lumera_model::question::SubmitAnswerRequest;
use lumera_model::session::SessionState;
use std::collections::HashMap;
use test_log::test;
use uuid::Uuid;

fn submit(question_id: i32, answer: serde_json::Value) -> SubmitAnswerRequest {
    SubmitAnswerRequest {
        question_id,
        answer,
        response_time_secs: Some(12),
    }
}

#[test(tokio::test)]
async fn test_start_counts_attempts() {
    let db = connect().await;
    let engines = engines(&EngineConfig::default());
    let subject_id = create_subject(&db).await;
    let user_id = Uuid::new_v4();

    let first = engines.diagnostic.start(&db, user_id, subject_id).await.unwrap();
    assert_eq!(first.attempt, 1);
    assert_eq!(first.status, SessionState::InProgress);
    assert_eq!(first.current_bloom_level, BloomLevel::Understand);
    assert_eq!(first.total_questions, 0);

    let second = engines.diagnostic.start(&db, user_id, subject_id).await.unwrap();
    assert_eq!(second.attempt, 2);

    let other = engines.diagnostic.start(&db, Uuid::new_v4(), subject_id).await.unwrap();
    assert_eq!(other.attempt, 1);

    let sessions = engines.diagnostic.list(&db, user_id).await.unwrap();
    assert_eq!(sessions.len(), 2);
}

#[test(tokio::test)]
async fn test_start_unknown_subject() {
    let db = connect().await;
    let engines = engines(&EngineConfig::default());

    let error = engines.diagnostic.start(&db, Uuid::new_v4(), 42).await.unwrap_err();
    assert!(matches!(error, AssessmentError::NotFound(_)), "{error:?}");
}

#[test(tokio::test)]
async fn test_questions_follow_level_until_exhausted() {
    let db = connect().await;
    let engines = engines(&EngineConfig::default());
    let subject_id = create_subject(&db).await;
    let mut bloom_of = HashMap::new();
    let mut objective_of = HashMap::new();
    for code in ["OA1", "OA2"] {
        let objective = create_objective(&db, subject_id, code, &[2, 3]).await;
        for level in &objective.levels {
            true_false(&db, level.id, Usage::Diagnostic).await;
            bloom_of.insert(level.id, level.bloom_level);
            objective_of.insert(level.id, objective.id);
        }
    }
    let user_id = Uuid::new_v4();
    let session = engines.diagnostic.start(&db, user_id, subject_id).await.unwrap();

    let first = engines.diagnostic.next_question(&db, user_id, session.id).await.unwrap();
    assert_eq!(first.question_number, 1);
    assert_eq!(first.total_questions, 2);
    assert_eq!(bloom_of[&first.question.objective_level_id], 2);

    let submitted = engines
        .diagnostic
        .submit(&db, user_id, session.id, submit(first.question.id, right()))
        .await
        .unwrap();
    assert_eq!(submitted.is_correct, Some(true));
    assert_eq!(submitted.score, Some(100.0));
    assert!(!submitted.requires_review);
    assert_eq!(submitted.new_bloom_level, BloomLevel::Apply);

    let second = engines.diagnostic.next_question(&db, user_id, session.id).await.unwrap();
    assert_eq!(second.question_number, 2);
    assert_eq!(second.current_bloom_level, BloomLevel::Apply);
    assert_eq!(bloom_of[&second.question.objective_level_id], 3);
    assert_ne!(
        objective_of[&first.question.objective_level_id],
        objective_of[&second.question.objective_level_id]
    );

    let exhausted = engines.diagnostic.next_question(&db, user_id, session.id).await.unwrap_err();
    assert!(matches!(exhausted, AssessmentError::NotFound(_)), "{exhausted:?}");
}

#[test(tokio::test)]
async fn test_complete_aggregates_per_objective() {
    let db = connect().await;
    let engines = engines(&EngineConfig::default());
    let subject_id = create_subject(&db).await;
    let a = create_objective(&db, subject_id, "OA1", &[3, 4]).await;
    let b = create_objective(&db, subject_id, "OA2", &[2]).await;
    let a3 = true_false(&db, a.level(3).id, Usage::Diagnostic).await;
    let a4 = true_false(&db, a.level(4).id, Usage::Diagnostic).await;
    let b2 = true_false(&db, b.level(2).id, Usage::Diagnostic).await;

    let user_id = Uuid::new_v4();
    let session = engines.diagnostic.start(&db, user_id, subject_id).await.unwrap();
    for (question, answer) in [(&a3, right()), (&a4, right()), (&b2, wrong())] {
        engines
            .diagnostic
            .submit(&db, user_id, session.id, submit(question.id, answer))
            .await
            .unwrap();
    }

    let completion = engines.diagnostic.complete(&db, user_id, session.id).await.unwrap();
    assert_eq!(completion.session.status, SessionState::Completed);
    assert!(completion.session.completed_at.is_some());
    assert_eq!(completion.session.total_questions, 3);
    assert_eq!(completion.session.correct_answers, 2);
    assert_eq!(completion.average_bloom_level, Some(4.0));

    let results = engines.diagnostic.results(&db, user_id, session.id).await.unwrap();
    assert_eq!(results.len(), 2);
    let result_a = results.iter().find(|result| result.objective_id == a.id).unwrap();
    assert_eq!(result_a.mastered_level, Some(BloomLevel::Analyze));
    assert_eq!(result_a.mastered_level_name.as_deref(), Some("Analizar"));
    assert_eq!(result_a.accuracy_percent, 100);
    assert_eq!(result_a.answered, 2);
    assert!(result_a.recommendation.starts_with("Completaste 2 de 2 preguntas correctamente."));
    assert!(result_a.recommendation.ends_with("¡Excelente dominio de este objetivo!"));
    let result_b = results.iter().find(|result| result.objective_id == b.id).unwrap();
    assert_eq!(result_b.mastered_level, None);
    assert_eq!(result_b.accuracy_percent, 0);

    let progress = ProgressProjector::list(&db, user_id).await.unwrap();
    assert_eq!(progress.len(), 2);
    let progress_a = progress
        .iter()
        .find(|progress| progress.objective_level_id == a.level(4).id)
        .unwrap();
    assert_eq!(progress_a.achievement_percent, 100);
    let history = ProgressProjector::history(&db, user_id, b.level(2).id).await.unwrap();
    assert_eq!(history.len(), 1);

    let awards = engines.recorder.wait_for(3).await;
    assert!(awards.iter().all(|(user, _)| *user == user_id));
    let awards: Vec<_> = awards.into_iter().map(|(_, award)| award).collect();
    assert_eq!(awards[0], Award::Xp(100, "diagnostic_completed".to_owned()));
    assert_eq!(awards[1], Award::Coins(25, "diagnostic_good".to_owned()));
    let Award::Unlock(event) = &awards[2] else {
        panic!("expected unlock, got {:?}", awards[2]);
    };
    assert_eq!(event.kind, "diagnostic_achievement");
    assert_eq!(event.key, format!("diagnostic_subject_{subject_id}_score_66"));
}

#[test(tokio::test)]
async fn test_reward_failures_do_not_fail_completion() {
    let db = connect().await;
    let engines = engines_with(&EngineConfig::default(), RecordingRewards::failing());
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[2]).await;
    let question = true_false(&db, objective.level(2).id, Usage::Diagnostic).await;

    let user_id = Uuid::new_v4();
    let session = engines.diagnostic.start(&db, user_id, subject_id).await.unwrap();
    engines
        .diagnostic
        .submit(&db, user_id, session.id, submit(question.id, right()))
        .await
        .unwrap();

    let completion = engines.diagnostic.complete(&db, user_id, session.id).await.unwrap();
    assert_eq!(completion.session.status, SessionState::Completed);
    assert_eq!(completion.results.len(), 1);

    // xp is rejected, the task still goes on to coins and unlocks
    let awards: Vec<_> = engines
        .recorder
        .wait_for(3)
        .await
        .into_iter()
        .map(|(_, award)| award)
        .collect();
    assert_eq!(awards[0], Award::Xp(100, "diagnostic_completed".to_owned()));
    assert_eq!(awards[1], Award::Coins(50, "diagnostic_excellent".to_owned()));
    assert!(matches!(&awards[2], Award::Unlock(event) if event.key.ends_with("_score_100")));
}

#[test(tokio::test)]
async fn test_complete_twice_is_rejected() {
    let db = connect().await;
    let engines = engines(&EngineConfig::default());
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[2]).await;
    let question = true_false(&db, objective.level(2).id, Usage::All).await;
    let user_id = Uuid::new_v4();
    let session = engines.diagnostic.start(&db, user_id, subject_id).await.unwrap();

    engines.diagnostic.complete(&db, user_id, session.id).await.unwrap();
    let again = engines.diagnostic.complete(&db, user_id, session.id).await.unwrap_err();
    assert!(matches!(again, AssessmentError::AlreadyCompleted), "{again:?}");

    let late = engines
        .diagnostic
        .submit(&db, user_id, session.id, submit(question.id, right()))
        .await
        .unwrap_err();
    assert!(matches!(late, AssessmentError::AlreadyCompleted), "{late:?}");

    // without answers only xp is granted
    let awards = engines.recorder.wait_for(1).await;
    assert_eq!(awards[0].1, Award::Xp(100, "diagnostic_completed".to_owned()));
}

#[test(tokio::test)]
async fn test_manual_review_answer_is_stored_unscored() {
    let db = connect().await;
    let engines = engines(&EngineConfig::default());
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[2]).await;
    let question = open_ended(&db, objective.level(2).id, Usage::Diagnostic).await;
    let user_id = Uuid::new_v4();
    let session = engines.diagnostic.start(&db, user_id, subject_id).await.unwrap();

    let submitted = engines
        .diagnostic
        .submit(
            &db,
            user_id,
            session.id,
            submit(question.id, serde_json::json!({"text": "La planta usa la luz"})),
        )
        .await
        .unwrap();
    assert!(submitted.requires_review);
    assert_eq!(submitted.is_correct, None);
    assert_eq!(submitted.score, None);
    assert_eq!(submitted.new_bloom_level, BloomLevel::LOWEST);

    let detail = engines.diagnostic.progress(&db, user_id, session.id).await.unwrap();
    assert_eq!(detail.session.total_questions, 1);
    assert_eq!(detail.session.correct_answers, 0);
    assert_eq!(detail.answers.len(), 1);
    assert_eq!(detail.answers[0].is_correct, None);
    assert_eq!(detail.answers[0].objective_id, objective.id);
}

#[test(tokio::test)]
async fn test_foreign_session_is_not_found() {
    let db = connect().await;
    let engines = engines(&EngineConfig::default());
    let subject_id = create_subject(&db).await;
    let session = engines.diagnostic.start(&db, Uuid::new_v4(), subject_id).await.unwrap();

    let stranger = Uuid::new_v4();
    let error = engines.diagnostic.progress(&db, stranger, session.id).await.unwrap_err();
    assert!(matches!(error, AssessmentError::NotFound(_)), "{error:?}");
    let error = engines.diagnostic.complete(&db, stranger, session.id).await.unwrap_err();
    assert!(matches!(error, AssessmentError::NotFound(_)), "{error:?}");
}
