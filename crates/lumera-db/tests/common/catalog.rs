use lumera_db::question::QuestionRecord;
use lumera_entity::objective_level::Model as ObjectiveLevel;
use lumera_entity::question::{Model as Question, Usage};
use sea_orm::DbConn;

pub struct Catalog {
    pub subject_id: i32,
    pub objective_id: i32,
    pub levels: Vec<ObjectiveLevel>,
}

/// One subject with one objective that has a record for each given Bloom level.
pub async fn create_catalog(conn: &DbConn, bloom_levels: &[i16]) -> Catalog {
    let subject = lumera_db::subject::Mutation::create(conn, "Matemática".to_owned())
        .await
        .unwrap();
    let objective =
        lumera_db::learning_objective::Mutation::create(conn, subject.id, "OA1".to_owned(), "Números".to_owned())
            .await
            .unwrap();
    let mut levels = Vec::new();
    for level in bloom_levels {
        levels.push(
            lumera_db::objective_level::Mutation::create(conn, objective.id, *level, format!("nivel {level}"))
                .await
                .unwrap(),
        );
    }
    Catalog {
        subject_id: subject.id,
        objective_id: objective.id,
        levels,
    }
}

pub async fn create_question(conn: &DbConn, objective_level_id: i32, usage: Usage, active: bool) -> Question {
    lumera_db::question::Mutation::create(
        conn,
        QuestionRecord {
            objective_level_id,
            kind: "true_false".to_owned(),
            usage,
            question_data: r#"{"statement":"2 + 2 = 4"}"#.to_owned(),
            validation_data: r#"{"correct_answer":true}"#.to_owned(),
            difficulty: 3,
            active,
            tags: "[]".to_owned(),
        },
    )
    .await
    .unwrap()
}
