use lumera_db::question::QuestionRecord;
use lumera_entity::objective_level::Model as ObjectiveLevel;
use lumera_entity::question::{Model as Question, Usage};
use sea_orm::DbConn;
use serde_json::{Value, json};

pub struct Objective {
    pub id: i32,
    pub levels: Vec<ObjectiveLevel>,
}

impl Objective {
    pub fn level(&self, bloom_level: i16) -> &ObjectiveLevel {
        self.levels
            .iter()
            .find(|level| level.bloom_level == bloom_level)
            .unwrap()
    }
}

pub async fn create_subject(conn: &DbConn) -> i32 {
    lumera_db::subject::Mutation::create(conn, "Ciencias".to_owned())
        .await
        .unwrap()
        .id
}

pub async fn create_objective(conn: &DbConn, subject_id: i32, code: &str, bloom_levels: &[i16]) -> Objective {
    let objective =
        lumera_db::learning_objective::Mutation::create(conn, subject_id, code.to_owned(), format!("objetivo {code}"))
            .await
            .unwrap();
    let mut levels = Vec::new();
    for level in bloom_levels {
        levels.push(
            lumera_db::objective_level::Mutation::create(conn, objective.id, *level, format!("{code} nivel {level}"))
                .await
                .unwrap(),
        );
    }
    Objective {
        id: objective.id,
        levels,
    }
}

pub async fn create_question(
    conn: &DbConn,
    objective_level_id: i32,
    kind: &str,
    usage: Usage,
    question_data: Value,
    validation_data: Value,
) -> Question {
    lumera_db::question::Mutation::create(
        conn,
        QuestionRecord {
            objective_level_id,
            kind: kind.to_owned(),
            usage,
            question_data: question_data.to_string(),
            validation_data: validation_data.to_string(),
            difficulty: 3,
            active: true,
            tags: "[]".to_owned(),
        },
    )
    .await
    .unwrap()
}

/// True/false question whose right answer is `true`.
pub async fn true_false(conn: &DbConn, objective_level_id: i32, usage: Usage) -> Question {
    create_question(
        conn,
        objective_level_id,
        "true_false",
        usage,
        json!({"statement": "El agua hierve a 100 grados a nivel del mar", "explicacion": "A una atmósfera."}),
        json!({"correct_answer": true, "respuesta_correcta": true}),
    )
    .await
}

pub async fn open_ended(conn: &DbConn, objective_level_id: i32, usage: Usage) -> Question {
    create_question(
        conn,
        objective_level_id,
        "open_ended",
        usage,
        json!({"prompt": "Explica la fotosíntesis"}),
        json!({"rubric": ["menciona la luz", "menciona la clorofila"]}),
    )
    .await
}

pub fn right() -> Value {
    json!({"answer": true})
}

pub fn wrong() -> Value {
    json!({"answer": false})
}
