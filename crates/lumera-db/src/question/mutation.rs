use crate::util::RequireRecord;
use lumera_entity::question::{self, ActiveModel as ActiveQuestion, Entity as QuestionEntity, Model as Question, Usage};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Mutation;

/// Authoring input. JSON payloads arrive serialized.
#[derive(Debug, Clone)]
pub struct QuestionRecord {
    pub objective_level_id: i32,
    pub kind: String,
    pub usage: Usage,
    pub question_data: String,
    pub validation_data: String,
    pub difficulty: i16,
    pub active: bool,
    pub tags: String,
}

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, record: QuestionRecord) -> Result<Question, DbErr> {
        let now = chrono::Utc::now().naive_utc();
        let objective_level_id = record.objective_level_id;
        ActiveQuestion {
            id: ActiveValue::NotSet,
            objective_level_id: ActiveValue::Set(record.objective_level_id),
            kind: ActiveValue::Set(record.kind),
            usage: ActiveValue::Set(record.usage),
            question_data: ActiveValue::Set(record.question_data),
            validation_data: ActiveValue::Set(record.validation_data),
            difficulty: ActiveValue::Set(record.difficulty),
            active: ActiveValue::Set(record.active),
            tags: ActiveValue::Set(record.tags),
            times_used: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, objective_level_id, "failed to create question");
        })
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
        record: QuestionRecord,
    ) -> Result<Question, DbErr> {
        QuestionEntity::find_by_id(question_id).one(conn).await.require()?;
        ActiveQuestion {
            id: ActiveValue::Unchanged(question_id),
            objective_level_id: ActiveValue::Set(record.objective_level_id),
            kind: ActiveValue::Set(record.kind),
            usage: ActiveValue::Set(record.usage),
            question_data: ActiveValue::Set(record.question_data),
            validation_data: ActiveValue::Set(record.validation_data),
            difficulty: ActiveValue::Set(record.difficulty),
            active: ActiveValue::Set(record.active),
            tags: ActiveValue::Set(record.tags),
            times_used: ActiveValue::NotSet,
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        }
        .update(conn)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, question_id, "failed to update question"))
    }

    pub async fn increment_usage<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<(), DbErr> {
        QuestionEntity::update_many()
            .col_expr(
                question::Column::TimesUsed,
                Expr::col(question::Column::TimesUsed).add(1),
            )
            .filter(question::Column::Id.eq(question_id))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, question_id, "failed to increment question usage");
            })?;
        Ok(())
    }
}
