use lumera_entity::learning_objective::{ActiveModel as ActiveObjective, Model as LearningObjective};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        subject_id: i32,
        code: String,
        description: String,
    ) -> Result<LearningObjective, DbErr> {
        ActiveObjective {
            id: ActiveValue::NotSet,
            subject_id: ActiveValue::Set(subject_id),
            code: ActiveValue::Set(code),
            description: ActiveValue::Set(description),
        }
        .insert(conn)
        .await
    }
}
