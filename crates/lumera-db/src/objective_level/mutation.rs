use lumera_entity::objective_level::{ActiveModel as ActiveObjectiveLevel, Model as ObjectiveLevel};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        objective_id: i32,
        bloom_level: i16,
        specific_objective: String,
    ) -> Result<ObjectiveLevel, DbErr> {
        ActiveObjectiveLevel {
            id: ActiveValue::NotSet,
            objective_id: ActiveValue::Set(objective_id),
            bloom_level: ActiveValue::Set(bloom_level),
            specific_objective: ActiveValue::Set(specific_objective),
        }
        .insert(conn)
        .await
    }
}
