use crate::util::RequireRecord;
use lumera_entity::learning_objective::{Entity as ObjectiveEntity, Model as LearningObjective};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find<C: ConnectionTrait>(conn: &C, objective_id: i32) -> Result<LearningObjective, DbErr> {
        ObjectiveEntity::find_by_id(objective_id)
            .one(conn)
            .await
            .require()
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, objective_id, "failed to load learning objective"),
            )
    }
}
