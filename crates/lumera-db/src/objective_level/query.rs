use crate::util::RequireRecord;
use lumera_entity::learning_objective;
use lumera_entity::objective_level::{self, Entity as ObjectiveLevelEntity, Model as ObjectiveLevel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find<C: ConnectionTrait>(conn: &C, objective_level_id: i32) -> Result<ObjectiveLevel, DbErr> {
        ObjectiveLevelEntity::find_by_id(objective_level_id)
            .one(conn)
            .await
            .require()
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, objective_level_id, "failed to load objective level");
            })
    }

    pub async fn list_for_objective<C: ConnectionTrait>(
        conn: &C,
        objective_id: i32,
    ) -> Result<Vec<ObjectiveLevel>, DbErr> {
        ObjectiveLevelEntity::find()
            .filter(objective_level::Column::ObjectiveId.eq(objective_id))
            .order_by_asc(objective_level::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, objective_id, "failed to load objective levels");
            })
    }

    /// All objective levels below a subject, lowest id first.
    pub async fn list_for_subject<C: ConnectionTrait>(conn: &C, subject_id: i32) -> Result<Vec<ObjectiveLevel>, DbErr> {
        ObjectiveLevelEntity::find()
            .join(JoinType::InnerJoin, objective_level::Relation::LearningObjective.def())
            .filter(learning_objective::Column::SubjectId.eq(subject_id))
            .order_by_asc(objective_level::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, subject_id, "failed to load subject objective levels");
            })
    }
}
