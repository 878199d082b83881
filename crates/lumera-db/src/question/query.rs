use crate::util::RequireRecord;
use lumera_entity::objective_level;
use lumera_entity::question::{self, Entity as QuestionEntity, Model as Question, Usage};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::error::Error;

pub struct Query;

#[derive(Debug, Default, Clone)]
pub struct QuestionFilter {
    pub kind: Option<String>,
    pub usage: Option<Usage>,
    pub objective_level_id: Option<i32>,
}

impl Query {
    pub async fn find<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<Question, DbErr> {
        QuestionEntity::find_by_id(question_id)
            .one(conn)
            .await
            .require()
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, question_id, "failed to load question"))
    }

    /// Active questions matching the filter, lowest id first.
    pub async fn list<C: ConnectionTrait>(conn: &C, filter: QuestionFilter) -> Result<Vec<Question>, DbErr> {
        let mut query = QuestionEntity::find().filter(question::Column::Active.eq(true));
        if let Some(kind) = filter.kind {
            query = query.filter(question::Column::Kind.eq(kind));
        }
        if let Some(usage) = filter.usage {
            query = query.filter(question::Column::Usage.eq(usage));
        }
        if let Some(objective_level_id) = filter.objective_level_id {
            query = query.filter(question::Column::ObjectiveLevelId.eq(objective_level_id));
        }
        query
            .order_by_asc(question::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to list questions"))
    }

    /// Active questions attached to one objective level whose usage is `usage` or `all`.
    pub async fn candidates_for_objective_level<C: ConnectionTrait>(
        conn: &C,
        objective_level_id: i32,
        usage: Usage,
    ) -> Result<Vec<Question>, DbErr> {
        QuestionEntity::find()
            .filter(question::Column::ObjectiveLevelId.eq(objective_level_id))
            .filter(question::Column::Active.eq(true))
            .filter(question::Column::Usage.is_in([usage, Usage::All]))
            .order_by_asc(question::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    error = error as &dyn Error,
                    objective_level_id,
                    "failed to load candidate questions"
                );
            })
    }

    /// Active questions of an objective at any of the given Bloom levels, usage `usage` or `all`.
    pub async fn candidates_for_objective<C: ConnectionTrait>(
        conn: &C,
        objective_id: i32,
        bloom_levels: Vec<i16>,
        usage: Usage,
    ) -> Result<Vec<Question>, DbErr> {
        QuestionEntity::find()
            .join(JoinType::InnerJoin, question::Relation::ObjectiveLevel.def())
            .filter(objective_level::Column::ObjectiveId.eq(objective_id))
            .filter(objective_level::Column::BloomLevel.is_in(bloom_levels))
            .filter(question::Column::Active.eq(true))
            .filter(question::Column::Usage.is_in([usage, Usage::All]))
            .order_by_asc(question::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, objective_id, "failed to load candidate questions");
            })
    }
}
