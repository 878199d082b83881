use crate::util::RequireRecord;
use lumera_entity::subject::{Entity as SubjectEntity, Model as Subject};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find<C: ConnectionTrait>(conn: &C, subject_id: i32) -> Result<Subject, DbErr> {
        SubjectEntity::find_by_id(subject_id)
            .one(conn)
            .await
            .require()
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, subject_id, "failed to load subject"))
    }
}
