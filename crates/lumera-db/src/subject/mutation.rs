use lumera_entity::subject::{ActiveModel as ActiveSubject, Model as Subject};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, name: String) -> Result<Subject, DbErr> {
        ActiveSubject {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
        }
        .insert(conn)
        .await
    }
}
