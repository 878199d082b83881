pub mod catalog;

use sea_orm::{DbConn, DbErr};

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    lumera_db::schema::apply(db).await
}
