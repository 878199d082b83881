use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "learning_objective")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject_id: i32,
    pub code: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::subject::Entity",
        from = "Column::SubjectId",
        to = "crate::subject::Column::Id"
    )]
    Subject,
    #[sea_orm(has_many = "crate::objective_level::Entity")]
    ObjectiveLevel,
}

impl Related<crate::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<crate::objective_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ObjectiveLevel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
