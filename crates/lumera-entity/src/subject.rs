use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subject")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::learning_objective::Entity")]
    LearningObjective,
}

impl Related<crate::learning_objective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningObjective.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
