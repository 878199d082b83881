use sea_orm::entity::prelude::*;

/// A learning objective paired with one Bloom level. Questions attach here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "objective_level")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub objective_id: i32,
    pub bloom_level: i16,
    pub specific_objective: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::learning_objective::Entity",
        from = "Column::ObjectiveId",
        to = "crate::learning_objective::Column::Id"
    )]
    LearningObjective,
    #[sea_orm(has_many = "crate::question::Entity")]
    Question,
}

impl Related<crate::learning_objective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningObjective.def()
    }
}

impl Related<crate::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
