pub mod diagnostic;
pub mod learning_objective;
pub mod objective_level;
pub mod practice;
pub mod progress;
pub mod question;
pub mod reward_ledger;
pub mod subject;

use sea_orm::entity::prelude::*;

/// Lifecycle shared by diagnostic and practice sessions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i16", db_type = "Integer")]
pub enum SessionStatus {
    InProgress = 1,
    Completed = 2,
}
