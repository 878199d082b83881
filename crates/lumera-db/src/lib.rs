pub mod diagnostic;
pub mod learning_objective;
pub mod objective_level;
pub mod practice;
pub mod progress;
pub mod question;
pub mod reward_ledger;
pub mod schema;
pub mod subject;
pub mod util;

pub use sea_orm;
