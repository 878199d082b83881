pub mod history;
pub mod objective;
