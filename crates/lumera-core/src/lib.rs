pub mod diagnostic;
pub mod error;
pub mod practice;
pub mod progress;
pub mod questions;
pub mod rewards;
pub mod status;
pub mod validation;

mod selection;
