pub mod bloom;
pub mod diagnostic;
pub mod practice;
pub mod progress;
pub mod question;
pub mod session;
pub mod status;
pub mod strategy;
