pub mod answer;
pub mod session;
