pub mod answer;
pub mod result;
pub mod session;
