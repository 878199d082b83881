pub(crate) mod diagnostic;
pub(crate) mod error;
pub(crate) mod practice;
pub(crate) mod progress;
pub(crate) mod questions;
pub(crate) mod status;
