pub mod connections;
mod health_check;
pub mod messages;
pub mod topics;

pub use health_check::*;
