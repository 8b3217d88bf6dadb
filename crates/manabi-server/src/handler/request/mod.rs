//! Request types for HTTP handlers.

mod learning_logs;
mod profile;
mod tasks;

pub use learning_logs::*;
pub use profile::*;
pub use tasks::*;
