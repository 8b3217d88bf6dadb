//! Response types for all handlers.

mod error_response;
mod learning_logs;
mod profile;
mod tasks;

pub use error_response::ErrorResponse;
pub use learning_logs::{LearningLog, LearningLogBatch, PageInfo};
pub use profile::Profile;
pub use tasks::Task;
