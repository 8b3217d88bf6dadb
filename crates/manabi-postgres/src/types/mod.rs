//! Contains constraints, enumerations and other custom types.

pub mod constants;
mod constraints;
mod enums;
mod pagination;
mod sorting;

pub use constraints::{
    ConstraintViolation, LearningLogConstraints, TaskConstraints, UserConstraints,
};
pub use enums::UserRole;
pub use pagination::{MAX_LIMIT, OffsetPage, OffsetPagination};
pub use sorting::SortOrder;
