//! Constants used throughout the application.

/// Database-related constants.
pub mod database {
    /// Default pagination limit.
    pub const DEFAULT_PAGE_SIZE: i64 = 50;

    /// Maximum pagination limit.
    pub const MAX_PAGE_SIZE: i64 = 1000;
}

/// Constants related to user profiles.
pub mod user {
    /// Maximum length of a display name in characters.
    pub const MAX_DISPLAY_NAME_LENGTH: usize = 16;
}

/// Constants related to tasks.
pub mod task {
    /// Maximum length of a task title in characters.
    pub const MAX_TITLE_LENGTH: usize = 64;

    /// Maximum length of a task description in characters.
    pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
}

/// Constants related to learning logs.
pub mod learning_log {
    /// Maximum length of a learning log title in characters.
    pub const MAX_TITLE_LENGTH: usize = 64;

    /// Maximum length of a learning log description in characters.
    pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

    /// Maximum length of the reflections text in characters.
    pub const MAX_REFLECTIONS_LENGTH: usize = 2000;

    /// Maximum number of minutes a single log entry can record (100 hours).
    pub const MAX_SPENT_MINUTES: i32 = 6000;
}
