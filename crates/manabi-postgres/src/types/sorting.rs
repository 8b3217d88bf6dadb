//! Sorting options for database queries.

use serde::{Deserialize, Serialize};

/// Sort order direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending order (A-Z, oldest first, smallest first).
    Asc,
    /// Descending order (Z-A, newest first, largest first).
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns whether the sort order is ascending.
    #[inline]
    pub fn is_asc(self) -> bool {
        matches!(self, SortOrder::Asc)
    }

    /// Returns whether the sort order is descending.
    #[inline]
    pub fn is_desc(self) -> bool {
        matches!(self, SortOrder::Desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_lowercase() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
    }

    #[test]
    fn deserializes_from_lowercase() {
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Asc);
    }

    #[test]
    fn defaults_to_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
