//! Learning log response types.

use jiff::Timestamp;
use manabi_postgres::model;
use manabi_postgres::types::{OffsetPage, OffsetPagination, SortOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single learning log entry as returned by the API.
///
/// The internal `created_at` tie-breaker column is deliberately not part of
/// this representation, and absent optional fields are omitted from the JSON
/// instead of being serialized as `null`.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningLog {
    /// Unique identifier of the log entry.
    pub id: Uuid,
    /// Owner of the log entry.
    pub user_id: Uuid,
    /// Task this entry belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Uuid>,
    /// Short title of what was studied.
    pub title: String,
    /// What was done during the session.
    pub description: String,
    /// What was learned or should be improved.
    pub reflections: String,
    /// Minutes spent on the session.
    pub spent_minutes: i32,
    /// When the session started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    /// When the session ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<Timestamp>,
}

impl LearningLog {
    /// Creates a new instance of [`LearningLog`] from the database model.
    pub fn from_model(log: model::LearningLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            task_id: log.task_id,
            title: log.title,
            description: log.description,
            reflections: log.reflections,
            spent_minutes: log.spent_minutes,
            started_at: log.started_at.map(Into::into),
            ended_at: log.ended_at.map(Into::into),
        }
    }
}

impl From<model::LearningLog> for LearningLog {
    fn from(log: model::LearningLog) -> Self {
        Self::from_model(log)
    }
}

/// Pagination metadata echoed back with every log listing.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page number (1-based).
    pub page: i64,
    /// Number of items per page.
    pub per_page: i64,
    /// Total number of log entries across all pages.
    pub total: i64,
}

/// Response returned by the paginated log listing.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningLogBatch {
    /// One page of learning logs in the requested order.
    pub learning_logs: Vec<LearningLog>,
    /// Pagination metadata.
    pub page_info: PageInfo,
    /// The sort order that was applied, echoed back for the client.
    pub sort_order: SortOrder,
}

impl LearningLogBatch {
    /// Creates a new instance of [`LearningLogBatch`] from a query result.
    pub fn new(
        page: OffsetPage<model::LearningLog>,
        pagination: OffsetPagination,
        sort_order: SortOrder,
    ) -> Self {
        let page_info = PageInfo {
            page: pagination.page_number(),
            per_page: pagination.page_size(),
            total: page.total,
        };

        Self {
            learning_logs: page.items.into_iter().map(LearningLog::from).collect(),
            page_info,
            sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log(started_at: Option<Timestamp>) -> LearningLog {
        LearningLog {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            task_id: None,
            title: "Ownership and borrowing".into(),
            description: "Worked through the book chapter".into(),
            reflections: "Lifetimes finally click".into(),
            spent_minutes: 45,
            started_at,
            ended_at: None,
        }
    }

    #[test]
    fn serialization_omits_absent_optionals() {
        let json = serde_json::to_value(sample_log(None)).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("taskId"));
        assert!(!obj.contains_key("startedAt"));
        assert!(!obj.contains_key("endedAt"));
        assert!(!obj.contains_key("createdAt"));
    }

    #[test]
    fn serialization_uses_camel_case() {
        let started = "2025-06-01T09:00:00Z".parse().unwrap();
        let json = serde_json::to_value(sample_log(Some(started))).unwrap();
        let obj = json.as_object().unwrap();

        assert!(obj.contains_key("spentMinutes"));
        assert!(obj.contains_key("startedAt"));
        assert!(obj.contains_key("userId"));
    }

    #[test]
    fn batch_echoes_page_info_and_order() {
        let page = OffsetPage::new(vec![], 42);
        let pagination = OffsetPagination::from_page(3, 5);
        let batch = LearningLogBatch::new(page, pagination, SortOrder::Asc);

        assert_eq!(batch.page_info.page, 3);
        assert_eq!(batch.page_info.per_page, 5);
        assert_eq!(batch.page_info.total, 42);

        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["sortOrder"], "asc");
        assert_eq!(json["pageInfo"]["perPage"], 5);
    }
}
