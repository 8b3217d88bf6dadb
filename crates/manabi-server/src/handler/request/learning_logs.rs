//! Learning log request types.

use jiff::Timestamp;
use manabi_postgres::model::{NewLearningLog, UpdateLearningLog};
use manabi_postgres::types::{OffsetPagination, SortOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request payload to create a new learning log entry.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLearningLog {
    /// Task this entry belongs to.
    pub task_id: Option<Uuid>,

    /// Short title of what was studied (1-64 characters).
    #[validate(length(min = 1, max = 64))]
    pub title: String,

    /// What was done during the session (1-2000 characters).
    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    /// What was learned or should be improved (1-2000 characters).
    #[validate(length(min = 1, max = 2000))]
    pub reflections: String,

    /// Minutes spent on the session (0-6000).
    #[validate(range(min = 0, max = 6000))]
    pub spent_minutes: i32,

    /// When the session started.
    pub started_at: Option<Timestamp>,

    /// When the session ended.
    pub ended_at: Option<Timestamp>,
}

impl CreateLearningLog {
    /// Converts the request into an insertable model for the given user.
    pub fn into_model(self, user_id: Uuid) -> NewLearningLog {
        NewLearningLog {
            user_id,
            task_id: self.task_id,
            title: self.title,
            description: self.description,
            reflections: self.reflections,
            spent_minutes: self.spent_minutes,
            started_at: self.started_at.map(Into::into),
            ended_at: self.ended_at.map(Into::into),
        }
    }
}

/// Request payload to update a learning log entry.
///
/// Omitted fields are left unchanged.
#[must_use]
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLearningLogRequest {
    /// New task reference.
    pub task_id: Option<Uuid>,

    /// New title (1-64 characters).
    #[validate(length(min = 1, max = 64))]
    pub title: Option<String>,

    /// New description (1-2000 characters).
    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,

    /// New reflections (1-2000 characters).
    #[validate(length(min = 1, max = 2000))]
    pub reflections: Option<String>,

    /// New minutes spent (0-6000).
    #[validate(range(min = 0, max = 6000))]
    pub spent_minutes: Option<i32>,

    /// New session start time.
    pub started_at: Option<Timestamp>,

    /// New session end time.
    pub ended_at: Option<Timestamp>,
}

impl UpdateLearningLogRequest {
    /// Converts the request into a changeset model.
    pub fn into_model(self) -> UpdateLearningLog {
        UpdateLearningLog {
            task_id: self.task_id.map(Some),
            title: self.title,
            description: self.description,
            reflections: self.reflections,
            spent_minutes: self.spent_minutes,
            started_at: self.started_at.map(|ts| Some(ts.into())),
            ended_at: self.ended_at.map(|ts| Some(ts.into())),
        }
    }

    /// Returns whether the request contains no changes.
    pub fn is_empty(&self) -> bool {
        self.task_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.reflections.is_none()
            && self.spent_minutes.is_none()
            && self.started_at.is_none()
            && self.ended_at.is_none()
    }
}

/// Query parameters for the paginated log listing.
///
/// Parameters arrive as raw strings so that malformed or out-of-range values
/// degrade to the documented defaults instead of failing the request.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LogSearchParams {
    /// Requested page number (1-999, defaults to 1).
    pub page: Option<String>,
    /// Requested page size (1-100, defaults to 5).
    pub per: Option<String>,
    /// Requested sort order (`asc` or `desc`, defaults to `desc`).
    pub order: Option<String>,
}

impl LogSearchParams {
    const DEFAULT_PAGE: i64 = 1;
    const DEFAULT_PER: i64 = 5;
    const MAX_PAGE: i64 = 999;
    const MAX_PER: i64 = 100;

    /// Returns the effective page number.
    pub fn page(&self) -> i64 {
        Self::parse_in_range(self.page.as_deref(), 1, Self::MAX_PAGE, Self::DEFAULT_PAGE)
    }

    /// Returns the effective page size.
    pub fn per(&self) -> i64 {
        Self::parse_in_range(self.per.as_deref(), 1, Self::MAX_PER, Self::DEFAULT_PER)
    }

    /// Returns the effective sort order.
    pub fn order(&self) -> SortOrder {
        match self.order.as_deref() {
            Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::default(),
        }
    }

    /// Returns the pagination window for the effective page and size.
    pub fn pagination(&self) -> OffsetPagination {
        OffsetPagination::from_page(self.page(), self.per())
    }

    fn parse_in_range(raw: Option<&str>, min: i64, max: i64, default: i64) -> i64 {
        match raw.map(str::parse::<i64>) {
            Some(Ok(value)) if (min..=max).contains(&value) => value,
            _ => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, per: Option<&str>, order: Option<&str>) -> LogSearchParams {
        LogSearchParams {
            page: page.map(str::to_owned),
            per: per.map(str::to_owned),
            order: order.map(str::to_owned),
        }
    }

    #[test]
    fn missing_params_use_defaults() {
        let search = params(None, None, None);
        assert_eq!(search.page(), 1);
        assert_eq!(search.per(), 5);
        assert_eq!(search.order(), SortOrder::Desc);
    }

    #[test]
    fn malformed_params_fall_back_to_defaults() {
        let search = params(Some("abc"), Some("-3"), Some("sideways"));
        assert_eq!(search.page(), 1);
        assert_eq!(search.per(), 5);
        assert_eq!(search.order(), SortOrder::Desc);
    }

    #[test]
    fn out_of_range_params_fall_back_to_defaults() {
        let search = params(Some("1000"), Some("101"), None);
        assert_eq!(search.page(), 1);
        assert_eq!(search.per(), 5);
    }

    #[test]
    fn valid_params_are_used() {
        let search = params(Some("3"), Some("20"), Some("asc"));
        assert_eq!(search.page(), 3);
        assert_eq!(search.per(), 20);
        assert_eq!(search.order(), SortOrder::Asc);

        let pagination = search.pagination();
        assert_eq!(pagination.offset, 40);
        assert_eq!(pagination.limit, 20);
    }

    #[test]
    fn spent_minutes_range_is_validated() {
        let request = CreateLearningLog {
            task_id: None,
            title: "Iterators".into(),
            description: "Adapter chains".into(),
            reflections: "Fold is underrated".into(),
            spent_minutes: 6001,
            started_at: None,
            ended_at: None,
        };
        assert!(request.validate().is_err());
    }
}
