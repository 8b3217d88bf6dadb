//! Learning log repository for managing study session records.
//!
//! Besides the per-connection CRUD operations, this module provides the
//! paginated batch query used by the listing endpoint, which fans out the
//! page and count queries over two pooled connections.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{LearningLog, NewLearningLog, UpdateLearningLog};
use crate::types::{OffsetPage, OffsetPagination, SortOrder};
use crate::{PgClient, PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for learning log database operations.
///
/// Handles log CRUD, the ownership lookup used by the authorization layer,
/// and the ordered listing that backs the paginated log view.
pub trait LearningLogRepository {
    /// Creates a new learning log entry.
    fn create_log(
        &mut self,
        log: NewLearningLog,
    ) -> impl Future<Output = PgResult<LearningLog>> + Send;

    /// Finds a learning log by its unique identifier.
    fn find_log_by_id(
        &mut self,
        log_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<LearningLog>>> + Send;

    /// Returns the owner of a learning log without loading the full row.
    fn find_log_owner(
        &mut self,
        log_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Uuid>>> + Send;

    /// Updates a learning log with partial changes.
    fn update_log(
        &mut self,
        log_id: Uuid,
        changes: UpdateLearningLog,
    ) -> impl Future<Output = PgResult<LearningLog>> + Send;

    /// Permanently deletes a learning log.
    fn delete_log(&mut self, log_id: Uuid) -> impl Future<Output = PgResult<()>> + Send;

    /// Lists learning logs owned by a user.
    ///
    /// Results are ordered by session start time, with undated entries always
    /// sorted ahead of dated ones regardless of direction. Entries that tie on
    /// start time fall back to creation time and then to id, both following
    /// the requested direction, so the ordering is total and stable across
    /// pages.
    fn list_user_logs(
        &mut self,
        owner_id: Uuid,
        order: SortOrder,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<LearningLog>>> + Send;

    /// Counts all learning logs owned by a user.
    fn count_user_logs(&mut self, owner_id: Uuid) -> impl Future<Output = PgResult<i64>> + Send;
}

impl LearningLogRepository for PgConnection {
    async fn create_log(&mut self, log: NewLearningLog) -> PgResult<LearningLog> {
        use schema::learning_logs;

        let log = diesel::insert_into(learning_logs::table)
            .values(&log)
            .returning(LearningLog::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(log)
    }

    async fn find_log_by_id(&mut self, log_id: Uuid) -> PgResult<Option<LearningLog>> {
        use schema::learning_logs::dsl::*;

        let log = learning_logs
            .filter(id.eq(log_id))
            .select(LearningLog::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(log)
    }

    async fn find_log_owner(&mut self, log_id: Uuid) -> PgResult<Option<Uuid>> {
        use schema::learning_logs::dsl::*;

        let owner = learning_logs
            .filter(id.eq(log_id))
            .select(user_id)
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(owner)
    }

    async fn update_log(
        &mut self,
        log_id: Uuid,
        changes: UpdateLearningLog,
    ) -> PgResult<LearningLog> {
        use schema::learning_logs::dsl::*;

        let log = diesel::update(learning_logs)
            .filter(id.eq(log_id))
            .set(&changes)
            .returning(LearningLog::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(log)
    }

    async fn delete_log(&mut self, log_id: Uuid) -> PgResult<()> {
        use schema::learning_logs::dsl::*;

        diesel::delete(learning_logs)
            .filter(id.eq(log_id))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(())
    }

    async fn list_user_logs(
        &mut self,
        owner_id: Uuid,
        order: SortOrder,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<LearningLog>> {
        let items = ordered_user_logs(owner_id, order, pagination)
            .select(LearningLog::as_select())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(items)
    }

    async fn count_user_logs(&mut self, owner_id: Uuid) -> PgResult<i64> {
        use schema::learning_logs::dsl::*;

        let total = learning_logs
            .filter(user_id.eq(owner_id))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(total)
    }
}

/// Builds the ordered, paginated listing query for a user's logs.
///
/// Undated sessions stay first in both directions; `nulls_first` overrides
/// the PostgreSQL default of NULLS LAST for ASC. Ties on start time break
/// on creation time and then id, both in the requested direction.
fn ordered_user_logs(
    owner_id: Uuid,
    order: SortOrder,
    pagination: OffsetPagination,
) -> schema::learning_logs::BoxedQuery<'static, diesel::pg::Pg> {
    use schema::learning_logs::dsl::*;

    let query = learning_logs.filter(user_id.eq(owner_id)).into_boxed();

    let query = match order {
        SortOrder::Asc => query.order((
            started_at.asc().nulls_first(),
            created_at.asc(),
            id.asc(),
        )),
        SortOrder::Desc => query.order((
            started_at.desc().nulls_first(),
            created_at.desc(),
            id.desc(),
        )),
    };

    query.limit(pagination.limit).offset(pagination.offset)
}

/// Paginated batch query over a [`PgClient`].
///
/// Unlike [`LearningLogRepository`], which operates on a single connection,
/// this trait runs the page query and the total count concurrently on two
/// pooled connections and joins the results.
pub trait LearningLogBatchQuery {
    /// Fetches one page of a user's learning logs together with the total count.
    fn find_log_batch(
        &self,
        owner_id: Uuid,
        order: SortOrder,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<OffsetPage<LearningLog>>> + Send;
}

impl LearningLogBatchQuery for PgClient {
    async fn find_log_batch(
        &self,
        owner_id: Uuid,
        order: SortOrder,
        pagination: OffsetPagination,
    ) -> PgResult<OffsetPage<LearningLog>> {
        let items = async {
            let mut conn = self.get_connection().await?;
            conn.list_user_logs(owner_id, order, pagination).await
        };

        let total = async {
            let mut conn = self.get_connection().await?;
            conn.count_user_logs(owner_id).await
        };

        let (items, total) = futures::try_join!(items, total)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            owner_id = %owner_id,
            page_items = items.len(),
            total,
            "Fetched learning log batch"
        );

        Ok(OffsetPage::new(items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(order: SortOrder) -> String {
        let query = ordered_user_logs(Uuid::nil(), order, OffsetPagination::new(5, 0));
        diesel::debug_query::<diesel::pg::Pg, _>(&query).to_string()
    }

    #[test]
    fn undated_logs_sort_first_in_both_directions() {
        assert!(rendered(SortOrder::Asc).contains("\"started_at\" ASC NULLS FIRST"));
        assert!(rendered(SortOrder::Desc).contains("\"started_at\" DESC NULLS FIRST"));
    }

    #[test]
    fn ties_break_on_creation_time_then_id() {
        let sql = rendered(SortOrder::Asc);
        assert!(sql.contains("\"created_at\" ASC"));
        assert!(sql.contains("\"id\" ASC"));

        let sql = rendered(SortOrder::Desc);
        assert!(sql.contains("\"created_at\" DESC"));
        assert!(sql.contains("\"id\" DESC"));
    }

    #[test]
    fn sort_keys_are_applied_in_order() {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sql = rendered(order);
            let clause = &sql[sql.find("ORDER BY").unwrap()..];

            let started = clause.find("\"started_at\"").unwrap();
            let created = clause.find("\"created_at\"").unwrap();
            let log_id = clause.find("\"id\"").unwrap();
            assert!(started < created);
            assert!(created < log_id);
        }
    }
}
