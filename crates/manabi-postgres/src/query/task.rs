//! Task repository for managing planned study work.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewTask, Task, UpdateTask};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for task database operations.
///
/// Handles task CRUD plus the ownership lookup used by the authorization layer.
pub trait TaskRepository {
    /// Creates a new task.
    fn create_task(&mut self, task: NewTask) -> impl Future<Output = PgResult<Task>> + Send;

    /// Finds a task by its unique identifier.
    fn find_task_by_id(
        &mut self,
        task_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Task>>> + Send;

    /// Returns the owner of a task without loading the full row.
    fn find_task_owner(
        &mut self,
        task_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Uuid>>> + Send;

    /// Lists tasks owned by a user, newest first.
    fn list_user_tasks(
        &mut self,
        owner_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Task>>> + Send;

    /// Updates a task with partial changes.
    fn update_task(
        &mut self,
        task_id: Uuid,
        changes: UpdateTask,
    ) -> impl Future<Output = PgResult<Task>> + Send;

    /// Permanently deletes a task.
    ///
    /// Learning logs referencing the task keep existing with their task
    /// reference cleared (`ON DELETE SET NULL`).
    fn delete_task(&mut self, task_id: Uuid) -> impl Future<Output = PgResult<()>> + Send;
}

impl TaskRepository for PgConnection {
    async fn create_task(&mut self, task: NewTask) -> PgResult<Task> {
        use schema::tasks;

        let task = diesel::insert_into(tasks::table)
            .values(&task)
            .returning(Task::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(task)
    }

    async fn find_task_by_id(&mut self, task_id: Uuid) -> PgResult<Option<Task>> {
        use schema::tasks::dsl::*;

        let task = tasks
            .filter(id.eq(task_id))
            .select(Task::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(task)
    }

    async fn find_task_owner(&mut self, task_id: Uuid) -> PgResult<Option<Uuid>> {
        use schema::tasks::dsl::*;

        let owner = tasks
            .filter(id.eq(task_id))
            .select(user_id)
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(owner)
    }

    async fn list_user_tasks(
        &mut self,
        owner_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Task>> {
        use schema::tasks::dsl::*;

        let items = tasks
            .filter(user_id.eq(owner_id))
            .select(Task::as_select())
            .order((created_at.desc(), id.desc()))
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(items)
    }

    async fn update_task(&mut self, task_id: Uuid, changes: UpdateTask) -> PgResult<Task> {
        use schema::tasks::dsl::*;

        let task = diesel::update(tasks)
            .filter(id.eq(task_id))
            .set(&changes)
            .returning(Task::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(task)
    }

    async fn delete_task(&mut self, task_id: Uuid) -> PgResult<()> {
        use schema::tasks::dsl::*;

        diesel::delete(tasks)
            .filter(id.eq(task_id))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(())
    }
}
