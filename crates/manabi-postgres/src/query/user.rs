//! User repository for managing user profile operations.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewUser, UpdateUser, User};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for user profile database operations.
///
/// Handles profile creation on first sign-in, profile lookups and updates.
pub trait UserRepository {
    /// Creates a new user profile.
    fn create_user(&mut self, user: NewUser) -> impl Future<Output = PgResult<User>> + Send;

    /// Finds a user by their unique identifier.
    fn find_user_by_id(
        &mut self,
        user_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<User>>> + Send;

    /// Updates a user profile with partial changes.
    fn update_user(
        &mut self,
        user_id: Uuid,
        changes: UpdateUser,
    ) -> impl Future<Output = PgResult<User>> + Send;

    /// Returns whether a user with the given identifier exists.
    fn user_exists(&mut self, user_id: Uuid) -> impl Future<Output = PgResult<bool>> + Send;

    /// Counts all registered users.
    fn count_users(&mut self) -> impl Future<Output = PgResult<i64>> + Send;
}

impl UserRepository for PgConnection {
    async fn create_user(&mut self, user: NewUser) -> PgResult<User> {
        use schema::users;

        let user = diesel::insert_into(users::table)
            .values(&user)
            .returning(User::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn find_user_by_id(&mut self, user_id: Uuid) -> PgResult<Option<User>> {
        use schema::users::dsl::*;

        let user = users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn update_user(&mut self, user_id: Uuid, changes: UpdateUser) -> PgResult<User> {
        use schema::users::dsl::*;

        let user = diesel::update(users)
            .filter(id.eq(user_id))
            .set(&changes)
            .returning(User::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn user_exists(&mut self, user_id: Uuid) -> PgResult<bool> {
        use schema::users::dsl::*;

        let found = diesel::select(diesel::dsl::exists(users.filter(id.eq(user_id))))
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(found)
    }

    async fn count_users(&mut self) -> PgResult<i64> {
        use schema::users::dsl::*;

        let total = users
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(total)
    }
}
