//! PostgreSQL-backed `UserRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{StoreError, USERS_COLLECTION, UserRepository};
use crate::domain::{NewUser, User, UserFilter, UserId};

use super::error_mapping::{Access, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(USERS_COLLECTION, Access::Write))?;

        let user = User::new(UserId::random(), user.email);
        diesel::insert_into(users::table)
            .values(NewUserRow::from(&user))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error(USERS_COLLECTION, Access::Write))?;

        debug!(collection = USERS_COLLECTION, id = %user.id(), "document created");
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(USERS_COLLECTION, Access::Read))?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(*id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error(USERS_COLLECTION, Access::Read))?;

        Ok(row.map(User::from))
    }

    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(map_pool_error(USERS_COLLECTION, Access::Read))?;

        let mut query = users::table.into_boxed();
        if let Some(email) = filter.email.as_deref() {
            query = query.filter(users::email.eq(email));
        }

        let rows: Vec<UserRow> = query
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error(USERS_COLLECTION, Access::Read))?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
