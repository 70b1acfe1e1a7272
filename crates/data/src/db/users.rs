//! `PostgreSQL` user store.
//!
//! Email comparisons run against `LOWER(email COLLATE "C")`, which is also
//! what the unique index in the `users` migration covers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use jungle_core::{EmailKey, PasswordDigest, UserId};

use super::{RepositoryError, UserStore};
use crate::models::user::{NewUserRecord, StoredUser, UserAccount, UserRecordChanges};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for account queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for UserAccount {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Internal row type for authentication lookups.
#[derive(sqlx::FromRow)]
struct StoredUserRow {
    #[sqlx(flatten)]
    user: UserRow,
    password_digest: String,
}

impl TryFrom<StoredUserRow> for StoredUser {
    type Error = RepositoryError;

    fn try_from(row: StoredUserRow) -> Result<Self, Self::Error> {
        if !row.password_digest.starts_with('$') {
            return Err(RepositoryError::DataCorruption(format!(
                "password digest for user {} is not a PHC string",
                row.user.id
            )));
        }

        Ok(Self {
            account: row.user.into(),
            password_digest: PasswordDigest::from_stored(row.password_digest),
        })
    }
}

/// Map a unique-index violation to `Conflict`.
fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict("email already exists".to_owned());
    }
    RepositoryError::Database(e)
}

// =============================================================================
// Store
// =============================================================================

/// User store backed by a `PostgreSQL` pool.
pub struct PgUserStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgUserStore<'a> {
    /// Create a new user store.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore<'_> {
    async fn find_by_email(&self, key: &EmailKey) -> Result<Vec<StoredUser>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoredUserRow>(
            r#"
            SELECT id, first_name, last_name, email, password_digest,
                   created_at, updated_at
            FROM users
            WHERE LOWER(email COLLATE "C") = $1
            ORDER BY id ASC
            "#,
        )
        .bind(key)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn email_taken(
        &self,
        key: &EmailKey,
        except: Option<UserId>,
    ) -> Result<bool, RepositoryError> {
        let (taken,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM users
                WHERE LOWER(email COLLATE "C") = $1
                  AND ($2::INTEGER IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(key)
        .bind(except)
        .fetch_one(self.pool)
        .await?;

        Ok(taken)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<UserAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, record: NewUserRecord) -> Result<UserAccount, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (first_name, last_name, email, password_digest)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, created_at, updated_at
            ",
        )
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(record.password_digest.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserRecordChanges,
    ) -> Result<UserAccount, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            UPDATE users
            SET first_name = $2,
                last_name = $3,
                email = $4,
                password_digest = COALESCE($5, password_digest),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(&changes.email)
        .bind(changes.password_digest.as_ref().map(PasswordDigest::as_str))
        .fetch_optional(self.pool)
        .await
        .map_err(map_write_error)?;

        row.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
