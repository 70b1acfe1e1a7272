//! In-process user store.
//!
//! Writes take the table's write lock for the whole check-then-insert, so two
//! concurrent sign-ups with the same email cannot both succeed.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use jungle_core::{EmailKey, UserId};

use super::{RepositoryError, UserStore};
use crate::models::user::{NewUserRecord, StoredUser, UserAccount, UserRecordChanges};

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<StoredUser>,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        let Ok(key) = EmailKey::normalize(email) else {
            return false;
        };
        self.rows
            .iter()
            .any(|row| Some(row.account.id) != except && key.matches(&row.account.email))
    }
}

/// User store held in memory.
#[derive(Default)]
pub struct MemoryUserStore {
    table: RwLock<Table>,
}

impl MemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the store holds no accounts.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }

    /// Insert a row without the uniqueness check.
    ///
    /// Stands in for data written before the constraint existed, so callers
    /// can exercise the duplicate-match path of authentication.
    pub async fn insert_unchecked(&self, record: NewUserRecord) -> UserAccount {
        let mut table = self.table.write().await;
        push_row(&mut table, record)
    }
}

fn push_row(table: &mut Table, record: NewUserRecord) -> UserAccount {
    table.next_id += 1;
    let now = Utc::now();
    let account = UserAccount {
        id: UserId::new(table.next_id),
        first_name: record.first_name,
        last_name: record.last_name,
        email: record.email,
        created_at: now,
        updated_at: now,
    };
    table.rows.push(StoredUser {
        account: account.clone(),
        password_digest: record.password_digest,
    });
    account
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, key: &EmailKey) -> Result<Vec<StoredUser>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|row| key.matches(&row.account.email))
            .cloned()
            .collect())
    }

    async fn email_taken(
        &self,
        key: &EmailKey,
        except: Option<UserId>,
    ) -> Result<bool, RepositoryError> {
        Ok(self.table.read().await.email_taken(key.as_str(), except))
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<UserAccount>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|row| row.account.id == id)
            .map(|row| row.account.clone()))
    }

    async fn insert(&self, record: NewUserRecord) -> Result<UserAccount, RepositoryError> {
        let mut table = self.table.write().await;
        if table.email_taken(&record.email, None) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }
        Ok(push_row(&mut table, record))
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserRecordChanges,
    ) -> Result<UserAccount, RepositoryError> {
        let mut table = self.table.write().await;
        if table.email_taken(&changes.email, Some(id)) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let row = table
            .rows
            .iter_mut()
            .find(|row| row.account.id == id)
            .ok_or(RepositoryError::NotFound)?;

        row.account.first_name = changes.first_name;
        row.account.last_name = changes.last_name;
        row.account.email = changes.email;
        row.account.updated_at = Utc::now();
        if let Some(digest) = changes.password_digest {
            row.password_digest = digest;
        }

        Ok(row.account.clone())
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.account.id != id);
        Ok(table.rows.len() < before)
    }
}
