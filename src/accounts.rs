//! Account registration and lookup over the SQLite store.
//!
//! `AccountStore` owns the database connection behind a mutex and is the
//! only write path for accounts. Validation happens here, before any row
//! is touched, so a rejected registration leaves no partial state.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::{self, DatabaseError};
use crate::models::Account;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Required field missing or blank")]
    MissingFields,
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Shared handle to the account database.
#[derive(Clone)]
pub struct AccountStore {
    conn: Arc<Mutex<Connection>>,
}

impl AccountStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open the store at the given path, running migrations.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self::new(db::open_database(path)?))
    }

    /// Open an in-memory store (for testing).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        Ok(Self::new(db::open_memory_database()?))
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, AccountError> {
        self.conn.lock().map_err(|_| AccountError::LockPoisoned)
    }

    /// Register a new account.
    ///
    /// All fields are trimmed; a blank field or an already-registered
    /// email rejects the whole registration. The UNIQUE constraint on
    /// the email column backstops the pre-check.
    pub fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Account, AccountError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let email = email.trim();
        let phone = phone.trim();

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || phone.is_empty()
        {
            return Err(AccountError::MissingFields);
        }

        let conn = self.lock_conn()?;

        if db::get_account_by_email(&conn, email)?.is_some() {
            return Err(AccountError::DuplicateEmail);
        }

        let account = Account {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            created_at: Utc::now(),
        };

        match db::insert_account(&conn, &account) {
            Ok(()) => Ok(account),
            Err(DatabaseError::Sqlite(rusqlite::Error::SqliteFailure(e, _)))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(AccountError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up an account by its exact (trimmed) email.
    pub fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let conn = self.lock_conn()?;
        Ok(db::get_account_by_email(&conn, email.trim())?)
    }
}
