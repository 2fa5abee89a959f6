use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Account;

pub fn insert_account(conn: &Connection, account: &Account) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO accounts (id, first_name, last_name, email, phone, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            account.id.to_string(),
            account.first_name,
            account.last_name,
            account.email,
            account.phone,
            account.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn get_account_by_email(
    conn: &Connection,
    email: &str,
) -> Result<Option<Account>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, email, phone, created_at
         FROM accounts WHERE email = ?1",
    )?;

    let row = stmt
        .query_row(params![email], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .optional()?;

    row.map(row_to_account).transpose()
}

type AccountRow = (String, String, String, String, String, String);

fn row_to_account(row: AccountRow) -> Result<Account, DatabaseError> {
    let (id, first_name, last_name, email, phone, created_at) = row;
    Ok(Account {
        id: Uuid::parse_str(&id).map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        first_name,
        last_name,
        email,
        phone,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
    })
}
