//! Repository layer: entity-scoped database operations.
//!
//! Functions take a `&Connection` and map rows to model structs. All
//! public functions are re-exported here.

mod account;

pub use account::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::db::sqlite::open_memory_database;
    use crate::models::Account;
    use rusqlite::Connection;
    use uuid::Uuid;

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    fn make_account(email: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: email.into(),
            phone: "555-0101".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn account_insert_and_retrieve() {
        let conn = test_db();
        let account = make_account("asha@example.com");
        insert_account(&conn, &account).unwrap();

        let stored = get_account_by_email(&conn, "asha@example.com")
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, account.id);
        assert_eq!(stored.first_name, "Asha");
        assert_eq!(stored.last_name, "Rao");
        assert_eq!(stored.phone, "555-0101");
        // Timestamps survive the TEXT round trip to the second.
        assert_eq!(
            stored.created_at.timestamp(),
            account.created_at.timestamp()
        );
    }

    #[test]
    fn account_email_unique_constraint() {
        let conn = test_db();
        insert_account(&conn, &make_account("asha@example.com")).unwrap();

        let duplicate = insert_account(&conn, &make_account("asha@example.com"));
        assert!(duplicate.is_err());

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn get_account_by_email_unknown_returns_none() {
        let conn = test_db();
        let found = get_account_by_email(&conn, "nobody@example.com").unwrap();
        assert!(found.is_none());
    }
}
