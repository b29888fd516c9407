//! Slot read/write queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    storage::Storage,
};

const SELECT_SLOT_SQL: &str = "SELECT value FROM slots WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Reads the raw value stored under `key`.
    pub fn get_slot(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read slot")
    }

    /// Replaces the value stored under `key`.
    pub fn put_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![key, value, now])
            .db_context("Failed to write slot")?;
        Ok(())
    }
}

impl Storage for super::Database {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.get_slot(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.put_slot(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Database;

    #[test]
    fn test_missing_slot_reads_none() {
        let db = Database::in_memory().unwrap();
        assert_eq!(db.get_slot("lumen-decisions").unwrap(), None);
    }

    #[test]
    fn test_put_slot_overwrites() {
        let mut db = Database::in_memory().unwrap();
        db.put_slot("lumen-decisions", "[]").unwrap();
        db.put_slot("lumen-decisions", "[1]").unwrap();
        assert_eq!(db.get_slot("lumen-decisions").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_slot_survives_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("journal.db");
        {
            let mut db = Database::new(&path).unwrap();
            db.put_slot("lumen-decisions", "[\"kept\"]").unwrap();
        }
        let db = Database::new(&path).unwrap();
        assert_eq!(
            db.get_slot("lumen-decisions").unwrap().as_deref(),
            Some("[\"kept\"]")
        );
    }
}
