//! SQLite persistence for registered users.
//!
//! A [`Database`] owns a single connection with an explicit open/close
//! lifecycle. Every operation on a closed database fails with
//! [`DbError::Closed`].

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::FormError;
use crate::validate::{enforce_email, enforce_text};

const CREATE_GUARD: &str = "CREATE TABLE IF NOT EXISTS ";

const USERS_TABLE: &str = "users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    email TEXT UNIQUE
)";

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database connection is closed")]
    Closed,
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
}

pub struct Database {
    conn: Option<Connection>,
    path: Option<PathBuf>,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        debug!(path = %db_path.display(), "database opened");
        Ok(Self {
            conn: Some(conn),
            path: Some(db_path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        debug!("in-memory database opened");
        Ok(Self { conn: Some(conn), path: None })
    }

    /// File backing this database; `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Close the connection. Closing twice fails with [`DbError::Closed`].
    pub fn close(&mut self) -> Result<()> {
        let conn = self.conn.take().ok_or(DbError::Closed)?;
        conn.close().map_err(|(_, err)| DbError::Sqlite(err))?;
        debug!("database closed");
        Ok(())
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(DbError::Closed)
    }

    /// Create a table from a definition such as `notes (id INTEGER)`.
    /// Existing tables are left alone.
    pub fn create_table(&self, definition: &str) -> Result<()> {
        enforce_text(definition, "table_definition")?;
        let query = format!("{CREATE_GUARD}{definition}");
        self.conn()?.execute_batch(&query)?;
        debug!(query = %query, "table created");
        Ok(())
    }

    pub fn create_users_table(&self) -> Result<()> {
        self.create_table(USERS_TABLE)
    }

    /// Insert a user row and return its id.
    pub fn insert_user(&self, username: &str, password_hash: &str, email: &str) -> Result<i64> {
        enforce_text(username, "username")?;
        enforce_text(password_hash, "password_hash")?;
        enforce_email(email, "email")?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO users (username, password_hash, email) VALUES (?1, ?2, ?3)",
            params![username, password_hash, email],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, username, "user inserted");
        Ok(id)
    }

    /// Every user row, in id order.
    pub fn users(&self) -> Result<Vec<UserRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, username, password_hash, email FROM users ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(UserRecord {
                id: row.get(0)?,
                username: row.get(1)?,
                password_hash: row.get(2)?,
                email: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// The first user row named `username`.
    pub fn find_user(&self, username: &str) -> Result<Option<UserRecord>> {
        enforce_text(username, "username")?;
        let record = self
            .conn()?
            .query_row(
                "SELECT id, username, password_hash, email FROM users WHERE username = ?1 ORDER BY id LIMIT 1",
                [username],
                |row| {
                    Ok(UserRecord {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        password_hash: row.get(2)?,
                        email: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    pub fn table_exists(&self, name: &str) -> Result<bool> {
        enforce_text(name, "table_name")?;
        let found = self
            .conn()?
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Names of all user tables, sorted.
    pub fn tables(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let names = stmt.query_map([], |row| row.get::<_, String>(0))?;
        Ok(names.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .field("open", &self.is_open())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.create_users_table().unwrap();
        db
    }

    #[test]
    fn users_table_is_created_once() {
        let db = db();
        db.create_users_table().unwrap();
        assert!(db.table_exists("users").unwrap());
        assert!(!db.table_exists("bookings").unwrap());
        assert_eq!(db.tables().unwrap(), vec!["users".to_owned()]);
    }

    #[test]
    fn create_custom_table() {
        let db = db();
        db.create_table("contacts (id TEXT PRIMARY KEY, name TEXT NOT NULL)").unwrap();
        assert_eq!(db.tables().unwrap(), vec!["contacts".to_owned(), "users".to_owned()]);
        assert!(matches!(db.create_table(" "), Err(DbError::Invalid(_))));
        assert!(matches!(db.create_table("broken ("), Err(DbError::Sqlite(_))));
    }

    #[test]
    fn insert_and_read_users() {
        let db = db();
        let first = db.insert_user("ada", "$hash1", "ada@example.com").unwrap();
        let second = db.insert_user("grace", "$hash2", "grace@navy.mil").unwrap();
        assert!(second > first);

        let users = db.users().unwrap();
        assert_eq!(
            users,
            vec![
                UserRecord {
                    id: first,
                    username: "ada".into(),
                    password_hash: "$hash1".into(),
                    email: Some("ada@example.com".into()),
                },
                UserRecord {
                    id: second,
                    username: "grace".into(),
                    password_hash: "$hash2".into(),
                    email: Some("grace@navy.mil".into()),
                },
            ]
        );
        assert_eq!(db.find_user("grace").unwrap().map(|u| u.id), Some(second));
        assert_eq!(db.find_user("linus").unwrap(), None);
    }

    #[test]
    fn email_is_unique() {
        let db = db();
        db.insert_user("ada", "$hash", "ada@example.com").unwrap();
        assert!(matches!(db.insert_user("ada2", "$hash", "ada@example.com"), Err(DbError::Sqlite(_))));
        assert!(matches!(db.insert_user("ada3", "$hash", "ada"), Err(DbError::Invalid(_))));
        assert_eq!(db.users().unwrap().len(), 1);
    }

    #[test]
    fn closed_database_refuses_work() {
        let mut db = db();
        assert!(db.is_open());
        db.close().unwrap();
        assert!(!db.is_open());
        assert!(matches!(db.users(), Err(DbError::Closed)));
        assert!(matches!(db.close(), Err(DbError::Closed)));
    }
}
