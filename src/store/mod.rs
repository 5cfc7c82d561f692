//! SQLite persistence for chat exchanges.
//!
//! Every operation opens its own connection, so a `ChatStore` is just a path
//! and can be shared freely between workers. Callers on the async runtime
//! should run these methods through `tokio::task::spawn_blocking`.

use std::path::PathBuf;

use rusqlite::{params, Connection};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("open {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },
    #[error("initialize schema: {0}")]
    Schema(rusqlite::Error),
    #[error("query: {0}")]
    Query(#[from] rusqlite::Error),
}

/// One stored question/answer pair of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredTurn {
    pub user_message: String,
    pub bot_response: String,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct ChatStore {
    path: PathBuf,
}

impl ChatStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Creates the tables and indexes when missing.
    pub fn ensure_tables(&self) -> Result<(), StoreError> {
        let conn = self.open_conn()?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f', 'now')),
                last_activity TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f', 'now'))
            );

            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                session_id TEXT NOT NULL REFERENCES sessions(session_id) ON DELETE CASCADE,
                user_message TEXT NOT NULL,
                bot_response TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f', 'now'))
            );

            CREATE TABLE IF NOT EXISTS conversations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_message TEXT NOT NULL,
                bot_response TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f', 'now'))
            );

            CREATE INDEX IF NOT EXISTS idx_messages_session_id ON messages(session_id);
            CREATE INDEX IF NOT EXISTS idx_messages_created_at ON messages(created_at);
            ",
        )
        .map_err(StoreError::Schema)
    }

    /// Saves one exchange: touches the session, then appends to `messages`
    /// and `conversations`, all in one transaction.
    pub fn record_exchange(
        &self,
        session_id: &str,
        message: &str,
        response: &str,
    ) -> Result<(), StoreError> {
        let mut conn = self.open_conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO sessions (session_id) VALUES (?1)
             ON CONFLICT (session_id)
             DO UPDATE SET last_activity = strftime('%Y-%m-%dT%H:%M:%f', 'now')",
            params![session_id],
        )?;
        tx.execute(
            "INSERT INTO messages (session_id, user_message, bot_response) VALUES (?1, ?2, ?3)",
            params![session_id, message, response],
        )?;
        tx.execute(
            "INSERT INTO conversations (user_message, bot_response) VALUES (?1, ?2)",
            params![message, response],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Turns of a session, oldest first. Unknown sessions have no turns.
    pub fn history(&self, session_id: &str) -> Result<Vec<StoredTurn>, StoreError> {
        let conn = self.open_conn()?;
        let mut stmt = conn.prepare(
            "SELECT user_message, bot_response, created_at
             FROM messages
             WHERE session_id = ?1
             ORDER BY created_at ASC, id ASC",
        )?;

        let rows = stmt.query_map(params![session_id], |row| {
            Ok(StoredTurn {
                user_message: row.get(0)?,
                bot_response: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;

        let mut turns = Vec::new();
        for row in rows {
            turns.push(row?);
        }
        Ok(turns)
    }

    fn open_conn(&self) -> Result<Connection, StoreError> {
        let open_err = |source| StoreError::Open {
            path: self.path.display().to_string(),
            source,
        };
        let conn = Connection::open(&self.path).map_err(open_err)?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(open_err)?;
        conn.pragma_update(None, "busy_timeout", 5000)
            .map_err(open_err)?;
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_store() -> (TempDir, ChatStore) {
        let temp = TempDir::new().expect("tempdir");
        let store = ChatStore::new(temp.path().join("tutor.db"));
        store.ensure_tables().expect("ensure_tables");
        (temp, store)
    }

    #[test]
    fn ensure_tables_is_idempotent() {
        let (_temp, store) = make_store();
        store.ensure_tables().expect("second ensure_tables");
    }

    #[test]
    fn history_returns_turns_in_insertion_order() {
        let (_temp, store) = make_store();
        store.record_exchange("s1", "bonjour", "Bonjour !").unwrap();
        store.record_exchange("s2", "autre", "session").unwrap();
        store.record_exchange("s1", "12 + 7", "19").unwrap();

        let turns = store.history("s1").unwrap();
        let questions: Vec<_> = turns.iter().map(|t| t.user_message.as_str()).collect();
        assert_eq!(questions, ["bonjour", "12 + 7"]);
        assert_eq!(turns[1].bot_response, "19");
        assert!(store.history("inconnue").unwrap().is_empty());
    }

    #[test]
    fn exchanges_touch_the_session_and_the_flat_log() {
        let (_temp, store) = make_store();
        store.record_exchange("s1", "a", "b").unwrap();
        store.record_exchange("s1", "c", "d").unwrap();

        let conn = Connection::open(store.path()).unwrap();
        let sessions: i64 = conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
            .unwrap();
        let conversations: i64 = conn
            .query_row("SELECT COUNT(*) FROM conversations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(sessions, 1);
        assert_eq!(conversations, 2);
    }

    #[test]
    fn unreachable_path_is_an_open_error() {
        let temp = TempDir::new().expect("tempdir");
        let store = ChatStore::new(temp.path().join("missing").join("tutor.db"));
        assert!(matches!(
            store.record_exchange("s1", "a", "b"),
            Err(StoreError::Open { .. })
        ));
    }
}
