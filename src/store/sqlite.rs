//! [`ClientStore`] backed by SQLite.
//!
//! Two tables, created on open if missing:
//!
//! ```text
//! clients            (id INTEGER PRIMARY KEY AUTOINCREMENT, name, age, comment)
//! operation_history  (id INTEGER PRIMARY KEY AUTOINCREMENT, client_id, status, date)
//! ```
//!
//! `AUTOINCREMENT` (rather than a plain rowid alias) keeps ids of deleted
//! clients from ever being handed out again. `operation_history.client_id` has
//! no foreign key, so history survives the client it describes.
//!
//! rusqlite is synchronous; every statement runs on Tokio's blocking pool while
//! holding the connection mutex.

use crate::model::{Client, ClientId, ClientInput, HistoryId, HistoryRecord, HistoryStatus};
use crate::store::{ClientStore, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL,
    age INT NULL,
    comment VARCHAR(1000) NULL
);
CREATE TABLE IF NOT EXISTS operation_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL,
    status VARCHAR(100) NOT NULL,
    date TEXT NOT NULL
);
";

/// Durable store over a single SQLite connection.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Opening sqlite store");
        Self::bootstrap(Connection::open(path)?)
    }

    /// A private in-memory database, gone when the store is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        debug!("Schema ready");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<R, F>(&self, f: F) -> Result<R, StoreError>
    where
        R: Send + 'static,
        F: FnOnce(&Connection) -> Result<R, StoreError> + Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| StoreError::Unavailable("sqlite connection poisoned".to_string()))?;
            f(&guard)
        })
        .await?
    }
}

fn client_id(raw: i64) -> Result<ClientId, StoreError> {
    u32::try_from(raw)
        .map(ClientId)
        .map_err(|_| StoreError::Corrupt(format!("client id out of range: {raw}")))
}

fn history_id(raw: i64) -> Result<HistoryId, StoreError> {
    u32::try_from(raw)
        .map(HistoryId)
        .map_err(|_| StoreError::Corrupt(format!("history id out of range: {raw}")))
}

type ClientRow = (i64, String, i64, String);
type HistoryRow = (i64, i64, String, String);

fn read_client_row(row: &Row<'_>) -> rusqlite::Result<ClientRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn read_history_row(row: &Row<'_>) -> rusqlite::Result<HistoryRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn to_client((id, name, age, comment): ClientRow) -> Result<Client, StoreError> {
    Ok(Client {
        id: client_id(id)?,
        name,
        age,
        comment,
    })
}

fn to_history((id, client, status, date): HistoryRow) -> Result<HistoryRecord, StoreError> {
    let status = status.parse::<HistoryStatus>().map_err(StoreError::Corrupt)?;
    let timestamp = DateTime::parse_from_rfc3339(&date)
        .map_err(|e| StoreError::Corrupt(format!("bad history date {date:?}: {e}")))?
        .with_timezone(&Utc);
    Ok(HistoryRecord {
        id: history_id(id)?,
        client_id: client_id(client)?,
        status,
        timestamp,
    })
}

#[async_trait]
impl ClientStore for SqliteStore {
    async fn create_client(&self, input: ClientInput) -> Result<ClientId, StoreError> {
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO clients (name, age, comment) VALUES (?1, ?2, ?3)",
                params![input.name, input.age, input.comment],
            )?;
            client_id(conn.last_insert_rowid())
        })
        .await
    }

    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, age, comment FROM clients ORDER BY id")?;
            let rows = stmt
                .query_map([], read_client_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows.into_iter().map(to_client).collect()
        })
        .await
    }

    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, StoreError> {
        self.with_conn(move |conn| {
            conn.query_row(
                "SELECT id, name, age, comment FROM clients WHERE id = ?1",
                params![id.0],
                read_client_row,
            )
            .optional()?
            .map(to_client)
            .transpose()
        })
        .await
    }

    async fn update_client(
        &self,
        id: ClientId,
        input: ClientInput,
    ) -> Result<Option<Client>, StoreError> {
        self.with_conn(move |conn| {
            conn.query_row(
                "UPDATE clients SET name = ?1, age = ?2, comment = ?3 WHERE id = ?4
                 RETURNING id, name, age, comment",
                params![input.name, input.age, input.comment, id.0],
                read_client_row,
            )
            .optional()?
            .map(to_client)
            .transpose()
        })
        .await
    }

    async fn delete_client(&self, id: ClientId) -> Result<bool, StoreError> {
        self.with_conn(move |conn| {
            let removed = conn.execute("DELETE FROM clients WHERE id = ?1", params![id.0])?;
            Ok(removed > 0)
        })
        .await
    }

    async fn append_history(
        &self,
        client_id: ClientId,
        status: HistoryStatus,
        timestamp: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO operation_history (client_id, status, date) VALUES (?1, ?2, ?3)",
                params![client_id.0, status.as_str(), timestamp.to_rfc3339()],
            )?;
            Ok(())
        })
        .await
    }

    async fn list_history(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, client_id, status, date FROM operation_history ORDER BY id")?;
            let rows = stmt
                .query_map([], read_history_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows.into_iter().map(to_history).collect()
        })
        .await
    }
}
