//! SQLite document store
//!
//! Stores every collection in a single `documents` table with the JSON body
//! kept as text.

use super::{DocumentStore, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

/// SQLite-backed [`DocumentStore`]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    name: String,
}

impl SqliteDocumentStore {
    /// Open (creating if missing) the database at `url` and run migrations
    ///
    /// # Arguments
    /// * `url` - SQLite URL or plain file path; the `sqlite:` prefix is optional
    /// * `name` - Label reported by the diagnostic probe; defaults to the file stem
    ///
    /// # Returns
    /// * `Ok(SqliteDocumentStore)` if successful
    /// * `Err(StoreError)` if the database could not be opened or migrated
    pub async fn connect(url: &str, name: Option<&str>) -> Result<Self, StoreError> {
        let path = file_path(url);

        // Ensure parent directory exists
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Connection(format!("Failed to create db directory: {}", e))
                })?;
            }
        }

        let connection_string = if url.starts_with("sqlite:") {
            url.to_string()
        } else {
            format!("sqlite:{}", url)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| StoreError::Connection(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to database: {}", e)))?;

        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| default_name(path));

        info!(database = %name, "Connected to SQLite database at: {}", path);

        let store = Self { pool, name };
        store.run_migrations().await?;

        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), StoreError> {
        let migration_sql = include_str!("../../migrations/001_create_documents.sql");

        for statement in split_statements(migration_sql) {
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    StoreError::Connection(format!(
                        "Migration failed: {} - Statement: {}",
                        e,
                        statement.chars().take(100).collect::<String>()
                    ))
                })?;
        }

        debug!("Database migrations completed");
        Ok(())
    }

    /// Fetch a stored document body by id
    pub async fn get_document(&self, id: &str) -> Result<Option<Value>, StoreError> {
        let body: Option<String> = sqlx::query_scalar("SELECT body FROM documents WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        body.map(|b| {
            serde_json::from_str(&b).map_err(|e| StoreError::InvalidDocument(e.to_string()))
        })
        .transpose()
    }

    /// Close the connection pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn create_document(&self, collection: &str, record: Value) -> Result<String, StoreError> {
        let Value::Object(mut body) = record else {
            return Err(StoreError::InvalidDocument(
                "document must be a JSON object".to_string(),
            ));
        };

        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        body.insert("created_at".to_string(), Value::String(now.clone()));
        body.insert("updated_at".to_string(), Value::String(now.clone()));

        sqlx::query(
            "INSERT INTO documents (id, collection, body, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(collection)
        .bind(Value::Object(body).to_string())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        debug!("Created document {} in {}", id, collection);
        Ok(id)
    }

    fn is_initialized(&self) -> bool {
        !self.pool.is_closed()
    }

    fn name(&self) -> Option<&str> {
        self.is_initialized().then_some(self.name.as_str())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT collection FROM documents ORDER BY collection ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}

/// Strip the URL scheme, leaving the file path
fn file_path(url: &str) -> &str {
    let path = url.strip_prefix("sqlite:").unwrap_or(url);
    let path = path.strip_prefix("//").unwrap_or(path);
    path.split('?').next().unwrap_or(path)
}

fn default_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sqlite".to_string())
}

/// Split a migration script into statements, dropping `--` comments
fn split_statements(sql: &str) -> Vec<String> {
    let mut cleaned = String::new();
    for line in sql.lines() {
        let line = match line.find("--") {
            Some(pos) => &line[..pos],
            None => line,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        cleaned.push_str(trimmed);
        cleaned.push(' ');
    }

    cleaned
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
