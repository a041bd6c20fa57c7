//! # Relational Store Adapter
//!
//! Resources as rows in a PostgreSQL `resources` table with an
//! auto-increment integer primary key.
//!
//! One shared [`PgPool`] is opened at startup and used concurrently by all
//! in-flight requests. Correctness relies on per-statement atomicity of
//! the backend; there is no client-side locking or retry. Deleted ids are
//! never reused because the sequence only advances.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use async_trait::async_trait;

use super::error::{StoreError, StoreResult};
use super::ResourceStore;
use crate::config::PostgresConfig;
use crate::model::{Resource, ResourceBody};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS resources (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description TEXT NOT NULL
)";

/// PostgreSQL-backed resource store.
///
/// Cheap to clone; clones share the same pool.
#[derive(Debug, Clone)]
pub struct PgResourceStore {
    pool: PgPool,
}

impl PgResourceStore {
    /// Opens a connection pool against the configured server.
    pub async fn connect(config: &PostgresConfig) -> StoreResult<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Idempotently creates the `resources` table.
    ///
    /// Called once at startup; failure is fatal to the process.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Closes the pool. Called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_resource(row: PgRow) -> StoreResult<Resource<i32>> {
    Ok(Resource {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
    })
}

#[async_trait]
impl ResourceStore for PgResourceStore {
    type Id = i32;

    async fn list(&self) -> StoreResult<Vec<Resource<i32>>> {
        let rows = sqlx::query("SELECT id, name, description FROM resources")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_resource).collect()
    }

    async fn get(&self, id: &i32) -> StoreResult<Resource<i32>> {
        let row = sqlx::query("SELECT id, name, description FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_resource).ok_or(StoreError::NotFound)?
    }

    async fn create(&self, body: ResourceBody) -> StoreResult<Resource<i32>> {
        let row = sqlx::query(
            "INSERT INTO resources (name, description) VALUES ($1, $2) \
             RETURNING id, name, description",
        )
        .bind(&body.name)
        .bind(&body.description)
        .fetch_one(&self.pool)
        .await?;

        row_to_resource(row)
    }

    async fn update(&self, id: &i32, body: ResourceBody) -> StoreResult<Resource<i32>> {
        // Zero rows updated is indistinguishable from "no such id" here;
        // both surface as NotFound.
        let row = sqlx::query(
            "UPDATE resources SET name = $1, description = $2 WHERE id = $3 \
             RETURNING id, name, description",
        )
        .bind(&body.name)
        .bind(&body.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_resource).ok_or(StoreError::NotFound)?
    }

    async fn delete(&self, id: &i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
