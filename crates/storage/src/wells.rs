//! Well record repository over SQLite.

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::path::Path;
use tracing::debug;

use well_common::{CoordinateRow, WellError, WellRecord, WellResult};

/// Database connection pool and well-table operations.
///
/// Constructed once at process start and passed by handle to the ingestion
/// pipeline and the query layer. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct WellStore {
    pool: SqlitePool,
}

impl WellStore {
    /// Open (creating if missing) the SQLite database at `path` and ensure
    /// the schema exists.
    pub async fn open(path: impl AsRef<Path>) -> WellResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| WellError::DatabaseError(format!("Connection failed: {}", e)))?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Run schema migrations.
    async fn migrate(&self) -> WellResult<()> {
        // Split SQL statements and execute them individually
        for statement in SCHEMA_SQL.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| WellError::DatabaseError(format!("Migration failed: {}", e)))?;
            }
        }

        Ok(())
    }

    /// Close the pool, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Append one record. No uniqueness check: re-ingesting an identifier
    /// produces a second row, and read paths tolerate that.
    pub async fn insert(&self, record: &WellRecord) -> WellResult<()> {
        sqlx::query(
            r#"
            INSERT INTO wells (
                api, operator, status, well_type, work_type,
                directional_status, mineral_owner, surface_owner,
                completion_type, surface_location,
                multi_lateral, potash_waiver,
                gl_elevation, kb_elevation, df_elevation, tvd,
                spud_date, last_inspection,
                latitude, longitude, crs
            ) VALUES (
                ?, ?, ?, ?, ?,
                ?, ?, ?,
                ?, ?,
                ?, ?,
                ?, ?, ?, ?,
                ?, ?,
                ?, ?, ?
            )
            "#,
        )
        .bind(&record.api)
        .bind(&record.operator)
        .bind(&record.status)
        .bind(&record.well_type)
        .bind(&record.work_type)
        .bind(&record.directional_status)
        .bind(&record.mineral_owner)
        .bind(&record.surface_owner)
        .bind(&record.completion_type)
        .bind(&record.surface_location)
        .bind(record.multi_lateral)
        .bind(record.potash_waiver)
        .bind(record.gl_elevation)
        .bind(record.kb_elevation)
        .bind(record.df_elevation)
        .bind(record.tvd)
        .bind(record.spud_date)
        .bind(record.last_inspection)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(&record.crs)
        .execute(&self.pool)
        .await
        .map_err(|e| WellError::DatabaseError(format!("Insert failed: {}", e)))?;

        debug!(api = %record.api, "Inserted well record");
        Ok(())
    }

    /// Look up a record by its API number.
    ///
    /// When duplicate rows share the identifier, the first row in storage
    /// order wins; which duplicate that is carries no stability guarantee.
    pub async fn get_by_api(&self, api: &str) -> WellResult<Option<WellRecord>> {
        let row = sqlx::query_as::<_, WellRow>(
            "SELECT api, operator, status, well_type, work_type, \
             directional_status, mineral_owner, surface_owner, \
             completion_type, surface_location, multi_lateral, potash_waiver, \
             gl_elevation, kb_elevation, df_elevation, tvd, \
             spud_date, last_inspection, latitude, longitude, crs \
             FROM wells WHERE api = ? LIMIT 1",
        )
        .bind(api)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| WellError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }

    /// Scan the coordinate columns of every stored row, one entry per row.
    ///
    /// Rows without coordinates are included with nulls; the spatial engine
    /// is responsible for skipping them.
    pub async fn all_coordinates(&self) -> WellResult<Vec<CoordinateRow>> {
        let rows = sqlx::query_as::<_, CoordRow>("SELECT api, latitude, longitude FROM wells")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| WellError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|r| CoordinateRow {
                api: r.api,
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .collect())
    }
}

/// Internal row type for database queries.
#[derive(FromRow)]
struct WellRow {
    api: String,
    operator: Option<String>,
    status: Option<String>,
    well_type: Option<String>,
    work_type: Option<String>,
    directional_status: Option<String>,
    mineral_owner: Option<String>,
    surface_owner: Option<String>,
    completion_type: Option<String>,
    surface_location: Option<String>,
    multi_lateral: Option<bool>,
    potash_waiver: Option<bool>,
    gl_elevation: Option<f64>,
    kb_elevation: Option<f64>,
    df_elevation: Option<f64>,
    tvd: Option<f64>,
    spud_date: Option<NaiveDate>,
    last_inspection: Option<NaiveDate>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    crs: Option<String>,
}

impl From<WellRow> for WellRecord {
    fn from(row: WellRow) -> Self {
        WellRecord {
            api: row.api,
            operator: row.operator,
            status: row.status,
            well_type: row.well_type,
            work_type: row.work_type,
            directional_status: row.directional_status,
            mineral_owner: row.mineral_owner,
            surface_owner: row.surface_owner,
            completion_type: row.completion_type,
            surface_location: row.surface_location,
            multi_lateral: row.multi_lateral,
            potash_waiver: row.potash_waiver,
            gl_elevation: row.gl_elevation,
            kb_elevation: row.kb_elevation,
            df_elevation: row.df_elevation,
            tvd: row.tvd,
            spud_date: row.spud_date,
            last_inspection: row.last_inspection,
            latitude: row.latitude,
            longitude: row.longitude,
            crs: row.crs,
        }
    }
}

/// Internal row type for the coordinate scan.
#[derive(FromRow)]
struct CoordRow {
    api: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Database schema SQL.
///
/// `api` is deliberately not UNIQUE: the source schema has no uniqueness
/// constraint and duplicate rows from overlapping ingestion runs are an
/// accepted behavior.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS wells (
    api TEXT NOT NULL,
    operator TEXT,
    status TEXT,
    well_type TEXT,
    work_type TEXT,
    directional_status TEXT,
    mineral_owner TEXT,
    surface_owner TEXT,
    completion_type TEXT,
    surface_location TEXT,
    multi_lateral BOOLEAN,
    potash_waiver BOOLEAN,
    gl_elevation REAL,
    kb_elevation REAL,
    df_elevation REAL,
    tvd REAL,
    spud_date DATE,
    last_inspection DATE,
    latitude REAL,
    longitude REAL,
    crs TEXT
);
"#;
