//! Route storage on top of rusqlite.
//!
//! Every operation opens its own [`Connection`] and drops it before returning,
//! so the file is never held open between commands.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::schema::routes_schema;

const SELECT_ROUTES: &str = "
    SELECT routes.start_name, end_stations.station_title, routes.route_number
    FROM routes
    INNER JOIN end_stations ON end_stations.station_id = routes.station_id";

/// A route as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub start: String,
    pub end: String,
    pub number: i64,
}

impl Route {
    pub fn new(start: impl Into<String>, end: impl Into<String>, number: i64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            number,
        }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            start: row.get(0)?,
            end: row.get(1)?,
            number: row.get(2)?,
        })
    }
}

/// Handle to the routes database file.
#[derive(Debug, Clone)]
pub struct RouteStore {
    path: PathBuf,
}

impl RouteStore {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.db_path.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    /// Create both tables if they are missing. Safe to call on every run.
    pub fn initialize_schema(&self) -> Result<()> {
        debug!(path = %self.path.display(), "initializing schema");
        let conn = self.connect()?;
        conn.execute_batch(&routes_schema().to_sql())?;
        Ok(())
    }

    /// Insert a route, reusing the end station row when one with the same title exists.
    pub fn add_route(&self, start: &str, end: &str, number: i64) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT station_id FROM end_stations WHERE station_title = ?1",
                [end],
                |row| row.get(0),
            )
            .optional()?;

        let station_id = match existing {
            Some(id) => {
                debug!(station_id = id, end, "reusing end station");
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO end_stations (station_title) VALUES (?1)",
                    [end],
                )?;
                let id = tx.last_insert_rowid();
                debug!(station_id = id, end, "created end station");
                id
            }
        };

        tx.execute(
            "INSERT INTO routes (start_name, station_id, route_number) VALUES (?1, ?2, ?3)",
            params![start, station_id, number],
        )?;
        tx.commit()?;

        debug!(start, end, number, "route added");
        Ok(())
    }

    /// Every route, in the order SQLite returns them.
    pub fn select_all(&self) -> Result<Vec<Route>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_ROUTES)?;
        let routes = stmt
            .query_map([], Route::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(count = routes.len(), "selected all routes");
        Ok(routes)
    }

    /// Routes whose start name or end station title equals `station` exactly.
    pub fn select_routes(&self, station: &str) -> Result<Vec<Route>> {
        let conn = self.connect()?;
        let sql = format!(
            "{SELECT_ROUTES}
    WHERE routes.start_name = ?1 OR end_stations.station_title = ?1"
        );
        let mut stmt = conn.prepare(&sql)?;
        let routes = stmt
            .query_map([station], Route::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(station, count = routes.len(), "selected routes by station");
        Ok(routes)
    }
}
