//! In-memory SQLite layer for SpaceX launch records.
//!
//! This crate loads the launch CSV once into an in-memory SQLite table and
//! exposes typed query methods plus the two chart handlers the dashboard is
//! built around:
//!
//! - [`Database::success_pie_chart`]: successful launches by site, or
//!   success vs. failure for one site
//! - [`Database::payload_scatter_chart`]: payload mass against outcome,
//!   colored by booster version category
//!
//! # Usage
//!
//! ```rust
//! use spacex_db::Database;
//! use spacex_launch::launch_site::SiteFilter;
//!
//! let db = Database::from_csv(
//!     ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
//!      0,1,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT\n",
//! )
//! .unwrap();
//!
//! let pie = db.success_pie_chart(&SiteFilter::All).unwrap();
//! assert_eq!(pie.slices.len(), 1);
//! ```
//!
//! The table is written exactly once, by [`Database::load_launches`]; every
//! other method only reads it.

pub mod schema;
mod loader;
mod queries;
pub mod charts;
pub mod models;

use anyhow::anyhow;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory SQLite database holding the launch table.
///
/// Cheaply cloneable; clones share one connection. The connection sits
/// behind a `Mutex` so the same handle serves the single-threaded WASM
/// dashboard and the multi-threaded native HTTP server.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied and no rows.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a database and load it from launch CSV text.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_launches(csv_data)?;
        Ok(db)
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("launch database connection lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_launch_count().unwrap(), 0);
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_launches(
            ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
             0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n",
        )
        .unwrap();
        assert_eq!(
            db2.query_launch_count().unwrap(),
            1,
            "Clone should see same data via the shared connection"
        );
    }

    #[test]
    fn database_debug_names_the_handle() {
        let db = Database::new().unwrap();
        assert!(format!("{:?}", db).starts_with("Database"));
    }

    #[test]
    fn database_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }
}
