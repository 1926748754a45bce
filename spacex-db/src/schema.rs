//! SQL schema for the in-memory launch table.

/// Returns the full SQL schema as a single batch string.
///
/// `launches.row_index` is the 0-based position of the record in the source
/// CSV; every query that returns rows orders by it so results follow file
/// order.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS launches (
        row_index INTEGER PRIMARY KEY,
        flight_number INTEGER NOT NULL,
        launch_site TEXT NOT NULL,
        class INTEGER NOT NULL CHECK (class IN (0, 1)),
        payload_mass_kg REAL NOT NULL CHECK (payload_mass_kg >= 0),
        booster_version TEXT NOT NULL,
        booster_version_category TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_launches_site ON launches(launch_site);
    CREATE INDEX IF NOT EXISTS idx_launches_payload ON launches(payload_mass_kg);
    "#
}
