//! Loads launch CSV text into the in-memory table.
//!
//! # CSV Format
//!
//! Headers required: `Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category`;
//! `Booster Version` and the unnamed index column are optional.
//!
//! ```text
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ```

use crate::Database;
use anyhow::bail;
use rusqlite::params;
use spacex_launch::launch_record::LaunchRecord;

impl Database {
    /// Parse and insert launch records, preserving CSV order.
    ///
    /// The whole file is validated before anything is inserted, so a
    /// malformed file leaves the table empty. The table may only be loaded
    /// once. Returns the number of records loaded.
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<usize> {
        let launches = LaunchRecord::parse_launch_csv(csv_data)?;

        let mut conn = self.conn()?;
        let existing: i64 = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        if existing > 0 {
            bail!("launch table is already loaded ({} records)", existing);
        }

        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO launches
                 (row_index, flight_number, launch_site, class, payload_mass_kg,
                  booster_version, booster_version_category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (row_index, launch) in launches.iter().enumerate() {
                stmt.execute(params![
                    row_index as i64,
                    launch.flight_number,
                    launch.launch_site,
                    launch.class,
                    launch.payload_mass_kg,
                    launch.booster_version,
                    launch.booster_version_category,
                ])?;
            }
        }
        tx.commit()?;

        log::info!("loader: Loaded {} launch records", launches.len());
        Ok(launches.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,30,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
2,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
";

    #[test]
    fn load_launches_from_csv() {
        let db = Database::new().unwrap();
        let loaded = db.load_launches(CSV).unwrap();
        assert_eq!(loaded, 3);

        let conn = db.conn().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let site: String = conn
            .query_row(
                "SELECT launch_site FROM launches WHERE flight_number = 30",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(site, "KSC LC-39A");
    }

    #[test]
    fn load_launches_preserves_file_order() {
        let db = Database::from_csv(CSV).unwrap();
        let flights: Vec<u32> = db
            .query_launches()
            .unwrap()
            .iter()
            .map(|l| l.flight_number)
            .collect();
        assert_eq!(flights, vec![1, 30, 6]);
    }

    #[test]
    fn load_launches_only_once() {
        let db = Database::from_csv(CSV).unwrap();
        assert!(db.load_launches(CSV).is_err());
        assert_eq!(db.query_launch_count().unwrap(), 3);
    }

    #[test]
    fn malformed_csv_loads_nothing() {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,3,0.0,F9 v1.0  B0004,v1.0
";
        assert!(db.load_launches(csv).is_err());
        assert_eq!(db.query_launch_count().unwrap(), 0);
    }
}
