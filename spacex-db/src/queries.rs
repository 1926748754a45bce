//! Typed query methods over the launch table.
//!
//! All queries return structs from [`crate::models`] (or core types from
//! `spacex-launch`) and never modify the table.

use crate::models::{OutcomeCount, ScatterPoint, SiteCount, SiteSummary};
use crate::Database;
use rusqlite::params;
use spacex_launch::launch_record::LaunchRecord;
use spacex_launch::outcome::Outcome;
use spacex_launch::payload_range::PayloadRange;

impl Database {
    /// Number of loaded launch records.
    pub fn query_launch_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Every launch record, in file order.
    pub fn query_launches(&self) -> anyhow::Result<Vec<LaunchRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT flight_number, launch_site, class, payload_mass_kg,
                    booster_version, booster_version_category
             FROM launches
             ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(LaunchRecord {
                    flight_number: row.get(0)?,
                    launch_site: row.get(1)?,
                    class: row.get(2)?,
                    payload_mass_kg: row.get(3)?,
                    booster_version: row.get(4)?,
                    booster_version_category: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Distinct launch sites, ordered by first appearance in the file.
    pub fn query_launch_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT launch_site FROM launches
             GROUP BY launch_site
             ORDER BY MIN(row_index)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Smallest and largest payload mass in the table, `(0.0, 0.0)` when empty.
    ///
    /// This is the default position of the payload slider.
    pub fn query_payload_bounds(&self) -> anyhow::Result<(f64, f64)> {
        let conn = self.conn()?;
        let (min, max): (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok((min.unwrap_or(0.0), max.unwrap_or(0.0)))
    }

    /// Successful launches grouped by site, largest count first, ties by
    /// site name. Sites without a success do not appear.
    pub fn query_success_counts_by_site(&self) -> anyhow::Result<Vec<SiteCount>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT launch_site, COUNT(*) AS successes
             FROM launches
             WHERE class = 1
             GROUP BY launch_site
             ORDER BY successes DESC, launch_site",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteCount {
                    launch_site: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_success_counts_by_site returned {} sites",
            rows.len()
        );
        Ok(rows)
    }

    /// Launch counts per outcome at one site, largest count first, ties with
    /// `Failure` before `Success`. Outcomes that never happened do not
    /// appear; an unknown site returns nothing.
    pub fn query_site_outcomes(&self, launch_site: &str) -> anyhow::Result<Vec<OutcomeCount>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT class, COUNT(*) AS launches
             FROM launches
             WHERE launch_site = ?1
             GROUP BY class
             ORDER BY launches DESC, class",
        )?;
        let rows = stmt
            .query_map(params![launch_site], |row| {
                Ok(OutcomeCount {
                    outcome: Outcome::from_class(row.get(0)?),
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_site_outcomes({}) returned {} outcomes",
            launch_site,
            rows.len()
        );
        Ok(rows)
    }

    /// Launches whose payload lies in `range` (inclusive), optionally
    /// restricted to one site, in file order.
    pub fn query_payload_points(
        &self,
        launch_site: Option<&str>,
        range: PayloadRange,
    ) -> anyhow::Result<Vec<ScatterPoint>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT flight_number, launch_site, payload_mass_kg, class,
                    booster_version, booster_version_category
             FROM launches
             WHERE payload_mass_kg >= ?1 AND payload_mass_kg <= ?2
               AND (?3 IS NULL OR launch_site = ?3)
             ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map(params![range.low, range.high, launch_site], |row| {
                Ok(ScatterPoint {
                    flight_number: row.get(0)?,
                    launch_site: row.get(1)?,
                    payload_mass_kg: row.get(2)?,
                    class: row.get(3)?,
                    booster_version: row.get(4)?,
                    booster_version_category: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_payload_points({:?}, {}..={}) returned {} records",
            launch_site,
            range.low,
            range.high,
            rows.len()
        );
        Ok(rows)
    }

    /// Launch and success totals per site, ordered by first appearance.
    pub fn query_launch_summary(&self) -> anyhow::Result<Vec<SiteSummary>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT launch_site, COUNT(*), SUM(class)
             FROM launches
             GROUP BY launch_site
             ORDER BY MIN(row_index)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let launches: u32 = row.get(1)?;
                let successes: u32 = row.get(2)?;
                Ok(SiteSummary {
                    launch_site: row.get(0)?,
                    launches,
                    successes,
                    success_rate: if launches == 0 {
                        0.0
                    } else {
                        successes as f64 / launches as f64
                    },
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn sample_db() -> Database {
        Database::from_csv(
            "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,1,2034.0,F9 FT B1019,FT
2,3,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
3,4,KSC LC-39A,1,5600.0,F9 FT B1030,FT
4,5,KSC LC-39A,0,5300.0,F9 FT  B1021.2,FT
5,6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
6,7,CCAFS SLC-40,1,9600.0,F9 B5 B1046.2,B5
",
        )
        .unwrap()
    }

    #[test]
    fn launch_sites_in_file_order() {
        let db = sample_db();
        assert_eq!(
            db.query_launch_sites().unwrap(),
            vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E", "CCAFS SLC-40"]
        );
    }

    #[test]
    fn payload_bounds() {
        let db = sample_db();
        assert_eq!(db.query_payload_bounds().unwrap(), (0.0, 9600.0));
    }

    #[test]
    fn payload_bounds_empty_table() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_payload_bounds().unwrap(), (0.0, 0.0));
    }

    #[test]
    fn success_counts_by_site_ordering() {
        let db = sample_db();
        let counts = db.query_success_counts_by_site().unwrap();
        assert_eq!(
            counts,
            vec![
                SiteCount { launch_site: "KSC LC-39A".into(), count: 2 },
                SiteCount { launch_site: "CCAFS LC-40".into(), count: 1 },
                SiteCount { launch_site: "CCAFS SLC-40".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn site_outcomes() {
        let db = sample_db();
        let outcomes = db.query_site_outcomes("KSC LC-39A").unwrap();
        assert_eq!(
            outcomes,
            vec![
                OutcomeCount { outcome: Outcome::Success, count: 2 },
                OutcomeCount { outcome: Outcome::Failure, count: 1 },
            ]
        );

        // A tie puts Failure first
        let outcomes = db.query_site_outcomes("CCAFS LC-40").unwrap();
        assert_eq!(outcomes[0].outcome, Outcome::Failure);
        assert_eq!(outcomes[1].outcome, Outcome::Success);

        assert!(db.query_site_outcomes("Boca Chica").unwrap().is_empty());
    }

    #[test]
    fn payload_points_filters_range_and_site() {
        let db = sample_db();
        let points = db
            .query_payload_points(None, PayloadRange::new(500.0, 5300.0))
            .unwrap();
        let flights: Vec<u32> = points.iter().map(|p| p.flight_number).collect();
        assert_eq!(flights, vec![2, 3, 5, 6]);

        let points = db
            .query_payload_points(Some("KSC LC-39A"), PayloadRange::new(500.0, 5300.0))
            .unwrap();
        let flights: Vec<u32> = points.iter().map(|p| p.flight_number).collect();
        assert_eq!(flights, vec![3, 5]);
    }

    #[test]
    fn launch_summary() {
        let db = sample_db();
        let summary = db.query_launch_summary().unwrap();
        assert_eq!(summary.len(), 4);
        assert_eq!(summary[1].launch_site, "KSC LC-39A");
        assert_eq!(summary[1].launches, 3);
        assert_eq!(summary[1].successes, 2);
        assert!((summary[1].success_rate - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary[2].successes, 0);
    }
}
