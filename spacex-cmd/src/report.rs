//! Text and JSON output for the query commands.

use spacex_db::Database;
use spacex_launch::launch_site::SiteFilter;
use spacex_launch::payload_range::{check_bound, PayloadRange};

/// Per-site launch totals as a fixed-width table.
pub fn summary_table(db: &Database) -> anyhow::Result<String> {
    let summary = db.query_launch_summary()?;
    let mut out = format!(
        "{:<16} {:>8} {:>9} {:>8}\n",
        "Launch Site", "Launches", "Successes", "Rate"
    );
    let mut launches = 0;
    let mut successes = 0;
    for site in &summary {
        out.push_str(&format!(
            "{:<16} {:>8} {:>9} {:>7.1}%\n",
            site.launch_site,
            site.launches,
            site.successes,
            site.success_rate * 100.0
        ));
        launches += site.launches;
        successes += site.successes;
    }
    let rate = if launches == 0 {
        0.0
    } else {
        successes as f64 * 100.0 / launches as f64
    };
    out.push_str(&format!(
        "{:<16} {:>8} {:>9} {:>7.1}%\n",
        "Total", launches, successes, rate
    ));
    Ok(out)
}

/// The pie chart for a dropdown value, pretty-printed.
pub fn pie_json(db: &Database, site: &str) -> anyhow::Result<String> {
    let chart = db.success_pie_chart(&SiteFilter::from_value(site))?;
    Ok(serde_json::to_string_pretty(&chart)?)
}

/// The scatter chart for a dropdown value and payload bounds, pretty-printed.
/// A missing bound defaults to the table's payload extreme on that side.
pub fn scatter_json(
    db: &Database,
    site: &str,
    low: Option<f64>,
    high: Option<f64>,
) -> anyhow::Result<String> {
    let range = resolve_payload_range(db, low, high)?;
    let chart = db.payload_scatter_chart(&SiteFilter::from_value(site), range)?;
    Ok(serde_json::to_string_pretty(&chart)?)
}

/// Fill in missing payload bounds from the table, mirroring the slider's
/// default of `[min_payload, max_payload]`. Non-finite bounds are rejected.
pub fn resolve_payload_range(
    db: &Database,
    low: Option<f64>,
    high: Option<f64>,
) -> anyhow::Result<PayloadRange> {
    check_payload_bounds(low, high)?;
    let (min_payload, max_payload) = db.query_payload_bounds()?;
    PayloadRange::try_new(low.unwrap_or(min_payload), high.unwrap_or(max_payload))
}

/// Reject user-supplied payload bounds that are NaN or infinite.
pub fn check_payload_bounds(low: Option<f64>, high: Option<f64>) -> anyhow::Result<()> {
    if let Some(low) = low {
        check_bound("low", low)?;
    }
    if let Some(high) = high {
        check_bound("high", high)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Database {
        Database::from_csv(
            "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,1,2034.0,F9 FT B1019,FT
2,3,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
3,4,VAFB SLC-4E,0,9600.0,F9 B4  B1041.2,B4
",
        )
        .unwrap()
    }

    #[test]
    fn summary_table_totals() {
        let table = summary_table(&sample_db()).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Launch Site"));
        assert!(lines[1].starts_with("CCAFS LC-40"));
        assert!(lines[1].contains("50.0%"));
        assert!(lines[4].starts_with("Total"));
        assert!(lines[4].contains("50.0%"));
    }

    #[test]
    fn pie_json_for_site() {
        let json: serde_json::Value =
            serde_json::from_str(&pie_json(&sample_db(), "KSC LC-39A").unwrap()).unwrap();
        assert_eq!(json["title"], "Total Success Launches for site KSC LC-39A");
        assert_eq!(json["slices"][0]["label"], "Success");
        assert_eq!(json["slices"][0]["value"], 1);
    }

    #[test]
    fn scatter_json_defaults_to_table_bounds() {
        let db = sample_db();
        let range = resolve_payload_range(&db, None, None).unwrap();
        assert_eq!((range.low, range.high), (0.0, 9600.0));

        let json: serde_json::Value =
            serde_json::from_str(&scatter_json(&db, "ALL", Some(1000.0), None).unwrap()).unwrap();
        assert_eq!(json["points"].as_array().unwrap().len(), 3);
        assert_eq!(json["categories"], serde_json::json!(["B4", "FT"]));
    }

    #[test]
    fn scatter_json_rejects_nan_bound() {
        let db = sample_db();
        let err = scatter_json(&db, "ALL", Some(f64::NAN), None).unwrap_err();
        assert!(err.to_string().contains("finite"));
        assert!(resolve_payload_range(&db, None, Some(f64::INFINITY)).is_err());
    }
}
