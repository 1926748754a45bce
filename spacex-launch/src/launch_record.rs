use anyhow::{bail, Context};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Column headers a launch CSV must carry. Any other columns (including the
/// unnamed leading index column) are ignored.
pub const REQUIRED_HEADERS: [&str; 5] = [
    "Flight Number",
    "Launch Site",
    "class",
    "Payload Mass (kg)",
    "Booster Version Category",
];

/// One launch attempt.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number")]
    pub flight_number: u32,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Success indicator: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub class: u8,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: String,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_class(self.class)
    }

    /// Check the record invariants: class is 0 or 1, payload mass is a
    /// finite, non-negative number, and the launch site is named.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.class > 1 {
            bail!("class must be 0 or 1, got {}", self.class);
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            bail!(
                "payload mass must be a non-negative number, got {}",
                self.payload_mass_kg
            );
        }
        if self.launch_site.is_empty() {
            bail!("launch site is empty");
        }
        Ok(())
    }

    /// Parse a CSV string of launch records, in file order.
    ///
    /// Expected headers: `,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category`
    ///
    /// Fails on the first malformed row, naming its 1-based data row.
    pub fn parse_launch_csv(csv_object: &str) -> anyhow::Result<Vec<LaunchRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers().context("failed to read launch CSV headers")?;
        for required in REQUIRED_HEADERS {
            if !headers.iter().any(|h| h == required) {
                bail!("launch CSV is missing required column '{}'", required);
            }
        }

        let mut launches = Vec::new();
        for (index, row) in rdr.deserialize::<LaunchRecord>().enumerate() {
            let data_row = index + 1;
            let record = row.with_context(|| format!("malformed launch record at data row {}", data_row))?;
            record
                .validate()
                .with_context(|| format!("invalid launch record at data row {}", data_row))?;
            launches.push(record);
        }
        log::info!("parsed {} launch records", launches.len());
        Ok(launches)
    }
}
