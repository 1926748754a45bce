//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to D3.js as JSON
//! from the Dioxus WASM frontend or returned from the HTTP API.

use serde::{Deserialize, Serialize};
use spacex_launch::outcome::Outcome;

/// Successful launch count for one site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteCount {
    pub launch_site: String,
    pub count: u32,
}

/// Launch count for one outcome at a single site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: u32,
}

/// A launch positioned on the payload scatter chart.
///
/// `payload_mass_kg` is the x coordinate, `class` the y coordinate and
/// `booster_version_category` the color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    pub flight_number: u32,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub class: u8,
    pub booster_version: String,
    pub booster_version_category: String,
}

/// Per-site launch totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSummary {
    pub launch_site: String,
    pub launches: u32,
    pub successes: u32,
    /// successes / launches, in [0, 1]
    pub success_rate: f64,
}
