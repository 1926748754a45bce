//! The dashboard's chart handlers.
//!
//! Each handler is a pure function of its inputs and the loaded launch
//! table: it builds a serializable chart description and never writes.
//! The Dioxus app passes the result to the D3.js bridge; the HTTP API
//! returns it as JSON.

use crate::models::ScatterPoint;
use crate::Database;
use serde::{Deserialize, Serialize};
use spacex_launch::launch_site::SiteFilter;
use spacex_launch::payload_range::PayloadRange;
use std::collections::BTreeSet;

/// Pie chart title when every site is selected.
pub const PIE_TITLE_ALL_SITES: &str = "Total Success Launches by site";

pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "class";
pub const SCATTER_COLOR_LABEL: &str = "Booster Version Category";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieChart {
    pub title: String,
    /// What the slice labels are (`"Launch Site"` or `"class"`).
    pub names: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub points: Vec<ScatterPoint>,
    /// Sorted distinct booster version categories present in `points`.
    pub categories: Vec<String>,
}

/// Title of the single-site pie chart.
pub fn site_pie_title(launch_site: &str) -> String {
    format!("Total Success Launches for site {}", launch_site)
}

/// Title of the scatter chart for a site selection.
pub fn scatter_title(site: &SiteFilter) -> String {
    match site {
        SiteFilter::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteFilter::Site(name) => format!("Correlation between Payload and Success for site {}", name),
    }
}

impl Database {
    /// Pie chart for the site dropdown.
    ///
    /// - `All`: one slice per site with at least one success, sized by its
    ///   successful launch count.
    /// - `Site`: `Success` / `Failure` slices for that site; an outcome with
    ///   no launches has no slice, and an unknown site has no slices at all.
    pub fn success_pie_chart(&self, site: &SiteFilter) -> anyhow::Result<PieChart> {
        let chart = match site {
            SiteFilter::All => PieChart {
                title: PIE_TITLE_ALL_SITES.to_string(),
                names: "Launch Site".to_string(),
                slices: self
                    .query_success_counts_by_site()?
                    .into_iter()
                    .map(|c| PieSlice {
                        label: c.launch_site,
                        value: c.count,
                    })
                    .collect(),
            },
            SiteFilter::Site(name) => PieChart {
                title: site_pie_title(name),
                names: "class".to_string(),
                slices: self
                    .query_site_outcomes(name)?
                    .into_iter()
                    .map(|c| PieSlice {
                        label: c.outcome.label().to_string(),
                        value: c.count,
                    })
                    .collect(),
            },
        };
        if chart.slices.is_empty() {
            log::warn!("success_pie_chart: no launches for {:?}", site);
        }
        Ok(chart)
    }

    /// Scatter chart of payload mass against outcome for the site dropdown
    /// and payload slider.
    ///
    /// Records are filtered to the inclusive payload range first and the
    /// site filter is applied to that subset.
    pub fn payload_scatter_chart(
        &self,
        site: &SiteFilter,
        range: PayloadRange,
    ) -> anyhow::Result<ScatterChart> {
        let points = self.query_payload_points(site.site_name(), range)?;
        let categories = points
            .iter()
            .map(|p| p.booster_version_category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Ok(ScatterChart {
            title: scatter_title(site),
            x_label: SCATTER_X_LABEL.to_string(),
            y_label: SCATTER_Y_LABEL.to_string(),
            color_label: SCATTER_COLOR_LABEL.to_string(),
            points,
            categories,
        })
    }
}
