//! SpaceX Launch Records Dashboard
//!
//! A site dropdown drives a pie chart of launch outcomes; the dropdown and
//! a payload range slider drive a scatter chart of payload mass against
//! launch outcome, colored by booster version category.
//!
//! Data flow:
//! 1. `build.rs` checks the launch CSV and copies it into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite table. A
//!    malformed file stops here: the error is shown and no controls or
//!    charts are rendered.
//! 4. The pie chart re-renders when the dropdown changes; the scatter chart
//!    re-renders when the dropdown or the slider changes.
//!
//! Serve locally with `dx serve` from this directory.

use dioxus::prelude::*;
use spacex_chart_ui::components::{
    ChartContainer, DashboardTitle, ErrorDisplay, LoadingSpinner, PayloadRangeSlider,
    SiteSelector,
};
use spacex_chart_ui::js_bridge;
use spacex_chart_ui::state::AppState;
use spacex_db::Database;

/// Launch records, embedded at build time.
const LAUNCH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

const PIE_CHART_ID: &str = "success-pie-chart";
const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launch-records-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the launch table once on mount
    use_effect(move || match Database::from_csv(LAUNCH_CSV) {
        Ok(db) => {
            match db.query_payload_bounds() {
                Ok((min_payload, max_payload)) => {
                    state.payload_low.set(min_payload);
                    state.payload_high.set(max_payload);
                }
                Err(e) => log::warn!("No payload bounds available: {}", e),
            }
            state.db.set(Some(db));
            state.loading.set(false);
        }
        Err(e) => {
            log::error!("Failed to load launch records: {:#}", e);
            state
                .error_msg
                .set(Some(format!("could not load launch records: {:#}", e)));
            state.loading.set(false);
        }
    });

    // Pie chart: depends on the dropdown only
    use_effect(move || {
        let Some(db) = ready_database(&state) else {
            return;
        };
        let site = (state.selected_site)();

        js_bridge::init_charts();
        match db.success_pie_chart(&site) {
            Ok(chart) => {
                let config_json = js_bridge::to_json(&serde_json::json!({
                    "emptyMessage": format!("No launches recorded for {}", site.value()),
                }));
                js_bridge::render_pie_chart(PIE_CHART_ID, &js_bridge::to_json(&chart), &config_json);
            }
            Err(e) => {
                log::error!("Pie chart query failed: {}", e);
                js_bridge::destroy_chart(PIE_CHART_ID);
            }
        }
    });

    // Scatter chart: depends on the dropdown and the slider
    use_effect(move || {
        let Some(db) = ready_database(&state) else {
            return;
        };
        let site = (state.selected_site)();
        let range = state.payload_range();

        js_bridge::init_charts();
        match db.payload_scatter_chart(&site, range) {
            Ok(chart) => {
                let config_json = js_bridge::to_json(&serde_json::json!({
                    "xMin": range.low,
                    "xMax": range.high.max(range.low + 1.0),
                    "emptyMessage": "No launches in the selected payload range",
                }));
                js_bridge::render_scatter_chart(
                    SCATTER_CHART_ID,
                    &js_bridge::to_json(&chart),
                    &config_json,
                );
            }
            Err(e) => {
                log::error!("Scatter chart query failed: {}", e);
                js_bridge::destroy_chart(SCATTER_CHART_ID);
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            DashboardTitle { title: DASHBOARD_TITLE.to_string() }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                SiteSelector {}
                br {}

                ChartContainer {
                    id: PIE_CHART_ID.to_string(),
                    label: "Launch success pie chart".to_string(),
                }
                br {}

                PayloadRangeSlider {}

                ChartContainer {
                    id: SCATTER_CHART_ID.to_string(),
                    label: "Payload vs. launch outcome scatter chart".to_string(),
                }
            }
        }
    }
}

/// The loaded table, or None while loading or after a startup failure.
fn ready_database(state: &AppState) -> Option<Database> {
    if (state.loading)() || (state.error_msg)().is_some() {
        return None;
    }
    state.db.read().clone()
}
