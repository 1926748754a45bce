//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use spacex_db::Database;
use spacex_launch::launch_site::SiteFilter;
use spacex_launch::payload_range::PayloadRange;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Launch table (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Startup error; when set the dashboard never becomes interactive
    pub error_msg: Signal<Option<String>>,
    /// Site dropdown value
    pub selected_site: Signal<SiteFilter>,
    /// Payload slider lower handle (kg)
    pub payload_low: Signal<f64>,
    /// Payload slider upper handle (kg)
    pub payload_high: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values: all sites and the
    /// full slider span.
    pub fn new() -> Self {
        let span = PayloadRange::slider_span();
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(SiteFilter::All),
            payload_low: Signal::new(span.low),
            payload_high: Signal::new(span.high),
        }
    }

    /// Current slider position as an inclusive range.
    pub fn payload_range(&self) -> PayloadRange {
        PayloadRange::new((self.payload_low)(), (self.payload_high)())
    }
}
