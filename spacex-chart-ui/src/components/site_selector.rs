//! Dropdown selector for choosing a launch site.

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_launch::launch_site::SiteFilter;

/// DOM id of the site dropdown.
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";

/// Launch site dropdown: "All Sites" plus the four fixed sites.
/// Updates `selected_site` on change.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_site)();
    let options = SiteFilter::dropdown_options();

    let on_change = move |evt: Event<FormData>| {
        let site = SiteFilter::from_value(&evt.value());
        log::info!("site dropdown changed to {}", site.value());
        state.selected_site.set(site);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: SITE_DROPDOWN_ID,
                style: "font-weight: bold; margin-right: 8px;",
                "Launch Site: "
            }
            select {
                id: SITE_DROPDOWN_ID,
                title: "Select a Launch Site here",
                style: "min-width: 240px; padding: 4px;",
                onchange: on_change,
                for (value, label) in options.into_iter() {
                    option {
                        selected: value == selected.value(),
                        value: "{value}",
                        "{label}"
                    }
                }
            }
        }
    }
}
