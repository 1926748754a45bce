//! Mount point for a D3.js chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id D3 renders into; the js_bridge render calls target it
    pub id: String,
    /// Accessible name for the chart region
    pub label: String,
    #[props(default = 420)]
    pub min_height: u32,
}

/// Chart region. The inner div stays empty until the D3 render poll finds
/// it, so the reserved height keeps the page from jumping.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; border: 1px solid #EEEEEE; border-radius: 4px; margin: 8px 0;",
        props.min_height
    );

    rsx! {
        section {
            style: "{style}",
            aria_label: "{props.label}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
