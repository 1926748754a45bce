//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes chart data and calls those globals.

use serde::Serialize;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SpaceX dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderPieChart(...)` via
/// `function` declarations. They are evaluated at global scope via an
/// indirect `eval()` once D3 is ready and then promoted to `window.*`.
/// Calling this more than once is harmless.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__spacexChartsReady) {{ window.__spacexChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__spacexChartsReady || window.__spacexChartsPolling) return;
            window.__spacexChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__spacexChartScripts);
                    delete window.__spacexChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__spacexChartsReady = true;
                    console.log('SpaceX dashboard charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until D3.js, the chart scripts and the container element exist,
/// then call `window.{render_fn}(container_id, data, config)`.
fn render_when_ready(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(render_fn, container_id, data_json, config_json));
}

/// Build the render poll. At most one poll is pending per container: a
/// newer render clears the older poll before starting its own.
fn render_script(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let escaped_data = escape_js_literal(data_json);
    let escaped_config = escape_js_literal(config_json);
    format!(
        r#"
        (function() {{
            var pending = window.__spacexPendingRenders = window.__spacexPendingRenders || {{}};
            if (pending['{container_id}']) clearInterval(pending['{container_id}']);
            var poll = setInterval(function() {{
                if (window.__spacexChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    if (pending['{container_id}'] === poll) delete pending['{container_id}'];
                    try {{
                        window.{render_fn}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[SpaceX] {render_fn} error:', e); }}
                }}
            }}, 100);
            pending['{container_id}'] = poll;
        }})();
        "#,
    )
}

/// Escape JSON text for embedding in a single-quoted JS string literal.
fn escape_js_literal(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Serialize a chart description, logging instead of failing.
pub fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize chart data: {}", e);
            String::from("{}")
        }
    }
}

/// Render a pie chart. `chart_json` is a serialized `spacex_db::charts::PieChart`.
pub fn render_pie_chart(container_id: &str, chart_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, chart_json, config_json);
}

/// Render a scatter chart. `chart_json` is a serialized `spacex_db::charts::ScatterChart`.
pub fn render_scatter_chart(container_id: &str, chart_json: &str, config_json: &str) {
    render_when_ready("renderScatterChart", container_id, chart_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var pending = window.__spacexPendingRenders; \
         if (pending && pending['{id}']) {{ clearInterval(pending['{id}']); delete pending['{id}']; }} \
         var el = document.getElementById('{id}'); if (el) el.innerHTML = '';",
        id = container_id
    ));
}
