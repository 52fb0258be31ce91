//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static SERIES_CHART_JS: &str = include_str!("../assets/js/series-chart.js");
static CALENDAR_HEATMAP_JS: &str = include_str!("../assets/js/calendar-heatmap.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Global chart functions promoted to `window` once D3 is loaded.
const CHART_FUNCTIONS: [&str; 7] = [
    "renderBarChart",
    "renderSeriesChart",
    "renderCalendarHeatmap",
    "renderDataTable",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('LCA JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        web_sys::console::warn_2(&JsValue::from_str("LCA JS eval failed:"), &e);
    }
}

fn all_scripts() -> String {
    [
        TOOLTIP_JS,
        BAR_CHART_JS,
        SERIES_CHART_JS,
        CALENDAR_HEATMAP_JS,
        DATA_TABLE_JS,
    ]
    .join("\n")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope by an
/// indirect eval once D3 is available, so their function declarations are
/// not block-scoped inside the polling callback.
pub fn init_charts() {
    let store_js = format!(
        "window.__lcaChartScripts = {};",
        serde_json::to_string(&all_scripts()).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|name| {
            format!(
                "if (typeof {name} !== 'undefined') window.{name} = {name};\n",
                name = name
            )
        })
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__lcaChartScripts);
                    delete window.__lcaChartScripts;
                    {promote}
                    window.__lcaChartsReady = true;
                    console.log('LCA charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        promote = promote
    );
    let _ = js_sys::eval(&init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string.
fn escape(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Poll until the charts are initialized and the container exists, then
/// call `window.<function>(container, data, config)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let data = escape(data_json);
    let config = escape(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lcaChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{data}', '{config}');
                    }} catch(e) {{ console.error('[LCA] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a bar chart (availability per region, impact per generation type).
///
/// `points_json` is an array of `{x, y, series?}`; `config_json` is a
/// serialized `PageConfig`.
pub fn render_bar_chart(container_id: &str, points_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, points_json, config_json);
}

/// Render an area or line chart with one series per electricity type.
pub fn render_series_chart(container_id: &str, points_json: &str, config_json: &str) {
    render_when_ready("renderSeriesChart", container_id, points_json, config_json);
}

/// Render a day-by-day calendar heatmap from `{date, week, weekday, count}` cells.
pub fn render_calendar_heatmap(container_id: &str, cells_json: &str, config_json: &str) {
    render_when_ready(
        "renderCalendarHeatmap",
        container_id,
        cells_json,
        config_json,
    );
}

/// Render a sortable data table from an array of row objects.
pub fn render_data_table(container_id: &str, rows_json: &str, config_json: &str) {
    render_when_ready("renderDataTable", container_id, rows_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    match element {
        Some(el) => el.set_inner_html(""),
        None => log::debug!("no chart container {}", container_id),
    }
}
