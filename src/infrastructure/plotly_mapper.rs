// Mapper to convert chart descriptions into plotly.js figures
use crate::application::render_dispatcher::{Dropdown, Panel};
use crate::domain::chart::{ChartDescription, ChartKind, ColorEncoding, Geometry, Region, Series, XValue};
use serde_json::{json, Map, Value};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn panel_to_json(panel: Panel) -> Value {
    json!({
        "tab": panel.tab.value(),
        "dropdown": dropdown_to_json(panel.dropdown),
        "figure": chart_to_figure(panel.chart),
    })
}

fn dropdown_to_json(dropdown: Dropdown) -> Value {
    json!({
        "id": dropdown.id,
        "dimension": dropdown.dimension.column(),
        "options": &*dropdown.options,
        "value": dropdown.value,
        "clearable": dropdown.clearable,
    })
}

pub fn chart_to_figure(chart: ChartDescription) -> Value {
    let layout = layout(&chart);
    let data: Vec<Value> = match chart.geometry {
        Geometry::Series(series) => series
            .into_iter()
            .map(|s| series_to_trace(chart.kind, s))
            .collect(),
        Geometry::Regions(regions) => vec![regions_to_trace(&chart.color, regions)],
    };

    json!({ "data": data, "layout": layout })
}

fn layout(chart: &ChartDescription) -> Value {
    let mut layout = Map::new();
    layout.insert("title".into(), json!({ "text": chart.title }));

    if chart.kind == ChartKind::Choropleth {
        layout.insert(
            "geo".into(),
            json!({ "showframe": false, "projection": { "type": "natural earth" } }),
        );
        return Value::Object(layout);
    }

    layout.insert("xaxis".into(), json!({ "title": { "text": chart.x.label } }));
    layout.insert("yaxis".into(), json!({ "title": { "text": chart.y.label } }));

    if let Some(ColorEncoding::Discrete(dimension)) = &chart.color {
        layout.insert("barmode".into(), json!("group"));
        layout.insert("legend".into(), json!({ "title": { "text": dimension.column() } }));
    }

    Value::Object(layout)
}

fn series_to_trace(kind: ChartKind, series: Series) -> Value {
    let mut xs = Vec::with_capacity(series.points.len());
    let mut ys = Vec::with_capacity(series.points.len());
    let mut hover = Vec::with_capacity(series.points.len());
    for point in series.points {
        xs.push(match point.x {
            XValue::Category(category) => category,
            XValue::Time(time) => time.format(TIMESTAMP_FORMAT).to_string(),
        });
        ys.push(point.y);
        hover.push(point.hover);
    }

    let mut trace = trace_style(kind);
    trace.insert("x".into(), json!(xs));
    trace.insert("y".into(), json!(ys));
    if let Some(name) = series.name {
        trace.insert("name".into(), json!(name));
    }
    if matches!(kind, ChartKind::Scatter | ChartKind::Area) {
        trace.insert("hovertext".into(), json!(hover));
    }

    Value::Object(trace)
}

fn regions_to_trace(color: &Option<ColorEncoding>, regions: Vec<Region>) -> Value {
    let (field, scale) = match color {
        Some(ColorEncoding::Continuous { field, scale }) => (field.as_str(), scale.as_str()),
        _ => ("", "Plasma"),
    };

    let mut locations = Vec::with_capacity(regions.len());
    let mut values = Vec::with_capacity(regions.len());
    let mut names = Vec::with_capacity(regions.len());
    for region in regions {
        locations.push(region.code);
        values.push(region.value);
        names.push(region.name);
    }

    let mut trace = trace_style(ChartKind::Choropleth);
    trace.insert("locations".into(), json!(locations));
    trace.insert("z".into(), json!(values));
    trace.insert("hovertext".into(), json!(names));
    trace.insert("colorscale".into(), json!(scale));
    trace.insert("colorbar".into(), json!({ "title": { "text": field } }));

    Value::Object(trace)
}

/// plotly trace type and the fixed attributes that go with it
fn trace_style(kind: ChartKind) -> Map<String, Value> {
    let style = match kind {
        ChartKind::Scatter => json!({ "type": "scatter", "mode": "markers" }),
        ChartKind::Bar => json!({ "type": "bar" }),
        ChartKind::Histogram => json!({ "type": "histogram", "histfunc": "sum" }),
        ChartKind::Area => json!({
            "type": "scatter",
            "mode": "lines",
            "fill": "tozeroy",
            "hovertemplate": "%{x|%B %d, %Y %H:%M}<br>Total Viewership=%{y}<extra>%{hovertext}</extra>",
        }),
        ChartKind::Choropleth => json!({ "type": "choropleth", "locationmode": "ISO-3" }),
    };

    match style {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_context::DashboardContext;
    use crate::application::render_dispatcher::RenderDispatcher;
    use crate::domain::selection::{Selection, Tab};
    use crate::domain::viewership::fixtures::sample_dataset;
    use crate::infrastructure::config::TabDefaults;
    use std::sync::Arc;

    fn panel(tab: Tab, value: Option<&str>) -> Panel {
        let context = Arc::new(DashboardContext::new(sample_dataset()));
        RenderDispatcher::new(context, &TabDefaults::default()).render(&Selection {
            tab,
            value: value.map(str::to_string),
        })
    }

    #[test]
    fn test_bar_panel_has_one_trace_per_gender() {
        let json = panel_to_json(panel(Tab::Bar, Some("athletics")));

        assert_eq!(json["tab"], "bar");
        assert_eq!(json["dropdown"]["value"], "athletics");
        assert_eq!(json["dropdown"]["options"], json!(["athletics", "gymnastics"]));
        assert_eq!(json["dropdown"]["clearable"], false);

        let figure = &json["figure"];
        assert_eq!(figure["layout"]["barmode"], "group");
        assert_eq!(figure["data"][0]["type"], "bar");
        assert_eq!(figure["data"][0]["name"], "M");
        assert_eq!(figure["data"][0]["x"], json!(["China", "Kenya"]));
        assert_eq!(figure["data"][0]["y"], json!([100.0, 80.0]));
        assert_eq!(figure["data"][1]["name"], "F");
    }

    #[test]
    fn test_area_uses_timestamps() {
        let json = panel_to_json(panel(Tab::Area, Some("gymnastics")));
        let trace = &json["figure"]["data"][0];
        assert_eq!(trace["fill"], "tozeroy");
        assert_eq!(trace["x"], json!(["2022-02-05 10:00:00", "2022-02-07 20:00:00"]));
        assert_eq!(json["figure"]["layout"]["xaxis"]["title"]["text"], "Date and Time");
    }

    #[test]
    fn test_choropleth_trace() {
        let json = panel_to_json(panel(Tab::Choropleth, Some("athletics")));
        let trace = &json["figure"]["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locations"], json!(["CHN", "KEN"]));
        assert_eq!(trace["z"], json!([15.0, 8.0]));
        assert_eq!(trace["colorscale"], "Plasma");
        assert_eq!(trace["locationmode"], "ISO-3");
        assert!(json["figure"]["layout"].get("xaxis").is_none());
    }

    #[test]
    fn test_every_kind_has_a_trace_type() {
        let expected = [
            (ChartKind::Scatter, "scatter"),
            (ChartKind::Bar, "bar"),
            (ChartKind::Histogram, "histogram"),
            (ChartKind::Area, "scatter"),
            (ChartKind::Choropleth, "choropleth"),
        ];
        for (kind, trace_type) in expected {
            assert_eq!(trace_style(kind)["type"], trace_type);
        }
        assert!(trace_style(ChartKind::Bar).get("hovertemplate").is_none());
    }

    #[test]
    fn test_scatter_trace_carries_hover_text() {
        let json = panel_to_json(panel(Tab::Scatter, Some("gymnastics")));
        let trace = &json["figure"]["data"][0];
        assert_eq!(trace["mode"], "markers");
        assert_eq!(trace["hovertext"], json!(["China", "United States"]));
    }

    #[test]
    fn test_cleared_histogram_value_is_null() {
        let json = panel_to_json(panel(Tab::Histogram, None));
        assert_eq!(json["dropdown"]["value"], Value::Null);
        assert_eq!(json["figure"]["data"][0]["histfunc"], "sum");
    }
}
