// HTTP request handlers
use crate::domain::selection::{DashboardEvent, SelectionState, Tab};
use crate::infrastructure::http_response::ApiError;
use crate::infrastructure::plotly_mapper::panel_to_json;
use crate::presentation::app_state::AppState;
use crate::presentation::page::DASHBOARD_PAGE;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PanelQuery {
    /// Dropdown value; absent means "entering the tab", empty means "cleared"
    pub value: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The dashboard page
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// Tab bar entries
pub async fn list_tabs() -> Json<Value> {
    let tabs: Vec<Value> = Tab::ALL
        .iter()
        .map(|tab| json!({ "value": tab.value(), "label": tab.label() }))
        .collect();
    Json(Value::Array(tabs))
}

/// Render one tab's dropdown and chart.
/// The browser owns the selection state, so each request starts from a fresh one.
pub async fn render_tab(
    Path(tab): Path<String>,
    Query(query): Query<PanelQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let tab: Tab = tab.parse()?;
    let event = match query.value {
        Some(value) => DashboardEvent::FilterChanged {
            tab,
            value: Some(value),
        },
        None => DashboardEvent::TabSelected(tab),
    };

    let mut selection = SelectionState::new(tab);
    let panel = state.dispatcher.handle(&mut selection, event);
    Ok(Json(panel_to_json(panel)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_context::DashboardContext;
    use crate::application::render_dispatcher::RenderDispatcher;
    use crate::domain::viewership::fixtures::sample_dataset;
    use crate::infrastructure::config::TabDefaults;

    fn state() -> Arc<AppState> {
        let context = Arc::new(DashboardContext::new(sample_dataset()));
        Arc::new(AppState {
            dispatcher: RenderDispatcher::new(context, &TabDefaults::default()),
        })
    }

    async fn get(tab: &str, value: Option<&str>) -> Result<Value, ApiError> {
        let query = PanelQuery {
            value: value.map(str::to_string),
        };
        render_tab(Path(tab.to_string()), Query(query), State(state()))
            .await
            .map(|Json(body)| body)
    }

    #[tokio::test]
    async fn test_entering_tab_uses_default() {
        let body = get("histogram", None).await.unwrap();
        assert_eq!(body["dropdown"]["value"], "China");
        assert_eq!(body["dropdown"]["clearable"], true);
    }

    #[tokio::test]
    async fn test_dropdown_change_renders_selected_value() {
        let body = get("scatter", Some("gymnastics")).await.unwrap();
        assert_eq!(
            body["figure"]["layout"]["title"]["text"],
            "Viewership for gymnastics in Every Country"
        );
        assert_eq!(body["figure"]["data"][0]["x"], json!(["China", "United States"]));
    }

    #[tokio::test]
    async fn test_empty_value_clears_histogram() {
        let body = get("histogram", Some("")).await.unwrap();
        assert_eq!(body["dropdown"]["value"], Value::Null);
        assert_eq!(
            body["figure"]["layout"]["title"]["text"],
            "Viewership by Gender in every country"
        );
    }

    #[tokio::test]
    async fn test_unmatched_value_is_empty_chart() {
        let body = get("scatter", Some("swimming")).await.unwrap();
        assert_eq!(body["figure"]["data"][0]["x"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_tab_is_error() {
        let err = get("pie", None).await.unwrap_err();
        assert!(matches!(err, ApiError::UnknownTab(_)));
    }

    #[tokio::test]
    async fn test_list_tabs_in_tab_bar_order() {
        let Json(body) = list_tabs().await;
        assert_eq!(body[0], json!({ "value": "scatter", "label": "Scatter Plot" }));
        assert_eq!(body[4]["value"], "choropleth");
    }
}
