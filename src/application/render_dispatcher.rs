// Render dispatcher - maps tab/dropdown events to the panel that should be shown
use crate::application::chart_builders::{self, ChartBuilder};
use crate::application::dashboard_context::DashboardContext;
use crate::domain::chart::ChartDescription;
use crate::domain::selection::{DashboardEvent, Selection, SelectionState, Tab};
use crate::domain::viewership::Dimension;
use crate::infrastructure::config::TabDefaults;
use std::collections::HashMap;
use std::sync::Arc;

/// Static wiring of one tab: which dropdown it shows and which builder it runs
struct TabRoute {
    tab: Tab,
    dropdown_id: &'static str,
    dimension: Dimension,
    clearable: bool,
    build: ChartBuilder,
}

static SCATTER: TabRoute = TabRoute {
    tab: Tab::Scatter,
    dropdown_id: "scatter-sport",
    dimension: Dimension::Sports,
    clearable: false,
    build: chart_builders::scatter,
};

static BAR: TabRoute = TabRoute {
    tab: Tab::Bar,
    dropdown_id: "bar-sport",
    dimension: Dimension::Sports,
    clearable: false,
    build: chart_builders::bar,
};

static HISTOGRAM: TabRoute = TabRoute {
    tab: Tab::Histogram,
    dropdown_id: "histogram-country",
    dimension: Dimension::Country,
    clearable: true,
    build: chart_builders::histogram,
};

static AREA: TabRoute = TabRoute {
    tab: Tab::Area,
    dropdown_id: "area-sport",
    dimension: Dimension::Sports,
    clearable: false,
    build: chart_builders::area,
};

static CHOROPLETH: TabRoute = TabRoute {
    tab: Tab::Choropleth,
    dropdown_id: "choropleth-sport",
    dimension: Dimension::Sports,
    clearable: false,
    build: chart_builders::choropleth,
};

fn route(tab: Tab) -> &'static TabRoute {
    match tab {
        Tab::Scatter => &SCATTER,
        Tab::Bar => &BAR,
        Tab::Histogram => &HISTOGRAM,
        Tab::Area => &AREA,
        Tab::Choropleth => &CHOROPLETH,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub id: &'static str,
    pub dimension: Dimension,
    pub options: Arc<[String]>,
    pub value: Option<String>,
    pub clearable: bool,
}

/// What the output region shows for one tab
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub tab: Tab,
    pub dropdown: Dropdown,
    pub chart: ChartDescription,
}

#[derive(Clone)]
pub struct RenderDispatcher {
    context: Arc<DashboardContext>,
    defaults: HashMap<Tab, Option<String>>,
}

impl RenderDispatcher {
    pub fn new(context: Arc<DashboardContext>, configured: &TabDefaults) -> Self {
        let defaults = Tab::ALL
            .into_iter()
            .map(|tab| {
                let value = resolve_default(&context, route(tab), configured.get(tab));
                (tab, value)
            })
            .collect();

        Self { context, defaults }
    }

    pub fn default_value(&self, tab: Tab) -> Option<&str> {
        self.defaults.get(&tab).and_then(|v| v.as_deref())
    }

    /// Render the panel for a tab with an explicit dropdown value.
    /// A missing value falls back to the tab's default unless the dropdown is clearable.
    pub fn render(&self, selection: &Selection) -> Panel {
        let route = route(selection.tab);
        let value = self.effective_value(route, selection.value.clone());
        let chart = (route.build)(self.context.dataset(), value.as_deref());

        tracing::debug!(
            "Rendered {} tab (filter={:?}): {} marks",
            route.tab,
            value,
            chart.geometry.size()
        );

        Panel {
            tab: route.tab,
            dropdown: Dropdown {
                id: route.dropdown_id,
                dimension: route.dimension,
                options: self.context.options(route.dimension),
                value,
                clearable: route.clearable,
            },
            chart,
        }
    }

    /// Apply a UI event to the selection state and render the affected tab only
    pub fn handle(&self, state: &mut SelectionState, event: DashboardEvent) -> Panel {
        let selection = match event {
            DashboardEvent::TabSelected(tab) => {
                let value = match state.value(tab) {
                    Some(remembered) => remembered.clone(),
                    None => self.default_value(tab).map(str::to_string),
                };
                Selection { tab, value }
            }
            DashboardEvent::FilterChanged { tab, value } => Selection {
                tab,
                value: value.filter(|v| !v.is_empty()),
            },
        };

        let panel = self.render(&selection);
        state.activate(panel.tab);
        state.remember(panel.tab, panel.dropdown.value.clone());
        panel
    }

    fn effective_value(&self, route: &TabRoute, value: Option<String>) -> Option<String> {
        match value {
            Some(value) => Some(value),
            None if route.clearable => None,
            None => self.default_value(route.tab).map(str::to_string),
        }
    }
}

fn resolve_default(context: &DashboardContext, route: &TabRoute, configured: Option<&str>) -> Option<String> {
    if let Some(value) = configured {
        if context.has_option(route.dimension, value) {
            return Some(value.to_string());
        }
        tracing::warn!(
            "Default '{}' for {} tab not found in {} column, using first value",
            value,
            route.tab,
            route.dimension
        );
    }
    context.options(route.dimension).first().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartKind, Geometry};
    use crate::domain::viewership::Dataset;
    use crate::domain::viewership::fixtures::sample_dataset;

    fn dispatcher() -> RenderDispatcher {
        let context = Arc::new(DashboardContext::new(sample_dataset()));
        RenderDispatcher::new(context, &TabDefaults::default())
    }

    #[test]
    fn test_each_tab_routes_to_its_own_builder() {
        let dataset = sample_dataset();
        let expected = [
            (Tab::Scatter, ChartKind::Scatter),
            (Tab::Bar, ChartKind::Bar),
            (Tab::Histogram, ChartKind::Histogram),
            (Tab::Area, ChartKind::Area),
            (Tab::Choropleth, ChartKind::Choropleth),
        ];
        for (tab, kind) in expected {
            let route = route(tab);
            assert_eq!(route.tab, tab);
            assert_eq!((route.build)(&dataset, None).kind, kind);
        }
    }

    #[test]
    fn test_empty_dataset_renders_every_tab_empty() {
        let context = Arc::new(DashboardContext::new(Dataset::default()));
        let dispatcher = RenderDispatcher::new(context, &TabDefaults::default());
        let mut state = SelectionState::default();

        for tab in Tab::ALL {
            assert_eq!(dispatcher.default_value(tab), None);
            let panel = dispatcher.handle(&mut state, DashboardEvent::TabSelected(tab));
            assert_eq!(panel.dropdown.value, None, "{tab} has a value");
            assert!(panel.dropdown.options.is_empty());
            assert!(panel.chart.geometry.is_empty(), "{tab} is not empty");
        }
    }

    #[test]
    fn test_defaults_resolve_against_dataset() {
        let dispatcher = dispatcher();
        assert_eq!(dispatcher.default_value(Tab::Scatter), Some("athletics"));
        assert_eq!(dispatcher.default_value(Tab::Histogram), Some("China"));
        // No configured default: first sport
        assert_eq!(dispatcher.default_value(Tab::Choropleth), Some("athletics"));
    }

    #[test]
    fn test_missing_configured_default_falls_back_to_first_option() {
        let context = Arc::new(DashboardContext::new(sample_dataset()));
        let defaults = TabDefaults {
            bar: Some("curling".to_string()),
            histogram: Some("Kenya".to_string()),
            ..TabDefaults::default()
        };
        let dispatcher = RenderDispatcher::new(context, &defaults);
        assert_eq!(dispatcher.default_value(Tab::Bar), Some("athletics"));
        assert_eq!(dispatcher.default_value(Tab::Histogram), Some("Kenya"));
    }

    #[test]
    fn test_entering_tab_renders_default() {
        let dispatcher = dispatcher();
        let mut state = SelectionState::default();
        let panel = dispatcher.handle(&mut state, DashboardEvent::TabSelected(Tab::Area));

        assert_eq!(panel.tab, Tab::Area);
        assert_eq!(panel.chart.kind, ChartKind::Area);
        assert_eq!(panel.dropdown.value.as_deref(), Some("athletics"));
        assert_eq!(panel.dropdown.id, "area-sport");
        assert_eq!(&*panel.dropdown.options, &["athletics", "gymnastics"]);
        assert_eq!(state.active(), Tab::Area);
    }

    #[test]
    fn test_switching_back_reproduces_chart() {
        let dispatcher = dispatcher();
        let mut state = SelectionState::default();

        let first = dispatcher.handle(
            &mut state,
            DashboardEvent::FilterChanged {
                tab: Tab::Bar,
                value: Some("gymnastics".to_string()),
            },
        );
        dispatcher.handle(&mut state, DashboardEvent::TabSelected(Tab::Choropleth));
        let again = dispatcher.handle(&mut state, DashboardEvent::TabSelected(Tab::Bar));

        assert_eq!(first, again);
        assert_eq!(again.dropdown.value.as_deref(), Some("gymnastics"));
    }

    #[test]
    fn test_filter_change_only_touches_its_tab() {
        let dispatcher = dispatcher();
        let mut state = SelectionState::default();
        dispatcher.handle(&mut state, DashboardEvent::TabSelected(Tab::Scatter));
        dispatcher.handle(
            &mut state,
            DashboardEvent::FilterChanged {
                tab: Tab::Area,
                value: Some("gymnastics".to_string()),
            },
        );

        assert_eq!(state.value(Tab::Scatter), Some(&Some("athletics".to_string())));
        assert_eq!(state.value(Tab::Area), Some(&Some("gymnastics".to_string())));
        assert_eq!(state.value(Tab::Bar), None);
    }

    #[test]
    fn test_clearing_histogram_shows_whole_dataset() {
        let dispatcher = dispatcher();
        let mut state = SelectionState::default();
        let panel = dispatcher.handle(
            &mut state,
            DashboardEvent::FilterChanged {
                tab: Tab::Histogram,
                value: Some(String::new()),
            },
        );

        assert!(panel.dropdown.clearable);
        assert_eq!(panel.dropdown.value, None);
        assert_eq!(panel.chart.x.field, "Country");
        assert_eq!(state.value(Tab::Histogram), Some(&None));
    }

    #[test]
    fn test_clearing_non_clearable_tab_uses_default() {
        let dispatcher = dispatcher();
        let panel = dispatcher.render(&Selection {
            tab: Tab::Scatter,
            value: None,
        });
        assert_eq!(panel.dropdown.value.as_deref(), Some("athletics"));
    }

    #[test]
    fn test_unknown_value_renders_empty_chart() {
        let dispatcher = dispatcher();
        let panel = dispatcher.render(&Selection {
            tab: Tab::Choropleth,
            value: Some("swimming".to_string()),
        });
        assert_eq!(panel.chart.geometry, Geometry::Regions(Vec::new()));
        assert_eq!(panel.chart.title, "Site Visits per Country for swimming");
    }
}
