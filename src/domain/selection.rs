// Tab and dropdown selection state
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Scatter,
    Bar,
    Histogram,
    Area,
    Choropleth,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Scatter, Tab::Bar, Tab::Histogram, Tab::Area, Tab::Choropleth];

    pub fn value(&self) -> &'static str {
        match self {
            Tab::Scatter => "scatter",
            Tab::Bar => "bar",
            Tab::Histogram => "histogram",
            Tab::Area => "area",
            Tab::Choropleth => "choropleth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Scatter => "Scatter Plot",
            Tab::Bar => "Bar Graph",
            Tab::Histogram => "Histogram",
            Tab::Area => "Area Chart",
            Tab::Choropleth => "Choropleth Map",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab '{0}'")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.value() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// What a single chart render depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub tab: Tab,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    TabSelected(Tab),
    FilterChanged { tab: Tab, value: Option<String> },
}

/// Active tab plus the last dropdown value chosen on each tab.
/// Tabs never visited have no entry and start from their default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    active: Tab,
    values: HashMap<Tab, Option<String>>,
}

impl SelectionState {
    pub fn new(active: Tab) -> Self {
        Self {
            active,
            values: HashMap::new(),
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Remembered value for a tab; `None` when the tab was never visited
    pub fn value(&self, tab: Tab) -> Option<&Option<String>> {
        self.values.get(&tab)
    }

    pub fn remember(&mut self, tab: Tab, value: Option<String>) {
        self.values.insert(tab, value);
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Tab::Scatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_round_trips_through_value() {
        for tab in Tab::ALL {
            assert_eq!(tab.value().parse::<Tab>(), Ok(tab));
        }
        assert_eq!("pie".parse::<Tab>(), Err(UnknownTab("pie".to_string())));
    }

    #[test]
    fn test_state_remembers_per_tab_values() {
        let mut state = SelectionState::default();
        assert_eq!(state.active(), Tab::Scatter);
        assert_eq!(state.value(Tab::Bar), None);

        state.remember(Tab::Bar, Some("judo".to_string()));
        state.remember(Tab::Histogram, None);
        state.activate(Tab::Area);

        assert_eq!(state.active(), Tab::Area);
        assert_eq!(state.value(Tab::Bar), Some(&Some("judo".to_string())));
        assert_eq!(state.value(Tab::Histogram), Some(&None));
    }
}
