use crate::domain::selection::Tab;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub defaults: TabDefaults,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: PathBuf,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("FunOlympics.csv"),
        }
    }
}

/// Dropdown value each tab starts from. Unset means "first value in the dataset".
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TabDefaults {
    pub scatter: Option<String>,
    pub bar: Option<String>,
    pub histogram: Option<String>,
    pub area: Option<String>,
    pub choropleth: Option<String>,
}

impl Default for TabDefaults {
    fn default() -> Self {
        Self {
            scatter: Some("athletics".to_string()),
            bar: Some("athletics".to_string()),
            histogram: Some("China".to_string()),
            area: Some("athletics".to_string()),
            choropleth: None,
        }
    }
}

impl TabDefaults {
    pub fn get(&self, tab: Tab) -> Option<&str> {
        match tab {
            Tab::Scatter => self.scatter.as_deref(),
            Tab::Bar => self.bar.as_deref(),
            Tab::Histogram => self.histogram.as_deref(),
            Tab::Area => self.area.as_deref(),
            Tab::Choropleth => self.choropleth.as_deref(),
        }
    }
}

/// Load `config/dashboard.{toml,...}` if present; every key has a default
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_from("config/dashboard")
}

fn load_from(name: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
