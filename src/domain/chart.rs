// Chart description domain models
use super::viewership::{Dimension, Filter};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Bar,
    Histogram,
    Area,
    Choropleth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub field: String,
    pub label: String,
}

impl Axis {
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            label: field.clone(),
            field,
        }
    }

    pub fn labelled(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorEncoding {
    /// One series per distinct value of the dimension
    Discrete(Dimension),
    /// Continuous scale over a numeric field
    Continuous { field: String, scale: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum XValue {
    Category(String),
    Time(NaiveDateTime),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: XValue,
    pub y: f64,
    pub hover: Option<String>,
}

impl Point {
    pub fn category(x: impl Into<String>, y: f64) -> Self {
        Self {
            x: XValue::Category(x.into()),
            y,
            hover: None,
        }
    }

    pub fn time(x: NaiveDateTime, y: f64) -> Self {
        Self {
            x: XValue::Time(x),
            y,
            hover: None,
        }
    }

    pub fn with_hover(mut self, hover: impl Into<String>) -> Self {
        self.hover = Some(hover.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Color group this series belongs to, if the chart is color-encoded
    pub name: Option<String>,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: Option<String>, points: Vec<Point>) -> Self {
        Self { name, points }
    }
}

/// A shaded region on a map
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// ISO 3166-1 alpha-3 code
    pub code: String,
    /// Name as it appears in the dataset
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Series(Vec<Series>),
    Regions(Vec<Region>),
}

impl Geometry {
    /// Number of drawn marks (points or regions)
    pub fn size(&self) -> usize {
        match self {
            Geometry::Series(series) => series.iter().map(|s| s.points.len()).sum(),
            Geometry::Regions(regions) => regions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescription {
    pub kind: ChartKind,
    pub title: String,
    pub x: Axis,
    pub y: Axis,
    pub color: Option<ColorEncoding>,
    pub filter: Option<Filter>,
    pub geometry: Geometry,
}
