// Domain layer - Dataset, selection and chart description models
pub mod chart;
pub mod regions;
pub mod selection;
pub mod viewership;
