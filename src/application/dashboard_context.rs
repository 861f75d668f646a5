// Immutable context shared by every render: the dataset and its dropdown options
use crate::domain::viewership::{Dataset, Dimension};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DashboardContext {
    dataset: Arc<Dataset>,
    options: HashMap<Dimension, Arc<[String]>>,
}

impl DashboardContext {
    /// Distinct values for every dimension are computed here, once
    pub fn new(dataset: Dataset) -> Self {
        let options = Dimension::ALL
            .into_iter()
            .map(|d| (d, Arc::from(dataset.distinct(d))))
            .collect();

        Self {
            dataset: Arc::new(dataset),
            options,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Dropdown choices for a dimension, first-seen order
    pub fn options(&self, dimension: Dimension) -> Arc<[String]> {
        self.options
            .get(&dimension)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    pub fn has_option(&self, dimension: Dimension, value: &str) -> bool {
        self.options
            .get(&dimension)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::viewership::fixtures::sample_dataset;

    #[test]
    fn test_options_precomputed_per_dimension() {
        let context = DashboardContext::new(sample_dataset());
        assert_eq!(&*context.options(Dimension::Sports), &["athletics", "gymnastics"]);
        assert!(context.has_option(Dimension::Country, "Kenya"));
        assert!(!context.has_option(Dimension::Country, "Peru"));
        assert_eq!(context.dataset().len(), 6);
    }

    #[test]
    fn test_empty_dataset_has_no_options() {
        let context = DashboardContext::new(Dataset::default());
        assert!(context.options(Dimension::Gender).is_empty());
    }
}
