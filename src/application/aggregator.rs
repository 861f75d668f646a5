// Filter + group + sum over the dataset
use crate::domain::viewership::{AggregateRow, Dataset, Dimension, Filter, Measure};
use std::collections::HashMap;

/// Sum `measure` over the rows matching `filter`, grouped by `group_by`.
///
/// Groups come out in the order their key first appears in the dataset.
/// A filter that matches nothing yields an empty vector.
pub fn aggregate(
    dataset: &Dataset,
    filter: Option<&Filter>,
    group_by: &[Dimension],
    measure: Measure,
) -> Vec<AggregateRow> {
    let mut rows: Vec<AggregateRow> = Vec::new();
    let mut index: HashMap<Vec<&str>, usize> = HashMap::new();

    for record in dataset.records() {
        if let Some(filter) = filter {
            if !filter.matches(record) {
                continue;
            }
        }

        let key: Vec<&str> = group_by.iter().map(|d| record.dimension(*d)).collect();
        let value = record.measure(measure);

        match index.get(&key) {
            Some(&position) => rows[position].value += value,
            None => {
                index.insert(key.clone(), rows.len());
                rows.push(AggregateRow::new(
                    key.into_iter().map(str::to_string).collect(),
                    value,
                ));
            }
        }
    }

    rows
}
