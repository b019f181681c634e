//! Active-filter chips derived from the applied filter set.

use fundcat_model::{Category, CategorySchema, FilterSet};

/// A removable token for one selected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub category: String,
    pub value: String,
    pub label: String,
}

/// Produces the display text of a chip.
pub trait LabelFormatter {
    fn label(&self, category: &Category, value: &str) -> String;
}

impl<F> LabelFormatter for F
where
    F: Fn(&Category, &str) -> String,
{
    fn label(&self, category: &Category, value: &str) -> String {
        self(category, value)
    }
}

/// `"<category label>: <value>"`, e.g. `Tag: Grant`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixLabels;

impl LabelFormatter for PrefixLabels {
    fn label(&self, category: &Category, value: &str) -> String {
        format!("{}: {value}", category.label)
    }
}

/// One chip per selected value, in schema order then selection order.
pub fn project(
    applied: &FilterSet,
    schema: &CategorySchema,
    formatter: &dyn LabelFormatter,
) -> Vec<Chip> {
    schema
        .iter()
        .flat_map(|category| {
            applied.values(&category.name).iter().map(move |value| Chip {
                category: category.name.clone(),
                value: value.clone(),
                label: formatter.label(category, value),
            })
        })
        .collect()
}

/// True iff any multi-select category is non-empty.
pub fn has_active_filters(applied: &FilterSet) -> bool {
    applied.has_active_filters()
}

/// True iff a search term is applied.
pub fn has_active_search(applied: &FilterSet) -> bool {
    applied.has_active_search()
}
