//! Filter sets: the selected values of every category in a schema.

use std::fmt;

use crate::error::{ModelError, Result};
use crate::schema::{CategoryKind, CategorySchema};

/// Selected values for a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    category: String,
    kind: CategoryKind,
    values: Vec<String>,
}

/// Mapping from category name to its ordered selected values.
///
/// A filter set is always built from a schema, so every schema category is
/// present (possibly empty) and no other category ever appears. The search
/// category holds at most one value and multi-select values are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    selections: Vec<Selection>,
}

/// One difference between two filter sets over the same schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Added { category: String, value: String },
    Removed { category: String, value: String },
}

impl FilterChange {
    pub fn category(&self) -> &str {
        match self {
            Self::Added { category, .. } | Self::Removed { category, .. } => category,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Added { value, .. } | Self::Removed { value, .. } => value,
        }
    }
}

impl FilterSet {
    /// A filter set with every schema category present and empty.
    pub fn empty(schema: &CategorySchema) -> Self {
        Self {
            selections: schema
                .iter()
                .map(|category| Selection {
                    category: category.name.clone(),
                    kind: category.kind,
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    fn selection(&self, category: &str) -> Option<&Selection> {
        self.selections.iter().find(|s| s.category == category)
    }

    fn selection_mut(&mut self, category: &str) -> Result<&mut Selection> {
        self.selections
            .iter_mut()
            .find(|s| s.category == category)
            .ok_or_else(|| ModelError::unknown_category(category))
    }

    /// The multi-select category that will receive `value`.
    ///
    /// An empty value has no URL form, so it is never selectable.
    fn multi_select_mut(&mut self, category: &str, value: &str) -> Result<&mut Selection> {
        let selection = self.selection_mut(category)?;
        if selection.kind == CategoryKind::Search {
            return Err(ModelError::NotMultiSelect {
                name: category.to_string(),
            });
        }
        if value.is_empty() {
            return Err(ModelError::EmptyValue {
                name: category.to_string(),
            });
        }
        Ok(selection)
    }

    fn search_mut(&mut self) -> Option<&mut Selection> {
        self.selections
            .iter_mut()
            .find(|s| s.kind == CategoryKind::Search)
    }

    /// Selected values for a category, or `None` if it is not in the schema.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.selection(category).map(|s| s.values.as_slice())
    }

    /// Selected values for a category; empty for unknown categories.
    pub fn values(&self, category: &str) -> &[String] {
        self.get(category).unwrap_or_default()
    }

    pub fn contains(&self, category: &str, value: &str) -> bool {
        self.values(category).iter().any(|v| v == value)
    }

    /// `(category, values)` pairs in schema order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.selections
            .iter()
            .map(|s| (s.category.as_str(), s.values.as_slice()))
    }

    /// The committed search term, if any.
    pub fn search_term(&self) -> Option<&str> {
        self.selections
            .iter()
            .find(|s| s.kind == CategoryKind::Search)
            .and_then(|s| s.values.first())
            .map(String::as_str)
    }

    /// True iff any multi-select category has a value.
    pub fn has_active_filters(&self) -> bool {
        self.selections
            .iter()
            .any(|s| s.kind == CategoryKind::MultiSelect && !s.values.is_empty())
    }

    /// True iff the search category holds a term.
    pub fn has_active_search(&self) -> bool {
        self.search_term().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.iter().all(|s| s.values.is_empty())
    }

    /// Toggle an option in a multi-select category.
    ///
    /// Returns `true` when the value is selected afterwards.
    pub fn toggle(&mut self, category: &str, value: &str) -> Result<bool> {
        let selection = self.multi_select_mut(category, value)?;
        if let Some(index) = selection.values.iter().position(|v| v == value) {
            selection.values.remove(index);
            Ok(false)
        } else {
            selection.values.push(value.to_string());
            Ok(true)
        }
    }

    /// Append an option unless it is already selected.
    ///
    /// Returns `true` when the value was added.
    pub fn insert(&mut self, category: &str, value: &str) -> Result<bool> {
        let selection = self.multi_select_mut(category, value)?;
        if selection.values.iter().any(|v| v == value) {
            return Ok(false);
        }
        selection.values.push(value.to_string());
        Ok(true)
    }

    /// Remove a value from any category, search included.
    ///
    /// Returns `true` when something was removed.
    pub fn remove(&mut self, category: &str, value: &str) -> Result<bool> {
        let selection = self.selection_mut(category)?;
        let before = selection.values.len();
        selection.values.retain(|v| v != value);
        Ok(selection.values.len() != before)
    }

    /// Empty every multi-select category, leaving search untouched.
    pub fn clear_multi_select(&mut self) {
        for selection in &mut self.selections {
            if selection.kind == CategoryKind::MultiSelect {
                selection.values.clear();
            }
        }
    }

    /// Empty every category.
    pub fn clear_all(&mut self) {
        for selection in &mut self.selections {
            selection.values.clear();
        }
    }

    /// Replace the search term. `None` and the empty string both clear it.
    ///
    /// Fails when the schema has no search category.
    pub fn set_search(&mut self, term: Option<String>) -> Result<()> {
        let selection = self
            .search_mut()
            .ok_or_else(|| ModelError::unknown_category(crate::schema::SEARCH_CATEGORY))?;
        selection.values = term.into_iter().filter(|t| !t.is_empty()).collect();
        Ok(())
    }

    /// Drop the search term. No-op when the schema has no search category.
    pub fn clear_search(&mut self) {
        if let Some(selection) = self.search_mut() {
            selection.values.clear();
        }
    }

    /// Copy of `self` whose multi-select categories are taken from `other`.
    ///
    /// The search category keeps `self`'s value.
    pub fn with_multi_select_from(&self, other: &FilterSet) -> FilterSet {
        let mut next = self.clone();
        for selection in &mut next.selections {
            if selection.kind == CategoryKind::MultiSelect {
                selection.values = other.values(&selection.category).to_vec();
            }
        }
        next
    }

    /// True when every multi-select category holds the same values in the
    /// same order in both sets.
    pub fn multi_select_eq(&self, other: &FilterSet) -> bool {
        self.selections
            .iter()
            .filter(|s| s.kind == CategoryKind::MultiSelect)
            .all(|s| s.values.as_slice() == other.values(&s.category))
    }

    /// Changes that turn `self` into `other`, in schema order.
    ///
    /// Within a category removals are listed before additions. Pure reorders
    /// of the same values produce no changes.
    pub fn diff(&self, other: &FilterSet) -> Vec<FilterChange> {
        let mut changes = Vec::new();
        for selection in &self.selections {
            let theirs = other.values(&selection.category);
            for value in &selection.values {
                if !theirs.contains(value) {
                    changes.push(FilterChange::Removed {
                        category: selection.category.clone(),
                        value: value.clone(),
                    });
                }
            }
            for value in theirs {
                if !selection.values.contains(value) {
                    changes.push(FilterChange::Added {
                        category: selection.category.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        changes
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "{{")?;
        for (category, values) in self.iter().filter(|(_, v)| !v.is_empty()) {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{category}: [{}]", values.join(", "))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Category;

    fn schema() -> CategorySchema {
        CategorySchema::new(vec![
            Category::multi_select("affiliation", "Affiliation", ["Govt-backed", "Private"]),
            Category::multi_select("tags", "Tag", ["Equity", "Grant"]),
            Category::search(),
        ])
        .unwrap()
    }

    #[test]
    fn empty_contains_every_category() {
        let set = FilterSet::empty(&schema());
        let names: Vec<_> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(names, ["affiliation", "tags", "search"]);
        assert!(set.is_empty());
        assert_eq!(set.get("stage"), None);
        assert!(set.values("stage").is_empty());
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut set = FilterSet::empty(&schema());
        assert!(set.toggle("tags", "Equity").unwrap());
        assert!(set.toggle("tags", "Grant").unwrap());
        assert_eq!(set.values("tags"), ["Equity", "Grant"]);
        assert!(!set.toggle("tags", "Equity").unwrap());
        assert_eq!(set.values("tags"), ["Grant"]);
    }

    #[test]
    fn toggle_rejects_search_and_unknown() {
        let mut set = FilterSet::empty(&schema());
        assert_eq!(
            set.toggle("search", "x"),
            Err(ModelError::NotMultiSelect {
                name: "search".to_string()
            })
        );
        assert_eq!(
            set.toggle("stage", "x"),
            Err(ModelError::UnknownCategory {
                name: "stage".to_string()
            })
        );
    }

    #[test]
    fn search_holds_at_most_one_term() {
        let mut set = FilterSet::empty(&schema());
        set.set_search(Some("seed".to_string())).unwrap();
        set.set_search(Some("fintech".to_string())).unwrap();
        assert_eq!(set.values("search"), ["fintech"]);
        assert_eq!(set.search_term(), Some("fintech"));
        set.set_search(None).unwrap();
        assert!(!set.has_active_search());
    }

    #[test]
    fn empty_values_are_never_selected() {
        let mut set = FilterSet::empty(&schema());
        assert_eq!(
            set.insert("tags", ""),
            Err(ModelError::EmptyValue {
                name: "tags".to_string()
            })
        );
        assert!(set.toggle("tags", "").is_err());
        assert!(set.values("tags").is_empty());

        set.set_search(Some(String::new())).unwrap();
        assert_eq!(set.search_term(), None);
        assert!(set.values("search").is_empty());
    }

    #[test]
    fn clear_search_tolerates_schemas_without_search() {
        let mut set = FilterSet::empty(&schema());
        set.insert("tags", "Equity").unwrap();
        set.set_search(Some("seed".to_string())).unwrap();
        set.clear_search();
        assert!(!set.has_active_search());
        assert_eq!(set.values("tags"), ["Equity"]);

        let schema =
            CategorySchema::new(vec![Category::multi_select("tags", "Tag", ["Equity"])]).unwrap();
        FilterSet::empty(&schema).clear_search();
    }

    #[test]
    fn set_search_without_search_category_fails() {
        let schema =
            CategorySchema::new(vec![Category::multi_select("tags", "Tag", ["Equity"])]).unwrap();
        let mut set = FilterSet::empty(&schema);
        assert!(set.set_search(Some("x".to_string())).is_err());
    }

    #[test]
    fn clear_multi_select_keeps_search() {
        let mut set = FilterSet::empty(&schema());
        set.insert("tags", "Equity").unwrap();
        set.insert("affiliation", "Private").unwrap();
        set.set_search(Some("seed".to_string())).unwrap();
        set.clear_multi_select();
        assert!(!set.has_active_filters());
        assert_eq!(set.search_term(), Some("seed"));
    }

    #[test]
    fn with_multi_select_from_keeps_own_search() {
        let mut applied = FilterSet::empty(&schema());
        applied.set_search(Some("seed".to_string())).unwrap();
        let mut staged = FilterSet::empty(&schema());
        staged.insert("tags", "Grant").unwrap();
        staged.set_search(Some("other".to_string())).unwrap();

        let next = applied.with_multi_select_from(&staged);
        assert_eq!(next.values("tags"), ["Grant"]);
        assert_eq!(next.search_term(), Some("seed"));
        assert!(next.multi_select_eq(&staged));
        assert_ne!(next, staged);
    }

    #[test]
    fn diff_lists_removals_and_additions_in_schema_order() {
        let mut from = FilterSet::empty(&schema());
        from.insert("affiliation", "Private").unwrap();
        from.insert("tags", "Equity").unwrap();
        let mut to = FilterSet::empty(&schema());
        to.insert("tags", "Grant").unwrap();
        to.set_search(Some("seed".to_string())).unwrap();

        let changes = from.diff(&to);
        assert_eq!(
            changes,
            vec![
                FilterChange::Removed {
                    category: "affiliation".to_string(),
                    value: "Private".to_string()
                },
                FilterChange::Removed {
                    category: "tags".to_string(),
                    value: "Equity".to_string()
                },
                FilterChange::Added {
                    category: "tags".to_string(),
                    value: "Grant".to_string()
                },
                FilterChange::Added {
                    category: "search".to_string(),
                    value: "seed".to_string()
                },
            ]
        );
        assert!(from.diff(&from).is_empty());
    }

    #[test]
    fn display_lists_non_empty_categories() {
        let mut set = FilterSet::empty(&schema());
        set.insert("tags", "Equity").unwrap();
        set.insert("tags", "Grant").unwrap();
        set.set_search(Some("seed".to_string())).unwrap();
        assert_eq!(set.to_string(), "{tags: [Equity, Grant], search: [seed]}");
    }
}
