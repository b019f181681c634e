//! Category schemas.
//!
//! A schema is the fixed, ordered list of facets a catalog domain can be
//! filtered by. Order matters: it drives query-string key order, chip order
//! and dropdown order.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Name of the reserved free-text category.
pub const SEARCH_CATEGORY: &str = "search";

/// How a category holds its selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Zero or more option values.
    MultiSelect,
    /// Zero or one free-text term.
    Search,
}

/// One filterable dimension of a catalog domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Query-string key and lookup name (e.g. `applicationStatus`).
    pub name: String,
    /// Human label used for chips and dropdown headers (e.g. `Status`).
    pub label: String,
    pub kind: CategoryKind,
    /// Options offered in the dropdown. Always empty for search.
    #[serde(default)]
    pub options: Vec<String>,
}

impl Category {
    /// Create a multi-select category with its dropdown options.
    pub fn multi_select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            label: label.into(),
            kind: CategoryKind::MultiSelect,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Create the reserved free-text category.
    pub fn search() -> Self {
        Self {
            name: SEARCH_CATEGORY.to_string(),
            label: "Search".to_string(),
            kind: CategoryKind::Search,
            options: Vec::new(),
        }
    }

    pub fn is_search(&self) -> bool {
        self.kind == CategoryKind::Search
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered, validated list of categories for one catalog domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySchema {
    categories: Vec<Category>,
}

impl CategorySchema {
    /// Build a schema, rejecting duplicate or empty names, a second search
    /// category, and misuse of the reserved `search` name.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let mut search_count = 0usize;
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(ModelError::EmptyCategoryName);
            }
            if !seen.insert(category.name.as_str()) {
                return Err(ModelError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
            match category.kind {
                CategoryKind::Search => {
                    search_count += 1;
                    if search_count > 1 {
                        return Err(ModelError::MultipleSearchCategories);
                    }
                    if category.name != SEARCH_CATEGORY {
                        return Err(ModelError::MisnamedSearchCategory {
                            name: category.name.clone(),
                        });
                    }
                }
                CategoryKind::MultiSelect => {
                    if category.name == SEARCH_CATEGORY {
                        return Err(ModelError::ReservedCategoryName);
                    }
                }
            }
        }
        Ok(Self { categories })
    }

    /// Categories in schema order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Multi-select categories in schema order.
    pub fn multi_select(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.is_search())
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Look up a category, failing for names outside the schema.
    pub fn require(&self, name: &str) -> Result<&Category> {
        self.get(name)
            .ok_or_else(|| ModelError::unknown_category(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Position of a category in schema order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
