use thiserror::Error;

/// Errors raised while building schemas or editing filter sets.
///
/// Schema errors only occur at configuration time. Filter-set errors mean the
/// caller named a category that the schema does not contain, tried to use a
/// multi-select operation on the search category, or selected an empty value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("category name must not be empty")]
    EmptyCategoryName,

    #[error("duplicate category in schema: {name}")]
    DuplicateCategory { name: String },

    #[error("schema declares more than one search category")]
    MultipleSearchCategories,

    #[error("search category must be named `search`, found `{name}`")]
    MisnamedSearchCategory { name: String },

    #[error("`search` is reserved for the free-text category")]
    ReservedCategoryName,

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("category `{name}` is free-text and cannot hold option values")]
    NotMultiSelect { name: String },

    #[error("empty value for category `{name}`")]
    EmptyValue { name: String },

    #[error("unknown catalog domain: {name}")]
    UnknownDomain { name: String },
}

impl ModelError {
    pub(crate) fn unknown_category(name: &str) -> Self {
        Self::UnknownCategory {
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
