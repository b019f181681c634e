//! The URL side of a catalog view.

use fundcat_model::QueryRecord;

/// Where the applied filters are mirrored.
///
/// Filter changes always *replace* the current entry; they never push a new
/// history entry.
pub trait Location {
    fn current(&self) -> &QueryRecord;
    fn replace(&mut self, query: QueryRecord);
}

/// In-process location with a back stack, used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    path: String,
    current: QueryRecord,
    history: Vec<QueryRecord>,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryRecord) -> Self {
        self.current = query;
        self
    }

    /// Navigate to a new entry, as a link click would.
    pub fn navigate(&mut self, query: QueryRecord) {
        let previous = std::mem::replace(&mut self.current, query);
        self.history.push(previous);
    }

    /// Go back one entry. Returns `false` when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Current URL, e.g. `/accelerators?tags=Equity`.
    pub fn url(&self) -> String {
        self.current.to_url(&self.path)
    }

    /// Entries behind the current one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// How many times the current entry was replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> &QueryRecord {
        &self.current
    }

    fn replace(&mut self, query: QueryRecord) {
        self.current = query;
        self.replacements += 1;
    }
}
