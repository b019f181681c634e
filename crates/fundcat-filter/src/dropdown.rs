//! Facet dropdown coordination: at most one dropdown open at a time.

/// Which facet dropdown, if any, is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open(String),
}

/// Per-view state machine for facet dropdowns.
///
/// Each catalog view owns its own coordinator, so two views never share an
/// open-dropdown flag.
#[derive(Debug, Clone, Default)]
pub struct DropdownCoordinator {
    state: DropdownState,
}

impl DropdownCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    /// Name of the open dropdown.
    pub fn open_name(&self) -> Option<&str> {
        match &self.state {
            DropdownState::Open(name) => Some(name),
            DropdownState::Closed => None,
        }
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open_name() == Some(name)
    }

    /// Open `name`, or close it if it is already the open one.
    ///
    /// Opening a dropdown closes whichever other dropdown was open.
    pub fn toggle(&mut self, name: &str) {
        self.state = if self.is_open(name) {
            DropdownState::Closed
        } else {
            DropdownState::Open(name.to_string())
        };
        tracing::trace!(state = ?self.state, "dropdown toggled");
    }

    /// A pointer-down landed outside every dropdown.
    pub fn outside_pointer_down(&mut self) {
        self.close();
    }

    /// Escape was pressed.
    pub fn escape(&mut self) {
        self.close();
    }

    pub fn close(&mut self) {
        self.state = DropdownState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let dropdowns = DropdownCoordinator::new();
        assert_eq!(dropdowns.state(), &DropdownState::Closed);
        assert_eq!(dropdowns.open_name(), None);
    }

    #[test]
    fn toggle_opens_and_closes_same_name() {
        let mut dropdowns = DropdownCoordinator::new();
        dropdowns.toggle("tags");
        assert!(dropdowns.is_open("tags"));
        dropdowns.toggle("tags");
        assert_eq!(dropdowns.state(), &DropdownState::Closed);
    }

    #[test]
    fn opening_another_closes_the_first() {
        let mut dropdowns = DropdownCoordinator::new();
        dropdowns.toggle("tags");
        dropdowns.toggle("affiliation");
        assert!(dropdowns.is_open("affiliation"));
        assert!(!dropdowns.is_open("tags"));
    }

    #[test]
    fn outside_click_and_escape_close() {
        let mut dropdowns = DropdownCoordinator::new();
        dropdowns.toggle("tags");
        dropdowns.outside_pointer_down();
        assert_eq!(dropdowns.open_name(), None);

        dropdowns.toggle("fundingRange");
        dropdowns.escape();
        assert_eq!(dropdowns.open_name(), None);

        // Dismissal while closed is a no-op.
        dropdowns.escape();
        assert_eq!(dropdowns.state(), &DropdownState::Closed);
    }
}
