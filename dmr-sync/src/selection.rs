/// The single selected station, if any.
///
/// Starts unselected. `select` overwrites; there is no way back to the
/// unselected state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, station_id: &str) -> bool {
        self.selected.as_deref() == Some(station_id)
    }

    /// Select `station_id`, returning the previous selection.
    pub fn select(&mut self, station_id: &str) -> Option<String> {
        self.selected.replace(station_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unselected() {
        let state = SelectionState::new();
        assert_eq!(state.selected(), None);
        assert!(!state.is_selected("A"));
    }

    #[test]
    fn select_overwrites_previous() {
        let mut state = SelectionState::new();
        assert_eq!(state.select("A"), None);
        assert_eq!(state.select("B"), Some("A".to_string()));
        assert_eq!(state.selected(), Some("B"));
        assert!(state.is_selected("B"));
        assert!(!state.is_selected("A"));
    }

    #[test]
    fn reselecting_same_station_keeps_it_selected() {
        let mut state = SelectionState::new();
        state.select("A");
        assert_eq!(state.select("A"), Some("A".to_string()));
        assert_eq!(state.selected(), Some("A"));
    }
}
