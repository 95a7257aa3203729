use std::fmt;

/// Identifier bound to an interactive resume block, carried in the
/// selection-change notification for the comment panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub &'static str);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// At most one interactive block is selected at a time. Clicking a block
/// replaces the previous selection; clicking outside all blocks clears it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<SectionId>,
}

impl SelectionState {
    /// Select `id`, returning true when the selection changed.
    pub fn select(&mut self, id: SectionId) -> bool {
        if self.selected == Some(id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the selection, returning true when something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn selected(&self) -> Option<SectionId> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: SectionId = SectionId("experience-a");
    const B: SectionId = SectionId("experience-b");

    #[test]
    fn test_select_replaces_previous() {
        let mut state = SelectionState::default();
        assert!(state.select(A));
        assert!(state.select(B));
        assert_eq!(state.selected(), Some(B));
    }

    #[test]
    fn test_reselect_same_block_is_a_no_op() {
        let mut state = SelectionState::default();
        state.select(A);
        assert!(!state.select(A));
        assert_eq!(state.selected(), Some(A));
    }

    #[test]
    fn test_clear() {
        let mut state = SelectionState::default();
        assert!(!state.clear());
        state.select(A);
        assert!(state.clear());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_section_id_display() {
        assert_eq!(A.to_string(), "experience-a");
    }
}
