/// The four toolbar dropdown menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    Font,
    Size,
    Color,
    Theme,
}

impl MenuId {
    pub const ALL: [MenuId; 4] = [MenuId::Font, MenuId::Size, MenuId::Color, MenuId::Theme];
}

/// Open/closed state for the dropdown menus.
///
/// Invariant: at most one menu is open. A toggle force-closes every other
/// menu before flipping its own, so the close-all and toggle paths cannot
/// race each other into reopening a menu the same click closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DropdownState {
    open: Option<MenuId>,
}

impl DropdownState {
    /// Toggle `menu`, closing the others first. Returns true when `menu`
    /// ends up open.
    pub fn toggle(&mut self, menu: MenuId) -> bool {
        if self.open == Some(menu) {
            self.open = None;
            false
        } else {
            self.open = Some(menu);
            true
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, menu: MenuId) -> bool {
        self.open == Some(menu)
    }

    pub fn open_menu(&self) -> Option<MenuId> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut state = DropdownState::default();
        assert!(state.toggle(MenuId::Font));
        assert!(state.is_open(MenuId::Font));

        assert!(!state.toggle(MenuId::Font));
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn test_only_one_menu_open_at_a_time() {
        let mut state = DropdownState::default();
        state.toggle(MenuId::Font);
        assert!(state.toggle(MenuId::Size));

        assert!(!state.is_open(MenuId::Font));
        assert!(state.is_open(MenuId::Size));
    }

    #[test]
    fn test_close_all() {
        let mut state = DropdownState::default();
        state.toggle(MenuId::Theme);
        state.close_all();
        for menu in MenuId::ALL {
            assert!(!state.is_open(menu));
        }
    }

    #[test]
    fn test_close_all_then_toggle_opens() {
        // The sequence an outside click followed by a trigger click produces.
        let mut state = DropdownState::default();
        state.toggle(MenuId::Color);
        state.close_all();
        assert!(state.toggle(MenuId::Color));
    }
}
