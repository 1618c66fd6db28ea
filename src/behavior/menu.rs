/// Open/closed flag behind the mobile menu and the language dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Body `overflow` while the mobile menu is in `state`.
pub fn scroll_lock(state: Toggle) -> &'static str {
    if state.is_open() {
        "hidden"
    } else {
        ""
    }
}

/// Whether a document click should close an open menu. Clicks inside the
/// panel or on its toggle button are left alone.
pub fn closes_on_click(state: Toggle, inside_menu: bool, on_toggle: bool) -> bool {
    state.is_open() && !inside_menu && !on_toggle
}
