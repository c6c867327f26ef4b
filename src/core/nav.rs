//! Page sections and the collapsible navigation menu.

/// Top-level sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: &[Section] = &[
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Dictionary key of the nav link label.
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::About => "nav.about",
            Section::Projects => "nav.projects",
            Section::Contact => "nav.contact",
        }
    }

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Navigation state: the active section plus the collapsed-menu flag used
/// on narrow viewports.
#[derive(Debug, Clone, Default)]
pub struct Nav {
    active: Section,
    menu_open: bool,
}

impl Nav {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Follow a nav link.  Following a link always closes the menu.
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    pub fn select_next(&mut self) {
        self.select(self.active.next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.active.prev());
    }
}
