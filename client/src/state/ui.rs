//! Local UI chrome state (theme, header tab, sidebar navigation).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `auth` so the shell can evolve
//! independently of session handling. Mutated only through [`UiState::apply`].

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Persisted and `data-theme` form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `"light"` / `"dark"` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Self::Light => ThemePalette {
                background: "#f5f5f5",
                text: "#000000",
                accent: "#4caf50",
                button_text: "#000000",
            },
            Self::Dark => ThemePalette {
                background: "#161618",
                text: "#ffffff",
                accent: "#c8e972",
                button_text: "#ffffff",
            },
        }
    }
}

/// CSS custom-property values for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub button_text: &'static str,
}

impl ThemePalette {
    /// Inline `style` declaring the layout's CSS variables.
    pub fn css_vars(&self) -> String {
        format!(
            "--background-color: {}; --text-color: {}; --accent-color: {}; --button-text-color: {};",
            self.background, self.text, self.accent, self.button_text
        )
    }
}

/// Tabs in the dashboard header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderTab {
    #[default]
    ChargingStations,
    FleetSizing,
    Parking,
}

impl HeaderTab {
    pub const ALL: [Self; 3] = [Self::ChargingStations, Self::FleetSizing, Self::Parking];

    pub fn label(self) -> &'static str {
        match self {
            Self::ChargingStations => "Charging Stations",
            Self::FleetSizing => "Fleet Sizing",
            Self::Parking => "Parking",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub active_tab: HeaderTab,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    TabSelected(HeaderTab),
    ThemeSet(Theme),
}

impl UiState {
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::TabSelected(tab) => self.active_tab = tab,
            UiAction::ThemeSet(theme) => self.theme = theme,
        }
    }
}

/// Sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const SIDEBAR_LINKS: [SidebarLink; 5] = [
    SidebarLink { label: "Home", path: "/" },
    SidebarLink { label: "Notifications", path: "/notifications" },
    SidebarLink { label: "Activity", path: "/activity" },
    SidebarLink { label: "Upload", path: "/upload" },
    SidebarLink { label: "Settings", path: "/settings" },
];

/// A sidebar link is active only on an exact pathname match.
pub fn is_active_path(link_path: &str, pathname: &str) -> bool {
    link_path == pathname
}

/// Sidebar label for `pathname`, if it names a sidebar route.
pub fn sidebar_label(pathname: &str) -> Option<&'static str> {
    SIDEBAR_LINKS.iter().find(|l| is_active_path(l.path, pathname)).map(|l| l.label)
}
