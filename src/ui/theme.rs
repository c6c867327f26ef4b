//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;
use crate::core::notification::NotificationKind;

/// Central theme — change colours here and they propagate everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    fn fg(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Black,
            ThemeMode::Dark => Color::Gray,
        }
    }

    fn bg(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::White,
            ThemeMode::Dark => Color::Black,
        }
    }

    fn accent(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Blue,
            ThemeMode::Dark => Color::LightBlue,
        }
    }

    fn muted(&self) -> Color {
        match self.mode {
            ThemeMode::Light => Color::Gray,
            ThemeMode::Dark => Color::DarkGray,
        }
    }

    // ── page ───────────────────────────────────────────────────
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg()).bg(self.bg())
    }

    pub fn heading_style(&self) -> Style {
        self.base_style()
            .fg(self.accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        self.base_style().fg(self.muted())
    }

    pub fn highlight_style(&self) -> Style {
        self.base_style()
            .fg(self.accent())
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    // ── header / nav ───────────────────────────────────────────
    pub fn nav_style(&self) -> Style {
        self.base_style()
    }

    pub fn nav_active_style(&self) -> Style {
        Style::default()
            .fg(self.bg())
            .bg(self.accent())
            .add_modifier(Modifier::BOLD)
    }

    // ── carousel ───────────────────────────────────────────────
    pub fn card_border_style(&self) -> Style {
        self.base_style().fg(self.muted())
    }

    pub fn card_title_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    pub fn tag_style(&self) -> Style {
        self.base_style()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn control_style(&self) -> Style {
        self.base_style()
            .fg(self.accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn dot_style(&self, active: bool) -> Style {
        if active {
            self.base_style().fg(self.accent())
        } else {
            self.muted_style()
        }
    }

    // ── form ───────────────────────────────────────────────────
    pub fn field_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style()
                .fg(self.accent())
                .add_modifier(Modifier::UNDERLINED)
        } else {
            self.base_style()
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style(&self) -> Style {
        self.base_style().fg(Color::Gray)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    /// Banner colours: green / red / cyan.
    pub fn notification_style(&self, kind: NotificationKind) -> Style {
        let bg = match kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
            NotificationKind::Info => Color::Cyan,
        };
        Style::default()
            .bg(bg)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}
