//! User configuration — preferences, key bindings and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/folio-deck/config.toml` (default
//! `~/.config/folio-deck/config.toml`).  The theme and language entries double
//! as the remembered viewer preferences.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::carousel::DEFAULT_BREAKPOINT_PX;
use crate::core::gesture::SWIPE_THRESHOLD_PX;
use crate::core::i18n::Language;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORM_ID";
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 150;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PrevPage,
    NextPage,
    ToggleViewAll,
    NextSection,
    PrevSection,
    ToggleMenu,
    ToggleTheme,
    ToggleLanguage,
    Quit,
}

impl Action {
    /// Ordered list of all actions.
    pub const ALL: &[Action] = &[
        Action::PrevPage,
        Action::NextPage,
        Action::ToggleViewAll,
        Action::NextSection,
        Action::PrevSection,
        Action::ToggleMenu,
        Action::ToggleTheme,
        Action::ToggleLanguage,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::PrevPage => "prev_page",
            Action::NextPage => "next_page",
            Action::ToggleViewAll => "toggle_view_all",
            Action::NextSection => "next_section",
            Action::PrevSection => "prev_section",
            Action::ToggleMenu => "toggle_menu",
            Action::ToggleTheme => "toggle_theme",
            Action::ToggleLanguage => "toggle_language",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT modifiers are
    /// compared; SHIFT is already folded into the character or `BackTab`.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Short label for hints (e.g. `"→"`, `"Ctrl+c"`, `"v"`).
    pub fn display(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&match self.code {
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            other => code_name(other),
        });
        s
    }

    fn to_config_string(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&code_name(self.code));
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Left"`, `"v"`, `"BackTab"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.trim().to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                _ => return None,
            }
        }

        let key_part = key_part.trim();
        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            _ => {
                let mut chars = key_part.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(KeyBind { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        s.push_str("Alt+");
    }
    s
}

fn code_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "BackTab".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── theme mode ────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub theme: ThemeMode,
    pub language: Language,
    /// Viewports at or below this width show one card per page.
    pub breakpoint_px: u32,
    /// Minimum horizontal drag that counts as a swipe.
    pub swipe_threshold_px: u32,
    /// Quiet time after the last resize before the carousel re-measures.
    pub resize_debounce_ms: u64,
    /// Where the contact form is posted.
    pub form_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            theme: ThemeMode::default(),
            language: Language::default(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(PrevPage, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(NextPage, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(ToggleViewAll, vec![KeyBind::new(Char('v'), n)]);
        m.insert(NextSection, vec![KeyBind::new(Tab, n), KeyBind::new(Down, n)]);
        m.insert(PrevSection, vec![KeyBind::new(BackTab, n), KeyBind::new(Up, n)]);
        m.insert(ToggleMenu, vec![KeyBind::new(Char('m'), n)]);
        m.insert(ToggleTheme, vec![KeyBind::new(Char('t'), n)]);
        m.insert(ToggleLanguage, vec![KeyBind::new(Char('g'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: page | {}: view all | {}: section | {}: theme | {}: lang | {}: quit",
            self.short_binding(Action::PrevPage),
            self.short_binding(Action::NextPage),
            self.short_binding(Action::ToggleViewAll),
            self.short_binding(Action::NextSection),
            self.short_binding(Action::ToggleTheme),
            self.short_binding(Action::ToggleLanguage),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    /// Parse the key-value format.  Unknown keys and malformed values are
    /// skipped.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "theme" => {
                    if let Some(t) = ThemeMode::from_name(value) {
                        config.theme = t;
                    }
                    continue;
                }
                "language" => {
                    if let Some(l) = Language::from_code(value) {
                        config.language = l;
                    }
                    continue;
                }
                "breakpoint_px" => {
                    if let Ok(v) = value.parse::<u32>() {
                        config.breakpoint_px = v.clamp(320, 4096);
                    }
                    continue;
                }
                "swipe_threshold_px" => {
                    if let Ok(v) = value.parse::<u32>() {
                        config.swipe_threshold_px = v.clamp(10, 400);
                    }
                    continue;
                }
                "resize_debounce_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.resize_debounce_ms = v.min(2000);
                    }
                    continue;
                }
                "form_endpoint" => {
                    config.form_endpoint = value.to_string();
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# folio-deck configuration".to_string(),
            String::new(),
            "# Preferences".to_string(),
            format!("theme = {}", self.theme.name()),
            format!("language = {}", self.language.code()),
            String::new(),
            "# Carousel".to_string(),
            format!("breakpoint_px = {}", self.breakpoint_px),
            format!("swipe_threshold_px = {}", self.swipe_threshold_px),
            format!("resize_debounce_ms = {}", self.resize_debounce_ms),
            String::new(),
            "# Contact form relay".to_string(),
            format!("form_endpoint = {}", self.form_endpoint),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/folio-deck/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("folio-deck").join("config.toml")
}
