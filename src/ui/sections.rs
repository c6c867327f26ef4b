//! Page sections: header nav, hero, about, contact form and footer.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::config::ThemeMode;
use crate::core::contact::{ContactForm, Field};
use crate::core::content::Portfolio;
use crate::core::counter::Counter;
use crate::core::i18n::{translate, Language};
use crate::core::nav::{Nav, Section};

use super::theme::Theme;

// ───────────────────────────────────────── header ────────────

#[derive(Debug, Clone, Default)]
pub struct HeaderHitZones {
    pub links: Vec<(Section, Rect)>,
    pub menu_toggle: Option<Rect>,
    pub theme_toggle: Rect,
    pub lang_toggle: Rect,
}

/// Top bar: owner name, nav links (or the menu toggle when narrow), and the
/// language / theme toggles.
pub struct HeaderWidget<'a> {
    pub owner: &'a str,
    pub nav: &'a Nav,
    pub narrow: bool,
    pub theme: Theme,
    pub lang: Language,
}

impl<'a> HeaderWidget<'a> {
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer) -> HeaderHitZones {
        let mut zones = HeaderHitZones::default();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border_style())
            .style(self.theme.base_style());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width < 10 {
            return zones;
        }
        let y = inner.y;

        buf.set_string(
            inner.x + 1,
            y,
            self.owner,
            self.theme.heading_style(),
        );

        // Right-hand toggles: theme glyph then language badge.
        let glyph = match self.theme.mode {
            ThemeMode::Light => "[☾]",
            ThemeMode::Dark => "[☀]",
        };
        let badge = format!("[{}]", self.lang.badge());
        let badge_w = badge.chars().count() as u16;
        let right = inner.x + inner.width;
        zones.lang_toggle = Rect::new(right.saturating_sub(badge_w + 1), y, badge_w, 1);
        zones.theme_toggle = Rect::new(zones.lang_toggle.x.saturating_sub(4), y, 3, 1);
        buf.set_string(zones.lang_toggle.x, y, &badge, self.theme.control_style());
        buf.set_string(zones.theme_toggle.x, y, glyph, self.theme.control_style());

        if self.narrow {
            let label = format!("[☰ {}]", translate(self.lang, "nav.menu"));
            let w = label.chars().count() as u16;
            let x = zones.theme_toggle.x.saturating_sub(w + 2);
            let style = if self.nav.is_menu_open() {
                self.theme.nav_active_style()
            } else {
                self.theme.control_style()
            };
            buf.set_string(x, y, &label, style);
            zones.menu_toggle = Some(Rect::new(x, y, w, 1));
            return zones;
        }

        let labels: Vec<(Section, String)> = Section::ALL
            .iter()
            .map(|&s| (s, format!(" {} ", translate(self.lang, s.label_key()))))
            .collect();
        let total: u16 = labels.iter().map(|(_, l)| l.chars().count() as u16 + 1).sum();
        let mut x = zones.theme_toggle.x.saturating_sub(total + 2);
        for (section, label) in labels {
            let w = label.chars().count() as u16;
            let style = if section == self.nav.active() {
                self.theme.nav_active_style()
            } else {
                self.theme.nav_style()
            };
            buf.set_string(x, y, &label, style);
            zones.links.push((section, Rect::new(x, y, w, 1)));
            x += w + 1;
        }
        zones
    }
}

/// Drop-down nav list shown under the menu toggle on narrow viewports.
pub struct MenuWidget<'a> {
    pub nav: &'a Nav,
    pub anchor: Rect,
    pub theme: Theme,
    pub lang: Language,
}

#[derive(Debug, Clone, Default)]
pub struct MenuHitZones {
    pub panel: Rect,
    pub links: Vec<(Section, Rect)>,
}

impl<'a> MenuWidget<'a> {
    pub fn render_and_hit(self, screen: Rect, buf: &mut Buffer) -> MenuHitZones {
        let width = 18u16.min(screen.width);
        let height = (Section::ALL.len() as u16 + 2).min(screen.height.saturating_sub(self.anchor.y + 1));
        let x = (self.anchor.x + self.anchor.width)
            .saturating_sub(width)
            .max(screen.x);
        let panel = Rect::new(x, self.anchor.y + 1, width, height);
        let mut zones = MenuHitZones {
            panel,
            links: Vec::new(),
        };
        if height < 3 {
            return zones;
        }

        Clear.render(panel, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .style(self.theme.base_style());
        let inner = block.inner(panel);
        block.render(panel, buf);

        for (i, &section) in Section::ALL.iter().enumerate() {
            let row = inner.y + i as u16;
            if row >= inner.y + inner.height {
                break;
            }
            let style = if section == self.nav.active() {
                self.theme.nav_active_style()
            } else {
                self.theme.nav_style()
            };
            let rect = Rect::new(inner.x, row, inner.width, 1);
            Paragraph::new(format!(" {}", translate(self.lang, section.label_key())))
                .style(style)
                .render(rect, buf);
            zones.links.push((section, rect));
        }
        zones
    }
}

// ───────────────────────────────────────── hero ──────────────

pub struct HeroWidget<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: Theme,
    pub lang: Language,
}

impl Widget for HeroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = |k| translate(self.lang, k);
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(t("hero.greeting"), self.theme.muted_style())),
            Line::from(Span::styled(
                self.portfolio.owner.clone(),
                self.theme.heading_style(),
            )),
            Line::from(Span::styled(
                self.portfolio.tagline.clone(),
                self.theme.base_style(),
            )),
            Line::default(),
        ];
        lines.push(Line::from(vec![
            Span::styled(format!("[ {} ]", t("hero.ctaPrimary")), self.theme.control_style()),
            Span::raw("   "),
            Span::styled(format!("[ {} ]", t("hero.ctaSecondary")), self.theme.muted_style()),
        ]));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(self.theme.base_style())
            .render(area, buf);
    }
}

// ───────────────────────────────────────── about ─────────────

pub struct AboutWidget<'a> {
    pub portfolio: &'a Portfolio,
    pub counters: &'a [Counter],
    pub now: Instant,
    pub theme: Theme,
    pub lang: Language,
}

impl Widget for AboutWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {}", translate(self.lang, "about.title")),
                    self.theme.heading_style(),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("● {}", translate(self.lang, "about.badge")),
                    self.theme.tag_style(),
                ),
            ]),
            Line::default(),
        ];
        for para in self.portfolio.about.split("\n\n") {
            lines.push(Line::from(Span::styled(
                format!(" {}", para.trim()),
                self.theme.base_style(),
            )));
            lines.push(Line::default());
        }

        let stats: Vec<Span> = self
            .portfolio
            .stats
            .iter()
            .zip(self.counters)
            .flat_map(|(stat, counter)| {
                [
                    Span::styled(
                        format!(" {}+ ", counter.value(self.now)),
                        self.theme.highlight_style(),
                    ),
                    Span::styled(format!("{}   ", stat.label), self.theme.muted_style()),
                ]
            })
            .collect();
        if !stats.is_empty() {
            lines.push(Line::from(stats));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(self.theme.base_style())
            .render(area, buf);
    }
}

// ───────────────────────────────────────── contact ───────────

pub struct ContactWidget<'a> {
    pub portfolio: &'a Portfolio,
    pub form: &'a ContactForm,
    pub focused: Field,
    pub editing: bool,
    pub submitting: bool,
    pub theme: Theme,
    pub lang: Language,
}

impl ContactWidget<'_> {
    fn field_line(&self, field: Field) -> Line<'static> {
        let t = |k| translate(self.lang, k);
        let focused = self.editing && field == self.focused;
        let marker = if focused { "›" } else { " " };
        match field {
            Field::Newsletter => {
                let tick = if self.form.newsletter { "[x]" } else { "[ ]" };
                Line::from(Span::styled(
                    format!("{marker} {tick} {}", t(field.label_key())),
                    self.theme.field_style(focused),
                ))
            }
            Field::Submit => {
                let key = if self.submitting {
                    "contact.form.sending"
                } else {
                    "contact.form.send"
                };
                let style = if self.submitting {
                    self.theme.muted_style()
                } else if focused {
                    self.theme.nav_active_style()
                } else {
                    self.theme.control_style()
                };
                Line::from(vec![
                    Span::raw(format!("{marker} ")),
                    Span::styled(format!("[ {} ]", t(key)), style),
                ])
            }
            _ => {
                let value = self.form.value(field).unwrap_or_default();
                let cursor = if focused { "▏" } else { "" };
                Line::from(vec![
                    Span::styled(
                        format!("{marker} {:<22}", t(field.label_key())),
                        self.theme.muted_style(),
                    ),
                    Span::styled(format!("{value}{cursor}"), self.theme.field_style(focused)),
                ])
            }
        }
    }
}

impl Widget for ContactWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                format!(" {}", translate(self.lang, "contact.title")),
                self.theme.heading_style(),
            )),
            Line::default(),
        ];
        let details: Vec<&str> = [
            self.portfolio.email.as_deref(),
            self.portfolio.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !details.is_empty() {
            lines.push(Line::from(Span::styled(
                format!(" {}", details.join("  ·  ")),
                self.theme.muted_style(),
            )));
            lines.push(Line::default());
        }
        for &field in Field::ALL {
            lines.push(self.field_line(field));
        }
        lines.push(Line::default());
        let hint = if self.editing {
            "contact.form.editingHint"
        } else {
            "contact.form.editHint"
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", translate(self.lang, hint)),
            self.theme.muted_style(),
        )));

        Paragraph::new(lines)
            .style(self.theme.base_style())
            .render(area, buf);
    }
}

// ───────────────────────────────────────── footer ────────────

pub struct FooterWidget<'a> {
    pub owner: &'a str,
    pub year: i32,
    pub theme: Theme,
    pub lang: Language,
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = format!(
            "© {} {}. {}",
            self.year,
            self.owner,
            translate(self.lang, "footer.copyright")
        );
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(self.theme.muted_style())
            .render(area, buf);
    }
}
