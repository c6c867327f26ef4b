//! Full-screen composition: header, active section, footer, status bar and
//! overlays.  Records the hit zones mouse handling relies on.

use std::time::Instant;

use chrono::Datelike;
use ratatui::{
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::state::{AppState, HitZones};
use crate::core::nav::Section;

use super::banner::NotificationBanner;
use super::layout::AppLayout;
use super::sections::{
    AboutWidget, ContactWidget, FooterWidget, HeaderWidget, HeroWidget, MenuWidget,
};
use super::track::{CarouselHitZones, CarouselWidget};

pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let now = Instant::now();
    let theme = state.theme();
    let lang = state.language();
    let layout = AppLayout::from_area(area);

    frame.render_widget(Block::default().style(theme.base_style()), area);

    let header = HeaderWidget {
        owner: &state.portfolio.owner,
        nav: &state.nav,
        narrow: state.is_narrow(),
        theme,
        lang,
    }
    .render_and_hit(layout.header_area, frame.buffer_mut());

    let mut carousel = CarouselHitZones::default();
    match state.nav.active() {
        Section::Home => frame.render_widget(
            HeroWidget {
                portfolio: &state.portfolio,
                theme,
                lang,
            },
            layout.body_area,
        ),
        Section::About => frame.render_widget(
            AboutWidget {
                portfolio: &state.portfolio,
                counters: &state.counters,
                now,
                theme,
                lang,
            },
            layout.body_area,
        ),
        Section::Projects => {
            carousel = CarouselWidget {
                cards: &state.portfolio.projects,
                view: state.carousel.target(),
                offset_cols: state.slide.offset(),
                card_cols: state.carousel.metrics().card_cols(),
                theme,
                lang,
            }
            .render_and_hit(layout.body_area, frame.buffer_mut());
        }
        Section::Contact => frame.render_widget(
            ContactWidget {
                portfolio: &state.portfolio,
                form: &state.form,
                focused: state.focused_field,
                editing: state.editing,
                submitting: state.submitting,
                theme,
                lang,
            },
            layout.body_area,
        ),
    }

    frame.render_widget(
        FooterWidget {
            owner: &state.portfolio.owner,
            year: chrono::Local::now().year(),
            theme,
            lang,
        },
        layout.footer_area,
    );

    let hint = if state.editing {
        state.t("contact.form.editingHint").to_string()
    } else {
        state.config.status_bar_hint()
    };
    frame.render_widget(
        Paragraph::new(hint).style(theme.status_bar_style()),
        layout.status_area,
    );

    let menu = match header.menu_toggle {
        Some(anchor) if state.nav.is_menu_open() => Some(
            MenuWidget {
                nav: &state.nav,
                anchor,
                theme,
                lang,
            }
            .render_and_hit(area, frame.buffer_mut()),
        ),
        _ => None,
    };

    frame.render_widget(
        NotificationBanner {
            notification: state.notifier.current(),
            theme,
        },
        layout.body_area,
    );

    state.hit_zones = HitZones {
        header,
        menu,
        carousel,
    };
}
