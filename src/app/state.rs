//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    carousel::{Carousel, Command, Responsive, TrackLayout},
    contact::{ContactForm, Field, Submission},
    content::Portfolio,
    counter::Counter,
    debounce::Debouncer,
    gesture::SwipeTracker,
    i18n::{translate, Language},
    links,
    nav::{Nav, Section},
    notification::{NotificationKind, Notifier},
};
use crate::error::RelayError;
use crate::ui::{
    sections::{HeaderHitZones, MenuHitZones},
    slide::SlideAnimator,
    theme::Theme,
    track::{px_to_cols, CarouselHitZones, TerminalMetrics, TrackView},
};

/// The projects carousel as hosted in the terminal.
pub type ProjectCarousel = Carousel<TerminalMetrics, TrackView>;

/// Clickable regions recorded by the last draw.
#[derive(Debug, Clone, Default)]
pub struct HitZones {
    pub header: HeaderHitZones,
    pub menu: Option<MenuHitZones>,
    pub carousel: CarouselHitZones,
}

/// Top-level application state.
pub struct AppState {
    pub config: AppConfig,
    /// Where preference changes are written.  `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
    pub portfolio: Portfolio,
    pub carousel: ProjectCarousel,
    /// Animated track offset (columns) chasing the carousel's frame.
    pub slide: SlideAnimator,
    pub swipe: SwipeTracker,
    /// Card under the pointer when the current drag began.
    pub pressed_card: Option<usize>,
    /// Trailing-edge debounce between resize events and re-measuring.
    pub resize: Debouncer,
    pub nav: Nav,
    pub form: ContactForm,
    pub focused_field: Field,
    /// `true` while keystrokes go into the contact form.
    pub editing: bool,
    /// `true` while a submission is in flight.
    pub submitting: bool,
    /// Validated submission waiting for the event loop to send it.
    pub pending_submission: Option<Submission>,
    /// Project link waiting for the event loop to open it.
    pub pending_link: Option<String>,
    pub notifier: Notifier,
    /// One per portfolio stat, started on first visit to About.
    pub counters: Vec<Counter>,
    pub hit_zones: HitZones,
    /// Last known terminal size, used for mouse hit-testing.
    pub terminal_area: Rect,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, portfolio: Portfolio, terminal_area: Rect) -> Self {
        let responsive = Responsive::new(config.breakpoint_px);
        let metrics = TerminalMetrics::new(terminal_area.width, responsive);
        let carousel = Carousel::new(
            portfolio.projects.len(),
            responsive,
            metrics,
            TrackView::default(),
        );
        let counters = portfolio.stats.iter().map(|s| Counter::new(s.target)).collect();
        let mut state = Self {
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            resize: Debouncer::new(Duration::from_millis(config.resize_debounce_ms)),
            config,
            config_path: None,
            portfolio,
            carousel,
            slide: SlideAnimator::default(),
            pressed_card: None,
            nav: Nav::default(),
            form: ContactForm::default(),
            focused_field: Field::Name,
            editing: false,
            submitting: false,
            pending_submission: None,
            pending_link: None,
            notifier: Notifier::default(),
            counters,
            hit_zones: HitZones::default(),
            terminal_area,
            should_quit: false,
        };
        state.sync_slide(true);
        state
    }

    pub fn theme(&self) -> Theme {
        Theme::new(self.config.theme)
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        translate(self.config.language, key)
    }

    pub fn is_narrow(&self) -> bool {
        self.carousel.metrics().is_narrow()
    }

    // ── carousel ───────────────────────────────────────────────

    /// Run a carousel command and start the track sliding toward the new
    /// offset.
    pub fn dispatch(&mut self, command: Command) {
        self.carousel.dispatch(command);
        self.sync_slide(command == Command::ToggleViewAll);
    }

    fn sync_slide(&mut self, snap: bool) {
        let frame = self.carousel.frame();
        let target = px_to_cols(frame.offset_px);
        if snap || frame.layout == TrackLayout::Wrapped {
            self.slide.snap(target);
        } else {
            self.slide.set_target(target);
        }
    }

    /// Queue the link of card `index` for opening.  Cards without a link, or
    /// with a `#` placeholder, do nothing.
    pub fn open_card(&mut self, index: usize) {
        let Some(link) = self.portfolio.projects.get(index).and_then(|c| c.link.as_deref())
        else {
            return;
        };
        if links::is_followable(link) {
            self.pending_link = Some(link.trim().to_string());
        } else {
            tracing::debug!(index, "card has no followable link");
        }
    }

    /// Open the first card of the page on screen.
    pub fn open_current_card(&mut self) {
        let first = self.carousel.visible_cards().start;
        self.open_card(first);
    }

    /// Record a terminal resize.  Re-measuring waits for the debounce window.
    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.terminal_area = Rect::new(0, 0, width, height);
        self.carousel.metrics_mut().set_columns(width);
        self.resize.poke(now);
    }

    /// Per-frame housekeeping: debounced re-measure, slide animation,
    /// notification expiry.
    pub fn on_tick(&mut self, now: Instant) {
        if self.resize.fire(now) {
            self.carousel.on_viewport_change();
            self.sync_slide(true);
            if !self.is_narrow() {
                self.nav.close_menu();
            }
        }
        self.slide.tick();
        self.notifier.expire(now);
    }

    // ── navigation ─────────────────────────────────────────────

    pub fn select_section(&mut self, section: Section, now: Instant) {
        self.nav.select(section);
        self.on_section_entered(now);
    }

    pub fn next_section(&mut self, now: Instant) {
        self.nav.select_next();
        self.on_section_entered(now);
    }

    pub fn prev_section(&mut self, now: Instant) {
        self.nav.select_prev();
        self.on_section_entered(now);
    }

    fn on_section_entered(&mut self, now: Instant) {
        self.swipe.cancel();
        self.pressed_card = None;
        if self.nav.active() != Section::Contact {
            self.editing = false;
        }
        if self.nav.active() == Section::About {
            for c in &mut self.counters {
                c.start(now);
            }
        }
    }

    // ── preferences ────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        self.persist();
    }

    pub fn toggle_language(&mut self) {
        self.config.language = self.config.language.toggled();
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::warn!("failed to save preferences to {}: {e:#}", path.display());
        }
    }

    // ── notifications ──────────────────────────────────────────

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.notifier.show(kind, message, now);
    }

    // ── contact form ───────────────────────────────────────────

    /// Validate the form and queue it for sending.  Validation failures
    /// surface as an error banner.
    pub fn submit_form(&mut self, now: Instant) {
        if self.submitting {
            return;
        }
        match self.form.validate(&self.config.form_endpoint) {
            Ok(submission) => {
                self.submitting = true;
                self.pending_submission = Some(submission);
            }
            Err(e) => {
                let msg = self.t(e.message_key()).to_string();
                self.notify(NotificationKind::Error, msg, now);
            }
        }
    }

    /// Apply the outcome of a relay round-trip.
    pub fn finish_submission(&mut self, result: Result<(), RelayError>, now: Instant) {
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!("contact form delivered");
                let msg = self.t("notification.success").to_string();
                self.notify(NotificationKind::Success, msg, now);
                self.form.reset();
                self.focused_field = Field::Name;
                self.editing = false;
            }
            Err(e) => {
                let msg = match e {
                    RelayError::Rejected {
                        message: Some(m), ..
                    } => m,
                    RelayError::Rejected { message: None, .. } => {
                        self.t("notification.error.submit").to_string()
                    }
                    RelayError::Network(_) => self.t("notification.error.network").to_string(),
                    RelayError::EndpointNotConfigured => {
                        self.t("notification.error.form").to_string()
                    }
                };
                self.notify(NotificationKind::Error, msg, now);
            }
        }
    }
}
