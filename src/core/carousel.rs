//! Paginated carousel — a view-state controller over a fixed set of cards.
//!
//! The carousel owns only navigation state (page size, current page, view
//! mode).  It reads layout measurements from a [`ViewportMetrics`] provider
//! and pushes the resulting visual state into a [`RenderTarget`]; it never
//! paints anything itself.  Every operation is total: indices clamp, paging
//! wraps around, and an empty collection turns every call into a no-op.

use std::ops::Range;

/// Horizontal gap between two adjacent cards on the track.
pub const CARD_GAP_PX: u32 = 32;

/// Default responsive breakpoint.  Viewports at or below it show one card
/// per page.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

// ───────────────────────────────────────── responsive rule ───

/// Single-breakpoint rule mapping a viewport width to a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responsive {
    pub breakpoint_px: u32,
}

impl Responsive {
    pub const NARROW_PAGE_SIZE: usize = 1;
    pub const WIDE_PAGE_SIZE: usize = 3;

    pub fn new(breakpoint_px: u32) -> Self {
        Self { breakpoint_px }
    }

    /// Cards shown per page for a viewport of `viewport_px`.  Always ≥ 1.
    pub fn page_size(&self, viewport_px: u32) -> usize {
        if viewport_px <= self.breakpoint_px {
            Self::NARROW_PAGE_SIZE
        } else {
            Self::WIDE_PAGE_SIZE
        }
    }

    pub fn is_narrow(&self, viewport_px: u32) -> bool {
        self.page_size(viewport_px) == Self::NARROW_PAGE_SIZE
    }
}

impl Default for Responsive {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_PX)
    }
}

// ───────────────────────────────────────── collaborators ─────

/// Reports layout measurements on demand.
pub trait ViewportMetrics {
    /// Current viewport width in pixels.
    fn viewport_width(&self) -> u32;
    /// Rendered width of a single card in pixels (gap excluded).
    fn card_width(&self) -> u32;
}

/// Receives the visual state computed by the carousel.
pub trait RenderTarget {
    /// Replace the indicator strip with `count` dots.
    fn rebuild_dots(&mut self, count: usize);
    /// Apply a freshly computed frame.
    fn present(&mut self, frame: &RenderFrame);
}

// ───────────────────────────────────────── commands & frame ──

/// Input-agnostic commands understood by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    /// Jump to a page.  Out-of-range values (negative included) are clamped.
    GoToPage(i64),
    ToggleViewAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Paged,
    ShowAll,
}

impl ViewMode {
    fn flipped(self) -> Self {
        match self {
            ViewMode::Paged => ViewMode::ShowAll,
            ViewMode::ShowAll => ViewMode::Paged,
        }
    }
}

/// How the track lays its cards out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackLayout {
    /// Single row, shifted horizontally by the frame offset.
    #[default]
    Windowed,
    /// All cards wrapped onto as many rows as needed, no offset.
    Wrapped,
}

/// Visual state handed to a [`RenderTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderFrame {
    /// Horizontal track offset in pixels (≤ 0).
    pub offset_px: i64,
    pub layout: TrackLayout,
    /// Prev/next buttons and the dot strip.
    pub controls_visible: bool,
    /// `None` when there are no dots to mark.
    pub active_dot: Option<usize>,
}

/// Pure render computation.
pub fn compute_frame(
    card_count: usize,
    page_size: usize,
    current_page: usize,
    mode: ViewMode,
    card_width: u32,
) -> RenderFrame {
    if card_count == 0 {
        return RenderFrame::default();
    }
    match mode {
        ViewMode::ShowAll => RenderFrame {
            offset_px: 0,
            layout: TrackLayout::Wrapped,
            controls_visible: false,
            active_dot: Some(current_page),
        },
        ViewMode::Paged => {
            let stride = i64::from(card_width) + i64::from(CARD_GAP_PX);
            RenderFrame {
                offset_px: -(current_page as i64) * page_size as i64 * stride,
                layout: TrackLayout::Windowed,
                controls_visible: true,
                active_dot: Some(current_page),
            }
        }
    }
}

/// `ceil(cards / page_size)`, with `page_size` treated as at least 1.
pub fn page_count(card_count: usize, page_size: usize) -> usize {
    card_count.div_ceil(page_size.max(1))
}

// ───────────────────────────────────────── carousel ──────────

/// The carousel controller.
#[derive(Debug)]
pub struct Carousel<M, R> {
    card_count: usize,
    page_size: usize,
    current_page: usize,
    mode: ViewMode,
    responsive: Responsive,
    metrics: M,
    target: R,
}

impl<M: ViewportMetrics, R: RenderTarget> Carousel<M, R> {
    /// Build the carousel, create one dot per page and render page 0.
    pub fn new(card_count: usize, responsive: Responsive, metrics: M, target: R) -> Self {
        let page_size = responsive.page_size(metrics.viewport_width());
        let mut carousel = Self {
            card_count,
            page_size,
            current_page: 0,
            mode: ViewMode::Paged,
            responsive,
            metrics,
            target,
        };
        carousel.target.rebuild_dots(carousel.page_count());
        carousel.render();
        carousel
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.card_count, self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_inert(&self) -> bool {
        self.card_count == 0
    }

    /// Card indices shown on the current page.
    pub fn visible_cards(&self) -> Range<usize> {
        match self.mode {
            ViewMode::ShowAll => 0..self.card_count,
            ViewMode::Paged => {
                let start = (self.current_page * self.page_size).min(self.card_count);
                let end = (start + self.page_size).min(self.card_count);
                start..end
            }
        }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Mutable access for the host to feed new measurements.  Call
    /// [`Carousel::on_viewport_change`] afterwards to apply them.
    pub fn metrics_mut(&mut self) -> &mut M {
        &mut self.metrics
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    /// The frame the carousel would present for its current state.
    pub fn frame(&self) -> RenderFrame {
        compute_frame(
            self.card_count,
            self.page_size,
            self.current_page,
            self.mode,
            self.metrics.card_width(),
        )
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::GoToPage(page) => self.go_to_page(page),
            Command::ToggleViewAll => self.toggle_view_all(),
        }
    }

    /// Advance one page, wrapping from the last page back to the first.
    pub fn next(&mut self) {
        if self.is_inert() {
            return;
        }
        let last = self.last_page();
        self.current_page = if self.current_page < last {
            self.current_page + 1
        } else {
            0
        };
        self.render();
    }

    /// Go back one page, wrapping from the first page to the last.
    pub fn previous(&mut self) {
        if self.is_inert() {
            return;
        }
        self.current_page = if self.current_page > 0 {
            self.current_page - 1
        } else {
            self.last_page()
        };
        self.render();
    }

    pub fn go_to_page(&mut self, page: i64) {
        if self.is_inert() {
            return;
        }
        let last = self.last_page() as i64;
        self.current_page = page.clamp(0, last) as usize;
        self.render();
    }

    /// Flip between the paged window and the wrapped show-all layout.  The
    /// current page survives the round trip.
    pub fn toggle_view_all(&mut self) {
        if self.is_inert() {
            return;
        }
        self.mode = self.mode.flipped();
        self.render();
    }

    /// Re-measure and re-render after a viewport change.  Idempotent.
    pub fn on_viewport_change(&mut self) {
        self.page_size = self.responsive.page_size(self.metrics.viewport_width());
        if self.is_inert() {
            return;
        }
        let pages = self.page_count();
        self.target.rebuild_dots(pages);
        self.current_page = self.current_page.min(self.last_page());
        tracing::debug!(
            page_size = self.page_size,
            pages,
            current = self.current_page,
            "carousel re-measured"
        );
        self.render();
    }

    fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    fn render(&mut self) {
        let frame = self.frame();
        self.target.present(&frame);
    }
}

// ───────────────────────────────────────── tests ─────────────
