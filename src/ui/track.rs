//! Terminal side of the carousel: a cell-based metrics provider, the render
//! target that stores presented frames, and the widget that paints them.
//!
//! Terminal cells are converted to the carousel's pixel units with a fixed
//! cell width, so the carousel never knows it is running in a terminal.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::core::carousel::{
    RenderFrame, RenderTarget, Responsive, TrackLayout, ViewportMetrics, CARD_GAP_PX,
};
use crate::core::content::ProjectCard;
use crate::core::i18n::{translate, Language};

use super::layout::point_in_rect;
use super::theme::Theme;

/// Pixels per terminal column.
pub const CELL_WIDTH_PX: u32 = 8;
/// Columns reserved on each side of the track for the ◀ / ▶ controls.
pub const TRACK_INSET_COLS: u16 = 4;
/// Rows a card occupies.
pub const CARD_HEIGHT: u16 = 8;

pub fn gap_cols() -> u16 {
    (CARD_GAP_PX / CELL_WIDTH_PX) as u16
}

pub fn px_to_cols(px: i64) -> i64 {
    px / i64::from(CELL_WIDTH_PX)
}

// ───────────────────────────────────────── metrics ───────────

/// Viewport metrics measured in terminal columns.
#[derive(Debug, Clone, Copy)]
pub struct TerminalMetrics {
    columns: u16,
    responsive: Responsive,
}

impl TerminalMetrics {
    pub fn new(columns: u16, responsive: Responsive) -> Self {
        Self {
            columns,
            responsive,
        }
    }

    pub fn set_columns(&mut self, columns: u16) {
        self.columns = columns;
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Width available to the card track.
    pub fn track_cols(&self) -> u16 {
        self.columns.saturating_sub(TRACK_INSET_COLS * 2)
    }

    /// Width of one card for the page size the current viewport implies.
    pub fn card_cols(&self) -> u16 {
        let per_page = self.responsive.page_size(self.viewport_width()) as u16;
        let gaps = gap_cols() * per_page.saturating_sub(1);
        (self.track_cols().saturating_sub(gaps) / per_page.max(1)).max(1)
    }

    pub fn is_narrow(&self) -> bool {
        self.responsive.is_narrow(self.viewport_width())
    }
}

impl ViewportMetrics for TerminalMetrics {
    fn viewport_width(&self) -> u32 {
        u32::from(self.columns) * CELL_WIDTH_PX
    }

    fn card_width(&self) -> u32 {
        u32::from(self.card_cols()) * CELL_WIDTH_PX
    }
}

// ───────────────────────────────────────── render target ─────

/// Holds whatever the carousel last presented, for the widget to paint.
#[derive(Debug, Default, Clone)]
pub struct TrackView {
    pub dot_count: usize,
    pub frame: RenderFrame,
    /// Bumped on every present; lets the host notice new frames.
    pub generation: u64,
}

impl RenderTarget for TrackView {
    fn rebuild_dots(&mut self, count: usize) {
        self.dot_count = count;
    }

    fn present(&mut self, frame: &RenderFrame) {
        self.frame = *frame;
        self.generation = self.generation.wrapping_add(1);
    }
}

// ───────────────────────────────────────── widget ────────────

/// Clickable regions returned after rendering, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct CarouselHitZones {
    pub track: Rect,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub view_all: Rect,
    pub dots: Vec<Rect>,
    /// On-screen rect of each drawn card, keyed by card index.
    pub cards: Vec<(usize, Rect)>,
}

impl CarouselHitZones {
    /// Index of the card under (`col`, `row`).
    pub fn card_at(&self, col: u16, row: u16) -> Option<usize> {
        self.cards
            .iter()
            .find(|(_, r)| point_in_rect(*r, col, row))
            .map(|(i, _)| *i)
    }
}

/// The projects carousel.
pub struct CarouselWidget<'a> {
    pub cards: &'a [ProjectCard],
    pub view: &'a TrackView,
    /// Animated track offset, in columns.
    pub offset_cols: i64,
    pub card_cols: u16,
    pub theme: Theme,
    pub lang: Language,
}

impl<'a> CarouselWidget<'a> {
    /// Render and return hit zones for mouse interaction.
    pub fn render_and_hit(self, area: Rect, buf: &mut Buffer) -> CarouselHitZones {
        let mut zones = CarouselHitZones::default();
        if area.height < 2 || area.width < TRACK_INSET_COLS * 2 + 4 {
            return zones;
        }

        let frame = self.view.frame;
        let show_all = frame.layout == TrackLayout::Wrapped;

        // Title row with the view-all toggle on the right.
        let title = translate(self.lang, "projects.title");
        Paragraph::new(Line::from(Span::styled(
            format!(" {title}"),
            self.theme.heading_style(),
        )))
        .render(Rect::new(area.x, area.y, area.width, 1), buf);

        if self.cards.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", translate(self.lang, "projects.empty")),
                self.theme.muted_style(),
            )))
            .render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
            return zones;
        }

        let toggle_key = if show_all { "projects.showLess" } else { "projects.viewAll" };
        let toggle = format!("[ {} ]", translate(self.lang, toggle_key));
        let toggle_w = toggle.chars().count() as u16;
        zones.view_all = Rect::new(
            area.x + area.width.saturating_sub(toggle_w + 1),
            area.y,
            toggle_w.min(area.width),
            1,
        );
        Paragraph::new(Line::from(Span::styled(toggle, self.theme.control_style())))
            .render(zones.view_all, buf);

        let body = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        if show_all {
            zones.track = body;
            zones.cards = self.render_wrapped(body, buf);
            return zones;
        }

        let track_h = CARD_HEIGHT.min(body.height.saturating_sub(1)).max(1);
        let track = Rect::new(
            body.x + TRACK_INSET_COLS,
            body.y,
            body.width.saturating_sub(TRACK_INSET_COLS * 2),
            track_h,
        );
        zones.track = track;
        zones.cards = self.render_windowed(track, buf);

        if frame.controls_visible {
            let arrow_y = track.y + track_h / 2;
            let prev = Rect::new(body.x, arrow_y, 3, 1);
            let next = Rect::new(body.x + body.width.saturating_sub(3), arrow_y, 3, 1);
            Paragraph::new(Span::styled(" ◀", self.theme.control_style())).render(prev, buf);
            Paragraph::new(Span::styled("▶ ", self.theme.control_style())).render(next, buf);
            zones.prev = Some(prev);
            zones.next = Some(next);

            let dots_y = track.y + track_h;
            if dots_y < body.y + body.height {
                zones.dots = self.render_dots(Rect::new(body.x, dots_y, body.width, 1), buf);
            }
        }

        zones
    }

    fn render_windowed(&self, track: Rect, buf: &mut Buffer) -> Vec<(usize, Rect)> {
        let mut drawn = Vec::new();
        let stride = i64::from(self.card_cols) + i64::from(gap_cols());
        for (i, card) in self.cards.iter().enumerate() {
            let left = i as i64 * stride + self.offset_cols;
            let right = left + i64::from(self.card_cols);
            if right <= 0 || left >= i64::from(track.width) {
                continue;
            }
            let x0 = left.max(0) as u16;
            let x1 = right.min(i64::from(track.width)) as u16;
            let rect = Rect::new(track.x + x0, track.y, x1 - x0, track.height);
            self.render_card(card, rect, buf);
            drawn.push((i, rect));
        }
        drawn
    }

    fn render_wrapped(&self, area: Rect, buf: &mut Buffer) -> Vec<(usize, Rect)> {
        let gap = gap_cols();
        let per_row = ((area.width + gap) / (self.card_cols + gap)).max(1) as usize;
        let row_h = CARD_HEIGHT + 1;
        let max_rows = (area.height / row_h).max(1) as usize;
        let shown = (per_row * max_rows).min(self.cards.len());

        let mut drawn = Vec::new();
        for (i, card) in self.cards.iter().take(shown).enumerate() {
            let col = (i % per_row) as u16;
            let row = (i / per_row) as u16;
            let x = area.x + col * (self.card_cols + gap);
            let y = area.y + row * row_h;
            let w = self.card_cols.min(area.x + area.width - x);
            let h = CARD_HEIGHT.min(area.y + area.height - y);
            let rect = Rect::new(x, y, w, h);
            self.render_card(card, rect, buf);
            drawn.push((i, rect));
        }

        let hidden = self.cards.len() - shown;
        if hidden > 0 {
            let note = format!(" +{hidden} {}", translate(self.lang, "projects.more"));
            let y = area.y + area.height - 1;
            Paragraph::new(Span::styled(note, self.theme.muted_style()))
                .render(Rect::new(area.x, y, area.width, 1), buf);
        }
        drawn
    }

    fn render_card(&self, card: &ProjectCard, rect: Rect, buf: &mut Buffer) {
        if rect.width < 3 || rect.height < 2 {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.card_border_style())
            .title(Span::styled(
                format!(" {} ", card.title),
                self.theme.card_title_style(),
            ));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let mut lines = vec![Line::from(Span::styled(
            card.description.clone(),
            self.theme.base_style(),
        ))];
        if !card.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                card.tags.join(" · "),
                self.theme.tag_style(),
            )));
        }
        if let Some(link) = &card.link {
            lines.push(Line::from(Span::styled(
                link.clone(),
                self.theme.highlight_style(),
            )));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    /// Paint one dot per page, centred, and return each dot's rect.
    fn render_dots(&self, row: Rect, buf: &mut Buffer) -> Vec<Rect> {
        let count = self.view.dot_count;
        let active = self.view.frame.active_dot;
        let width = (count as u16).saturating_mul(2);
        let start = row.x + row.width.saturating_sub(width) / 2;

        let mut rects = Vec::with_capacity(count);
        for i in 0..count {
            let x = start + (i as u16) * 2;
            if x >= row.x + row.width {
                break;
            }
            let is_active = active == Some(i);
            let glyph = if is_active { "●" } else { "○" };
            let rect = Rect::new(x, row.y, 1, 1);
            Paragraph::new(Span::styled(glyph, self.theme.dot_style(is_active))).render(rect, buf);
            rects.push(rect);
        }

        if let Some(page) = active {
            let label = format!("{} {}/{}", translate(self.lang, "projects.page"), page + 1, count);
            let w = label.chars().count() as u16;
            if row.width > width + w + 4 {
                let x = row.x + row.width - w - 1;
                Paragraph::new(Span::styled(label, self.theme.muted_style()))
                    .render(Rect::new(x, row.y, w, 1), buf);
            }
        }
        rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::carousel::Carousel;
    use crate::core::content::Portfolio;

    fn wide() -> TerminalMetrics {
        TerminalMetrics::new(160, Responsive::default())
    }

    #[test]
    fn columns_convert_to_pixels() {
        let m = wide();
        assert_eq!(m.viewport_width(), 1280);
        assert!(!m.is_narrow());
        assert!(TerminalMetrics::new(96, Responsive::default()).is_narrow());
        assert!(!TerminalMetrics::new(97, Responsive::default()).is_narrow());
    }

    #[test]
    fn three_cards_and_two_gaps_fit_the_track() {
        let m = wide();
        let used = m.card_cols() * 3 + gap_cols() * 2;
        assert!(used <= m.track_cols());
        assert_eq!(m.card_width() % CELL_WIDTH_PX, 0);
    }

    #[test]
    fn tiny_terminal_still_has_a_card_width() {
        let m = TerminalMetrics::new(3, Responsive::default());
        assert_eq!(m.card_cols(), 1);
    }

    #[test]
    fn render_target_tracks_latest_frame() {
        let c = Carousel::new(7, Responsive::default(), wide(), TrackView::default());
        assert_eq!(c.target().dot_count, 3);
        assert_eq!(c.target().generation, 1);
        assert!(c.target().frame.controls_visible);
    }

    #[test]
    fn widget_reports_one_zone_per_dot() {
        let portfolio = Portfolio::sample();
        let mut c = Carousel::new(
            portfolio.projects.len(),
            Responsive::default(),
            wide(),
            TrackView::default(),
        );
        c.next();
        let area = Rect::new(0, 0, 160, 14);
        let mut buf = Buffer::empty(area);
        let zones = CarouselWidget {
            cards: &portfolio.projects,
            view: c.target(),
            offset_cols: px_to_cols(c.frame().offset_px),
            card_cols: c.metrics().card_cols(),
            theme: Theme::new(Default::default()),
            lang: Language::En,
        }
        .render_and_hit(area, &mut buf);

        assert_eq!(zones.dots.len(), 3);
        assert!(zones.prev.is_some() && zones.next.is_some());
        assert_eq!(zones.track.x, TRACK_INSET_COLS);

        let (first, rect) = zones.cards[0];
        assert_eq!(first, 3);
        assert_eq!(zones.card_at(rect.x + 1, rect.y + 1), Some(3));
        assert_eq!(zones.card_at(0, 0), None);
    }

    #[test]
    fn show_all_hides_controls() {
        let portfolio = Portfolio::sample();
        let mut c = Carousel::new(
            portfolio.projects.len(),
            Responsive::default(),
            wide(),
            TrackView::default(),
        );
        c.toggle_view_all();
        let area = Rect::new(0, 0, 160, 30);
        let mut buf = Buffer::empty(area);
        let zones = CarouselWidget {
            cards: &portfolio.projects,
            view: c.target(),
            offset_cols: 0,
            card_cols: c.metrics().card_cols(),
            theme: Theme::new(Default::default()),
            lang: Language::En,
        }
        .render_and_hit(area, &mut buf);

        assert!(zones.prev.is_none());
        assert!(zones.dots.is_empty());
        assert_eq!(zones.cards.len(), portfolio.projects.len());
    }
}
