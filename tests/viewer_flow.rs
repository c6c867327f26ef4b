//! End-to-end flows through the input handler and the renderer.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

use folio_deck::app::{handler, state::AppState};
use folio_deck::config::AppConfig;
use folio_deck::core::carousel::ViewMode;
use folio_deck::core::content::Portfolio;
use folio_deck::core::nav::Section;
use folio_deck::ui::page;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn draw(terminal: &mut Terminal<TestBackend>, state: &mut AppState) {
    terminal.draw(|f| page::draw(f, state)).expect("draw");
}

#[test]
fn clicking_controls_pages_the_carousel() {
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).expect("terminal");
    let mut state = AppState::new(AppConfig::default(), Portfolio::sample(), Rect::new(0, 0, 160, 40));
    state.select_section(Section::Projects, Instant::now());
    draw(&mut terminal, &mut state);

    let next = state.hit_zones.carousel.next.expect("next arrow drawn");
    handler::handle_mouse(&mut state, click(next.x, next.y));
    assert_eq!(state.carousel.current_page(), 1);

    draw(&mut terminal, &mut state);
    let last_dot = *state.hit_zones.carousel.dots.last().expect("dots drawn");
    handler::handle_mouse(&mut state, click(last_dot.x, last_dot.y));
    assert_eq!(state.carousel.current_page(), 2);

    draw(&mut terminal, &mut state);
    let view_all = state.hit_zones.carousel.view_all;
    handler::handle_mouse(&mut state, click(view_all.x, view_all.y));
    assert_eq!(state.carousel.view_mode(), ViewMode::ShowAll);

    draw(&mut terminal, &mut state);
    assert!(state.hit_zones.carousel.next.is_none(), "controls hidden in show-all");
}

#[test]
fn header_link_selects_section() {
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).expect("terminal");
    let mut state = AppState::new(AppConfig::default(), Portfolio::sample(), Rect::new(0, 0, 160, 40));
    draw(&mut terminal, &mut state);

    let (_, contact) = *state
        .hit_zones
        .header
        .links
        .iter()
        .find(|(s, _)| *s == Section::Contact)
        .expect("contact link");
    handler::handle_mouse(&mut state, click(contact.x, contact.y));
    assert_eq!(state.nav.active(), Section::Contact);
}

#[test]
fn shrinking_the_terminal_switches_to_one_card_pages() {
    let mut state = AppState::new(AppConfig::default(), Portfolio::sample(), Rect::new(0, 0, 160, 40));
    handler::handle_key(&mut state, key(KeyCode::Right));
    handler::handle_key(&mut state, key(KeyCode::Right));
    assert_eq!(state.carousel.current_page(), 2);

    let t0 = Instant::now();
    state.on_resize(90, 40, t0);
    state.on_resize(80, 40, t0 + Duration::from_millis(50));
    state.on_tick(t0 + Duration::from_millis(100));
    assert_eq!(state.carousel.page_size(), 3, "still inside the debounce window");

    state.on_tick(t0 + Duration::from_millis(400));
    assert_eq!(state.carousel.page_size(), 1);
    assert_eq!(state.carousel.page_count(), 7);
    assert_eq!(state.carousel.current_page(), 2);
}

#[test]
fn empty_portfolio_is_inert() {
    let mut portfolio = Portfolio::sample();
    portfolio.projects.clear();
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
    let mut state = AppState::new(AppConfig::default(), portfolio, Rect::new(0, 0, 120, 30));
    state.select_section(Section::Projects, Instant::now());

    handler::handle_key(&mut state, key(KeyCode::Right));
    handler::handle_key(&mut state, key(KeyCode::Char('v')));
    assert_eq!(state.carousel.current_page(), 0);
    assert_eq!(state.carousel.view_mode(), ViewMode::Paged);

    draw(&mut terminal, &mut state);
    assert!(state.hit_zones.carousel.dots.is_empty());
}
