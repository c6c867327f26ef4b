//! Input handling — maps key/mouse events to state mutations.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::core::carousel::Command;
use crate::core::contact::Field;
use crate::core::nav::Section;
use crate::ui::layout::point_in_rect;
use crate::ui::track::CELL_WIDTH_PX;

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    let now = Instant::now();

    // Ctrl+c always quits, even mid-edit.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Arrow keys page the carousel in every mode.
    match key.code {
        KeyCode::Left => return state.dispatch(Command::Previous),
        KeyCode::Right => return state.dispatch(Command::Next),
        _ => {}
    }

    if state.editing {
        handle_form_key(state, key, now);
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if state.nav.is_menu_open() {
                state.nav.close_menu();
            } else {
                state.notifier.dismiss();
            }
            return;
        }
        KeyCode::Enter if state.nav.active() == Section::Contact => {
            state.editing = true;
            return;
        }
        KeyCode::Enter | KeyCode::Char(' ') if state.nav.active() == Section::Projects => {
            state.open_current_card();
            return;
        }
        KeyCode::Char('s')
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && state.nav.active() == Section::Contact =>
        {
            state.submit_form(now);
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::PrevPage => state.dispatch(Command::Previous),
        Action::NextPage => state.dispatch(Command::Next),
        Action::ToggleViewAll => state.dispatch(Command::ToggleViewAll),
        Action::NextSection => state.next_section(now),
        Action::PrevSection => state.prev_section(now),
        Action::ToggleMenu => state.nav.toggle_menu(),
        Action::ToggleTheme => state.toggle_theme(),
        Action::ToggleLanguage => state.toggle_language(),
    }
}

// ── Contact form editing ────────────────────────────────────────

fn handle_form_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    let field = state.focused_field;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => state.editing = false,
        KeyCode::Tab => state.focused_field = field.next(),
        KeyCode::BackTab => state.focused_field = field.prev(),
        KeyCode::Up => state.focused_field = field.prev(),
        KeyCode::Down => state.focused_field = field.next(),
        KeyCode::Char('s') if ctrl => state.submit_form(now),
        KeyCode::Enter => match field {
            Field::Submit => state.submit_form(now),
            Field::Newsletter => state.form.toggle_newsletter(),
            _ => state.focused_field = field.next(),
        },
        KeyCode::Backspace => state.form.backspace(field),
        KeyCode::Char(' ') if field == Field::Newsletter => state.form.toggle_newsletter(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            if field.is_text() {
                state.form.push_char(field, c);
            }
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

fn col_to_px(col: u16) -> i64 {
    i64::from(col) * i64::from(CELL_WIDTH_PX)
}

/// Process a mouse event against the hit zones of the last draw.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let now = Instant::now();
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if state.nav.is_menu_open() {
                handle_menu_click(state, col, row, now);
                return;
            }
            if handle_header_click(state, col, row, now) {
                return;
            }
            if state.nav.active() == Section::Projects {
                handle_carousel_press(state, col, row);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let pressed = state.pressed_card.take();
            if !state.swipe.is_dragging() {
                return;
            }
            match state.swipe.end(col_to_px(col)) {
                Some(command) => state.dispatch(command),
                // A press and release on the same card is a click.
                None => {
                    if let Some(index) =
                        pressed.filter(|&i| state.hit_zones.carousel.card_at(col, row) == Some(i))
                    {
                        state.open_card(index);
                    }
                }
            }
        }
        MouseEventKind::ScrollDown => state.next_section(now),
        MouseEventKind::ScrollUp => state.prev_section(now),
        _ => {}
    }
}

/// Clicks while the narrow-screen menu is open either pick a link, hit the
/// toggle, or land outside and close it.
fn handle_menu_click(state: &mut AppState, col: u16, row: u16, now: Instant) {
    let picked = state.hit_zones.menu.as_ref().and_then(|m| {
        m.links
            .iter()
            .find(|(_, r)| point_in_rect(*r, col, row))
            .map(|(s, _)| *s)
    });
    if let Some(section) = picked {
        state.select_section(section, now);
        return;
    }
    let on_toggle = state
        .hit_zones
        .header
        .menu_toggle
        .is_some_and(|r| point_in_rect(r, col, row));
    let in_panel = state
        .hit_zones
        .menu
        .as_ref()
        .is_some_and(|m| point_in_rect(m.panel, col, row));
    if on_toggle || !in_panel {
        state.nav.close_menu();
    }
}

/// Returns `true` when the click was consumed by the header.
fn handle_header_click(state: &mut AppState, col: u16, row: u16, now: Instant) -> bool {
    let zones = state.hit_zones.header.clone();
    if let Some(&(section, _)) = zones.links.iter().find(|(_, r)| point_in_rect(*r, col, row)) {
        state.select_section(section, now);
        return true;
    }
    if zones.menu_toggle.is_some_and(|r| point_in_rect(r, col, row)) {
        state.nav.toggle_menu();
        return true;
    }
    if point_in_rect(zones.theme_toggle, col, row) {
        state.toggle_theme();
        return true;
    }
    if point_in_rect(zones.lang_toggle, col, row) {
        state.toggle_language();
        return true;
    }
    false
}

fn handle_carousel_press(state: &mut AppState, col: u16, row: u16) {
    let zones = state.hit_zones.carousel.clone();
    let track = zones.track;
    let command = if zones.prev.is_some_and(|r| point_in_rect(r, col, row)) {
        Some(Command::Previous)
    } else if zones.next.is_some_and(|r| point_in_rect(r, col, row)) {
        Some(Command::Next)
    } else if point_in_rect(zones.view_all, col, row) {
        Some(Command::ToggleViewAll)
    } else {
        zones
            .dots
            .iter()
            .position(|r| point_in_rect(*r, col, row))
            .map(|i| Command::GoToPage(i as i64))
    };

    if let Some(command) = command {
        state.dispatch(command);
    } else if point_in_rect(track, col, row) {
        state.pressed_card = zones.card_at(col, row);
        state.swipe.begin(col_to_px(col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::carousel::ViewMode;
    use crate::core::content::Portfolio;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            Portfolio::sample(),
            Rect::new(0, 0, 160, 40),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_and_vim_keys_page_the_carousel() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Right));
        assert_eq!(s.carousel.current_page(), 1);
        handle_key(&mut s, press(KeyCode::Char('l')));
        assert_eq!(s.carousel.current_page(), 2);
        handle_key(&mut s, press(KeyCode::Char('l')));
        assert_eq!(s.carousel.current_page(), 0, "wraps");
        handle_key(&mut s, press(KeyCode::Left));
        assert_eq!(s.carousel.current_page(), 2, "wraps backwards");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut s = state();
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        handle_key(&mut s, key);
        assert_eq!(s.carousel.current_page(), 0);
    }

    #[test]
    fn v_toggles_view_all() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('v')));
        assert_eq!(s.carousel.view_mode(), ViewMode::ShowAll);
        handle_key(&mut s, press(KeyCode::Char('v')));
        assert_eq!(s.carousel.view_mode(), ViewMode::Paged);
    }

    #[test]
    fn tab_cycles_sections_and_starts_counters() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Tab));
        assert_eq!(s.nav.active(), Section::About);
        assert!(s.counters.iter().all(|c| c.is_started()));
    }

    #[test]
    fn typing_goes_into_the_form_while_editing() {
        let mut s = state();
        s.select_section(Section::Contact, Instant::now());
        handle_key(&mut s, press(KeyCode::Enter));
        assert!(s.editing);

        for c in "Ada l".chars() {
            handle_key(&mut s, press(KeyCode::Char(c)));
        }
        handle_key(&mut s, press(KeyCode::Backspace));
        assert_eq!(s.form.name, "Ada ");
        assert_eq!(s.carousel.current_page(), 0, "'l' typed, not paged");

        handle_key(&mut s, press(KeyCode::Tab));
        assert_eq!(s.focused_field, Field::Email);
        handle_key(&mut s, press(KeyCode::Right));
        assert_eq!(s.carousel.current_page(), 1, "arrows still page");

        handle_key(&mut s, press(KeyCode::Esc));
        assert!(!s.editing);
    }

    #[test]
    fn space_ticks_newsletter() {
        let mut s = state();
        s.select_section(Section::Contact, Instant::now());
        s.editing = true;
        s.focused_field = Field::Newsletter;
        handle_key(&mut s, press(KeyCode::Char(' ')));
        assert!(s.form.newsletter);
    }

    #[test]
    fn ctrl_s_with_empty_form_shows_error() {
        let mut s = state();
        s.select_section(Section::Contact, Instant::now());
        s.editing = true;
        handle_key(&mut s, ctrl('s'));
        assert!(s.notifier.current().is_some());
        assert!(s.pending_submission.is_none());
    }

    #[test]
    fn ctrl_c_quits_even_while_editing() {
        let mut s = state();
        s.editing = true;
        handle_key(&mut s, ctrl('c'));
        assert!(s.should_quit);
    }

    #[test]
    fn esc_closes_menu_first() {
        let mut s = state();
        handle_key(&mut s, press(KeyCode::Char('m')));
        assert!(s.nav.is_menu_open());
        handle_key(&mut s, press(KeyCode::Esc));
        assert!(!s.nav.is_menu_open());
    }

    #[test]
    fn drag_across_track_swipes() {
        let mut s = state();
        s.select_section(Section::Projects, Instant::now());
        s.hit_zones.carousel.track = Rect::new(4, 5, 150, 8);

        // 10 columns = 80 px, past the 50 px threshold.
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 60, 6));
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 50, 6));
        assert_eq!(s.carousel.current_page(), 1);

        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 50, 6));
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 60, 6));
        assert_eq!(s.carousel.current_page(), 0);
    }

    #[test]
    fn short_drag_is_a_no_op() {
        let mut s = state();
        s.select_section(Section::Projects, Instant::now());
        s.hit_zones.carousel.track = Rect::new(4, 5, 150, 8);
        // 6 columns = 48 px.
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 60, 6));
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 54, 6));
        assert_eq!(s.carousel.current_page(), 0);
    }

    #[test]
    fn clicking_a_dot_jumps_to_its_page() {
        let mut s = state();
        s.select_section(Section::Projects, Instant::now());
        s.hit_zones.carousel.dots = vec![
            Rect::new(70, 14, 1, 1),
            Rect::new(72, 14, 1, 1),
            Rect::new(74, 14, 1, 1),
        ];
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 74, 14));
        assert_eq!(s.carousel.current_page(), 2);
    }

    #[test]
    fn click_outside_open_menu_closes_it() {
        let mut s = state();
        s.nav.toggle_menu();
        s.hit_zones.menu = Some(crate::ui::sections::MenuHitZones {
            panel: Rect::new(100, 1, 18, 6),
            links: vec![(Section::Contact, Rect::new(101, 5, 16, 1))],
        });
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 10, 20));
        assert!(!s.nav.is_menu_open());

        s.nav.toggle_menu();
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 105, 5));
        assert_eq!(s.nav.active(), Section::Contact);
        assert!(!s.nav.is_menu_open());
    }

    #[test]
    fn clicking_a_card_queues_its_link() {
        let mut s = state();
        s.select_section(Section::Projects, Instant::now());
        s.portfolio.projects[1].link = Some("https://example.com/dash".into());
        s.portfolio.projects[2].link = Some("#".into());
        s.hit_zones.carousel.track = Rect::new(4, 5, 150, 8);
        s.hit_zones.carousel.cards = vec![
            (0, Rect::new(4, 5, 46, 8)),
            (1, Rect::new(54, 5, 46, 8)),
            (2, Rect::new(104, 5, 46, 8)),
        ];

        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 60, 6));
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 62, 7));
        assert_eq!(s.pending_link.as_deref(), Some("https://example.com/dash"));
        assert_eq!(s.carousel.current_page(), 0);

        s.pending_link = None;
        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 110, 6));
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 110, 6));
        assert!(s.pending_link.is_none(), "placeholder link is inert");

        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 10, 6));
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 10, 6));
        assert!(s.pending_link.is_none(), "card without a link");
    }

    #[test]
    fn swiping_off_a_card_does_not_open_it() {
        let mut s = state();
        s.select_section(Section::Projects, Instant::now());
        s.portfolio.projects[1].link = Some("https://example.com/dash".into());
        s.hit_zones.carousel.track = Rect::new(4, 5, 150, 8);
        s.hit_zones.carousel.cards = vec![(1, Rect::new(54, 5, 46, 8))];

        handle_mouse(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 90, 6));
        handle_mouse(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 60, 6));
        assert!(s.pending_link.is_none());
        assert_eq!(s.carousel.current_page(), 1);
    }

    #[test]
    fn enter_and_space_open_the_card_on_screen() {
        let mut s = state();
        s.portfolio.projects[0].link = Some("https://example.com/handyman".into());
        handle_key(&mut s, press(KeyCode::Enter));
        assert!(s.pending_link.is_none(), "only in the projects section");

        s.select_section(Section::Projects, Instant::now());
        handle_key(&mut s, press(KeyCode::Enter));
        assert_eq!(s.pending_link.as_deref(), Some("https://example.com/handyman"));

        s.pending_link = None;
        handle_key(&mut s, press(KeyCode::Char(' ')));
        assert_eq!(s.pending_link.as_deref(), Some("https://example.com/handyman"));
    }
}
