//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: header (nav), section body, footer and a bottom
/// status bar.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header with nav links and toggles
                Constraint::Min(3),    // active section
                Constraint::Length(1), // footer
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            body_area: chunks[1],
            footer_area: chunks[2],
            status_area: chunks[3],
        }
    }
}

/// Is the cell at (`col`, `row`) inside `area`?
pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_vertically() {
        let l = AppLayout::from_area(Rect::new(0, 0, 120, 40));
        assert_eq!(l.header_area.height, 3);
        assert_eq!(l.status_area.y, 39);
        assert_eq!(l.footer_area.y, 38);
        assert_eq!(l.body_area.y, 3);
        assert_eq!(l.body_area.height, 35);
    }

    #[test]
    fn point_hit_test_is_half_open() {
        let r = Rect::new(10, 5, 4, 2);
        assert!(point_in_rect(r, 10, 5));
        assert!(point_in_rect(r, 13, 6));
        assert!(!point_in_rect(r, 14, 6));
        assert!(!point_in_rect(r, 13, 7));
        assert!(!point_in_rect(r, 9, 5));
    }
}
