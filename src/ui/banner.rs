//! Notification banner — a one-line message pinned to the top-right corner
//! of a given area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::core::notification::{Notification, NotificationKind};

use super::theme::Theme;

/// Renders the current notification, if any.
///
/// It picks its own position (top-right of `area`) and is invisible when
/// there is nothing to show.
pub struct NotificationBanner<'a> {
    pub notification: Option<&'a Notification>,
    pub theme: Theme,
}

fn icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✗",
        NotificationKind::Info => "i",
    }
}

impl Widget for NotificationBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(n) = self.notification else {
            return;
        };
        if area.width < 8 || area.height == 0 {
            return;
        }

        let max_w = area.width.saturating_sub(2) as usize;
        let mut label = format!(" {} {} ", icon(n.kind), n.message);
        if label.chars().count() > max_w {
            label = label.chars().take(max_w.saturating_sub(1)).collect();
            label.push('…');
        }

        let label_width = label.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(label_width + 1);
        let line = Line::from(Span::styled(label, self.theme.notification_style(n.kind)));
        buf.set_line(x, area.y, &line, label_width);
    }
}
