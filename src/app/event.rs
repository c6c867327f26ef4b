//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Animation frame, sent at a fixed rate whatever the input load.
    Tick,
}

impl AppEvent {
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawns the terminal reader and the frame ticker, both feeding the returned
/// channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    spawn_ticker(tx.clone(), tick_rate);

    let input_tx = tx;
    tokio::task::spawn_blocking(move || loop {
        // Poll with a timeout so a dropped receiver is noticed even when the
        // terminal is idle.
        if !event::poll(tick_rate).unwrap_or(false) {
            if input_tx.is_closed() {
                break;
            }
            continue;
        }
        let Some(ev) = event::read().ok().and_then(AppEvent::from_crossterm) else {
            continue;
        };
        if input_tx.send(ev).is_err() {
            break; // receiver dropped
        }
    });

    rx
}

/// Sends [`AppEvent::Tick`] every `tick_rate`, independent of input traffic.
pub fn spawn_ticker(tx: mpsc::UnboundedSender<AppEvent>, tick_rate: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

    #[test]
    fn focus_and_paste_events_are_dropped() {
        assert!(AppEvent::from_crossterm(CtEvent::FocusGained).is_none());
        assert!(AppEvent::from_crossterm(CtEvent::Paste("x".into())).is_none());
    }

    #[test]
    fn resize_keeps_dimensions() {
        let ev = AppEvent::from_crossterm(CtEvent::Resize(90, 30));
        assert!(matches!(ev, Some(AppEvent::Resize(90, 30))));
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            AppEvent::from_crossterm(CtEvent::Key(key)),
            Some(AppEvent::Key(_))
        ));
    }

    #[tokio::test]
    async fn ticks_keep_flowing_under_constant_mouse_motion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_ticker(tx.clone(), Duration::from_millis(5));

        let flood = tokio::spawn(async move {
            loop {
                let moved = MouseEvent {
                    kind: MouseEventKind::Moved,
                    column: 1,
                    row: 1,
                    modifiers: KeyModifiers::NONE,
                };
                if tx.send(AppEvent::Mouse(moved)).is_err() {
                    break;
                }
                tokio::task::yield_now().await;
            }
        });

        let saw_tick = tokio::time::timeout(Duration::from_secs(2), async {
            let mut ticks = 0;
            while let Some(ev) = rx.recv().await {
                if matches!(ev, AppEvent::Tick) {
                    ticks += 1;
                    if ticks == 3 {
                        return true;
                    }
                }
            }
            false
        })
        .await;

        flood.abort();
        assert_eq!(saw_tick, Ok(true));
    }
}
