//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  No network or file I/O happens here.

pub mod banner;
pub mod layout;
pub mod page;
pub mod sections;
pub mod slide;
pub mod theme;
pub mod track;
