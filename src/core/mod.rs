//! Core logic — carousel state machine, input normalisation, text, forms.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod carousel;
pub mod contact;
pub mod content;
pub mod counter;
pub mod debounce;
pub mod gesture;
pub mod i18n;
pub mod links;
pub mod nav;
pub mod notification;
pub mod relay;
