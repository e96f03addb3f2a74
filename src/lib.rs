//! Terminal word-guessing arcade built on real exam questions.
//!
//! The binary in `main.rs` owns the terminal; everything else, including the
//! widgets, lives here so benchmarks and integration tests can drive it.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod audio;
pub mod config;
pub mod engine;
pub mod event;
pub mod question;
pub mod store;
pub mod ui;

/// Switches the UI language; unknown locales fall back to English.
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}
