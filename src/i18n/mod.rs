//! Locale resolution and the localized message catalog.

pub mod catalog;
pub mod locale;

pub use catalog::{lookup, MessageKey};
pub use locale::{resolve, Locale, DEFAULT_LOCALE};
