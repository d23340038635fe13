//! Locale model and locale-prefixed path handling.

mod locale;
pub mod path;

pub use locale::{Locale, Localized, UnknownLocale};
