//! Supported locales and per-locale tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported site locale.
///
/// The set is closed: adding a variant forces every [`Localized`] table
/// to be updated, because [`Localized::get`] matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    En,
}

impl Locale {
    /// Locale used when a request path carries no locale prefix.
    pub const DEFAULT: Self = Self::Ko;

    /// Every supported locale, default first.
    pub const ALL: [Self; 2] = [Self::Ko, Self::En];

    /// Path segment / language tag (`ko`, `en`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Parse a locale tag, `None` when unsupported.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }

    /// The locale offered by the language toggle.
    pub const fn other(self) -> Self {
        match self {
            Self::Ko => Self::En,
            Self::En => Self::Ko,
        }
    }

    /// Short label shown on the language toggle (`KO`, `EN`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ko => "KO",
            Self::En => "EN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale `{0}` (expected one of: ko, en)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// A value for every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub ko: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub const fn new(ko: T, en: T) -> Self {
        Self { ko, en }
    }

    pub const fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Ko => &self.ko,
            Locale::En => &self.en,
        }
    }

    pub fn get_mut(&mut self, locale: Locale) -> &mut T {
        match locale {
            Locale::Ko => &mut self.ko,
            Locale::En => &mut self.en,
        }
    }

    /// Iterate `(locale, value)` pairs in [`Locale::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        Locale::ALL.into_iter().map(move |l| (l, self.get(l)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Locale, &T) -> U) -> Localized<U> {
        Localized {
            ko: f(Locale::Ko, &self.ko),
            en: f(Locale::En, &self.en),
        }
    }
}
