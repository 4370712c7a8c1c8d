//! Display preference values and the sources they can come from.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use serde::{Deserialize, Serialize};

/// The two supported display preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Light,
    Dark,
}

impl Preference {
    /// Stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the exact string forms
    /// is treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map a `prefers-color-scheme: dark` match onto a preference.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a resolved preference came from, highest precedence first.
///
/// The derived ordering follows declaration order, so `ExplicitStore` is
/// the smallest value and `Default` the largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreferenceSource {
    ExplicitStore,
    CookieStore,
    SystemSignal,
    Default,
}

/// Outcome of a single resolution pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub preference: Preference,
    pub source: PreferenceSource,
}

/// Whether the user has ever made an explicit choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChoiceState {
    /// No explicit choice; system signal events drive the value.
    #[default]
    Unset,
    /// Set by the user; system signal events are ignored.
    Explicit,
}
