//! Display-language selector.
//!
//! Only English is ever active. Picking anything else shows an apology and
//! snaps the selector back. Codes the selector never offers still parse, as
//! `Locale::Unsupported`, so a hand-crafted form gets the same treatment.

use serde::Deserialize;

use crate::notice::Notice;

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hu")]
    Hungarian,
    /// Any other code. Never offered by the selector.
    #[serde(other)]
    Unsupported,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Hungarian];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hungarian => "hu",
            Self::Unsupported => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hungarian => "Hungarian",
            Self::Unsupported => "Other",
        }
    }

    #[must_use]
    pub fn is_supported(self) -> bool {
        self == Self::default()
    }
}

/// Outcome of one selection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub active: Locale,
    pub notice: Option<Notice>,
}

/// Apply a selector change. Unsupported locales revert to the default and
/// come back with exactly one notice.
#[must_use]
pub fn select(requested: Locale) -> Selection {
    if requested.is_supported() {
        return Selection { active: requested, notice: None };
    }

    tracing::debug!(requested = requested.code(), "unsupported locale selected, reverting");
    Selection { active: Locale::default(), notice: Some(unsupported_notice(requested)) }
}

fn unsupported_notice(requested: Locale) -> Notice {
    match requested {
        Locale::Hungarian => Notice::error(
            "Oops!",
            "Sajnos nem tudunk magyarul. Még tanulunk! Ez egyébként nemzetközi iroda, menj el.",
        )
        .with_footer(
            "Sorry, we can't speak Hungarian. We're still learning! It is international office by the way, go away.",
        ),
        _ => Notice::error(
            "Oops!",
            "Sorry, we can't speak that language. We're still learning! It is international office by the way, go away.",
        ),
    }
}
