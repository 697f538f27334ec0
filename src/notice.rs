//! Blocking popups shown on top of the page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeIcon {
    Info,
    Error,
}

impl NoticeIcon {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A dismissible popup with a title, body text, and optional footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub footer: Option<String>,
    pub icon: NoticeIcon,
}

impl Notice {
    #[must_use]
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { title: title.into(), text: text.into(), footer: None, icon: NoticeIcon::Info }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { title: title.into(), text: text.into(), footer: None, icon: NoticeIcon::Error }
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}
