use crate::pager::DecodePolicy;
use serde::{Deserialize, Serialize};

/// Accepted bounds for the lines-per-page setting.
pub const MIN_LINES_PER_PAGE: usize = 50;
pub const MAX_LINES_PER_PAGE: usize = 500;

/// Step applied by the page-size adjustment keys.
pub const LINES_PER_PAGE_STEP: usize = 10;

pub const THEME_PRESET_LIST: &[Theme] = &[Theme::Light, Theme::Dark, Theme::Sepia];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Sepia => "Sepia",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub lines_per_page: usize,
    pub decode_policy: DecodePolicy,
    pub show_progress_indicator: bool,
}

impl Settings {
    /// Whether `n` is an acceptable lines-per-page value. Checked before any
    /// repagination is attempted.
    pub fn valid_lines_per_page(n: usize) -> bool {
        (MIN_LINES_PER_PAGE..=MAX_LINES_PER_PAGE).contains(&n)
    }

    pub fn merge(&mut self, other: Self) {
        self.theme = other.theme;
        if Self::valid_lines_per_page(other.lines_per_page) {
            self.lines_per_page = other.lines_per_page;
        }
        self.decode_policy = other.decode_policy;
        self.show_progress_indicator = other.show_progress_indicator;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            lines_per_page: 100,
            decode_policy: DecodePolicy::Replace,
            show_progress_indicator: true,
        }
    }
}
