//! Theme and UI text configuration (`[theme]` section).

use serde::{Deserialize, Serialize};

use crate::nav::{self, NavLink, SidebarGroup};
use crate::outline::{MAX_HEADING_LEVEL, Outline};
use crate::{ConfigError, require_non_empty};

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Header title. Falls back to the site title when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    /// Logo asset path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Outline panel heading.
    pub outline_title: String,
    /// Heading levels listed in the outline panel.
    pub outline: Outline,
    /// Label preceding the last-updated timestamp.
    pub last_updated_text: String,
    /// Previous/next page labels.
    pub doc_footer: DocFooter,
    /// Site footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Top navigation links.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavLink>,
    /// Sidebar groups in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarGroup>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            site_title: None,
            logo: None,
            outline_title: "On this page".to_owned(),
            outline: Outline::default(),
            last_updated_text: "Last updated".to_owned(),
            doc_footer: DocFooter::default(),
            footer: None,
            nav: Vec::new(),
            sidebar: Vec::new(),
        }
    }
}

/// Labels for the previous/next page links under each document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocFooter {
    pub prev: String,
    pub next: String,
}

impl Default for DocFooter {
    fn default() -> Self {
        Self {
            prev: "Previous page".to_owned(),
            next: "Next page".to_owned(),
        }
    }
}

/// Site-wide footer text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl ThemeConfig {
    /// Find the sidebar group that lists `link`.
    #[must_use]
    pub fn find_sidebar_group(&self, link: &str) -> Option<&SidebarGroup> {
        self.sidebar.iter().find(|group| group.contains(link))
    }

    /// Validate theme values.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(site_title) = &self.site_title {
            require_non_empty(site_title, "theme.site_title")?;
        }

        if let Some((min, max)) = self.outline.levels() {
            if min == 0 || max > MAX_HEADING_LEVEL {
                return Err(ConfigError::Validation(format!(
                    "theme.outline levels must be between 1 and {MAX_HEADING_LEVEL}"
                )));
            }
            if min > max {
                return Err(ConfigError::Validation(format!(
                    "theme.outline range [{min}, {max}] is reversed"
                )));
            }
        }

        if let Some(footer) = &self.footer {
            let blank = |s: &Option<String>| s.as_deref().is_none_or(str::is_empty);
            if blank(&footer.message) && blank(&footer.copyright) {
                return Err(ConfigError::Validation(
                    "theme.footer needs a message or a copyright".to_owned(),
                ));
            }
        }

        nav::validate_unique_links(
            self.nav
                .iter()
                .enumerate()
                .map(|(i, item)| (format!("theme.nav[{i}]"), item)),
            "theme.nav",
        )?;
        nav::validate_sidebar(&self.sidebar)
    }
}
