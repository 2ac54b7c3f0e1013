//! Navigation entries: top nav links and sidebar groups.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_non_empty};

/// A labeled link shown in the top navigation or a sidebar group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display label.
    pub text: String,
    /// Route (`/getting-started`) or absolute `http(s)` URL.
    pub link: String,
}

impl NavLink {
    /// Create a link entry.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Kind of link target, or `None` if the link is neither a route nor a URL.
    #[must_use]
    pub fn kind(&self) -> Option<LinkKind> {
        LinkKind::classify(&self.link)
    }
}

/// Where a navigation link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A route inside the site, starting with `/`.
    Internal,
    /// An absolute `http://` or `https://` URL.
    External,
}

impl LinkKind {
    /// Classify a link string.
    #[must_use]
    pub fn classify(link: &str) -> Option<Self> {
        if link.starts_with('/') {
            Some(Self::Internal)
        } else if link.starts_with("http://") || link.starts_with("https://") {
            Some(Self::External)
        } else {
            None
        }
    }
}

/// A titled section of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Section heading.
    pub text: String,
    /// Whether the group starts collapsed. `None` means not collapsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<NavLink>,
}

impl SidebarGroup {
    /// Whether `link` is one of this group's entries.
    #[must_use]
    pub fn contains(&self, link: &str) -> bool {
        self.items.iter().any(|item| item.link == link)
    }
}

/// Validate one link entry. `field` is the entry's config path.
fn validate_link(item: &NavLink, field: &str) -> Result<(), ConfigError> {
    require_non_empty(&item.text, &format!("{field}.text"))?;
    require_non_empty(&item.link, &format!("{field}.link"))?;
    if item.kind().is_none() {
        return Err(ConfigError::Validation(format!(
            "{field}.link must start with / or http(s)://, got \"{}\"",
            item.link
        )));
    }
    Ok(())
}

/// Validate a sequence of links that must not repeat a target.
///
/// `items` yields each entry with its config path; `scope` names the
/// sequence in the duplicate error.
pub(crate) fn validate_unique_links<'a>(
    items: impl IntoIterator<Item = (String, &'a NavLink)>,
    scope: &str,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (field, item) in items {
        validate_link(item, &field)?;
        if !seen.insert(item.link.as_str()) {
            return Err(ConfigError::Validation(format!(
                "{scope} has duplicate link {}",
                item.link
            )));
        }
    }
    Ok(())
}

/// Validate sidebar groups: headings, entries and link uniqueness across groups.
pub(crate) fn validate_sidebar(groups: &[SidebarGroup]) -> Result<(), ConfigError> {
    for (i, group) in groups.iter().enumerate() {
        require_non_empty(&group.text, &format!("theme.sidebar[{i}].text"))?;
        if group.items.is_empty() {
            tracing::warn!(group = %group.text, "Sidebar group has no entries");
        }
    }

    let entries = groups.iter().enumerate().flat_map(|(i, group)| {
        group
            .items
            .iter()
            .enumerate()
            .map(move |(j, item)| (format!("theme.sidebar[{i}].items[{j}]"), item))
    });
    validate_unique_links(entries, "theme.sidebar")
}
