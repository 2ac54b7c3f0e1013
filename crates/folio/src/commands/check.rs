//! `folio check` command implementation.

use clap::Args;
use folio_config::{Config, LinkKind, Outline};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.warning("No folio.toml found, checked built-in defaults"),
        }

        for line in summary(&config) {
            output.info(&line);
        }

        if config.theme.sidebar.is_empty() {
            output.warning("Sidebar is empty");
        }
        for group in &config.theme.sidebar {
            output.heading(&group.text);
            for item in &group.items {
                let marker = match item.kind() {
                    Some(LinkKind::External) => " (external)",
                    _ => "",
                };
                output.info(&format!("  {} -> {}{marker}", item.text, item.link));
            }
        }

        output.success("Configuration is valid");
        Ok(())
    }
}

/// One line per top-level setting.
fn summary(config: &Config) -> Vec<String> {
    let outline = match config.theme.outline {
        Outline::Disabled => "disabled".to_owned(),
        Outline::Deep => "deep".to_owned(),
        Outline::Level(level) => format!("h{level}"),
        Outline::Range(min, max) => format!("h{min}-h{max}"),
    };

    vec![
        format!("Title: {}", config.title),
        format!("Header title: {}", config.display_title()),
        format!("Language: {}", config.lang),
        format!("Base: {}", config.base),
        format!("Output: {}", config.out_dir_resolved.display()),
        format!("Clean URLs: {}", config.clean_urls),
        format!(
            "Last updated: {}",
            if config.last_updated { "on" } else { "off" }
        ),
        format!("Markdown theme: {}", config.markdown.theme),
        format!("Outline: {outline}"),
        format!(
            "Sidebar: {}, {}",
            count(config.theme.sidebar.len(), "group", "groups"),
            count(config.sidebar_links().count(), "entry", "entries")
        ),
    ]
}

fn count(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use folio_config::BLOG_TEMPLATE;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary_for_template() {
        let config = Config::from_toml_str(BLOG_TEMPLATE, Path::new("/site")).unwrap();
        assert_eq!(
            summary(&config),
            vec![
                "Title: Lancernix的博客空间",
                "Header title: Lancernix's Blog",
                "Language: zh-CN",
                "Base: /",
                "Output: /site/../dist",
                "Clean URLs: without-subfolders",
                "Last updated: on",
                "Markdown theme: one-dark-pro",
                "Outline: deep",
                "Sidebar: 1 group, 2 entries",
            ]
        );
    }

    #[test]
    fn test_summary_outline_range() {
        let mut config = Config::from_toml_str("", Path::new("/site")).unwrap();
        config.theme.outline = Outline::Range(2, 3);
        assert!(summary(&config).contains(&"Outline: h2-h3".to_owned()));
    }

    #[test]
    fn test_summary_defaults_header_title_and_counts() {
        let mut config = Config::from_toml_str("title = \"Notes\"", Path::new("/site")).unwrap();
        config.theme.sidebar = vec![folio_config::SidebarGroup {
            text: "Guide".to_owned(),
            collapsed: None,
            items: vec![folio_config::NavLink::new("Intro", "/intro")],
        }];

        let lines = summary(&config);

        assert!(lines.contains(&"Title: Notes".to_owned()));
        assert!(lines.contains(&"Header title: Notes".to_owned()));
        assert!(lines.contains(&"Sidebar: 1 group, 1 entry".to_owned()));
    }
}
