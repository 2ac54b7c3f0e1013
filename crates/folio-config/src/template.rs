//! Bundled starter configuration.

use std::path::{Path, PathBuf};

use crate::{CONFIG_FILENAME, ConfigError};

/// Personal blog starter written by `folio init`.
pub const BLOG_TEMPLATE: &str = include_str!("../templates/folio.toml");

/// Write [`BLOG_TEMPLATE`] to `dir/folio.toml`, creating `dir` if needed.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_template(dir: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path));
    }

    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, BLOG_TEMPLATE)?;
    tracing::info!(path = %path.display(), "Wrote configuration template");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::nav::NavLink;
    use crate::outline::Outline;
    use crate::{CleanUrls, Config};

    fn template() -> Config {
        Config::from_toml_str(BLOG_TEMPLATE, Path::new("/site/.folio")).unwrap()
    }

    #[test]
    fn test_template_site_identity() {
        let config = template();
        assert_eq!(config.title, "Lancernix的博客空间");
        assert_eq!(
            config.description,
            "一个更新有点慢的个人笔记，希望您在这里有所收获"
        );
        assert_eq!(config.lang, "zh-CN");
        assert_eq!(config.display_title(), "Lancernix's Blog");
    }

    #[test]
    fn test_template_build_options() {
        let config = template();
        assert!(config.last_updated);
        assert_eq!(config.clean_urls, CleanUrls::WithoutSubfolders);
        assert_eq!(config.out_dir, "../dist");
        assert_eq!(
            config.out_dir_resolved,
            PathBuf::from("/site/.folio/../dist")
        );
        assert_eq!(config.markdown.theme, "one-dark-pro");
    }

    #[test]
    fn test_template_sidebar() {
        let config = template();
        assert_eq!(config.theme.sidebar.len(), 1);
        let group = &config.theme.sidebar[0];
        assert_eq!(group.text, "Guide");
        assert_eq!(
            group.items,
            vec![
                NavLink::new("Introduction", "/introduction"),
                NavLink::new("Getting Started", "/getting-started"),
            ]
        );
    }

    #[test]
    fn test_template_ui_text() {
        let theme = template().theme;
        assert_eq!(theme.outline_title, "本文目录");
        assert_eq!(theme.outline, Outline::Deep);
        assert_eq!(theme.last_updated_text, "更新时间");
        assert_eq!(theme.doc_footer.prev, "上一篇");
        assert_eq!(theme.doc_footer.next, "下一篇");
        assert!(theme.logo.is_none());
        assert!(theme.nav.is_empty());
    }

    #[test]
    fn test_template_footer() {
        let footer = template().theme.footer.unwrap();
        assert_eq!(
            footer.message.as_deref(),
            Some("Released under the MIT License | Powered by Vitepress")
        );
        assert_eq!(
            footer.copyright.as_deref(),
            Some("Copyright © 2022-present Lancernix")
        );
    }

    #[test]
    fn test_write_template() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("blog");

        let path = write_template(&target, false).unwrap();

        assert_eq!(path, target.join("folio.toml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), BLOG_TEMPLATE);
    }

    #[test]
    fn test_write_template_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("folio.toml"), "title = \"Mine\"\n").unwrap();

        let err = write_template(dir.path(), false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));

        write_template(dir.path(), true).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("folio.toml")).unwrap(),
            BLOG_TEMPLATE
        );
    }
}
