//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod init;
pub(crate) mod show;

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use init::InitArgs;
pub(crate) use show::ShowArgs;

/// Config file selection and overrides shared by commands that load it.
#[derive(Args, Debug)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Public base path, e.g. /blog/ (overrides config).
    #[arg(long)]
    base: Option<String>,

    /// Track last-updated timestamps (overrides config).
    #[arg(long)]
    last_updated: Option<bool>,

    /// Disable last-updated timestamps.
    #[arg(long, conflicts_with = "last_updated")]
    no_last_updated: bool,
}

impl ConfigArgs {
    /// Load and validate the configuration with CLI overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        tracing::info!(
            title = %config.title,
            out_dir = %config.out_dir_resolved.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            out_dir: self.out_dir.clone(),
            base: self.base.clone(),
            last_updated: self.resolve_last_updated(),
        }
    }

    /// Resolve `last_updated` from --last-updated/--no-last-updated flags.
    fn resolve_last_updated(&self) -> Option<bool> {
        self.no_last_updated.then_some(false).or(self.last_updated)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ConfigArgs,
    }

    fn parse(args: &[&str]) -> ConfigArgs {
        TestCli::try_parse_from(std::iter::once("folio").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_no_flags_no_overrides() {
        let settings = parse(&[]).cli_settings();
        assert!(settings.out_dir.is_none());
        assert!(settings.base.is_none());
        assert!(settings.last_updated.is_none());
    }

    #[test]
    fn test_last_updated_flags() {
        assert_eq!(
            parse(&["--last-updated", "true"]).resolve_last_updated(),
            Some(true)
        );
        assert_eq!(
            parse(&["--no-last-updated"]).resolve_last_updated(),
            Some(false)
        );
    }

    #[test]
    fn test_last_updated_flags_conflict() {
        let result = TestCli::try_parse_from([
            "folio",
            "--last-updated",
            "true",
            "--no-last-updated",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "title = \"Blog\"\nlast_updated = true\n").unwrap();
        let path_arg = path.display().to_string();

        let config = parse(&["-c", path_arg.as_str(), "--base", "/blog/", "--no-last-updated"])
            .load()
            .unwrap();

        assert_eq!(config.title, "Blog");
        assert_eq!(config.base, "/blog/");
        assert!(!config.last_updated);
    }
}
