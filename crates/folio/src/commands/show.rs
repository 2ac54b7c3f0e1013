//! `folio show` command implementation.

use clap::{Args, ValueEnum};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Output format for the rendered configuration.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Toml,
    Json,
}

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

impl ShowArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load()?;
        let rendered = match self.format {
            Format::Toml => config.to_toml_string()?,
            Format::Json => config.to_json_string()?,
        };
        Output::new().data(&rendered)?;
        Ok(())
    }
}
