//! `folio init` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::write_template;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Directory to create folio.toml in.
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Overwrite an existing folio.toml.
    #[arg(short, long)]
    force: bool,
}

impl InitArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let path = write_template(&self.dir, self.force)?;
        output.success(&format!("Created {}", path.display()));
        output.info("Edit title, sidebar and footer, then run `folio check`.");
        Ok(())
    }
}
