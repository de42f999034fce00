use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stid_manifest::StidToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to stid.toml (defaults to ./stid.toml)
    #[arg(short, long, default_value = "stid.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let stid_toml = StidToml::open(&self.config).unwrap_or_exit();

        let report = ops::explain(stid_toml.manifest(), &self.config)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
