use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stid_manifest::StidToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to stid.toml (defaults to ./stid.toml)
    #[arg(short, long, default_value = "stid.toml")]
    pub config: PathBuf,

    /// Output directory for generated files
    #[arg(short, long, default_value = "Generated")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to <output>/.stid/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let stid_toml = StidToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            stid_toml.manifest(),
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
