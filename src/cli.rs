use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::runner::SuiteSelection;

#[derive(Parser, Debug)]
#[command(name = "subcheck")]
#[command(version)]
#[command(about = "Preflight diagnostics for the subtitle-extraction toolchain", long_about = None)]
pub struct Cli {
    /// Suite to run (defaults to all suites)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the external tool to probe
    #[arg(long, global = true)]
    pub tool: Option<String>,

    /// Override the probe timeout, e.g. "10s"
    #[arg(long, global = true)]
    pub timeout: Option<String>,

    /// Skip the availability probe (structural checks only)
    #[arg(long, global = true)]
    pub skip_probe: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check tool availability and the re-encode surface of both components
    Reencode,
    /// Check the once-only re-encode workflow
    Workflow,
}

impl Cli {
    pub fn selection(&self) -> SuiteSelection {
        match self.command {
            Some(Commands::Reencode) => SuiteSelection::Reencode,
            Some(Commands::Workflow) => SuiteSelection::Workflow,
            None => SuiteSelection::All,
        }
    }
}
