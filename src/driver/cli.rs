//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// HRISにCompany UnitとItemを一括作成するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "unitseed")]
#[command(about = "Seed company units and unit items into the HRIS", long_about = None)]
pub struct Args {
    /// Dry run mode - log in and list units, but create nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long, default_value = "./unitseed.json")]
    pub config: String,
}
