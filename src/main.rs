//! Unitseed - Company Unit Seeder
//!
//! HRISにCompany UnitとItemを一括作成

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use unitseed::adapter::config::Config;
use unitseed::driver::{Args, UnitSetupWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    let workflow = UnitSetupWorkflow::new(config);

    workflow.execute(args).await
}
