//! Sales Report - Main Entry Point

use anyhow::Result;
use clap::Parser;
use sales_report_cli::{generate, load_config, logging_config, render, Args};
use sales_report_common::init_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args)?;
    init_logging(logging_config(&args, &config))?;

    info!("Configuration loaded successfully");

    let now = chrono::Local::now().naive_local();
    let result = match generate(&args, config, now).await {
        Ok(result) => result,
        Err(e) => {
            error!("Report generation failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", render(&result, args.pretty)?);
    Ok(())
}
