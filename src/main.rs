use clap::Parser;
use prefix_list_audit::config::{init_logging, CliArgs, Config};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = CliArgs::parse();
    init_logging(&args.log_config)?;
    log::info!("#Start main()");

    let config = Config::from_args(&args)?;
    let results = prefix_list_audit::run(&config)?;

    log::info!("#End main() {} result rows", results.len());
    Ok(())
}
