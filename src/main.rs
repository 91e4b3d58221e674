use clap::Parser;
use ip_aggregation::cli::{run, Cli};
use ip_aggregation::logging;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    log::info!("#Start main()");

    run(cli).await
}
