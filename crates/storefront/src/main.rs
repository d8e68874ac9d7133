use anyhow::Result;
use clap::Parser;

use cli::app::{App, Commands};

mod cli;
mod config;
mod logger;

#[tokio::main]
async fn main() -> Result<()> {
    let app = App::parse();
    logger::init_logger(app.verbose);

    match app.cmd {
        Commands::Products(arg) => {
            let file = config::load(app.config.as_deref())?;
            cli::products::products(arg, file).await
        }
        Commands::Samples => cli::samples::samples(),
    }
}
