use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::cli::products::ProductsArg;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "storefront",
    version = env!("CARGO_PKG_VERSION"),
    about,
    long_about = None,
    propagate_version = true
)]
pub struct App {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "TOML config file (default: ~/.storefront.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "More log output, repeatable"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(
        alias = "p",
        name = "products",
        about = "Fetch the product list and render it"
    )]
    Products(ProductsArg),
    #[command(
        alias = "s",
        name = "samples",
        about = "Run the map, filter and reduce samples"
    )]
    Samples,
}
