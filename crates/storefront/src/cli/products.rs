use anyhow::{Context, Result};
use clap::Args;
use storefront_products::{Container, Node, ProductFetcher, ReqwestClient};
use tracing::info;

use crate::config::{FileConfig, Settings};

#[derive(Args, Clone, Debug, Default)]
pub struct ProductsArg {
    #[arg(long, env = "STOREFRONT_ENDPOINT", help = "Product list endpoint")]
    pub endpoint: Option<String>,

    #[arg(
        long,
        env = "STOREFRONT_TOKEN",
        hide_env_values = true,
        help = "Bearer token for the endpoint"
    )]
    pub token: Option<String>,

    #[arg(long, help = "Identifier of the output container")]
    pub container_id: Option<String>,

    #[arg(long, help = "Print the container as HTML")]
    pub html: bool,
}

pub async fn products(arg: ProductsArg, file: FileConfig) -> Result<()> {
    let settings = Settings::resolve(file, &arg)?;

    let client = ReqwestClient::new().context("Failed to build HTTP client")?;
    let fetcher = ProductFetcher::new(client).with_options(settings.options);
    let mut container = Container::new(settings.container_id);
    let endpoint = fetcher.options().endpoint.to_string();

    let count = fetcher
        .display_products(&mut container)
        .await
        .with_context(|| format!("Failed to load products from {endpoint}"))?;
    info!(count, "displayed products");

    println!("{}", render_output(&container, arg.html));
    Ok(())
}

fn render_output(container: &Container, html: bool) -> String {
    if html {
        return container.to_html();
    }

    container
        .children()
        .iter()
        .map(Node::text)
        .collect::<Vec<_>>()
        .join("\n")
}
