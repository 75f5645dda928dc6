//! # Swift-Cart RS
//!
//! CLI front end for the cart engine. One cart operation per invocation;
//! the cart survives across runs via the file-backed snapshot store.
//!
//! ## Usage
//!
//! ```bash
//! # Point at the inventory API
//! export CART_API_URL=http://localhost:3333
//!
//! swift-cart add 1
//! swift-cart update 1 3
//! swift-cart show
//! swift-cart remove 1
//! swift-cart clear
//! ```

mod config;

use anyhow::{bail, Context};
use cart_core::{Cart, CartStore, JsonFileStorage, ProductId, TracingNotifier};
use cart_http::HttpInventory;
use config::AppConfig;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// A single cart operation requested on the command line
#[derive(Debug)]
enum Command {
    Add(ProductId),
    Remove(ProductId),
    Update(ProductId, i64),
    Show,
    Clear,
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        fn product_id(arg: Option<String>, verb: &str) -> anyhow::Result<ProductId> {
            arg.with_context(|| format!("usage: swift-cart {verb} <product-id>"))?
                .parse()
                .context("product id must be a number")
        }

        let verb = args.next().unwrap_or_else(|| "show".to_string());
        match verb.as_str() {
            "add" => Ok(Command::Add(product_id(args.next(), "add")?)),
            "remove" => Ok(Command::Remove(product_id(args.next(), "remove")?)),
            "update" => {
                let product_id = product_id(args.next(), "update")?;
                let amount = args
                    .next()
                    .context("usage: swift-cart update <product-id> <amount>")?
                    .parse()
                    .context("amount must be an integer")?;
                Ok(Command::Update(product_id, amount))
            }
            "show" => Ok(Command::Show),
            "clear" => Ok(Command::Clear),
            other => bail!("unknown command: {other} (expected add/remove/update/show/clear)"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let command = Command::parse(std::env::args().skip(1))?;
    let config = AppConfig::from_env();

    let inventory = Arc::new(HttpInventory::from_env().context("inventory API setup failed")?);
    let storage = Arc::new(JsonFileStorage::new(&config.storage_dir));
    let mut store = CartStore::open_with_key(
        inventory,
        Arc::new(TracingNotifier),
        storage,
        &config.storage_key,
    );

    info!(?command, "executing");
    match command {
        Command::Add(id) => store.add_product(id).await,
        Command::Remove(id) => store.remove_product(id),
        Command::Update(id, amount) => store.update_product_amount(id, amount).await,
        Command::Show => {}
        Command::Clear => store.clear(),
    }

    print_cart(store.cart());
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("(cart is empty)");
        return;
    }
    for item in cart.items() {
        println!(
            "{:>4} x{:<3} {:<30} {}",
            item.product_id,
            item.amount,
            item.title,
            item.subtotal().display()
        );
    }
    println!("{:>40} {}", "total:", cart.total().display());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(parts: &[&str]) -> anyhow::Result<Command> {
        Command::parse(parts.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parses_commands() {
        assert!(matches!(parse(&["add", "1"]), Ok(Command::Add(1))));
        assert!(matches!(parse(&["remove", "7"]), Ok(Command::Remove(7))));
        assert!(matches!(
            parse(&["update", "1", "-3"]),
            Ok(Command::Update(1, -3))
        ));
        assert!(matches!(parse(&["show"]), Ok(Command::Show)));
        assert!(matches!(parse(&[]), Ok(Command::Show)));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["add"]).is_err());
        assert!(parse(&["add", "abc"]).is_err());
        assert!(parse(&["update", "1"]).is_err());
        assert!(parse(&["teleport"]).is_err());
    }
}
