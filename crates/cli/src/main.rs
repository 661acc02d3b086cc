use anyhow::Context;
use clap::Parser;

use warehouse_cli::{Config, Menu};
use warehouse_inventory::ItemRegister;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    warehouse_observability::init(&config.log_config());

    let mut register = ItemRegister::new();
    if config.seed {
        let added = register
            .seed_defaults()
            .context("failed to insert default items")?;
        tracing::info!(added, "default items inserted");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());
    menu.run(&mut register).context("menu session failed")?;

    tracing::info!(
        items = register.count(),
        units = register.total_units(),
        "session ended"
    );
    Ok(())
}
