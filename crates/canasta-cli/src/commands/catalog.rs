//! Catalog command: list the selectable products.

use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::loader::load_store;

/// Run the catalog command
pub(crate) fn run(path: &Path) -> Result<()> {
    let store = load_store(path)?;
    let catalog = store.catalog();

    if catalog.is_empty() {
        println!("{}", "no selectable products in this rules file".yellow());
        return Ok(());
    }

    println!(
        "{} ({} rules, {} products)",
        "Selectable products".bold(),
        store.len(),
        catalog.len()
    );
    for item in catalog {
        println!("  {item}");
    }
    Ok(())
}
