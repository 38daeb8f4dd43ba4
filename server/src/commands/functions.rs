use anyhow::{Context, Result};
use catalog::{Arity, Registry};

pub fn list_functions() -> Result<()> {
    let registry = Registry::bootstrap().context("failed to build the function registry")?;
    print!("{}", render_catalog(&registry));
    Ok(())
}

/// One `name<TAB>arity` line per entry, in table order.
pub fn render_catalog(registry: &Registry) -> String {
    registry
        .entries()
        .iter()
        .map(|entry| match entry.arity {
            Arity::Fixed(n) => format!("{}\t{}\n", entry.name, n),
            Arity::Variadic => format!("{}\t*\n", entry.name),
        })
        .collect()
}
