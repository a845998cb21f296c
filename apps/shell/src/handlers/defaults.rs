use crate::models::args::OutputFormat;
use crate::models::view::PropertyView;
use anyhow::Result;
use basalt::domain::PropertyPrefix;
use basalt::kernel::conf::PropertyRegistry;
use basalt::prelude::{Configuration, DefaultConfiguration};
use strum::IntoEnumIterator;

/// Prints every compiled-in default in table order.
///
/// # Errors
/// Returns an error if JSON encoding fails.
pub fn list_defaults(format: OutputFormat) -> Result<()> {
    let defaults = DefaultConfiguration::new();
    let registry = defaults.registry();

    match format {
        OutputFormat::Text => {
            for (key, value) in defaults.iter() {
                println!("{key} = {}", registry.display_value(key, value));
            }
        },
        OutputFormat::Json => {
            let views: Vec<_> =
                registry.definitions().iter().map(|d| PropertyView::new(registry, d)).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        },
        OutputFormat::Markdown => render_markdown(registry),
    }

    Ok(())
}

fn render_markdown(registry: &PropertyRegistry) {
    println!("# Configuration properties\n");
    println!("| Property | Type | Default | Description |");
    println!("|----------|------|---------|-------------|");
    for definition in registry.definitions() {
        let default = registry.display_value(definition.key, definition.default_value);
        let kind = definition.property_type;
        println!(
            "| `{}` | {} | {} | {} |",
            definition.key,
            if kind.options().is_empty() {
                kind.name().to_owned()
            } else {
                format!("{} ({})", kind.name(), kind.options().join(", "))
            },
            if default.is_empty() { "*empty*".to_owned() } else { format!("`{default}`") },
            definition.description
        );
    }

    println!("\n## Free-form prefixes\n");
    println!("| Prefix | Description |");
    println!("|--------|-------------|");
    for prefix in PropertyPrefix::iter() {
        println!("| `{prefix}*` | {} |", prefix.description());
    }
}
