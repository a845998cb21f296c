use anyhow::{Result, anyhow};
use basalt::domain::{PropertyDefinition, PropertyPrefix};
use basalt::kernel::conf::PropertyRegistry;
use basalt::prelude::Configuration;
use strum::IntoEnumIterator;

/// Prints the effective value of `key`, masked when sensitive.
///
/// # Errors
/// Returns an error if `key` is unknown, or is a free-form key without a value.
pub fn get_value(conf: &dyn Configuration, key: &str) -> Result<()> {
    let registry = PropertyRegistry::global();

    let value = match registry.lookup_by_key(key) {
        Ok(definition) => conf.get(definition.property),
        Err(_) if PropertyRegistry::prefix_of(key).is_some() => {
            conf.get_raw(key).ok_or_else(|| anyhow!("'{key}' is not set"))?
        },
        Err(err) => return Err(err.into()),
    };

    println!("{}", registry.display_value(key, value));
    Ok(())
}

/// Prints the definition of `key`, or of the free-form prefix it falls under.
///
/// # Errors
/// Returns an error if `key` is neither compiled in nor under a prefix.
pub fn describe(key: &str) -> Result<()> {
    let registry = PropertyRegistry::global();

    match registry.lookup_by_key(key) {
        Ok(definition) => print_definition(registry, definition),
        Err(err) => {
            let prefix = PropertyPrefix::iter()
                .find(|p| p.prefix() == key || p.matches(key))
                .ok_or(err)?;
            println!("prefix:      {prefix}");
            println!("sensitive:   {}", prefix.is_sensitive());
            println!();
            println!("{}", prefix.description());
        },
    }

    Ok(())
}

fn print_definition(registry: &PropertyRegistry, definition: &PropertyDefinition) {
    let kind = definition.property_type;
    let default = registry.display_value(definition.key, definition.default_value);

    println!("key:         {}", definition.key);
    println!("type:        {}", kind.name());
    if !kind.options().is_empty() {
        println!("options:     {}", kind.options().join(", "));
    }
    println!("default:     {default}");

    let mut flags = Vec::new();
    if definition.is_fixed() {
        flags.push("fixed");
    }
    if definition.is_sensitive() {
        flags.push("sensitive");
    }
    if !flags.is_empty() {
        println!("flags:       {}", flags.join(", "));
    }

    println!();
    println!("{}", definition.description);
    println!("{}", kind.format());
}
