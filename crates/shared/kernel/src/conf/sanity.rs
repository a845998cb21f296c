//! Validation of operator-supplied entries before they reach a [`Configuration`](super::Configuration).

use super::{ConfigErrorExt, ConfigResult, PropertyRegistry, invalid_value, types};
use basalt_domain::{PropertyDefinition, PropertyPrefix};
use tracing::warn;

/// What a configuration key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Registered(&'static PropertyDefinition),
    Prefixed(PropertyPrefix),
    Unknown,
}

#[must_use]
pub fn classify(key: &str) -> EntryKind {
    let registry = PropertyRegistry::global();
    match registry.lookup_by_key(key) {
        Ok(definition) => EntryKind::Registered(definition),
        Err(_) => PropertyRegistry::prefix_of(key).map_or(EntryKind::Unknown, EntryKind::Prefixed),
    }
}

/// Checks every registered entry against its type class.
///
/// Prefixed entries are accepted as-is. Unknown entries are logged and skipped; the caller
/// decides whether to keep them.
///
/// # Errors
/// [`ConfigError::InvalidValue`](super::ConfigError::InvalidValue) for the first registered
/// entry whose value does not parse. Sensitive values are masked in the error.
pub fn validate<I, K, V>(entries: I) -> ConfigResult<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in entries {
        let (key, value) = (key.as_ref(), value.as_ref());
        match classify(key) {
            EntryKind::Registered(definition) => {
                if !types::is_valid(definition.property_type, value) {
                    return Err(invalid_value(definition.key, value, definition.property_type))
                        .context("site configuration");
                }
            },
            EntryKind::Prefixed(_) => {},
            EntryKind::Unknown => warn!(key, "Ignoring unknown configuration key"),
        }
    }
    Ok(())
}
