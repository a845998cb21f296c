//! Property resolution.
//!
//! [`PropertyRegistry`] holds the compiled-in definitions. [`DefaultConfiguration`] answers
//! with those defaults only, [`SiteConfiguration`] layers a site file, the environment and
//! programmatic overrides on top of them. Both are read through [`Configuration`].

mod default;
mod error;
mod registry;
pub mod sanity;
mod site;
pub mod types;

pub use default::DefaultConfiguration;
pub use error::{ConfigError, ConfigErrorExt, ConfigResult};
pub use registry::{HIDDEN_VALUE, Iter, PropertyRegistry};
pub use site::{ENV_PREFIX, ENV_SEPARATOR, SiteConfiguration, SiteConfigurationBuilder};

use basalt_domain::{Property, PropertyPrefix, PropertyType};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Read access to resolved property values.
///
/// Implementors only supply raw lookups; the typed getters parse on demand and report the
/// offending key when a value does not fit its type class.
pub trait Configuration: fmt::Debug + Send + Sync {
    /// Effective raw value of a compiled-in property.
    fn get(&self, property: Property) -> &str;

    /// Effective raw value of any key, including free-form prefixed ones.
    fn get_raw(&self, key: &str) -> Option<&str>;

    /// Every effective `(key, value)` pair.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    /// # Errors
    /// [`ConfigError::TypeMismatch`] unless `property` is a duration, [`ConfigError::InvalidValue`]
    /// if its value does not parse.
    fn get_duration(&self, property: Property) -> ConfigResult<Duration> {
        typed(self, property, "duration", |t| t == PropertyType::Duration, types::parse_duration)
    }

    /// Size in bytes.
    ///
    /// # Errors
    /// As [`Configuration::get_duration`], for memory properties.
    fn get_memory(&self, property: Property) -> ConfigResult<u64> {
        typed(self, property, "memory", |t| t == PropertyType::Memory, types::parse_memory)
    }

    /// # Errors
    /// As [`Configuration::get_duration`], for boolean properties.
    fn get_boolean(&self, property: Property) -> ConfigResult<bool> {
        typed(self, property, "boolean", |t| t == PropertyType::Boolean, types::parse_boolean)
    }

    /// # Errors
    /// As [`Configuration::get_duration`], for count properties.
    fn get_count(&self, property: Property) -> ConfigResult<u32> {
        typed(self, property, "count", |t| t == PropertyType::Count, types::parse_count)
    }

    /// # Errors
    /// As [`Configuration::get_duration`], for port properties.
    fn get_port(&self, property: Property) -> ConfigResult<u16> {
        typed(self, property, "port", |t| t == PropertyType::Port, types::parse_port)
    }

    /// Percentages are returned as fractions: `50%` reads as `0.5`.
    ///
    /// # Errors
    /// As [`Configuration::get_duration`], for fraction properties.
    fn get_fraction(&self, property: Property) -> ConfigResult<f64> {
        typed(self, property, "fraction", |t| t == PropertyType::Fraction, types::parse_fraction)
    }

    /// # Errors
    /// As [`Configuration::get_duration`], for host list properties.
    fn get_host_list(&self, property: Property) -> ConfigResult<Vec<String>> {
        typed(
            self,
            property,
            "host list",
            |t| t == PropertyType::HostList,
            |raw| types::parse_host_list(raw).map(|hosts| hosts.into_iter().map(str::to_owned).collect()),
        )
    }

    /// # Errors
    /// As [`Configuration::get_duration`], for path and absolute path properties.
    fn get_path(&self, property: Property) -> ConfigResult<PathBuf> {
        typed(
            self,
            property,
            "path",
            |t| matches!(t, PropertyType::Path | PropertyType::AbsolutePath),
            |raw| types::is_valid(property.property_type(), raw).then(|| PathBuf::from(raw)),
        )
    }

    /// The selected option of a choice property.
    ///
    /// # Errors
    /// As [`Configuration::get_duration`], for choice properties.
    fn get_choice(&self, property: Property) -> ConfigResult<&str> {
        let definition = property.definition();
        let PropertyType::Choice(options) = definition.property_type else {
            return Err(ConfigError::TypeMismatch {
                key: definition.key,
                requested: "choice",
                actual: definition.property_type,
                context: None,
            });
        };
        let raw = self.get(property);
        if options.contains(&raw) {
            Ok(raw)
        } else {
            Err(invalid_value(definition.key, raw, definition.property_type))
        }
    }

    /// Every entry under `prefix`, keyed by the remainder after the prefix.
    fn get_with_prefix(&self, prefix: PropertyPrefix) -> BTreeMap<String, String> {
        self.iter()
            .filter(|(key, _)| prefix.matches(key))
            .map(|(key, value)| (key[prefix.prefix().len()..].to_owned(), value.to_owned()))
            .collect()
    }
}

fn typed<C, T>(
    conf: &C,
    property: Property,
    requested: &'static str,
    accepts: impl FnOnce(PropertyType) -> bool,
    parse: impl FnOnce(&str) -> Option<T>,
) -> ConfigResult<T>
where
    C: Configuration + ?Sized,
{
    let definition = property.definition();
    if !accepts(definition.property_type) {
        return Err(ConfigError::TypeMismatch {
            key: definition.key,
            requested,
            actual: definition.property_type,
            context: None,
        });
    }
    let raw = conf.get(property);
    parse(raw).ok_or_else(|| invalid_value(definition.key, raw, definition.property_type))
}

pub(crate) fn invalid_value(key: impl Into<String>, raw: &str, expected: PropertyType) -> ConfigError {
    let key = key.into();
    let value = PropertyRegistry::global().display_value(&key, raw).to_owned();
    ConfigError::InvalidValue { key: key.into(), value, expected, context: None }
}
