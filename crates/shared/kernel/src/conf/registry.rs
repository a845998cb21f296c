use super::error::{ConfigError, ConfigResult};
use super::types;
use basalt_domain::{PROPERTIES, Property, PropertyDefinition, PropertyPrefix};
use fxhash::FxHashMap;
use std::iter::FusedIterator;
use std::slice;
use std::sync::LazyLock;
use strum::{EnumCount, IntoEnumIterator};
use tracing::debug;

/// Placeholder printed instead of sensitive values.
pub const HIDDEN_VALUE: &str = "<hidden>";

static REGISTRY: LazyLock<PropertyRegistry> = LazyLock::new(|| {
    PropertyRegistry::build(PROPERTIES)
        .unwrap_or_else(|err| panic!("compiled-in property table is invalid: {err}"))
});

/// The process-wide table of compiled-in property definitions.
///
/// Built once, on first access, from [`PROPERTIES`]. Every default is validated against its
/// type class during that build; a bad table aborts the first caller instead of leaking an
/// unparseable default into the running system. After initialization the registry is
/// immutable and shared without locking.
#[derive(Debug)]
pub struct PropertyRegistry {
    definitions: &'static [PropertyDefinition],
    by_key: FxHashMap<&'static str, &'static PropertyDefinition>,
}

impl PropertyRegistry {
    /// The global registry.
    ///
    /// # Panics
    /// On first access, if the compiled-in table fails validation.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Validates `definitions` and indexes them by key.
    ///
    /// The table must hold one definition per [`Property`], in declaration order, with unique
    /// keys and defaults that parse under their own type class.
    ///
    /// # Errors
    /// [`ConfigError::InvalidDefaultValue`], [`ConfigError::DuplicateKey`], or
    /// [`ConfigError::Internal`] for a table that is short or out of order.
    pub fn build(definitions: &'static [PropertyDefinition]) -> ConfigResult<Self> {
        if definitions.len() != Property::COUNT {
            return Err(ConfigError::Internal {
                message: format!(
                    "table holds {} definitions for {} properties",
                    definitions.len(),
                    Property::COUNT
                )
                .into(),
                context: None,
            });
        }

        let mut by_key =
            FxHashMap::with_capacity_and_hasher(definitions.len(), Default::default());

        for ((index, definition), property) in definitions.iter().enumerate().zip(Property::iter()) {
            if definition.property != property {
                return Err(ConfigError::Internal {
                    message: format!("'{}' is out of order at index {index}", definition.key).into(),
                    context: None,
                });
            }
            if !types::is_valid(definition.property_type, definition.default_value) {
                return Err(ConfigError::InvalidDefaultValue {
                    key: definition.key,
                    value: definition.default_value,
                    expected: definition.property_type,
                    context: None,
                });
            }
            if by_key.insert(definition.key, definition).is_some() {
                return Err(ConfigError::DuplicateKey { key: definition.key, context: None });
            }
        }

        debug!(properties = definitions.len(), "Property registry initialized");
        Ok(Self { definitions, by_key })
    }

    /// Default value of a registered key.
    ///
    /// # Errors
    /// [`ConfigError::UnknownProperty`] if `key` is not compiled in.
    pub fn get(&self, key: &str) -> ConfigResult<&'static str> {
        self.lookup_by_key(key).map(|definition| definition.default_value)
    }

    /// Definition whose key is exactly `key`.
    ///
    /// # Errors
    /// [`ConfigError::UnknownProperty`] if `key` is not compiled in. Callers reading operator
    /// input may then check [`Self::is_valid_key`] and keep the entry as a free-form property.
    pub fn lookup_by_key(&self, key: &str) -> ConfigResult<&'static PropertyDefinition> {
        self.by_key.get(key).copied().ok_or_else(|| ConfigError::unknown_property(key.to_owned()))
    }

    #[must_use]
    pub fn definition(&self, property: Property) -> &'static PropertyDefinition {
        &self.definitions[property as usize]
    }

    /// `(key, default)` pairs in table order. Each call starts a fresh pass.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter { inner: self.definitions.iter() }
    }

    #[must_use]
    pub const fn definitions(&self) -> &'static [PropertyDefinition] {
        self.definitions
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Free-form prefix `key` lives under, if any.
    #[must_use]
    pub fn prefix_of(key: &str) -> Option<PropertyPrefix> {
        PropertyPrefix::iter().find(|prefix| prefix.matches(key))
    }

    /// Registered keys and keys under a free-form prefix.
    #[must_use]
    pub fn is_valid_key(&self, key: &str) -> bool {
        self.contains(key) || Self::prefix_of(key).is_some()
    }

    #[must_use]
    pub fn is_sensitive_key(&self, key: &str) -> bool {
        self.by_key.get(key).map_or_else(
            || Self::prefix_of(key).is_some_and(PropertyPrefix::is_sensitive),
            |definition| definition.is_sensitive(),
        )
    }

    /// `value`, or [`HIDDEN_VALUE`] when `key` is sensitive.
    #[must_use]
    pub fn display_value<'a>(&self, key: &str, value: &'a str) -> &'a str {
        if self.is_sensitive_key(key) { HIDDEN_VALUE } else { value }
    }
}

impl<'a> IntoIterator for &'a PropertyRegistry {
    type Item = (&'static str, &'static str);
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, default)` pairs of a [`PropertyRegistry`].
#[derive(Debug, Clone)]
pub struct Iter {
    inner: slice::Iter<'static, PropertyDefinition>,
}

impl Iterator for Iter {
    type Item = (&'static str, &'static str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|d| (d.key, d.default_value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;
    use basalt_domain::{PropertyFlags, PropertyType};

    fn leak(definitions: Vec<PropertyDefinition>) -> &'static [PropertyDefinition] {
        Box::leak(definitions.into_boxed_slice())
    }

    fn compiled_in_with(index: usize, edit: impl FnOnce(&mut PropertyDefinition)) -> &'static [PropertyDefinition] {
        let mut table = PROPERTIES.to_vec();
        edit(&mut table[index]);
        leak(table)
    }

    #[test]
    fn compiled_in_table_builds() {
        let registry = PropertyRegistry::build(PROPERTIES).expect("compiled-in table must be valid");
        assert_eq!(registry.len(), Property::COUNT);
        assert!(!registry.is_empty());
    }

    #[test]
    fn unparseable_default_fails_the_build() {
        let index = Property::MasterClientPort as usize;
        let table = compiled_in_with(index, |d| d.default_value = "ninety-nine");

        let err = PropertyRegistry::build(table).expect_err("bad default must be rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidDefaultValue { key: "master.port.client", value: "ninety-nine", .. }
        ));
    }

    #[test]
    fn duplicate_key_fails_the_build() {
        let index = Property::TserverClientPort as usize;
        let table = compiled_in_with(index, |d| d.key = "master.port.client");

        let err = PropertyRegistry::build(table).expect_err("duplicate key must be rejected");
        assert!(matches!(err, ConfigError::DuplicateKey { key: "master.port.client", .. }));
    }

    #[test]
    fn out_of_order_table_fails_the_build() {
        let mut table = PROPERTIES.to_vec();
        table.swap(0, 1);

        let err = PropertyRegistry::build(leak(table)).expect_err("order must match Property");
        assert!(matches!(err, ConfigError::Internal { .. }));
    }

    #[test]
    fn truncated_table_fails_the_build() {
        let table = leak(vec![PropertyDefinition {
            property: Property::InstanceCoordinators,
            key: "instance.coordinators.hosts",
            default_value: "localhost:2181",
            property_type: PropertyType::HostList,
            flags: PropertyFlags::empty(),
            description: "only entry",
        }]);

        assert!(PropertyRegistry::build(table).is_err());
    }

    #[test]
    fn unknown_keys_are_reported_not_defaulted() {
        let registry = PropertyRegistry::global();
        let err = registry.get("master.port.bogus").expect_err("unknown key");
        assert!(err.is_unknown_property());
        assert_eq!(err.to_string(), "Unknown property: 'master.port.bogus'");
    }

    #[test]
    fn free_form_keys_are_valid_but_not_registered() {
        let registry = PropertyRegistry::global();
        assert!(registry.is_valid_key("table.custom.owner"));
        assert!(registry.lookup_by_key("table.custom.owner").is_err());
        assert!(!registry.is_valid_key("table.custom."));
        assert!(!registry.is_valid_key("tabel.split.threshold"));
    }

    #[test]
    fn sensitive_values_are_masked() {
        let registry = PropertyRegistry::global();
        assert_eq!(registry.display_value("instance.secret", "hunter2"), HIDDEN_VALUE);
        assert_eq!(registry.display_value("trace.token.property.password", "x"), HIDDEN_VALUE);
        assert_eq!(registry.display_value("trace.user", "root"), "root");
        assert_eq!(registry.display_value("table.custom.owner", "ops"), "ops");
    }

    #[test]
    fn iterator_reports_exact_size() {
        let registry = PropertyRegistry::global();
        let mut iter = registry.iter();
        assert_eq!(iter.len(), registry.len());
        iter.next();
        assert_eq!(iter.len(), registry.len() - 1);
    }
}
