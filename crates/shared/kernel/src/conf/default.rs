use super::{ConfigResult, Configuration, PropertyRegistry};
use basalt_domain::Property;

/// Configuration that answers with compiled-in defaults only.
///
/// Cheap to copy: it is a handle on the global [`PropertyRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct DefaultConfiguration {
    registry: &'static PropertyRegistry,
}

impl DefaultConfiguration {
    #[must_use]
    pub fn new() -> Self {
        Self { registry: PropertyRegistry::global() }
    }

    /// Default value of a key given as text.
    ///
    /// # Errors
    /// [`ConfigError::UnknownProperty`](super::ConfigError::UnknownProperty) if the key is not
    /// compiled in.
    pub fn get_by_key(&self, key: &str) -> ConfigResult<&'static str> {
        self.registry.get(key)
    }

    #[must_use]
    pub const fn registry(&self) -> &'static PropertyRegistry {
        self.registry
    }
}

impl Default for DefaultConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration for DefaultConfiguration {
    fn get(&self, property: Property) -> &str {
        self.registry.definition(property).default_value
    }

    fn get_raw(&self, key: &str) -> Option<&str> {
        self.registry.get(key).ok()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.registry.iter().map(|(key, value)| (key, value)))
    }
}
