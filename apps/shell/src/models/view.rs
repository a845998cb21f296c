use basalt::domain::PropertyDefinition;
use basalt::kernel::conf::PropertyRegistry;
use serde::Serialize;

/// Serializable form of a [`PropertyDefinition`]; sensitive defaults are masked.
#[derive(Debug, Serialize)]
pub struct PropertyView {
    pub key: &'static str,
    pub default: &'static str,
    #[serde(rename = "type")]
    pub property_type: &'static str,
    pub options: &'static [&'static str],
    pub sensitive: bool,
    pub fixed: bool,
    pub description: &'static str,
}

impl PropertyView {
    pub fn new(registry: &PropertyRegistry, definition: &'static PropertyDefinition) -> Self {
        Self {
            key: definition.key,
            default: registry.display_value(definition.key, definition.default_value),
            property_type: definition.property_type.name(),
            options: definition.property_type.options(),
            sensitive: definition.is_sensitive(),
            fixed: definition.is_fixed(),
            description: definition.description,
        }
    }
}
