pub use crate::conf::{
    ConfigError, ConfigErrorExt, ConfigResult, Configuration, DefaultConfiguration,
    PropertyRegistry, SiteConfiguration,
};
pub use basalt_domain::{
    MasterState, Property, PropertyDefinition, PropertyPrefix, PropertyType, SecurityErrorCode,
    WireEnum,
};
