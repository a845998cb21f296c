use basalt_domain::PropertyType;
use std::borrow::Cow;

/// Errors raised while resolving, validating or loading configuration.
#[basalt_derive::basalt_error]
pub enum ConfigError {
    /// The key has no compiled-in definition.
    #[error("Unknown property{}: '{key}'", format_context(.context))]
    UnknownProperty { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A compiled-in default does not parse under its own type class.
    #[error(
        "Invalid default value{}: '{key}' = '{value}' is not a valid {expected}",
        format_context(.context)
    )]
    InvalidDefaultValue {
        key: &'static str,
        value: &'static str,
        expected: PropertyType,
        context: Option<Cow<'static, str>>,
    },

    /// Two compiled-in definitions share a key.
    #[error("Duplicate property key{}: '{key}'", format_context(.context))]
    DuplicateKey { key: &'static str, context: Option<Cow<'static, str>> },

    /// An override does not parse under the type class of its property.
    #[error(
        "Invalid value{}: '{key}' = '{value}' is not a valid {expected}",
        format_context(.context)
    )]
    InvalidValue {
        key: Cow<'static, str>,
        value: String,
        expected: PropertyType,
        context: Option<Cow<'static, str>>,
    },

    /// A typed getter was used on a property of another type class.
    #[error(
        "Type mismatch{}: '{key}' is a {actual} property, requested as {requested}",
        format_context(.context)
    )]
    TypeMismatch {
        key: &'static str,
        requested: &'static str,
        actual: PropertyType,
        context: Option<Cow<'static, str>>,
    },

    /// Reading a site file or the environment failed.
    #[error("Config source error{}: {source}", format_context(.context))]
    Source { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Internal config error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ConfigError {
    pub(crate) fn unknown_property(key: impl Into<Cow<'static, str>>) -> Self {
        Self::UnknownProperty { key: key.into(), context: None }
    }

    /// `true` when the caller may fall back to treating the key as free-form.
    #[must_use]
    pub const fn is_unknown_property(&self) -> bool {
        matches!(self, Self::UnknownProperty { .. })
    }
}
