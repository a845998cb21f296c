use crate::properties::Property;
use bitflags::bitflags;
use std::fmt;
use strum_macros::EnumIter;

/// Type class of a property value.
///
/// Every raw value (compiled-in default or operator override) must be accepted by the
/// parser for its type class before it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Non-negative integer with an optional `ms`, `s`, `m`, `h` or `d` unit (seconds if omitted).
    Duration,
    /// Non-negative integer with an optional `B`, `K`, `M` or `G` unit (bytes if omitted).
    Memory,
    /// `true` or `false`.
    Boolean,
    /// Non-negative 32-bit integer.
    Count,
    /// `0` (any free port) or a port in `1024..=65535`.
    Port,
    /// Non-negative floating point number, or a percentage with a `%` suffix.
    Fraction,
    /// Free-form text.
    String,
    /// Filesystem path, relative or absolute.
    Path,
    /// Absolute filesystem path, or empty.
    AbsolutePath,
    /// Comma-separated list of `host[:port]` entries.
    HostList,
    /// One of a fixed set of options.
    Choice(&'static [&'static str]),
}

impl PropertyType {
    /// Short type name used in listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Memory => "memory",
            Self::Boolean => "boolean",
            Self::Count => "count",
            Self::Port => "port",
            Self::Fraction => "fraction",
            Self::String => "string",
            Self::Path => "path",
            Self::AbsolutePath => "absolute path",
            Self::HostList => "host list",
            Self::Choice(_) => "choice",
        }
    }

    /// Human-readable description of the accepted format.
    #[must_use]
    pub const fn format(self) -> &'static str {
        match self {
            Self::Duration => {
                "A non-negative integer optionally followed by a unit of time (ms, s, m, h, d), as in 30s. Seconds are assumed if no unit is given."
            },
            Self::Memory => {
                "A non-negative integer optionally followed by a unit of memory (B, K, M, G), as in 512M. Bytes are assumed if no unit is given."
            },
            Self::Boolean => "Has a value of either 'true' or 'false'.",
            Self::Count => "A non-negative integer in the range 0-4294967295.",
            Self::Port => "A port in the range 1024-65535, or 0 to bind to any free port.",
            Self::Fraction => {
                "A non-negative floating point number that represents either a fraction or, if suffixed with '%', a percentage."
            },
            Self::String => "An arbitrary string of characters.",
            Self::Path => "A filesystem path, relative paths are resolved against the working directory.",
            Self::AbsolutePath => "An absolute filesystem path, or empty.",
            Self::HostList => "A comma-separated list of hosts, each optionally followed by ':port'.",
            Self::Choice(_) => "One of the listed options.",
        }
    }

    /// Options accepted by a [`PropertyType::Choice`], empty for every other type.
    #[must_use]
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::Choice(options) => options,
            _ => &[],
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice(options) => write!(f, "choice [{}]", options.join("|")),
            other => f.write_str(other.name()),
        }
    }
}

bitflags! {
    /// Behavioral flags of a property definition.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// Value must never be printed or logged in clear text.
        const SENSITIVE = 1 << 0;
        /// A changed value only takes effect after a process restart.
        const FIXED = 1 << 1;
    }
}

/// A compiled-in configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub property: Property,
    pub key: &'static str,
    pub default_value: &'static str,
    pub property_type: PropertyType,
    pub flags: PropertyFlags,
    pub description: &'static str,
}

impl PropertyDefinition {
    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.flags.contains(PropertyFlags::SENSITIVE)
    }

    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.flags.contains(PropertyFlags::FIXED)
    }

    /// Leading key segment naming the owning component (`master`, `tserver`, ...).
    #[must_use]
    pub fn component(&self) -> &'static str {
        self.key.split_once('.').map_or(self.key, |(component, _)| component)
    }
}

/// Key prefixes reserved for user-defined, free-form properties.
///
/// A key such as `table.custom.owner` is not compiled in, but it is still a valid
/// configuration entry because it lives under [`PropertyPrefix::TableCustom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PropertyPrefix {
    TableCustom,
    TableIterator,
    TableConstraint,
    TableGroup,
    TraceTokenProperty,
}

impl PropertyPrefix {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::TableCustom => "table.custom.",
            Self::TableIterator => "table.iterator.",
            Self::TableConstraint => "table.constraint.",
            Self::TableGroup => "table.group.",
            Self::TraceTokenProperty => "trace.token.property.",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TableCustom => "Arbitrary user-defined table properties.",
            Self::TableIterator => "Iterators applied to a table, keyed by scope and name.",
            Self::TableConstraint => "Constraints checked on every mutation of a table.",
            Self::TableGroup => "Locality group definitions, keyed by group name.",
            Self::TraceTokenProperty => "Properties of the authentication token used by the tracer.",
        }
    }

    /// Values under this prefix are masked like [`PropertyFlags::SENSITIVE`] properties.
    #[must_use]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::TraceTokenProperty)
    }

    /// Whether `key` names an entry under this prefix. The bare prefix itself does not.
    #[must_use]
    pub fn matches(self, key: &str) -> bool {
        key.len() > self.prefix().len() && key.starts_with(self.prefix())
    }
}

impl fmt::Display for PropertyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
