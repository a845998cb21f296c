use super::sanity::{self, EntryKind};
use super::{ConfigErrorExt, ConfigResult, Configuration, DefaultConfiguration};
use basalt_domain::Property;
use config::{Config, Environment, File, Map, Value, ValueKind};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{info, warn};

/// Prefix of environment overrides: `BASALT__MASTER__PORT__CLIENT` sets `master.port.client`.
pub const ENV_PREFIX: &str = "BASALT";
/// Separator between the prefix and key segments of environment overrides.
pub const ENV_SEPARATOR: &str = "__";

const DEFAULT_SECRET: &str = "DEFAULT";

/// Site-specific values layered over the compiled-in defaults.
///
/// Sources, lowest precedence first: defaults, the site file, `BASALT__*` environment
/// variables, programmatic overrides. Every accepted override has been checked against the
/// type class of its property; keys that are neither compiled in nor under a free-form
/// prefix are dropped and reported by [`SiteConfiguration::ignored_keys`].
#[derive(Debug, Clone)]
pub struct SiteConfiguration {
    parent: DefaultConfiguration,
    overrides: BTreeMap<String, String>,
    ignored: Vec<String>,
}

impl SiteConfiguration {
    #[must_use]
    pub fn builder() -> SiteConfigurationBuilder {
        SiteConfigurationBuilder::default()
    }

    /// Loads `path` and the process environment.
    ///
    /// # Errors
    /// If the file cannot be read or parsed, or an override fails validation.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::builder().file(path).build()
    }

    /// Builds a configuration from explicit entries only.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`](super::ConfigError::InvalidValue) if an entry fails validation.
    pub fn from_entries<I, K, V>(entries: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries.into_iter().fold(Self::builder().env(false), |b, (k, v)| b.set(k, v)).build()
    }

    /// Accepted overrides, by key.
    #[must_use]
    pub const fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    /// Keys that were supplied but dropped as unknown.
    #[must_use]
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }

    #[must_use]
    pub fn is_overridden(&self, property: Property) -> bool {
        self.overrides.contains_key(property.key())
    }

    #[must_use]
    pub const fn defaults(&self) -> &DefaultConfiguration {
        &self.parent
    }

    fn from_raw(raw: BTreeMap<String, String>) -> ConfigResult<Self> {
        sanity::validate(&raw)?;

        let (mut overrides, mut ignored) = (BTreeMap::new(), Vec::new());
        for (key, value) in raw {
            match sanity::classify(&key) {
                EntryKind::Unknown => ignored.push(key),
                EntryKind::Registered(_) | EntryKind::Prefixed(_) => {
                    overrides.insert(key, value);
                },
            }
        }

        let site = Self { parent: DefaultConfiguration::new(), overrides, ignored };
        if site.get(Property::InstanceSecret) == DEFAULT_SECRET {
            warn!(key = Property::InstanceSecret.key(), "Instance secret is still the default");
        }
        Ok(site)
    }
}

impl Configuration for SiteConfiguration {
    fn get(&self, property: Property) -> &str {
        self.overrides.get(property.key()).map_or_else(|| self.parent.get(property), String::as_str)
    }

    fn get_raw(&self, key: &str) -> Option<&str> {
        self.overrides.get(key).map(String::as_str).or_else(|| self.parent.get_raw(key))
    }

    /// Compiled-in keys in table order with overrides applied, then free-form entries.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        let registered = Property::iter().map(|p| (p.key(), self.get(p)));
        let prefixed = self
            .overrides
            .iter()
            .filter(|(key, _)| !self.parent.registry().contains(key))
            .map(|(key, value)| (key.as_str(), value.as_str()));
        Box::new(registered.chain(prefixed))
    }
}

/// Layered loader for [`SiteConfiguration`].
#[derive(Debug)]
pub struct SiteConfigurationBuilder {
    file: Option<(PathBuf, bool)>,
    env: bool,
    env_vars: Option<Map<String, String>>,
    overrides: Vec<(String, String)>,
}

impl Default for SiteConfigurationBuilder {
    fn default() -> Self {
        Self { file: None, env: true, env_vars: None, overrides: Vec::new() }
    }
}

impl SiteConfigurationBuilder {
    /// Site file; format is picked from the extension (`.toml`, `.yaml`, `.json`, ...).
    ///
    /// Keys are matched case-sensitively, unlike `BASALT__*` variables which are lowercased.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some((path.as_ref().to_path_buf(), true));
        self
    }

    /// Like [`Self::file`], but a missing file is not an error.
    #[must_use]
    pub fn optional_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some((path.as_ref().to_path_buf(), false));
        self
    }

    /// Whether `BASALT__*` variables are read. On by default.
    #[must_use]
    pub const fn env(mut self, enabled: bool) -> Self {
        self.env = enabled;
        self
    }

    /// Reads environment overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = true;
        self.env_vars = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Programmatic override; wins over every other source. `key` is taken verbatim.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// # Errors
    /// If a source cannot be read or parsed, or an override fails validation.
    pub fn build(self) -> ConfigResult<SiteConfiguration> {
        let mut builder = Config::builder();

        if let Some((path, required)) = &self.file {
            info!("Loading site configuration from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(*required));
        }
        if self.env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .source(self.env_vars),
            );
        }

        let table = builder
            .build()
            .context("Failed to build site configuration")?
            .try_deserialize::<Map<String, Value>>()
            .context("Failed to read site configuration")?;

        let mut raw = BTreeMap::new();
        for (key, value) in table {
            flatten(key, value, &mut raw)?;
        }
        raw.extend(self.overrides);

        let site = SiteConfiguration::from_raw(raw)?;
        info!(
            overrides = site.overrides.len(),
            ignored = site.ignored.len(),
            "Site configuration loaded"
        );
        Ok(site)
    }
}

/// Collapses nested tables into dotted keys. Arrays become comma-separated lists.
///
/// Floats keep their fractional part, so `3.0` does not pass as a count or port. Key case is
/// preserved here; the environment source lowercases its keys before they arrive.
fn flatten(key: String, value: Value, out: &mut BTreeMap<String, String>) -> ConfigResult<()> {
    match value.kind {
        ValueKind::Nil => {},
        ValueKind::Table(table) => {
            for (child, value) in table {
                flatten(format!("{key}.{child}"), value, out)?;
            }
        },
        ValueKind::Array(items) => {
            let items = items
                .into_iter()
                .map(Value::into_string)
                .collect::<Result<Vec<_>, _>>()
                .context("Site configuration lists must hold scalars")?;
            out.insert(key, items.join(","));
        },
        ValueKind::Float(number) => {
            out.insert(key, format!("{number:?}"));
        },
        scalar => {
            let value = Value::new(None, scalar).into_string().context("Unreadable value")?;
            out.insert(key, value);
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let mut inner = Map::new();
        inner.insert("client".to_owned(), Value::new(None, 9998_i64));
        let mut out = BTreeMap::new();

        flatten("master.port".to_owned(), Value::new(None, ValueKind::Table(inner)), &mut out)
            .expect("flatten");

        assert_eq!(out.get("master.port.client").map(String::as_str), Some("9998"));
    }

    #[test]
    fn floats_keep_their_fraction() {
        let mut out = BTreeMap::new();

        flatten("master.bulk.retries".to_owned(), Value::new(None, 3.0_f64), &mut out).expect("flatten");
        flatten("table.compaction.major.ratio".to_owned(), Value::new(None, 1.5_f64), &mut out)
            .expect("flatten");

        assert_eq!(out["master.bulk.retries"], "3.0");
        assert_eq!(out["table.compaction.major.ratio"], "1.5");
    }

    #[test]
    fn arrays_become_comma_separated() {
        let hosts = vec![Value::new(None, "a:2181"), Value::new(None, "b:2181")];
        let mut out = BTreeMap::new();

        flatten("instance.coordinators.hosts".to_owned(), Value::new(None, hosts), &mut out)
            .expect("flatten");

        assert_eq!(out["instance.coordinators.hosts"], "a:2181,b:2181");
    }
}
