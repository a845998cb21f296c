use basalt_kernel::conf::HIDDEN_VALUE;
use basalt_kernel::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

const SITE: &str = r#"
[instance]
secret = "s3cr3t"

[instance.coordinators]
hosts = ["zk1:2181", "zk2:2181"]

[master.port]
client = 10010

[tserver.memory.maps]
max = "2G"

[table.custom]
owner = "ops"

[tabel.split]
threshold = "2G"
"#;

fn write_site(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.toml");
    fs::write(&path, contents).expect("write site file");
    (dir, path)
}

fn load(contents: &str) -> SiteConfiguration {
    let (_dir, path) = write_site(contents);
    SiteConfiguration::builder()
        .file(&path)
        .env_vars(Vec::<(String, String)>::new())
        .build()
        .expect("site configuration")
}

#[test]
fn file_values_override_defaults() {
    let site = load(SITE);

    assert_eq!(site.get(Property::MasterClientPort), "10010");
    assert_eq!(site.get_port(Property::MasterClientPort).expect("port"), 10010);
    assert_eq!(site.get(Property::TserverMaxMemoryMaps), "2G");
    assert_eq!(
        site.get_host_list(Property::InstanceCoordinators).expect("hosts"),
        ["zk1:2181", "zk2:2181"]
    );
    assert!(site.is_overridden(Property::MasterClientPort));
    assert!(!site.is_overridden(Property::TserverClientPort));
    assert_eq!(site.get(Property::TserverClientPort), "9997");
}

#[test]
fn unknown_keys_are_ignored_and_prefixed_keys_kept() {
    let site = load(SITE);

    assert_eq!(site.ignored_keys(), ["tabel.split.threshold"]);
    assert_eq!(site.get_raw("tabel.split.threshold"), None);
    assert_eq!(site.get_raw("table.custom.owner"), Some("ops"));
    assert_eq!(
        site.get_with_prefix(PropertyPrefix::TableCustom).get("owner").map(String::as_str),
        Some("ops")
    );
}

#[test]
fn iteration_covers_defaults_then_free_form_entries() {
    let site = load(SITE);
    let pairs: Vec<_> = site.iter().collect();

    assert_eq!(pairs.len(), PropertyRegistry::global().len() + 1);
    assert!(pairs.contains(&("master.port.client", "10010")));
    assert_eq!(pairs.last(), Some(&("table.custom.owner", "ops")));
}

#[test]
fn environment_overrides_the_file() {
    let (_dir, path) = write_site(SITE);
    let site = SiteConfiguration::builder()
        .file(&path)
        .env_vars([
            ("BASALT__MASTER__PORT__CLIENT", "10020"),
            ("BASALT__GC__CYCLE__DELAY", "10m"),
            ("UNRELATED", "x"),
        ])
        .build()
        .expect("site configuration");

    assert_eq!(site.get(Property::MasterClientPort), "10020");
    assert_eq!(site.get_duration(Property::GcCycleDelay).expect("duration"), Duration::from_secs(600));
    assert!(site.ignored_keys().iter().all(|key| key != "unrelated"));
}

#[test]
fn programmatic_overrides_win() {
    let (_dir, path) = write_site(SITE);
    let site = SiteConfiguration::builder()
        .file(&path)
        .env_vars([("BASALT__MASTER__PORT__CLIENT", "10020")])
        .set("master.port.client", "10030")
        .build()
        .expect("site configuration");

    assert_eq!(site.get(Property::MasterClientPort), "10030");
}

#[test]
fn invalid_override_names_the_key() {
    let err = SiteConfiguration::from_entries([("tserver.port.client", "80")])
        .expect_err("privileged port");

    let message = err.to_string();
    assert!(message.contains("tserver.port.client"), "{message}");
    assert!(message.contains("port"), "{message}");
}

#[test]
fn float_in_site_file_is_not_a_count() {
    let (_dir, path) = write_site("[master.bulk]\nretries = 3.0\n");
    let err = SiteConfiguration::builder().file(&path).env(false).build().expect_err("float count");
    assert!(matches!(err, ConfigError::InvalidValue { ref key, ref value, .. } if key == "master.bulk.retries" && value == "3.0"));

    let site = load("[table.compaction.major]\nratio = 1.5\n");
    assert_eq!(site.get(Property::TableMajorCompactionRatio), "1.5");
}

#[test]
fn file_keys_keep_case_and_env_keys_are_lowercased() {
    let (_dir, path) = write_site("[table.custom]\nOwnerName = \"ops\"\n");
    let site = SiteConfiguration::builder()
        .file(&path)
        .env_vars([("BASALT__TABLE__CUSTOM__TEAMLEAD", "kim")])
        .build()
        .expect("site configuration");

    assert_eq!(site.get_raw("table.custom.OwnerName"), Some("ops"));
    assert_eq!(site.get_raw("table.custom.teamlead"), Some("kim"));
}

#[test]
fn sensitive_overrides_display_hidden() {
    let site = SiteConfiguration::from_entries([
        ("instance.secret", "hunter2"),
        ("trace.token.property.password", "hunter3"),
    ])
    .expect("valid");
    let registry = PropertyRegistry::global();

    assert_eq!(registry.display_value("instance.secret", site.get(Property::InstanceSecret)), HIDDEN_VALUE);
    let token = site.get_raw("trace.token.property.password").expect("prefixed entry kept");
    assert_eq!(registry.display_value("trace.token.property.password", token), HIDDEN_VALUE);
}

#[test]
fn missing_required_file_is_a_source_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = SiteConfiguration::builder()
        .file(dir.path().join("absent.toml"))
        .env(false)
        .build()
        .expect_err("missing file");

    assert!(matches!(err, ConfigError::Source { .. }));
}

#[test]
fn missing_optional_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let site = SiteConfiguration::builder()
        .optional_file(dir.path().join("absent.toml"))
        .env(false)
        .build()
        .expect("defaults only");

    assert!(site.overrides().is_empty());
    assert_eq!(site.get(Property::MasterClientPort), "9999");
}

#[test]
fn malformed_file_is_a_source_error() {
    let (_dir, path) = write_site("[master\nport = ");
    let err = SiteConfiguration::builder().file(&path).env(false).build().expect_err("bad toml");

    assert!(matches!(err, ConfigError::Source { .. }));
    assert!(err.to_string().contains("site configuration"));
}
