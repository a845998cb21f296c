//! Parsers for every [`PropertyType`].
//!
//! Each parser returns `None` for input its type class rejects; callers attach the key and
//! turn that into a [`ConfigError`](super::ConfigError).

use basalt_domain::PropertyType;
use std::time::Duration;

const KIB: u64 = 1024;
const MIN_BOUND_PORT: u16 = 1024;

/// Whether `raw` is acceptable for `kind`.
#[must_use]
pub fn is_valid(kind: PropertyType, raw: &str) -> bool {
    match kind {
        PropertyType::Duration => parse_duration(raw).is_some(),
        PropertyType::Memory => parse_memory(raw).is_some(),
        PropertyType::Boolean => parse_boolean(raw).is_some(),
        PropertyType::Count => parse_count(raw).is_some(),
        PropertyType::Port => parse_port(raw).is_some(),
        PropertyType::Fraction => parse_fraction(raw).is_some(),
        PropertyType::HostList => parse_host_list(raw).is_some(),
        PropertyType::AbsolutePath => raw.is_empty() || raw.starts_with('/'),
        PropertyType::Choice(options) => options.contains(&raw),
        PropertyType::String | PropertyType::Path => true,
    }
}

const DURATION_UNITS: [&str; 5] = ["ms", "s", "m", "h", "d"];

/// `30s`, `500ms`, `5m`, `1h`, `2d`; a bare number is seconds.
///
/// One number and one unit only: `1h 30m` and padded input are rejected.
#[must_use]
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let (value, unit) = split_unit(raw)?;
    match unit {
        "" => Some(Duration::from_secs(value)),
        unit if DURATION_UNITS.contains(&unit) => humantime::parse_duration(raw).ok(),
        _ => None,
    }
}

/// `512`, `100K`, `512M`, `1G` (1024-based, case-insensitive); a bare number is bytes.
#[must_use]
pub fn parse_memory(raw: &str) -> Option<u64> {
    let (value, unit) = split_unit(raw)?;
    let multiplier = match unit.to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" => KIB,
        "M" => KIB * KIB,
        "G" => KIB * KIB * KIB,
        _ => return None,
    };
    value.checked_mul(multiplier)
}

#[must_use]
pub fn parse_boolean(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[must_use]
pub fn parse_count(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// `0` binds any free port; anything else must be outside the privileged range.
#[must_use]
pub fn parse_port(raw: &str) -> Option<u16> {
    let port = u16::try_from(parse_count(raw)?).ok()?;
    (port == 0 || port >= MIN_BOUND_PORT).then_some(port)
}

/// `0.25` or `25%`.
#[must_use]
pub fn parse_fraction(raw: &str) -> Option<f64> {
    let (number, divisor) = raw.strip_suffix('%').map_or((raw, 1.0), |n| (n, 100.0));
    if !number.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    (value.is_finite() && value >= 0.0).then(|| value / divisor)
}

/// `host1:2181,host2` into its trimmed entries.
#[must_use]
pub fn parse_host_list(raw: &str) -> Option<Vec<&str>> {
    raw.split(',').map(str::trim).map(|entry| is_host_entry(entry).then_some(entry)).collect()
}

fn is_host_entry(entry: &str) -> bool {
    let (host, port) = entry.rsplit_once(':').map_or((entry, None), |(h, p)| (h, Some(p)));
    let host_ok = !host.is_empty()
        && host.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'));
    let port_ok = port.is_none_or(|p| parse_count(p).is_some_and(|n| (1..=65_535).contains(&n)));
    host_ok && port_ok
}

fn split_unit(raw: &str) -> Option<(u64, &str)> {
    let split = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);
    if digits.is_empty() {
        return None;
    }
    Some((digits.parse().ok()?, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_default_to_seconds() {
        assert_eq!(parse_duration("30"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("2d"), Some(Duration::from_secs(172_800)));
    }

    #[test]
    fn durations_reject_malformed_input() {
        for raw in ["", "s", "-5s", "5 s", "5x", "1.5h", "5S", " 5s", "1h30m", "1h 30m", "2min", "1M", "3w"] {
            assert_eq!(parse_duration(raw), None, "{raw:?}");
        }
        assert_eq!(parse_duration(&format!("{}d", u64::MAX)), None);
    }

    #[test]
    fn memory_units_are_binary_and_case_insensitive() {
        assert_eq!(parse_memory("512"), Some(512));
        assert_eq!(parse_memory("512B"), Some(512));
        assert_eq!(parse_memory("100K"), Some(102_400));
        assert_eq!(parse_memory("100k"), Some(102_400));
        assert_eq!(parse_memory("512M"), Some(536_870_912));
        assert_eq!(parse_memory("1G"), Some(1_073_741_824));
        assert_eq!(parse_memory("1T"), None);
        assert_eq!(parse_memory("G"), None);
        assert_eq!(parse_memory(&format!("{}G", u64::MAX)), None);
    }

    #[test]
    fn booleans_ignore_case_only() {
        assert_eq!(parse_boolean("TRUE"), Some(true));
        assert_eq!(parse_boolean("false"), Some(false));
        assert_eq!(parse_boolean("yes"), None);
        assert_eq!(parse_boolean("1"), None);
    }

    #[test]
    fn counts_are_plain_unsigned_integers() {
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("4294967295"), Some(u32::MAX));
        assert_eq!(parse_count("4294967296"), None);
        assert_eq!(parse_count("+4"), None);
        assert_eq!(parse_count("-4"), None);
    }

    #[test]
    fn ports_skip_the_privileged_range() {
        assert_eq!(parse_port("0"), Some(0));
        assert_eq!(parse_port("9999"), Some(9999));
        assert_eq!(parse_port("65535"), Some(65_535));
        assert_eq!(parse_port("80"), None);
        assert_eq!(parse_port("65536"), None);
    }

    #[test]
    fn fractions_accept_percentages() {
        assert_eq!(parse_fraction("0.25"), Some(0.25));
        assert_eq!(parse_fraction("3"), Some(3.0));
        assert_eq!(parse_fraction("50%"), Some(0.5));
        assert_eq!(parse_fraction(".5"), Some(0.5));
        assert_eq!(parse_fraction("0.5%"), Some(0.005));
        for raw in ["", "%", "-0.5", "+1", "NaN", "inf", "abc"] {
            assert_eq!(parse_fraction(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn host_lists_require_every_entry() {
        assert_eq!(parse_host_list("localhost:2181"), Some(vec!["localhost:2181"]));
        assert_eq!(parse_host_list("a.example:2181, b.example"), Some(vec!["a.example:2181", "b.example"]));
        assert_eq!(parse_host_list(""), None);
        assert_eq!(parse_host_list("a,,b"), None);
        assert_eq!(parse_host_list("a:0"), None);
        assert_eq!(parse_host_list("a:port"), None);
        assert_eq!(parse_host_list("bad host"), None);
    }

    #[test]
    fn validation_dispatches_on_type_class() {
        assert!(is_valid(PropertyType::AbsolutePath, ""));
        assert!(is_valid(PropertyType::AbsolutePath, "/basalt"));
        assert!(!is_valid(PropertyType::AbsolutePath, "basalt"));
        assert!(is_valid(PropertyType::Path, "walogs"));
        assert!(is_valid(PropertyType::String, ""));
        assert!(is_valid(PropertyType::Choice(&["gz", "none"]), "none"));
        assert!(!is_valid(PropertyType::Choice(&["gz", "none"]), "GZ"));
    }
}
