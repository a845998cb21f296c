use anyhow::{Context, Result};
use basalt::prelude::{Configuration, SiteConfiguration};
use std::path::Path;
use tracing::info;

/// Loads `path`, validates every entry and reports what was applied or ignored.
///
/// # Errors
/// Returns an error if the file cannot be loaded or an entry fails validation.
pub fn check_site(path: &Path) -> Result<()> {
    let site = SiteConfiguration::load(path)
        .with_context(|| format!("{} is not a valid site configuration", path.display()))?;
    let registry = site.defaults().registry();

    println!("{}: {} override(s)", path.display(), site.overrides().len());
    for (key, value) in site.overrides() {
        println!("  {key} = {}", registry.display_value(key, value));
    }

    for key in site.ignored_keys() {
        println!("  ignored: {key}");
    }

    info!(
        overrides = site.overrides().len(),
        ignored = site.ignored_keys().len(),
        effective = site.iter().count(),
        "Site configuration checked"
    );
    Ok(())
}
