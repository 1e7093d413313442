use std::path::Path;

use anyhow::Result;
use tabled::{Table, Tabled};
use tracing::info;

use crate::{
    config::{Config, SETTINGS, Setting},
    ui::table::Formatter,
};

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Key")]
    key:   &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn list(config: &Config) -> Table {
    let rows = SETTINGS.iter().map(|s| SettingRow {
        key:   s.key,
        value: s.get(config),
    });
    Formatter::default().build(rows)
}

pub fn set(config: &mut Config, path: &Path, key: &str, value: &str) -> Result<()> {
    Setting::find(key)?.set(config, value)?;
    config.save(path)?;
    info!("{key} set to {value}");
    Ok(())
}

pub fn reset(config: &mut Config, path: &Path) -> Result<()> {
    *config = Config::default();
    config.save(path)?;
    info!("Settings reset to defaults");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::{list, reset, set};
    use crate::config::Config;

    #[test]
    fn test_set_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::load_or_init(&path).unwrap();

        set(&mut config, &path, "cache-directory", "/tmp/gevm-cache").unwrap();
        assert_eq!(Config::load_or_init(&path).unwrap().cache_directory, std::path::Path::new("/tmp/gevm-cache"));
        assert!(list(&config).to_string().contains("/tmp/gevm-cache"));

        assert!(set(&mut config, &path, "no-such-key", "x").is_err());

        reset(&mut config, &path).unwrap();
        assert_eq!(Config::load_or_init(&path).unwrap(), Config::default());
    }
}
