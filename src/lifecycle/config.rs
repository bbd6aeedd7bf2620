//! Runtime configuration: where files live and how large the menu starts.

use crate::model::DEFAULT_CAPACITY;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Overrides [`SystemConfig::menu_file`].
pub const MENU_FILE_VAR: &str = "ORDER_DESK_MENU_FILE";
/// Overrides [`SystemConfig::output_dir`].
pub const OUTPUT_DIR_VAR: &str = "ORDER_DESK_OUTPUT_DIR";
/// Overrides [`SystemConfig::catalog_capacity`].
pub const CATALOG_CAPACITY_VAR: &str = "ORDER_DESK_CATALOG_CAPACITY";

/// Largest starting catalog capacity accepted from the environment.
pub const MAX_CATALOG_CAPACITY: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Menu file read at startup and rewritten at shutdown.
    pub menu_file: PathBuf,

    /// Directory the dated completed-order exports are written to.
    pub output_dir: PathBuf,

    /// Initial capacity of the catalog.
    pub catalog_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            menu_file: PathBuf::from("menu.txt"),
            output_dir: PathBuf::from("."),
            catalog_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl SystemConfig {
    /// Defaults overridden by the `ORDER_DESK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    ///
    /// Values that don't parse, and capacities above [`MAX_CATALOG_CAPACITY`], are logged
    /// and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(MENU_FILE_VAR).filter(|v| !v.is_empty()) {
            config.menu_file = PathBuf::from(path);
        }
        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|v| !v.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(CATALOG_CAPACITY_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity <= MAX_CATALOG_CAPACITY => {
                    config.catalog_capacity = capacity
                }
                Ok(capacity) => warn!(
                    var = CATALOG_CAPACITY_VAR,
                    capacity,
                    max = MAX_CATALOG_CAPACITY,
                    "Ignoring oversized capacity"
                ),
                Err(e) => warn!(var = CATALOG_CAPACITY_VAR, value = %raw, error = %e, "Ignoring invalid value"),
            }
        }

        config
    }

    /// Export path for `date`, e.g. `./completed_orders (2024-3-7).txt`.
    pub fn completed_orders_path(&self, date: NaiveDate) -> PathBuf {
        self.output_dir.join(completed_orders_file_name(date))
    }
}

/// `completed_orders (<year>-<month>-<day>).txt`, month and day without zero padding.
pub fn completed_orders_file_name(date: NaiveDate) -> String {
    format!(
        "completed_orders ({}-{}-{}).txt",
        date.year(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = SystemConfig::from_lookup(|_| None);
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.menu_file, PathBuf::from("menu.txt"));
        assert_eq!(config.catalog_capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_overrides_apply() {
        let config = SystemConfig::from_lookup(lookup_from(&[
            (MENU_FILE_VAR, "/srv/menu.csv"),
            (OUTPUT_DIR_VAR, "/srv/exports"),
            (CATALOG_CAPACITY_VAR, " 2 "),
        ]));
        assert_eq!(config.menu_file, PathBuf::from("/srv/menu.csv"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/exports"));
        assert_eq!(config.catalog_capacity, 2);
    }

    #[test]
    fn test_oversized_capacity_is_ignored() {
        let config = SystemConfig::from_lookup(lookup_from(&[(
            CATALOG_CAPACITY_VAR,
            "18446744073709551615",
        )]));
        assert_eq!(config.catalog_capacity, DEFAULT_CAPACITY);

        let config = SystemConfig::from_lookup(lookup_from(&[(CATALOG_CAPACITY_VAR, "65536")]));
        assert_eq!(config.catalog_capacity, MAX_CATALOG_CAPACITY);
    }

    #[test]
    fn test_invalid_capacity_is_ignored() {
        let config = SystemConfig::from_lookup(lookup_from(&[(CATALOG_CAPACITY_VAR, "lots")]));
        assert_eq!(config.catalog_capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_export_file_name_is_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            completed_orders_file_name(date),
            "completed_orders (2024-3-7).txt"
        );

        let config = SystemConfig {
            output_dir: PathBuf::from("out"),
            ..SystemConfig::default()
        };
        assert_eq!(
            config.completed_orders_path(date),
            PathBuf::from("out").join("completed_orders (2024-3-7).txt")
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SystemConfig = serde_json::from_str(r#"{"catalog_capacity": 4}"#).unwrap();
        assert_eq!(config.catalog_capacity, 4);
        assert_eq!(config.menu_file, PathBuf::from("menu.txt"));
    }
}
