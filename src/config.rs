//! Configuration: TOML file loading, CLI overrides, and defaults.
//!
//! Resolution order (first found wins, values merge/override):
//! 1. CLI flags (`--config`, `--sort`, etc.)
//! 2. `$FOS_CONFIG` environment variable (path to config file)
//! 3. Project-local `.fos.toml` in the current working directory
//! 4. Global `~/.config/fos/config.toml`
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::listing::SortField;

// ── Section configs ──────────────────────────────────────────────────────────

/// Column headers and messages shown with the listing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LabelsConfig {
    pub name_header: Option<String>,
    pub type_header: Option<String>,
    pub last_saved_header: Option<String>,
    /// Shown when a listing or search has no results.
    pub no_results: Option<String>,
}

/// Listing settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListingConfig {
    /// Column sorted ascending on startup: "name", "type", "date".
    /// Unset keeps backend order.
    pub sort_by: Option<String>,
}

/// Search settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Match file names case-sensitively.
    pub case_sensitive: Option<bool>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// All fields are optional so that partial configs from different sources
/// can be merged together (CLI overrides file, file overrides defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub labels: LabelsConfig,
    pub listing: ListingConfig,
    pub search: SearchConfig,
}

// ── Default constants ────────────────────────────────────────────────────────

pub const DEFAULT_NAME_HEADER: &str = "Name";
pub const DEFAULT_TYPE_HEADER: &str = "Type";
pub const DEFAULT_LAST_SAVED_HEADER: &str = "Last saved";
pub const DEFAULT_NO_RESULTS: &str = "No results";

// ── Config file locator ──────────────────────────────────────────────────────

/// Return the list of candidate config file paths in priority order.
///
/// Does NOT include the CLI `--config` path; that is handled separately.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("FOS_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".fos.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("fos").join("config.toml"));
    }

    paths
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning logged).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return None,
    };
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            Some(cfg)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
            None
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self`; `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            labels: LabelsConfig {
                name_header: other
                    .labels
                    .name_header
                    .clone()
                    .or(self.labels.name_header),
                type_header: other
                    .labels
                    .type_header
                    .clone()
                    .or(self.labels.type_header),
                last_saved_header: other
                    .labels
                    .last_saved_header
                    .clone()
                    .or(self.labels.last_saved_header),
                no_results: other.labels.no_results.clone().or(self.labels.no_results),
            },
            listing: ListingConfig {
                sort_by: other.listing.sort_by.clone().or(self.listing.sort_by),
            },
            search: SearchConfig {
                case_sensitive: other.search.case_sensitive.or(self.search.case_sensitive),
            },
        }
    }

    /// Load the final merged configuration.
    ///
    /// `cli_config_path` is an explicit config file path from `--config`.
    /// `cli_overrides` are partial overrides derived from CLI flags.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        let mut config = AppConfig::default();

        // Walk in reverse so that highest-priority (env var) overwrites lower.
        for path in candidate_paths().iter().rev() {
            if let Some(file_cfg) = load_file(path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(cli_path) = cli_config_path {
            if let Some(file_cfg) = load_file(cli_path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(overrides) = cli_overrides {
            config = config.merge(overrides);
        }

        config
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    pub fn name_header(&self) -> &str {
        self.labels.name_header.as_deref().unwrap_or(DEFAULT_NAME_HEADER)
    }

    pub fn type_header(&self) -> &str {
        self.labels.type_header.as_deref().unwrap_or(DEFAULT_TYPE_HEADER)
    }

    pub fn last_saved_header(&self) -> &str {
        self.labels
            .last_saved_header
            .as_deref()
            .unwrap_or(DEFAULT_LAST_SAVED_HEADER)
    }

    pub fn no_results(&self) -> &str {
        self.labels.no_results.as_deref().unwrap_or(DEFAULT_NO_RESULTS)
    }

    /// Initial sort column, if one is configured.
    pub fn sort_by(&self) -> Option<SortField> {
        self.listing.sort_by.as_deref().map(SortField::from_str)
    }

    pub fn case_sensitive(&self) -> bool {
        self.search.case_sensitive.unwrap_or(false)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.name_header(), "Name");
        assert_eq!(cfg.type_header(), "Type");
        assert_eq!(cfg.last_saved_header(), "Last saved");
        assert_eq!(cfg.no_results(), "No results");
        assert_eq!(cfg.sort_by(), None);
        assert_eq!(cfg.case_sensitive(), false);
    }

    #[test]
    fn test_toml_parsing_full() {
        let toml = r#"
[labels]
name_header = "Nom"
type_header = "Genre"
last_saved_header = "Dernier enregistrement"
no_results = "Aucun résultat"

[listing]
sort_by = "date"

[search]
case_sensitive = true
"#;
        let cfg: AppConfig = toml::from_str(toml).expect("parse failed");
        assert_eq!(cfg.name_header(), "Nom");
        assert_eq!(cfg.type_header(), "Genre");
        assert_eq!(cfg.last_saved_header(), "Dernier enregistrement");
        assert_eq!(cfg.no_results(), "Aucun résultat");
        assert_eq!(cfg.sort_by(), Some(SortField::Date));
        assert_eq!(cfg.case_sensitive(), true);
    }

    #[test]
    fn test_toml_parsing_partial() {
        let toml = r#"
[search]
case_sensitive = true
"#;
        let cfg: AppConfig = toml::from_str(toml).expect("parse failed");
        assert_eq!(cfg.case_sensitive(), true);
        assert_eq!(cfg.name_header(), "Name");
        assert_eq!(cfg.sort_by(), None);
    }

    #[test]
    fn test_toml_parsing_empty() {
        let cfg: AppConfig = toml::from_str("").expect("parse failed");
        assert_eq!(cfg.no_results(), "No results");
        assert_eq!(cfg.case_sensitive(), false);
    }

    #[test]
    fn test_unknown_sort_falls_back_to_name() {
        let cfg: AppConfig = toml::from_str("[listing]\nsort_by = \"size\"").expect("parse");
        assert_eq!(cfg.sort_by(), Some(SortField::Name));
    }

    #[test]
    fn test_merge_overrides() {
        let base = AppConfig {
            labels: LabelsConfig {
                name_header: Some("Name".into()),
                no_results: Some("Nothing here".into()),
                ..Default::default()
            },
            search: SearchConfig {
                case_sensitive: Some(false),
            },
            ..Default::default()
        };

        let over = AppConfig {
            labels: LabelsConfig {
                name_header: Some("File".into()),
                // no_results not set — should keep base
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = base.merge(&over);
        assert_eq!(merged.name_header(), "File"); // overridden
        assert_eq!(merged.no_results(), "Nothing here"); // from base
        assert_eq!(merged.case_sensitive(), false); // from base
    }

    #[test]
    fn test_merge_none_does_not_clear_some() {
        let base = AppConfig {
            listing: ListingConfig {
                sort_by: Some("type".into()),
            },
            search: SearchConfig {
                case_sensitive: Some(true),
            },
            ..Default::default()
        };
        let merged = base.merge(&AppConfig::default());
        assert_eq!(merged.sort_by(), Some(SortField::Type));
        assert_eq!(merged.case_sensitive(), true);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("test-config.toml");
        let mut f = std::fs::File::create(&cfg_path).expect("create");
        writeln!(
            f,
            r#"
[labels]
no_results = "Empty"

[listing]
sort_by = "type"
"#
        )
        .expect("write");

        let cfg = load_file(&cfg_path).expect("load");
        assert_eq!(cfg.no_results(), "Empty");
        assert_eq!(cfg.sort_by(), Some(SortField::Type));
        // Unset fields fall through to defaults
        assert_eq!(cfg.name_header(), "Name");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_returns_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("bad.toml");
        std::fs::write(&cfg_path, "this is { not valid toml").expect("write");
        assert!(load_file(&cfg_path).is_none());
    }

    #[test]
    fn test_load_with_cli_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg_path = dir.path().join("config.toml");
        std::fs::write(
            &cfg_path,
            r#"
[labels]
type_header = "Kind"

[listing]
sort_by = "name"
"#,
        )
        .expect("write");

        let cli_overrides = AppConfig {
            listing: ListingConfig {
                sort_by: Some("date".into()),
            },
            ..Default::default()
        };

        let cfg = AppConfig::load(Some(&cfg_path), Some(&cli_overrides));
        // CLI override wins
        assert_eq!(cfg.sort_by(), Some(SortField::Date));
        // File value preserved (not overridden by CLI)
        assert_eq!(cfg.type_header(), "Kind");
    }
}
