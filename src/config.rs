use crate::error::{DateScoreError, Result};
use crate::types::config::DateScoreConfig;
use crate::types::scoring::ScoringPolicy;
use serde::Serialize;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "datescore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".datescore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/datescore/config.toml";

/// Loads the layered config rooted at `root`.
///
/// `explicit` replaces the project file and must exist. Without a project
/// file nothing is loaded and callers fall back to the default policy.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<DateScoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<DateScoreConfig>> {
    let project_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(DateScoreError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => root.join(DEFAULT_CONFIG_FILE),
    };
    if !project_path.exists() {
        tracing::debug!(path = %project_path.display(), "no project config, using defaults");
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: DateScoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| DateScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

/// Resolves the policy to score with, falling back to the defaults.
pub fn resolve_policy(root: &Path, explicit: Option<&Path>) -> Result<ScoringPolicy> {
    let loaded = load_config(root, explicit)?;
    let policy = loaded.map(|cfg| cfg.policy()).unwrap_or_default();
    tracing::info!(
        full_points_threshold_days = policy.full_points_threshold_days,
        zero_points_threshold_days = policy.zero_points_threshold_days,
        max_points = policy.max_points,
        "scoring policy resolved"
    );
    Ok(policy)
}

#[derive(Serialize)]
struct PolicyDocument<'a> {
    scoring: &'a ScoringPolicy,
}

/// Renders a policy in the same shape the config files use.
pub fn policy_to_toml(policy: &ScoringPolicy) -> Result<String> {
    Ok(toml::to_string(&PolicyDocument { scoring: policy })?)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| DateScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_project_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config_with_global(dir.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, DateScoreError::ConfigNotFound(_)));
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
full_points_threshold_days = 90.0
max_points = 10
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring]
max_points = 50
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".datescore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[scoring]
zero_points_threshold_days = 730.0
"#,
        )
        .expect("local override should write");

        let policy = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist")
            .policy();

        assert_eq!(policy.full_points_threshold_days, 90.0);
        assert_eq!(policy.zero_points_threshold_days, 730.0);
        assert_eq!(policy.max_points, 50);
    }

    #[test]
    fn explicit_path_replaces_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[scoring]\nmax_points = 50\n",
        )
        .expect("project config should write");
        let explicit = root.path().join("tournament.toml");
        fs::write(&explicit, "[scoring]\nmax_points = 5\n").expect("explicit config should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed")
            .expect("config should exist");
        assert_eq!(cfg.policy().max_points, 5);
    }

    #[test]
    fn merged_config_is_validated() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[scoring]\nzero_points_threshold_days = 100.0\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(root.path(), None, None)
            .expect_err("inverted thresholds should fail");
        assert!(err.to_string().contains("must be below"));
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[scoring\n")
            .expect("project config should write");

        let err = load_config_with_global(root.path(), None, None)
            .expect_err("malformed toml should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn policy_renders_as_scoring_table() {
        let rendered = policy_to_toml(&ScoringPolicy::default()).expect("policy should render");
        assert!(rendered.contains("[scoring]"));
        assert!(rendered.contains("full_points_threshold_days = 182.5"));
        assert!(rendered.contains("max_points = 100"));

        let reparsed: DateScoreConfig = toml::from_str(&rendered).expect("rendered toml parses");
        assert_eq!(reparsed.policy(), ScoringPolicy::default());
    }
}
