use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use healthiq_core::models::benchmark::BenchmarkCategory;

/// Current catalog file version. Bump this when changing the file's shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Benchmark catalog file. The built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("HEALTHIQ_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            catalog_path: env::var_os("HEALTHIQ_CATALOG").map(PathBuf::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Schema version. Missing or 0 = pre-versioned file.
    #[serde(default)]
    pub catalog_version: u32,
    pub categories: Vec<BenchmarkCategory>,
}

pub fn load_catalog(path: &Path) -> eyre::Result<Vec<BenchmarkCategory>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
    let categories = parse_catalog(&contents)?;
    tracing::info!(
        path = %path.display(),
        categories = categories.len(),
        "benchmark catalog loaded"
    );
    Ok(categories)
}

pub fn parse_catalog(contents: &str) -> eyre::Result<Vec<BenchmarkCategory>> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = match json.get("catalog_version") {
        None | Some(serde_json::Value::Null) => 0,
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| eyre::eyre!("catalog_version {v} is not a valid version number"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let file: CatalogFile = serde_json::from_value(migrated)?;

    for metric in file.categories.iter().flat_map(|c| &c.metrics) {
        if metric.target_value == 0.0 || !metric.target_value.is_finite() {
            tracing::warn!(
                metric_id = %metric.metric_id,
                target = metric.target_value,
                "catalog metric has an unusable target; comparisons against it will fail"
            );
        }
    }

    Ok(file.categories)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "catalog_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    let mut json = json;

    // v0 → v1: a bare array of categories becomes `{catalog_version, categories}`
    if from_version < 1 {
        json = match json {
            serde_json::Value::Array(categories) => serde_json::json!({
                "catalog_version": 1,
                "categories": categories,
            }),
            serde_json::Value::Object(mut obj) => {
                obj.insert(
                    "catalog_version".to_string(),
                    serde_json::Value::Number(1.into()),
                );
                serde_json::Value::Object(obj)
            }
            _ => return Err(eyre::eyre!("catalog is neither a JSON array nor an object")),
        };
        tracing::info!("migrated catalog v0 → v1");
    }

    Ok(json)
}
