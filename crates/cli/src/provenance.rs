use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: command parameters plus an optional run label.
pub struct Payload {
    pub params: Value,
    pub label: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            label: None,
        }
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }
}

/// Write `<artifact>.provenance.json` containing the git commit, library
/// version, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    ensure_parent(&provenance_path)?;

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "hypertile_version": hypertile::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "label": payload.label,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/tiling.svg");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/tiling.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_label() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("tiles.json");
        let payload = Payload::new(json!({"p": 7, "q": 3})).with_label(Some("demo".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["p"], 7);
        assert_eq!(parsed["label"], "demo");
        assert_eq!(parsed["hypertile_version"], hypertile::VERSION);
    }
}
