use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

/// What produced an artifact: the command and its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Provenance block shared by sidecars and `report`.
pub fn block(command: &str, params: Value, outputs: Vec<String>) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "tool": "salesman",
        "version": salesman::VERSION,
        "command": command,
        "params": params,
        "outputs": outputs
    })
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = block(
        payload.command,
        payload.params,
        vec![artifact.to_string_lossy().into_owned()],
    );
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or(OsStr::new("artifact"))
        .to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit recorded in provenance, resolved once per process: `GIT_COMMIT` at
/// build time, then at run time, then `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> &'static str {
    static REV: OnceLock<String> = OnceLock::new();
    REV.get_or_init(|| {
        [
            option_env!("GIT_COMMIT").map(str::to_owned),
            std::env::var("GIT_COMMIT").ok(),
        ]
        .into_iter()
        .flatten()
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
    })
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/tour.json");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/tour.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_command_and_params() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("tour.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("solve", json!({"start": 0, "end": 0}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "solve");
        assert_eq!(parsed["params"]["start"], 0);
        assert_eq!(parsed["tool"], "salesman");
        assert!(parsed["callsite"]["line"].as_u64().is_some());
        assert_eq!(parsed["code_rev"], current_git_rev());
    }

    #[test]
    fn git_rev_is_resolved_once() {
        let first = current_git_rev();
        assert!(!first.is_empty());
        assert!(std::ptr::eq(first, current_git_rev()));
    }
}
