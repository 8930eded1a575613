//! Snapshot persistence for scenario export/import (`.tabtre` files).

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};

use crate::errors::{Result, TreasuryError};
use crate::simulation::ScenarioSnapshot;

pub const SNAPSHOT_EXTENSION: &str = "tabtre";
const TMP_SUFFIX: &str = "tmp";
const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const DEFAULT_DIR_NAME: &str = ".tabtre";
const EXPORT_DIR: &str = "exports";

/// Returns the application data directory, defaulting to `~/.tabtre`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TABTRE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory scenario exports are written to.
pub fn export_dir() -> PathBuf {
    app_data_dir().join(EXPORT_DIR)
}

/// File name for an export: slugged scenario name plus a minute-resolution
/// timestamp, e.g. `plan_q1_20240131_0930.tabtre`.
pub fn export_file_name(name: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        slug(name),
        at.format(EXPORT_TIMESTAMP_FORMAT),
        SNAPSHOT_EXTENSION
    )
}

/// Writes the snapshot to disk atomically by staging to a temporary file.
pub fn save_snapshot_to_path(snapshot: &ScenarioSnapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a snapshot document from disk. A document that does not parse as a
/// scenario snapshot is reported as invalid, with the offending path.
pub fn load_snapshot_from_path(path: &Path) -> Result<ScenarioSnapshot> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data)
        .map_err(|err| TreasuryError::InvalidSnapshot(format!("{}: {}", path.display(), err)))
}

/// Writes a scenario snapshot into `dir` under its export file name and
/// returns the full path.
pub fn export_snapshot(snapshot: &ScenarioSnapshot, dir: &Path) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(export_file_name(&snapshot.name, Utc::now()));
    save_snapshot_to_path(snapshot, &path)?;
    Ok(path)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn slug(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "scenario".into()
    } else {
        sanitized
    }
}
