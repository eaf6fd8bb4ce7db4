use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::PipelineError;

/// Persisted build-version record (`version.json`).
///
/// Deployment fields are owned by the release tooling; this tool carries
/// them through a bump untouched and never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: String,
    pub last_updated: String,
    #[serde(default)]
    pub deployed_version: Option<String>,
    #[serde(default)]
    pub deployment_history: Vec<serde_json::Value>,
    /// Keys other tools keep in the store; they survive a bump verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VersionRecord {
    /// First-run record used when no store exists yet.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            version: "1.01".to_string(),
            last_updated: format_timestamp(now),
            deployed_version: None,
            deployment_history: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Next record: MINOR + 1, zero-padded to two digits, `last_updated`
    /// set to `now`.
    ///
    /// MINOR never carries into MAJOR: "1.99" bumps to "1.100". The footer
    /// stamp renders whatever comes out, so the wide form survives until
    /// someone raises MAJOR by hand.
    pub fn bump(&self, now: DateTime<Utc>) -> Result<Self, PipelineError> {
        let (major, minor) = parse_version(&self.version)?;
        let minor = minor
            .checked_add(1)
            .ok_or_else(|| PipelineError::MalformedVersion(self.version.clone()))?;
        Ok(Self {
            version: format!("{}.{:02}", major, minor),
            last_updated: format_timestamp(now),
            deployed_version: self.deployed_version.clone(),
            deployment_history: self.deployment_history.clone(),
            extra: self.extra.clone(),
        })
    }
}

/// Load the record from `path`, falling back to the first-run defaults when
/// the store is missing or unreadable. A fresh checkout has no store, so
/// this path is not an error.
pub fn load(path: &Path, now: DateTime<Utc>) -> VersionRecord {
    if let Ok(content) = fs::read_to_string(path) {
        if let Ok(record) = serde_json::from_str::<VersionRecord>(&content) {
            return record;
        }
    }
    VersionRecord::initial(now)
}

/// Overwrite the store: the record is written to a sibling temp file which
/// is then renamed over `path`, so a crash mid-write cannot leave a
/// truncated store behind.
pub fn persist(path: &Path, record: &VersionRecord) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(record).map_err(io::Error::from)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

fn parse_version(version: &str) -> Result<(u64, u64), PipelineError> {
    let mut parts = version.split('.');
    let (Some(major), Some(minor), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PipelineError::MalformedVersion(version.to_string()));
    };
    let major = major
        .parse()
        .map_err(|_| PipelineError::MalformedVersion(version.to_string()))?;
    let minor = minor
        .parse()
        .map_err(|_| PipelineError::MalformedVersion(version.to_string()))?;
    Ok((major, minor))
}

fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_initial_record_starts_at_1_01() {
        let record = VersionRecord::initial(fixed_now());
        assert_eq!(record.version, "1.01");
        assert_eq!(record.last_updated, "2025-06-01T12:30:00.000000Z");
        assert!(record.deployed_version.is_none());
        assert!(record.deployment_history.is_empty());
    }

    #[test]
    fn test_bump_pads_minor_to_two_digits() {
        let mut record = VersionRecord::initial(fixed_now());
        record.version = "1.04".to_string();
        assert_eq!(record.bump(fixed_now()).unwrap().version, "1.05");

        record.version = "1.09".to_string();
        assert_eq!(record.bump(fixed_now()).unwrap().version, "1.10");

        record.version = "2.00".to_string();
        assert_eq!(record.bump(fixed_now()).unwrap().version, "2.01");
    }

    #[test]
    fn test_bump_never_rolls_minor_into_major() {
        let mut record = VersionRecord::initial(fixed_now());
        record.version = "1.99".to_string();
        assert_eq!(record.bump(fixed_now()).unwrap().version, "1.100");

        record.version = "1.100".to_string();
        assert_eq!(record.bump(fixed_now()).unwrap().version, "1.101");
    }

    #[test]
    fn test_bump_twice_advances_two_minors() {
        let record = VersionRecord::initial(fixed_now());
        let twice = record
            .bump(fixed_now())
            .unwrap()
            .bump(fixed_now())
            .unwrap();
        assert_eq!(twice.version, "1.03");
    }

    #[test]
    fn test_bump_keeps_deployment_fields() {
        let mut record = VersionRecord::initial(fixed_now());
        record.deployed_version = Some("1.03".to_string());
        record.deployment_history = vec![serde_json::json!({"version": "1.03"})];
        let bumped = record.bump(fixed_now()).unwrap();
        assert_eq!(bumped.deployed_version.as_deref(), Some("1.03"));
        assert_eq!(bumped.deployment_history.len(), 1);
    }

    #[test]
    fn test_bump_rejects_malformed_versions() {
        for bad in ["1", "1.2.3", "a.b", "1.", ".02", "", "1.-2", "1. 2"] {
            let mut record = VersionRecord::initial(fixed_now());
            record.version = bad.to_string();
            let err = record.bump(fixed_now()).unwrap_err();
            assert!(
                matches!(err, PipelineError::MalformedVersion(_)),
                "expected MalformedVersion for {bad:?}"
            );
        }
    }

    #[test]
    fn test_bump_rejects_minor_overflow() {
        let mut record = VersionRecord::initial(fixed_now());
        record.version = format!("1.{}", u64::MAX);
        let err = record.bump(fixed_now()).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedVersion(_)));
    }

    #[test]
    fn test_load_missing_store_returns_initial_record() {
        let dir = TempDir::new().unwrap();
        let record = load(&dir.path().join("version.json"), fixed_now());
        assert_eq!(record.version, "1.01");
        assert!(record.deployed_version.is_none());
    }

    #[test]
    fn test_load_unreadable_store_returns_initial_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load(&path, fixed_now()).version, "1.01");
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.json");

        let mut record = VersionRecord::initial(fixed_now());
        record.version = "3.07".to_string();
        record.deployed_version = Some("3.05".to_string());
        persist(&path, &record).unwrap();

        let loaded = load(&path, fixed_now());
        assert_eq!(loaded.version, "3.07");
        assert_eq!(loaded.deployed_version.as_deref(), Some("3.05"));
        // The rename leaves no temp file next to the store.
        assert!(!dir.path().join("version.json.tmp").exists());
    }

    #[test]
    fn test_persist_overwrites_previous_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.json");

        let record = VersionRecord::initial(fixed_now());
        persist(&path, &record).unwrap();
        let bumped = record.bump(fixed_now()).unwrap();
        persist(&path, &bumped).unwrap();

        assert_eq!(load(&path, fixed_now()).version, "1.02");
    }

    #[test]
    fn test_load_tolerates_missing_deployment_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.json");
        fs::write(
            &path,
            r#"{"version": "1.08", "last_updated": "2025-01-01T00:00:00.000000Z"}"#,
        )
        .unwrap();
        let record = load(&path, fixed_now());
        assert_eq!(record.version, "1.08");
        assert!(record.deployment_history.is_empty());
    }

    #[test]
    fn test_foreign_store_keys_survive_a_bump() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.json");
        fs::write(
            &path,
            r#"{"version": "1.05", "last_updated": "2025-01-01T00:00:00.000000Z", "release_notes": "pending"}"#,
        )
        .unwrap();

        let bumped = load(&path, fixed_now()).bump(fixed_now()).unwrap();
        persist(&path, &bumped).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], "1.06");
        assert_eq!(raw["release_notes"], "pending");
    }
}
