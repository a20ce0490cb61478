//! Loads every profile document in a directory through the algorithm codec.
//!
//! A document is accepted only if it parses completely. Documents naming an
//! unregistered algorithm, or carrying a non-string `algorithm` field, are
//! rejected as a whole and reported with the parser's error.

use std::{
    io,
    path::{Path, PathBuf},
};

use algorithm::{DocumentError, SymmetricAlgorithm, UserProfile};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::Config;

/// Errors that stop the audit before any document is checked.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to list documents in {}: {source}", .path.display())]
    ListDocuments {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single document was rejected.
#[derive(Debug, Error)]
pub enum DocumentCheckError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// A document that failed to load.
#[derive(Debug)]
pub struct Rejection {
    pub path: PathBuf,
    pub error: DocumentCheckError,
}

/// Outcome of one audit run.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Number of documents that loaded successfully.
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
}

impl AuditReport {
    /// `true` when no document was rejected.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Total number of documents looked at.
    pub fn checked(&self) -> usize {
        self.accepted + self.rejected.len()
    }
}

/// Check every `*.json` file directly inside `cfg.document_dir`.
///
/// Files are visited in path order. With `cfg.fail_fast` the run stops after
/// the first rejection.
///
/// # Errors
///
/// Returns [`AuditError::ListDocuments`] if the directory cannot be read.
/// Per-document failures are collected in the returned [`AuditReport`].
pub async fn run(cfg: &Config) -> Result<AuditReport, AuditError> {
    let dir = Path::new(&cfg.document_dir);
    let paths = list_documents(dir).await?;
    info!(dir = %dir.display(), documents = paths.len(), "auditing profile documents");

    let mut report = AuditReport::default();
    for path in paths {
        match check_document(&path).await {
            Ok(profile) => {
                let algorithms: Vec<&'static str> = profile
                    .algorithms()
                    .into_iter()
                    .map(SymmetricAlgorithm::identifier)
                    .collect();
                info!(
                    path = %path.display(),
                    uid = %profile.uid,
                    keys = profile.public_keys.len(),
                    algorithms = ?algorithms,
                    "document accepted"
                );
                report.accepted += 1;
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "document rejected");
                report.rejected.push(Rejection { path, error });
                if cfg.fail_fast {
                    debug!("fail-fast set; stopping audit");
                    break;
                }
            }
        }
    }

    info!(
        checked = report.checked(),
        accepted = report.accepted,
        rejected = report.rejected.len(),
        "audit finished"
    );
    Ok(report)
}

/// Read and parse a single profile document.
pub async fn check_document(path: &Path) -> Result<UserProfile, DocumentCheckError> {
    let raw = fs::read_to_string(path).await?;
    Ok(UserProfile::from_json(&raw)?)
}

async fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, AuditError> {
    let list_err = |source: io::Error| AuditError::ListDocuments {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(list_err)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        // Follows symlinks. A dangling link stays in the list and is rejected
        // when it cannot be read.
        let is_dir = fs::metadata(&path).await.is_ok_and(|meta| meta.is_dir());
        if !is_dir {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"{
        "id": 1,
        "uid": "a1",
        "username": "alice",
        "public_keys": [
            {"algorithm": "ED25519", "signature_key": "s", "exchange_key": "x", "rsa_key": "r"}
        ]
    }"#;

    const UNKNOWN_ALGORITHM: &str = r#"{
        "uid": "b2",
        "username": "bob",
        "public_keys": [
            {"algorithm": "AES256", "signature_key": "s", "exchange_key": "x", "rsa_key": "r"}
        ]
    }"#;

    const NUMERIC_ALGORITHM: &str = r#"{
        "uid": "c3",
        "username": "carol",
        "public_keys": [
            {"algorithm": 0, "signature_key": "s", "exchange_key": "x", "rsa_key": "r"}
        ]
    }"#;

    fn config(dir: &TempDir, fail_fast: bool) -> Config {
        Config {
            document_dir: dir.path().to_string_lossy().into_owned(),
            fail_fast,
            log_level: "info".into(),
        }
    }

    fn write(dir: &TempDir, name: &str, body: &str) {
        std::fs::write(dir.path().join(name), body).unwrap();
    }

    #[tokio::test]
    async fn accepts_valid_documents() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.json", VALID);
        write(&dir, "b.json", VALID);

        let report = run(&config(&dir, false)).await.unwrap();
        assert!(report.is_clean());
        assert_eq!(report.accepted, 2);
        assert_eq!(report.checked(), 2);
    }

    #[tokio::test]
    async fn rejects_unknown_and_non_string_algorithms() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.json", VALID);
        write(&dir, "b.json", UNKNOWN_ALGORITHM);
        write(&dir, "c.json", NUMERIC_ALGORITHM);

        let report = run(&config(&dir, false)).await.unwrap();
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected.len(), 2);
        assert!(report.rejected[0].path.ends_with("b.json"));
        assert!(report.rejected[0].error.to_string().contains("unknown algorithm"));
        assert!(report.rejected[1].path.ends_with("c.json"));
        assert!(report.rejected[1].error.to_string().contains("got number"));
    }

    #[tokio::test]
    async fn fail_fast_stops_at_first_rejection() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.json", UNKNOWN_ALGORITHM);
        write(&dir, "b.json", VALID);
        write(&dir, "c.json", NUMERIC_ALGORITHM);

        let report = run(&config(&dir, true)).await.unwrap();
        assert_eq!(report.checked(), 1);
        assert_eq!(report.accepted, 0);
        assert!(report.rejected[0].path.ends_with("a.json"));
    }

    #[tokio::test]
    async fn ignores_non_json_files_and_subdirectories() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.json", VALID);
        write(&dir, "notes.txt", "not a document");
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let report = run(&config(&dir, false)).await.unwrap();
        assert_eq!(report.checked(), 1);
        assert!(report.is_clean());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn follows_symlinked_documents() {
        let dir = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        std::fs::write(target.path().join("bob.json"), UNKNOWN_ALGORITHM).unwrap();
        std::fs::write(target.path().join("alice.json"), VALID).unwrap();
        std::os::unix::fs::symlink(target.path().join("bob.json"), dir.path().join("b.json"))
            .unwrap();
        std::os::unix::fs::symlink(target.path().join("alice.json"), dir.path().join("a.json"))
            .unwrap();

        let report = run(&config(&dir, false)).await.unwrap();
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected.len(), 1);
        assert!(report.rejected[0].path.ends_with("b.json"));
        assert!(report.rejected[0].error.to_string().contains("unknown algorithm"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn dangling_symlink_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("a.json")).unwrap();

        let report = run(&config(&dir, false)).await.unwrap();
        assert_eq!(report.rejected.len(), 1);
        assert!(matches!(report.rejected[0].error, DocumentCheckError::Io(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_directory_is_ignored() {
        let dir = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        write(&dir, "a.json", VALID);
        std::os::unix::fs::symlink(target.path(), dir.path().join("linked.json")).unwrap();

        let report = run(&config(&dir, false)).await.unwrap();
        assert_eq!(report.checked(), 1);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.json", "{\"uid\": ");

        let report = run(&config(&dir, false)).await.unwrap();
        assert_eq!(report.rejected.len(), 1);
        assert!(matches!(
            report.rejected[0].error,
            DocumentCheckError::Document(_)
        ));
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cfg = Config {
            document_dir: dir.path().join("absent").to_string_lossy().into_owned(),
            fail_fast: false,
            log_level: "info".into(),
        };
        assert!(matches!(
            run(&cfg).await,
            Err(AuditError::ListDocuments { .. })
        ));
    }
}
