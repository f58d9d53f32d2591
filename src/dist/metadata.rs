// Project metadata parsing (package.json)

use crate::dist::error::MetadataError;
use serde::Deserialize;
use std::path::Path;

/// Fields of `package.json` the build cares about
#[derive(Debug, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub version: Option<String>,
}

impl PackageJson {
    /// Parse `package.json` from a file path
    pub fn from_file(path: &Path) -> Result<Self, MetadataError> {
        let content = std::fs::read_to_string(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| MetadataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Read the version identifier from the metadata file at `path`
///
/// A missing, empty or whitespace-only `version` is reported as
/// [`MetadataError::MissingVersion`].
pub fn read_version(path: &Path) -> Result<String, MetadataError> {
    let package = PackageJson::from_file(path)?;

    match package.version {
        Some(version) if !version.trim().is_empty() => {
            tracing::debug!(path = %path.display(), %version, "read package version");
            Ok(version.trim().to_string())
        }
        _ => Err(MetadataError::MissingVersion {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_package(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("package.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn reads_version() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_package(
            tmp.path(),
            r#"{ "name": "vr-equirectangular-viewer", "version": "1.4.2" }"#,
        );
        assert_eq!(read_version(&path).unwrap(), "1.4.2");
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_version(&tmp.path().join("package.json")).unwrap_err();
        assert!(matches!(err, MetadataError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_package(tmp.path(), "{ \"version\": ");
        assert!(matches!(
            read_version(&path),
            Err(MetadataError::Parse { .. })
        ));
    }

    #[test]
    fn non_string_version_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_package(tmp.path(), r#"{ "version": 3 }"#);
        assert!(matches!(
            read_version(&path),
            Err(MetadataError::Parse { .. })
        ));
    }

    #[test]
    fn absent_or_blank_version_is_missing() {
        let tmp = tempfile::tempdir().unwrap();

        let path = write_package(tmp.path(), r#"{ "name": "viewer" }"#);
        assert!(matches!(
            read_version(&path),
            Err(MetadataError::MissingVersion { .. })
        ));

        let path = write_package(tmp.path(), r#"{ "version": "  " }"#);
        assert!(matches!(
            read_version(&path),
            Err(MetadataError::MissingVersion { .. })
        ));
    }
}
