//! Loading outline overrides from JSON config files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{AlmanacError, Result},
    options::OutlineOverrides,
};

/// File name looked up under the XDG config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Returns `$XDG_CONFIG_HOME/almanac/config.json` (or the first match in
/// `$XDG_CONFIG_DIRS`) if such a file exists.
pub fn default_config_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("almanac").find_config_file(CONFIG_FILE_NAME)
}

/// Reads and parses a partial options file.
///
/// # Errors
///
/// Returns `AlmanacError::FileSystem` if the file cannot be read and
/// `AlmanacError::Serialization` if it is not a valid options object.
pub fn load_overrides(path: &Path) -> Result<OutlineOverrides> {
    debug!("Loading outline options from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| AlmanacError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_overrides(&content)
}

/// Parses a partial options object from JSON text.
///
/// # Errors
///
/// Returns `AlmanacError::Serialization` on malformed JSON or unknown keys.
pub fn parse_overrides(json: &str) -> Result<OutlineOverrides> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_overrides_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"show_week": false, "initial_indent": 1}}"#).unwrap();

        let overrides = load_overrides(file.path()).unwrap();
        assert_eq!(overrides.show_week, Some(false));
        assert_eq!(overrides.initial_indent, Some(1));
        assert_eq!(overrides.show_quarter, None);
    }

    #[test]
    fn test_load_overrides_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_overrides(&path).unwrap_err();
        assert!(matches!(err, AlmanacError::FileSystem { path: p, .. } if p == path));
    }

    #[test]
    fn test_parse_overrides_rejects_wrong_types() {
        let err = parse_overrides(r#"{"show_week": "no"}"#).unwrap_err();
        assert!(matches!(err, AlmanacError::Serialization { .. }));
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(parse_overrides("{}").unwrap(), OutlineOverrides::default());
    }
}
