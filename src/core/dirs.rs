use std::path::PathBuf;

use crate::core::error::{NavigatorError, Result};

/// Platform default directory for the dataset file
pub fn get_data_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_default()
                    .join(".local")
                    .join("share")
            }),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::data_dir().unwrap_or_default(),
    };

    Ok(base.join("gradebook-navigator"))
}

/// Resolve the dataset path: explicit flag, then env var, then the default
/// location. Only the existence of some candidate is checked here; open
/// errors are reported by the repository itself.
pub fn resolve_dataset_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Ok(env_path) = std::env::var("GRADEBOOK_DATA") {
        return Ok(PathBuf::from(env_path));
    }
    let default = get_data_directory()?.join("gradebook.json");
    if default.exists() {
        Ok(default)
    } else {
        Err(NavigatorError::DatasetNotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_directory_is_under_app_folder() {
        let dir = get_data_directory().unwrap();
        assert!(dir.to_string_lossy().contains("gradebook-navigator"));
    }

    #[test]
    fn test_explicit_flag_wins() {
        let path = resolve_dataset_path(Some(PathBuf::from("/tmp/custom.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }
}
