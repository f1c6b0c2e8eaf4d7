use crate::error::{Result, UpdateError};
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.kdl";

/// Where the git-repo-farm looks for cloned repositories unless configured
pub const DEFAULT_REPO_DIR: &str = "~/aur";

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| UpdateError::Other("Could not determine user home directory".to_string()))?;

    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| UpdateError::Other(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from("org", "omniupdate", "omniupdate")
        .ok_or_else(|| UpdateError::Other("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Default repository farm location, falling back to the literal path when
/// no home directory can be determined.
pub fn default_repo_dir() -> PathBuf {
    expand_home(Path::new(DEFAULT_REPO_DIR)).unwrap_or_else(|_| PathBuf::from(DEFAULT_REPO_DIR))
}
