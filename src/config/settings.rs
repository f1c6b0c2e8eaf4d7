//! Settings Module
//!
//! Run configuration, layered: built-in defaults, then the optional
//! `config.kdl`, then command-line overrides. The file is only ever read.
//!
//! ```kdl
//! repo-dir "~/src/aur"
//! build-command "makepkg -si --noconfirm"
//! disable "snap" "pip2"
//! ```

use crate::error::{Result, UpdateError};
use crate::utils::paths;
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BUILD_COMMAND: &str = "makepkg -si --noconfirm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base directory of the git repository farm
    pub repo_dir: PathBuf,
    /// Build invocation run inside each outdated repository
    pub build_command: Vec<String>,
    /// Backend names to leave out of the run
    pub disabled: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_dir: paths::default_repo_dir(),
            build_command: DEFAULT_BUILD_COMMAND
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            disabled: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, or from the default config file if it
    /// exists. Only an explicitly named file is required to exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(UpdateError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                path.to_path_buf()
            }
            None => {
                let path = paths::config_file()?;
                if !path.is_file() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| UpdateError::IoError {
            path: path.clone(),
            source,
        })?;
        Self::from_kdl(&content)
    }

    /// Parse a settings document on top of the defaults
    pub fn from_kdl(content: &str) -> Result<Self> {
        let doc: KdlDocument = content.parse()?;
        let mut settings = Self::default();

        for node in doc.nodes() {
            match node.name().value() {
                "repo-dir" => {
                    let raw = single_string(node)?;
                    settings.repo_dir = paths::expand_home(Path::new(raw))?;
                }
                "build-command" => {
                    let raw = single_string(node)?;
                    settings.build_command = shlex::split(raw)
                        .filter(|tokens| !tokens.is_empty())
                        .ok_or_else(|| {
                            UpdateError::ConfigError(format!("Invalid build-command: '{}'", raw))
                        })?;
                }
                "disable" => {
                    settings.disabled.extend(
                        node.entries()
                            .iter()
                            .filter_map(|entry| entry.value().as_string())
                            .map(str::to_string),
                    );
                }
                other => {
                    return Err(UpdateError::ConfigError(format!(
                        "Unknown setting: '{}'. Valid settings: repo-dir, build-command, disable",
                        other
                    )));
                }
            }
        }

        Ok(settings)
    }

    /// Apply the `--repo-dir` override
    pub fn with_repo_dir(mut self, repo_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = repo_dir {
            self.repo_dir = dir;
        }
        self
    }

    pub fn is_disabled(&self, backend: &str) -> bool {
        self.disabled.iter().any(|name| name == backend)
    }
}

fn single_string(node: &KdlNode) -> Result<&str> {
    let name = node.name().value();
    match node.entries() {
        [entry] => entry.value().as_string().ok_or_else(|| {
            UpdateError::ConfigError(format!("'{}' expects a string value", name))
        }),
        _ => Err(UpdateError::ConfigError(format!(
            "'{}' expects exactly one value",
            name
        ))),
    }
}
