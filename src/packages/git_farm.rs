//! Git repository farm
//!
//! Treats every git repository below a base directory (typically a folder
//! of AUR clones) as a package. A repository is outdated when its upstream
//! tracking branch has commits the local branch does not, and upgrading it
//! means fast-forwarding and running the configured build command inside it.

use crate::core::executor::Executor;
use crate::core::types::CommandSpec;
use crate::error::{Result, UpdateError};
use crate::packages::traits::PackageManager;
use std::fs;
use std::path::{Path, PathBuf};

pub const NAME: &str = "git-repos";

const ITEM_LEVEL: usize = 2;

pub struct GitFarmManager {
    executor: Executor,
    base_dir: PathBuf,
    build_command: Vec<String>,
}

impl GitFarmManager {
    pub fn new(executor: Executor, base_dir: PathBuf, build_command: Vec<String>) -> Self {
        Self {
            executor,
            base_dir,
            build_command,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Every repository below the base directory, sorted by path.
    ///
    /// Walks with an explicit stack. A directory classified as a repository
    /// is a leaf and is never descended into; hidden directories and
    /// symlinks are not followed.
    pub fn repositories(&self) -> Vec<PathBuf> {
        let mut pending = vec![self.base_dir.clone()];
        let mut repositories = Vec::new();

        while let Some(dir) = pending.pop() {
            if self.is_repository(&dir) {
                repositories.push(dir);
                continue;
            }

            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    self.executor.reporter().warning(
                        &format!("Cannot read {}: {}", dir.display(), e),
                        ITEM_LEVEL,
                    );
                    continue;
                }
            };

            pending.extend(
                entries
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
                    .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
                    .map(|entry| entry.path()),
            );
        }

        repositories.sort();
        repositories
    }

    /// A directory is a repository when git can name what is checked out:
    /// a branch, or failing that a tag/commit description.
    fn is_repository(&self, dir: &Path) -> bool {
        self.checkout_label(dir).is_some()
    }

    fn checkout_label(&self, dir: &Path) -> Option<String> {
        self.executor
            .probe(&git(["symbolic-ref", "--short", "-q", "HEAD"]), Some(dir))
            .filter(|label| !label.is_empty())
            .or_else(|| {
                self.executor
                    .probe(&git(["describe", "--all", "--always"]), Some(dir))
                    .filter(|label| !label.is_empty())
            })
    }

    /// Commits reachable from the upstream branch but not from HEAD.
    /// `None` when the upstream cannot be determined or counted.
    fn upstream_only_commits(&self, repo: &Path) -> Option<u64> {
        let reporter = self.executor.reporter();
        let label = repository_name(repo);

        let upstream = self
            .executor
            .probe(
                &git(["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"]),
                Some(repo),
            )
            .filter(|upstream| !upstream.is_empty());
        let Some(upstream) = upstream else {
            reporter.warning(
                &format!("{}: no upstream branch, treating as up to date", label),
                ITEM_LEVEL,
            );
            return None;
        };

        let range = format!("HEAD..{}", upstream);
        let count = self
            .executor
            .capture(&git(["rev-list", "--count", range.as_str()]), Some(repo))
            .ok()?;

        match count.trim().parse::<u64>() {
            Ok(count) => Some(count),
            Err(_) => {
                reporter.warning(
                    &format!("{}: unexpected rev-list output '{}'", label, count.trim()),
                    ITEM_LEVEL,
                );
                None
            }
        }
    }

    fn is_outdated(&self, repo: &Path) -> bool {
        self.upstream_only_commits(repo).is_some_and(|count| count > 0)
    }

    fn outdated_repositories(&self) -> Vec<PathBuf> {
        self.repositories()
            .into_iter()
            .filter(|repo| self.is_outdated(repo))
            .collect()
    }

    fn upgrade_repository(&self, repo: &Path) -> Result<()> {
        self.executor
            .stream(&git(["pull", "--ff-only"]), Some(repo))?;

        let build = CommandSpec::from_tokens(&self.build_command)
            .ok_or_else(|| UpdateError::ConfigError("build command is empty".to_string()))?;
        self.executor.stream(&build, Some(repo))
    }
}

impl PackageManager for GitFarmManager {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        let Some(build_tool) = self.build_command.first() else {
            return false;
        };

        self.base_dir.is_dir()
            && self.executor.is_available("git")
            && self.executor.is_available(build_tool)
    }

    /// Fetch every repository. A repository that fails to fetch is reported
    /// and compared against its last known upstream.
    fn refresh_metadata(&self) -> Result<()> {
        for repo in self.repositories() {
            if self
                .executor
                .capture(&git(["fetch", "--quiet"]), Some(&repo))
                .is_err()
            {
                self.executor.reporter().warning(
                    &format!("{}: fetch failed", repository_name(&repo)),
                    ITEM_LEVEL,
                );
            }
        }
        Ok(())
    }

    fn query_updatable(&self) -> Result<Vec<String>> {
        Ok(self
            .outdated_repositories()
            .iter()
            .map(|repo| repository_name(repo))
            .collect())
    }

    fn apply_upgrade(&self) -> Result<()> {
        let reporter = self.executor.reporter();
        let mut failed = Vec::new();

        for repo in self.outdated_repositories() {
            let name = repository_name(&repo);
            reporter.info(&format!("Building {}", name), ITEM_LEVEL - 1);

            match self.upgrade_repository(&repo) {
                Ok(()) => reporter.success(&format!("{} rebuilt", name), ITEM_LEVEL),
                Err(e) => {
                    reporter.error(&format!("{}: {}", name, e), ITEM_LEVEL);
                    failed.push(name);
                }
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(UpdateError::UpgradeIncomplete {
                backend: NAME.to_string(),
                failed,
            })
        }
    }
}

fn git<const N: usize>(args: [&str; N]) -> CommandSpec {
    CommandSpec::new("git", args)
}

fn repository_name(repo: &Path) -> String {
    repo.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| repo.display().to_string())
}
