use crate::error::{Result, UpdateError};

/// Contract every package manager backend satisfies.
///
/// Listing is always unprivileged and side-effect free; refreshing and
/// upgrading may run privileged commands.
pub trait PackageManager: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether the tool(s) this backend drives are present on the host
    fn is_available(&self) -> bool;

    /// Bring the tool's local index up to date (e.g. apt update, pacman -Sy)
    /// Default: the tool has no separate refresh step
    fn refresh_metadata(&self) -> Result<()> {
        Err(UpdateError::Unsupported {
            backend: self.name().to_string(),
            operation: "metadata refresh",
        })
    }

    /// Enumerate upgradable packages, failing if the listing could not run
    fn query_updatable(&self) -> Result<Vec<String>>;

    /// Enumerate upgradable packages; a failed listing means nothing to report
    fn list_updatable(&self) -> Vec<String> {
        self.query_updatable().unwrap_or_default()
    }

    /// Perform the upgrade
    fn apply_upgrade(&self) -> Result<()>;
}
