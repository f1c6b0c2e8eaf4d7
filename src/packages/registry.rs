//! # Package Manager Registry
//!
//! Holds the fixed, ordered list of backends the orchestrator walks. Order
//! is only significant for how results are reported.
//!
//! ## Adding a New Backend
//!
//! 1. Create `src/packages/<backend>.rs` with a Manager struct
//! 2. Implement the `PackageManager` trait
//! 3. Register it in `BackendRegistry::register_defaults()`

use crate::config::settings::Settings;
use crate::core::executor::Executor;
use crate::packages::PackageManager;
use crate::packages::apt::AptManager;
use crate::packages::git_farm::{self, GitFarmManager};
use crate::packages::pacman::PacmanManager;
use crate::packages::pip::PipManager;
use crate::packages::snap::SnapManager;

/// Factory function for creating package manager instances
pub type BackendFactory = Box<dyn Fn(&Settings, &Executor) -> Box<dyn PackageManager> + Send + Sync>;

/// Ordered backend registry
pub struct BackendRegistry {
    factories: Vec<(&'static str, BackendFactory)>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Register a backend. Re-registering a name replaces the factory but
    /// keeps its original position.
    pub fn register<F>(&mut self, name: &'static str, factory: F)
    where
        F: Fn(&Settings, &Executor) -> Box<dyn PackageManager> + Send + Sync + 'static,
    {
        if let Some(slot) = self.factories.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = Box::new(factory);
        } else {
            self.factories.push((name, Box::new(factory)));
        }
    }

    /// Registered backend names, in order
    pub fn registered_backends(&self) -> Vec<&'static str> {
        self.factories.iter().map(|(name, _)| *name).collect()
    }

    pub fn has_backend(&self, name: &str) -> bool {
        self.factories.iter().any(|(existing, _)| *existing == name)
    }

    /// Instantiate every backend not disabled in `settings`
    pub fn create_managers(&self, settings: &Settings, executor: &Executor) -> Vec<Box<dyn PackageManager>> {
        self.factories
            .iter()
            .filter(|(name, _)| !settings.is_disabled(name))
            .map(|(_, factory)| factory(settings, executor))
            .collect()
    }

    /// Register all built-in backends
    pub fn register_defaults(&mut self) {
        self.register("apt", |_settings, executor| {
            Box::new(AptManager::new(executor.clone()))
        });

        self.register("snap", |_settings, executor| {
            Box::new(SnapManager::new(executor.clone()))
        });

        self.register("pip2", |_settings, executor| {
            Box::new(PipManager::pip2(executor.clone()))
        });

        self.register("pip3", |_settings, executor| {
            Box::new(PipManager::pip3(executor.clone()))
        });

        self.register("pacman", |_settings, executor| {
            Box::new(PacmanManager::new(executor.clone()))
        });

        self.register(git_farm::NAME, |settings, executor| {
            Box::new(GitFarmManager::new(
                executor.clone(),
                settings.repo_dir.clone(),
                settings.build_command.clone(),
            ))
        });
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }
}

#[cfg(test)]
mod tests;
