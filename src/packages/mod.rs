//! # Package Manager Implementations
//!
//! One backend per tool family, all behind the `PackageManager` trait:
//!
//! - **apt** (`apt.rs`): Debian/Ubuntu
//! - **snap** (`snap.rs`): Snap store
//! - **pip2 / pip3** (`pip.rs`): Python packages
//! - **pacman** (`pacman.rs`): Arch Linux
//! - **git-repos** (`git_farm.rs`): directory of cloned repositories built locally
//!
//! Listing output is turned into package names by the rules in `parsers.rs`.
//! The `BackendRegistry` fixes which backends exist and in what order they
//! are checked.

pub mod apt;
pub mod git_farm;
pub mod pacman;
pub mod parsers;
pub mod pip;
pub mod registry;
pub mod snap;
pub mod traits;

pub use registry::BackendRegistry;
pub use traits::PackageManager;
