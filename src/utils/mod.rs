pub mod paths;
pub mod platform;
