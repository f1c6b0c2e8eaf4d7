use super::*;
use crate::test_support::ScriptedRunner;
use crate::ui::Reporter;
use std::sync::Arc;

fn executor() -> Executor {
    Executor::new(Arc::new(ScriptedRunner::new()), Reporter::quiet(), false)
}

#[test]
fn defaults_are_registered_in_order() {
    let registry = BackendRegistry::default();

    assert_eq!(
        registry.registered_backends(),
        vec!["apt", "snap", "pip2", "pip3", "pacman", "git-repos"]
    );
}

#[test]
fn created_managers_keep_names_and_order() {
    let registry = BackendRegistry::default();
    let managers = registry.create_managers(&Settings::default(), &executor());

    let names: Vec<_> = managers.iter().map(|m| m.name()).collect();
    assert_eq!(names, registry.registered_backends());
}

#[test]
fn disabled_backends_are_not_created() {
    let registry = BackendRegistry::default();
    let settings = Settings {
        disabled: vec!["snap".to_string(), "git-repos".to_string()],
        ..Settings::default()
    };

    let names: Vec<_> = registry
        .create_managers(&settings, &executor())
        .iter()
        .map(|m| m.name())
        .collect();
    assert_eq!(names, vec!["apt", "pip2", "pip3", "pacman"]);
}

#[test]
fn re_registering_keeps_position() {
    let mut registry = BackendRegistry::default();
    registry.register("snap", |_settings, executor| {
        Box::new(crate::packages::pacman::PacmanManager::new(executor.clone()))
    });

    assert!(registry.has_backend("snap"));
    assert_eq!(registry.registered_backends()[1], "snap");
    assert_eq!(registry.registered_backends().len(), 6);
}
