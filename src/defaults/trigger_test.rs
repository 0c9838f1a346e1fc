#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::crd::{EventInterceptor, Param};
use serde_json::json;

fn webhook() -> EventInterceptor {
    EventInterceptor::new("webhook", json!({}))
}

fn cel(filter: &str) -> EventInterceptor {
    EventInterceptor::new("cel", json!({ "filter": filter }))
}

#[test]
fn test_default_kind_fills_unset_kind() {
    let mut binding = EventListenerBinding::named("my-binding");

    default_kind(Some(&mut binding));

    assert_eq!(binding.kind, Some(TriggerBindingKind::TriggerBinding));
    assert_eq!(binding.name, "my-binding");
}

#[test]
fn test_default_kind_keeps_explicit_kind() {
    let mut binding =
        EventListenerBinding::named("my-binding").with_kind(TriggerBindingKind::ClusterTriggerBinding);

    default_kind(Some(&mut binding));

    assert_eq!(binding.kind, Some(TriggerBindingKind::ClusterTriggerBinding));
}

#[test]
fn test_default_kind_absent_is_noop() {
    // Nothing to assert beyond "does not panic"
    default_kind(None);
}

#[test]
fn test_default_binding_kinds_covers_deprecated_and_list() {
    let mut trigger = EventListenerTrigger {
        deprecated_binding: Some(EventListenerBinding::named("old")),
        bindings: vec![
            EventListenerBinding::named("a"),
            EventListenerBinding::named("b").with_kind(TriggerBindingKind::ClusterTriggerBinding),
        ],
        ..Default::default()
    };

    default_binding_kinds(&mut trigger);

    assert_eq!(
        trigger.deprecated_binding.unwrap().kind,
        Some(TriggerBindingKind::TriggerBinding)
    );
    assert_eq!(trigger.bindings[0].kind, Some(TriggerBindingKind::TriggerBinding));
    assert_eq!(
        trigger.bindings[1].kind,
        Some(TriggerBindingKind::ClusterTriggerBinding)
    );
}

#[test]
fn test_migrate_without_upgrade_is_noop() {
    let trigger = EventListenerTrigger {
        deprecated_binding: Some(EventListenerBinding::named("b")),
        deprecated_interceptor: Some(webhook()),
        deprecated_params: vec![Param::string("p", "v")],
        ..Default::default()
    };
    let mut migrated = trigger.clone();

    migrate_trigger(&mut migrated, false);

    assert_eq!(migrated, trigger);
}

#[test]
fn test_migrate_moves_binding_into_empty_bindings() {
    let mut trigger = EventListenerTrigger {
        deprecated_binding: Some(EventListenerBinding::named("my-binding")),
        ..Default::default()
    };

    migrate_trigger(&mut trigger, true);

    assert!(trigger.deprecated_binding.is_none());
    assert_eq!(trigger.bindings, vec![EventListenerBinding::named("my-binding")]);
}

#[test]
fn test_migrate_keeps_populated_bindings() {
    let mut trigger = EventListenerTrigger {
        deprecated_binding: Some(EventListenerBinding::named("b1")),
        bindings: vec![EventListenerBinding::named("b2"), EventListenerBinding::named("b3")],
        ..Default::default()
    };

    migrate_trigger(&mut trigger, true);

    assert_eq!(
        trigger.deprecated_binding,
        Some(EventListenerBinding::named("b1"))
    );
    let names: Vec<_> = trigger.bindings.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["b2", "b3"]);
}

#[test]
fn test_migrate_moves_interceptor_into_empty_interceptors() {
    let mut trigger = EventListenerTrigger {
        deprecated_interceptor: Some(cel("body.action == 'opened'")),
        ..Default::default()
    };

    migrate_trigger(&mut trigger, true);

    assert!(trigger.deprecated_interceptor.is_none());
    assert_eq!(trigger.interceptors, vec![cel("body.action == 'opened'")]);
}

#[test]
fn test_migrate_keeps_populated_interceptors() {
    let mut trigger = EventListenerTrigger {
        deprecated_interceptor: Some(cel("old")),
        interceptors: vec![webhook(), cel("new")],
        ..Default::default()
    };

    migrate_trigger(&mut trigger, true);

    assert_eq!(trigger.deprecated_interceptor, Some(cel("old")));
    assert_eq!(trigger.interceptors, vec![webhook(), cel("new")]);
}

#[test]
fn test_migrate_drops_params() {
    let mut trigger = EventListenerTrigger {
        deprecated_params: vec![
            Param::string("param-name", "static"),
            Param::array("list", ["a", "b"]),
        ],
        ..Default::default()
    };

    migrate_trigger(&mut trigger, true);

    assert!(trigger.deprecated_params.is_empty());
    assert_eq!(trigger, EventListenerTrigger::default());
}

#[test]
fn test_migrate_rules_are_independent() {
    // Bindings already populated must not stop the interceptor and params rules
    let mut trigger = EventListenerTrigger {
        deprecated_binding: Some(EventListenerBinding::named("old")),
        bindings: vec![EventListenerBinding::named("new")],
        deprecated_interceptor: Some(webhook()),
        deprecated_params: vec![Param::string("p", "v")],
        ..Default::default()
    };

    migrate_trigger(&mut trigger, true);

    assert_eq!(trigger.deprecated_binding, Some(EventListenerBinding::named("old")));
    assert_eq!(trigger.bindings, vec![EventListenerBinding::named("new")]);
    assert!(trigger.deprecated_interceptor.is_none());
    assert_eq!(trigger.interceptors, vec![webhook()]);
    assert!(trigger.deprecated_params.is_empty());
}

#[test]
fn test_migrate_leaves_name_and_template() {
    let mut trigger = EventListenerTrigger {
        name: Some("push".to_string()),
        template: crate::crd::EventListenerTemplate {
            name: "pipeline-template".to_string(),
            api_version: Some("v1alpha1".to_string()),
            ..Default::default()
        },
        deprecated_binding: Some(EventListenerBinding::named("b")),
        ..Default::default()
    };

    migrate_trigger(&mut trigger, true);

    assert_eq!(trigger.name.as_deref(), Some("push"));
    assert_eq!(trigger.template.name, "pipeline-template");
    assert_eq!(trigger.template.api_version.as_deref(), Some("v1alpha1"));
}

#[test]
fn test_default_kind_keeps_unrecognised_kind() {
    let mut binding = EventListenerBinding::named("my-binding")
        .with_kind(TriggerBindingKind::Other("NamespacedBinding".to_string()));

    default_kind(Some(&mut binding));

    assert_eq!(
        binding.kind,
        Some(TriggerBindingKind::Other("NamespacedBinding".to_string()))
    );
}
