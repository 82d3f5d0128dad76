//! Component envelope tests

use bricks_domain::identity::{Callable, TagRegistry, component};
use bricks_domain::{Category, Error, Metadata, Tag, callable};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span;

fn registry() -> Arc<TagRegistry> {
    Arc::new(TagRegistry::new())
}

#[test]
fn test_identity_is_deterministic_for_identical_sources() {
    let registry = registry();
    let first = component(&registry, Tag::Rule, callable!(|v: Value| v)).unwrap();
    let second = component(&registry, Tag::Rule, callable!(|v: Value| v)).unwrap();

    assert_eq!(first.info().id, second.info().id);
    assert!(Arc::ptr_eq(first.record(), second.record()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_id_has_lowercase_tag_prefix() {
    let registry = registry();
    let money = component(&registry, Tag::Value, json!({"currency": "EUR"})).unwrap();
    assert!(money.id().as_str().starts_with("value:"));
    assert_eq!(money.category(), Category::Object);
    assert_eq!(money.id().hash().len(), 16);
}

#[test]
fn test_same_target_under_two_tags_fails() {
    let registry = registry();
    let target = json!({"kind": "order-placed"});
    component(&registry, Tag::Value, target.clone()).unwrap();

    let error = component(&registry, Tag::Event, target).unwrap_err();
    match error {
        Error::AlreadyRegistered {
            existing, requested, ..
        } => {
            assert_eq!(existing, "Value");
            assert_eq!(requested, "Event");
        }
        other => panic!("Expected AlreadyRegistered, got {other:?}"),
    }
}

#[test]
fn test_invalid_targets_are_rejected() {
    let registry = registry();
    for target in [json!(42), json!("text"), json!([1, 2]), Value::Null, json!(true)] {
        let error = component(&registry, Tag::Value, target).unwrap_err();
        assert_eq!(error.key(), "component.invalid_target");
    }
    assert!(registry.is_empty());
}

#[test]
fn test_meta_is_set_once() {
    let registry = registry();
    let order = component(&registry, Tag::Aggregate, json!({"name": "order"})).unwrap();
    order
        .meta(Metadata::new("Order", "Aggregate root"))
        .meta(Metadata::new("Overwritten", "Should not stick"));

    let meta = order.info().meta.unwrap();
    assert_eq!(meta.name.as_deref(), Some("Order"));
    assert_eq!(meta.description.as_deref(), Some("Aggregate root"));
}

#[test]
fn test_meta_absent_until_written() {
    let registry = registry();
    let order = component(&registry, Tag::Schema, json!({"fields": []})).unwrap();
    assert!(order.info().meta.is_none());
}

#[test]
fn test_plain_capabilities() {
    let registry = registry();
    let rule = component(&registry, Tag::Rule, callable!(|v: Value| json!(v.is_string()))).unwrap();

    rule.traceable().unwrap().sub_type("string-check").unwrap();
    rule.sub_type("ignored").unwrap();

    let info = rule.info();
    assert!(info.traceable);
    assert!(!info.injectable);
    assert_eq!(info.sub_type.as_deref(), Some("string-check"));
    assert_eq!(rule.injectable().unwrap_err().key(), "component.capability_unavailable");
}

#[test]
fn test_injectable_capabilities() {
    let registry = registry();
    let port = component(&registry, Tag::Port, json!({"shape": "Logger"})).unwrap();

    assert_eq!(port.injectable().unwrap(), port.id());
    assert!(port.info().injectable);
    assert!(matches!(
        port.traceable().unwrap_err(),
        Error::CapabilityUnavailable { .. }
    ));
    assert!(port.sub_type("x").is_err());
}

#[test]
fn test_call_function_target() {
    let registry = registry();
    let double = component(
        &registry,
        Tag::Builder,
        Callable::new("double", |v: Value| json!(v.as_i64().unwrap_or(0) * 2)),
    )
    .unwrap();
    assert_eq!(double.call(json!(21)).unwrap(), json!(42));

    double.traceable().unwrap();
    assert_eq!(double.call(json!(5)).unwrap(), json!(10));
}

/// Subscriber keeping the `elapsed_us` field of every event
struct ElapsedRecorder {
    elapsed: Arc<Mutex<Vec<u64>>>,
}

struct ElapsedVisitor(Option<u64>);

impl Visit for ElapsedVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "elapsed_us" {
            self.0 = Some(value);
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

impl tracing::Subscriber for ElapsedRecorder {
    fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        let mut visitor = ElapsedVisitor(None);
        event.record(&mut visitor);
        if let Some(elapsed) = visitor.0 {
            self.elapsed.lock().unwrap().push(elapsed);
        }
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

#[test]
fn test_traced_call_reports_elapsed_time() {
    let registry = registry();
    let double = component(
        &registry,
        Tag::Builder,
        Callable::new("double", |v: Value| json!(v.as_i64().unwrap_or(0) * 2)),
    )
    .unwrap();
    double.traceable().unwrap();

    let elapsed = Arc::new(Mutex::new(Vec::new()));
    let recorder = ElapsedRecorder {
        elapsed: Arc::clone(&elapsed),
    };
    let output = tracing::subscriber::with_default(recorder, || double.call(json!(4)).unwrap());

    assert_eq!(output, json!(8));
    assert_eq!(elapsed.lock().unwrap().len(), 1);
}

#[test]
fn test_call_object_target_fails() {
    let registry = registry();
    let criteria = component(&registry, Tag::Criteria, json!({"where": {"age": 18}})).unwrap();
    assert!(matches!(
        criteria.call(json!({})).unwrap_err(),
        Error::NotCallable { .. }
    ));
}

#[test]
fn test_info_serializes() {
    let registry = registry();
    let event = component(&registry, Tag::Event, json!({"type": "shipped"})).unwrap();
    let value = serde_json::to_value(event.info()).unwrap();
    assert_eq!(value["tag"], "Event");
    assert_eq!(value["category"], "object");
    assert_eq!(value["children_ids"], json!([]));
}
