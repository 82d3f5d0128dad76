//! Service Tests

use super::fixtures::{ConsoleLogger, Greeter, Logger};
use bricks_domain::{Category, Tag};
use bricks_infrastructure::di::{Dependencies, DependencySpec, Registry, Service, port};
use bricks_infrastructure::{adapter, container, service};
use std::sync::Arc;

fn greeter_factory(deps: &Dependencies) -> bricks_domain::Result<Arc<Greeter>> {
    Ok(Arc::new(Greeter {
        logger: deps.get::<dyn Logger>("logger")?,
    }))
}

#[test]
fn test_service_identity_depends_on_keys_and_source() {
    let registry = Arc::new(Registry::new());
    let logger = port::<dyn Logger>(&registry).unwrap();
    let other = port::<dyn Logger>(&registry).unwrap();

    let first = Service::new(
        &registry,
        DependencySpec::new().port("logger", &logger),
        "greeter_factory",
        greeter_factory,
    )
    .unwrap();
    // Same keys and source, different port behind the key
    let same = Service::new(
        &registry,
        DependencySpec::new().port("logger", &other),
        "greeter_factory",
        greeter_factory,
    )
    .unwrap();
    let renamed = Service::new(
        &registry,
        DependencySpec::new().port("log", &logger),
        "greeter_factory",
        greeter_factory,
    )
    .unwrap();

    assert_eq!(first.id(), same.id());
    assert_ne!(first.id(), renamed.id());
    assert_eq!(first.tag(), Tag::Service);
    assert_eq!(first.category(), Category::Function);
}

#[test]
fn test_service_records_dependencies_as_children() {
    let registry = Arc::new(Registry::new());
    let logger = port::<dyn Logger>(&registry).unwrap();
    let greeter = Service::new(
        &registry,
        DependencySpec::new().port("logger", &logger),
        "greeter_factory",
        greeter_factory,
    )
    .unwrap();

    assert_eq!(greeter.info().children_ids, vec![logger.id().clone()]);
    let tree = greeter.tree().unwrap();
    assert_eq!(tree.node_count(), 2);
    assert!(tree.to_string().contains(logger.id().as_str()));
}

#[test]
fn test_dependency_spec_keeps_declaration_order() {
    let registry = Arc::new(Registry::new());
    let logger = port::<dyn Logger>(&registry).unwrap();
    let audit = port::<dyn Logger>(&registry).unwrap();
    let spec = DependencySpec::new()
        .port("logger", &logger)
        .port("audit", &audit)
        .port("logger", &audit);

    assert_eq!(spec.keys().collect::<Vec<_>>(), vec!["logger", "audit"]);
    assert_eq!(spec.get("logger").unwrap().id(), audit.id());
    assert_eq!(spec.len(), 2);
}

#[test]
fn test_macro_builds_a_resolvable_service() {
    let registry = Arc::new(Registry::new());
    let logger = port::<dyn Logger>(&registry).unwrap();
    let console = adapter!(&registry, || Arc::new(ConsoleLogger) as Arc<dyn Logger>).unwrap();
    let greeter = service!(
        &registry,
        DependencySpec::new().port("logger", &logger),
        |deps: &Dependencies| Ok(Arc::new(Greeter {
            logger: deps.get::<dyn Logger>("logger")?
        }))
    )
    .unwrap();

    let app = container(&registry).bind(&logger, &console).add(&greeter);
    assert_eq!(app.get(&greeter).unwrap().greet("ada"), "console: hello ada");
}

#[test]
fn test_service_is_injectable_not_traceable() {
    let registry = Arc::new(Registry::new());
    let greeter = Service::new(
        &registry,
        DependencySpec::new(),
        "|| standalone",
        |_: &Dependencies| Ok(Arc::new(0_u32)),
    )
    .unwrap();

    assert!(greeter.info().injectable);
    assert_eq!(greeter.injectable().unwrap(), greeter.id());
    assert_eq!(
        greeter.traceable().unwrap_err().key(),
        "component.capability_unavailable"
    );
}
