//! Adapter Registry Tests

use super::fixtures::{ConsoleLogger, Counter, FileLogger, Logger};
use bricks_domain::{ContentHasher, Sha256ContentHasher, Tag};
use bricks_infrastructure::adapter;
use bricks_infrastructure::di::{Adapter, Registry, container, port};
use std::sync::Arc;

/// Hasher that maps every input to the same digest
struct ConstantHasher;

impl ContentHasher for ConstantHasher {
    fn digest(&self, _input: &str) -> String {
        "0000000000000000".to_string()
    }
}

/// Hasher that collides on closure sources and hashes everything else
struct ClosureCollidingHasher(Sha256ContentHasher);

impl ContentHasher for ClosureCollidingHasher {
    fn digest(&self, input: &str) -> String {
        if input.starts_with("|| ") {
            return "1111111111111111".to_string();
        }
        self.0.digest(input)
    }
}

fn colliding_loggers(
    hasher: Arc<dyn ContentHasher>,
) -> (Arc<Registry>, Adapter<dyn Logger>, Adapter<dyn Logger>) {
    let registry = Arc::new(Registry::with_hasher(hasher));
    let console = Adapter::<dyn Logger>::new(&registry, "|| console()", || {
        Arc::new(ConsoleLogger) as Arc<dyn Logger>
    })
    .unwrap();
    let file = Adapter::<dyn Logger>::new(&registry, "|| file()", || {
        Arc::new(FileLogger) as Arc<dyn Logger>
    })
    .unwrap();
    (registry, console, file)
}

#[test]
fn test_same_source_yields_shared_adapter() {
    let registry = Arc::new(Registry::new());
    let first = Adapter::<dyn Logger>::new(&registry, "|| console()", || {
        Arc::new(ConsoleLogger) as Arc<dyn Logger>
    })
    .unwrap();
    let second = Adapter::<dyn Logger>::new(&registry, "|| console()", || {
        Arc::new(FileLogger) as Arc<dyn Logger>
    })
    .unwrap();

    assert!(first.is_same(&second));
    assert_eq!(first.id(), second.id());
    assert_eq!(registry.snapshot().adapters.len(), 1);
}

#[test]
fn test_first_registered_factory_wins_on_dedup() {
    let registry = Arc::new(Registry::new());
    let logger = port::<dyn Logger>(&registry).unwrap();
    Adapter::<dyn Logger>::new(&registry, "|| make()", || {
        Arc::new(ConsoleLogger) as Arc<dyn Logger>
    })
    .unwrap();
    let reused = Adapter::<dyn Logger>::new(&registry, "|| make()", || {
        Arc::new(FileLogger) as Arc<dyn Logger>
    })
    .unwrap();

    let resolved = container(&registry)
        .bind(&logger, &reused)
        .get(&logger)
        .unwrap();
    assert_eq!(resolved.log("x"), "console: x");
}

#[test]
fn test_macro_captures_closure_source() {
    let registry = Arc::new(Registry::new());
    let console = adapter!(&registry, || Arc::new(ConsoleLogger) as Arc<dyn Logger>).unwrap();

    assert_eq!(console.tag(), Tag::Adapter);
    assert!(console.source().contains("ConsoleLogger"));
    assert!(console.id().as_str().starts_with("adapter:"));
}

#[test]
fn test_different_sources_yield_different_adapters() {
    let registry = Arc::new(Registry::new());
    let console = adapter!(&registry, || Arc::new(ConsoleLogger) as Arc<dyn Logger>).unwrap();
    let file = adapter!(&registry, || Arc::new(FileLogger) as Arc<dyn Logger>).unwrap();

    assert!(!console.is_same(&file));
    assert_ne!(console.id(), file.id());
}

#[test]
fn test_hash_collision_keeps_adapters_apart() {
    let (registry, console, file) = colliding_loggers(Arc::new(ConstantHasher));

    assert!(!console.is_same(&file));
    assert_eq!(console.source(), "|| console()");
    assert_eq!(file.source(), "|| file()");
    assert_eq!(registry.snapshot().adapters.len(), 2);
}

#[test]
fn test_colliding_adapters_resolve_to_their_own_instances() {
    let hasher = Arc::new(ClosureCollidingHasher(Sha256ContentHasher::new()));
    let (registry, console, file) = colliding_loggers(hasher);
    let logger = port::<dyn Logger>(&registry).unwrap();
    assert_eq!(console.id(), file.id());

    let with_console = container(&registry).bind(&logger, &console);
    let with_file = container(&registry).bind(&logger, &file);
    assert_eq!(with_console.definition_hash(), with_file.definition_hash());

    assert_eq!(with_console.get(&logger).unwrap().log("x"), "console: x");
    assert_eq!(with_file.get(&logger).unwrap().log("x"), "file: x");
    assert_eq!(with_console.get(&logger).unwrap().log("y"), "console: y");
    assert_eq!(registry.snapshot().definitions.len(), 1);
}

#[test]
fn test_colliding_definitions_keep_separate_caches() {
    let hasher = Arc::new(ClosureCollidingHasher(Sha256ContentHasher::new()));
    let (registry, console, file) = colliding_loggers(hasher);
    let logger = port::<dyn Logger>(&registry).unwrap();

    let first = container(&registry).bind(&logger, &console);
    let twin = container(&registry).bind(&logger, &console);
    let other = container(&registry).bind(&logger, &file);

    let shared = first.get(&logger).unwrap();
    assert!(Arc::ptr_eq(&shared, &twin.get(&logger).unwrap()));
    assert!(!Arc::ptr_eq(&shared, &other.get(&logger).unwrap()));
    assert_eq!(other.get(&logger).unwrap().log("x"), "file: x");
    assert!(other.describe().instances.contains(logger.id()));
}

#[test]
fn test_adapter_factory_runs_once_per_definition() {
    let registry = Arc::new(Registry::new());
    let counter = Arc::new(Counter::default());
    let factory_counter = Arc::clone(&counter);
    let logger = port::<dyn Logger>(&registry).unwrap();
    let console = Adapter::<dyn Logger>::new(&registry, "counted console", move || {
        factory_counter.bump();
        Arc::new(ConsoleLogger) as Arc<dyn Logger>
    })
    .unwrap();

    let app = container(&registry).bind(&logger, &console);
    let first = app.get(&logger).unwrap();
    let second = app.get(&logger).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(counter.get(), 1);
}
