//! Shared ports and implementations for container tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub trait Logger: Send + Sync {
    fn log(&self, message: &str) -> String;
}

pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) -> String {
        format!("console: {message}")
    }
}

pub struct FileLogger;

impl Logger for FileLogger {
    fn log(&self, message: &str) -> String {
        format!("file: {message}")
    }
}

pub struct Greeter {
    pub logger: Arc<dyn Logger>,
}

impl Greeter {
    pub fn greet(&self, name: &str) -> String {
        self.logger.log(&format!("hello {name}"))
    }
}

/// Counts how often a factory ran
#[derive(Default)]
pub struct Counter(AtomicUsize);

impl Counter {
    pub fn bump(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
