//! Tracer collaborator for traceable components

use crate::constants::TRACE_TARGET;
use crate::identity::record::ComponentRecord;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info_span};

/// Run `call` inside a `component.call` span for `record`
pub fn traced<F>(record: &ComponentRecord, call: F) -> Value
where
    F: FnOnce() -> Value,
{
    let span = info_span!(
        target: TRACE_TARGET,
        "component.call",
        id = %record.id(),
        tag = %record.tag()
    );
    let _entered = span.enter();
    let started = Instant::now();
    let output = call();
    debug!(
        target: TRACE_TARGET,
        elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        "Component call finished"
    );
    output
}
