//! Render and error events emitted with the `tracing` feature.
#![cfg(feature = "tracing")]

use sqlexpr::{CompositeExpression, ExprError, ExpressionBuilder, PostgresDialect};
use std::sync::{Arc, Mutex};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Records the target of every event it sees.
#[derive(Clone, Default)]
struct TargetRecorder {
    targets: Arc<Mutex<Vec<String>>>,
}

impl TargetRecorder {
    fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

impl Subscriber for TargetRecorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        self.targets
            .lock()
            .unwrap()
            .push(event.metadata().target().to_string());
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn render_emits_trace_event() {
    let recorder = TargetRecorder::default();
    let sql = tracing::subscriber::with_default(recorder.clone(), || {
        CompositeExpression::and(["a = 1", "b = 2"]).to_sql()
    })
    .unwrap();

    assert_eq!(sql, "(a = 1) AND (b = 2)");
    assert_eq!(recorder.targets(), vec!["sqlexpr.render".to_string()]);
}

#[test]
fn errors_emit_debug_event() {
    let recorder = TargetRecorder::default();
    let err = tracing::subscriber::with_default(recorder.clone(), || {
        let expr = ExpressionBuilder::for_dialect(PostgresDialect::default());
        expr.comparison("age", "BETWEEN", "18").unwrap_err()
    });

    assert!(matches!(err, ExprError::InvalidOperator(_)));
    assert_eq!(recorder.targets(), vec!["sqlexpr.error".to_string()]);
}

#[test]
fn empty_composite_emits_error_event_only() {
    let recorder = TargetRecorder::default();
    tracing::subscriber::with_default(recorder.clone(), || {
        assert!(CompositeExpression::or(Vec::<&str>::new()).to_sql().is_err());
    });

    assert_eq!(recorder.targets(), vec!["sqlexpr.error".to_string()]);
}
