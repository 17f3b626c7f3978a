//! Diagnostic observer for field mutations.
//!
//! A [`FormCollector`](crate::collector::FormCollector) can be built with an
//! observer that receives the post-mutation state of every field a mutation
//! touches. With no observer installed the collector behaves identically;
//! observers must not influence control flow.

use crate::field::Field;

/// Receives the post-mutation state of each field a mutation touches.
pub trait FieldObserver {
    /// Called once after every successful mutation, with the affected field.
    fn field_mutated(&self, field: &Field);
}

/// Observer that emits one `log::debug!` line per mutation with the field's
/// JSON-serialized state.
#[derive(Debug, Default)]
pub struct LogObserver;

impl FieldObserver for LogObserver {
    fn field_mutated(&self, field: &Field) {
        match serde_json::to_string(field) {
            Ok(json) => log::debug!("field mutated: {}", json),
            Err(e) => log::debug!("field mutated: {} (unserializable: {})", field.name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;
    use std::cell::Cell;

    struct CountingObserver {
        calls: Cell<usize>,
    }

    impl FieldObserver for CountingObserver {
        fn field_mutated(&self, _field: &Field) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn test_log_observer_does_not_panic() {
        let _ = env_logger::builder().is_test(true).try_init();
        let field = Field::new("size", FieldType::Select);
        LogObserver.field_mutated(&field);
    }

    #[test]
    fn test_observer_trait_is_object_safe() {
        let observer = CountingObserver { calls: Cell::new(0) };
        let boxed: Box<dyn FieldObserver> = Box::new(observer);
        boxed.field_mutated(&Field::new("size", FieldType::Select));
    }
}
