use serde_json::{Map, Value};
use std::time::{Duration, Instant};
use sturgeon_core::schema::SelectionSet;

/// One root field to execute, as handed over by the execution engine.
#[derive(Debug, Clone, Default)]
pub struct FieldRequest {
    /// Root field name, e.g. `es_index_by_id`
    pub field: String,

    /// Coerced argument values
    pub args: Map<String, Value>,

    /// Sub-fields selected on the root field
    pub selection: SelectionSet,

    /// Store calls give up at this instant
    pub deadline: Option<Instant>,
}

impl FieldRequest {
    pub fn new(field: impl Into<String>) -> FieldRequest {
        FieldRequest {
            field: field.into(),
            ..FieldRequest::default()
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> FieldRequest {
        self.args.insert(name.into(), value.into());
        self
    }

    pub fn args(mut self, args: Map<String, Value>) -> FieldRequest {
        self.args = args;
        self
    }

    pub fn select(mut self, selection: SelectionSet) -> FieldRequest {
        self.selection = selection;
        self
    }

    pub fn deadline(mut self, deadline: Instant) -> FieldRequest {
        self.deadline = Some(deadline);
        self
    }

    pub fn timeout(self, timeout: Duration) -> FieldRequest {
        self.deadline(Instant::now() + timeout)
    }
}
