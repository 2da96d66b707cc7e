use super::SelectionSet;
use crate::{async_trait, Result};

use serde_json::{Map, Value};
use std::{fmt::Debug, time::Instant};

/// Produces the value of one root field.
#[async_trait]
pub trait Resolve: Debug + Send + Sync + 'static {
    async fn resolve(&self, cx: ResolveContext) -> Result<Value>;
}

/// Everything a resolver learns about the field being executed.
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// Argument values, already coerced by the execution engine.
    pub args: Map<String, Value>,

    /// Sub-fields the caller selected on this field.
    pub selection: SelectionSet,

    /// Store calls made on behalf of this field give up at this instant.
    pub deadline: Option<Instant>,
}

impl ResolveContext {
    pub fn new(args: Map<String, Value>, selection: SelectionSet) -> ResolveContext {
        ResolveContext {
            args,
            selection,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> ResolveContext {
        self.deadline = Some(deadline);
        self
    }
}
