use crate::recording_driver::DriverOp;

use std::sync::{Arc, Mutex};
use sturgeon_core::driver::{
    operation::{GetById, Search},
    Operation,
};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Every search sent so far, oldest first
    pub fn searches(&self) -> Vec<Search> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match &op.operation {
                Operation::Search(search) => Some(search.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every get-by-id sent so far, oldest first
    pub fn gets(&self) -> Vec<GetById> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match &op.operation {
                Operation::GetById(get) => Some(get.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent search
    pub fn last_search(&self) -> Search {
        self.searches().pop().expect("no search was sent")
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    pub fn pop(&self) -> Option<DriverOp> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }
}
