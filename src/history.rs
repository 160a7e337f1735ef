//! Append-only record of every call to the log entry point.
//!
//! Created empty on first use, never pruned, grows for the life of the
//! process. Mutated only by [`crate::logger::log`]; everyone else reads
//! through the accessors here.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

/// The argument list of one logging call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CallRecord(Vec<Value>);

impl CallRecord {
    pub fn new(args: Vec<Value>) -> CallRecord {
        CallRecord(args)
    }

    pub fn args(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for CallRecord {
    fn from(args: Vec<Value>) -> CallRecord {
        CallRecord(args)
    }
}

static HISTORY: OnceCell<Mutex<Vec<CallRecord>>> = OnceCell::new();

fn buffer() -> &'static Mutex<Vec<CallRecord>> {
    HISTORY.get_or_init(|| Mutex::new(Vec::new()))
}

pub(crate) fn append(record: CallRecord) {
    buffer().lock().push(record);
}

/// Number of records so far.
pub fn len() -> usize {
    buffer().lock().len()
}

pub fn is_empty() -> bool {
    len() == 0
}

/// Copy of the whole history, oldest first.
pub fn snapshot() -> Vec<CallRecord> {
    buffer().lock().clone()
}

/// Most recent record, if any.
pub fn last() -> Option<CallRecord> {
    buffer().lock().last().cloned()
}

/// The history as a JSON array of argument lists.
pub fn export_json() -> Result<String> {
    serde_json::to_string(&*buffer().lock()).context("serializing log history")
}
