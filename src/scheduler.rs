//! Worklist of root schemas awaiting emission, always drained smallest identifier first.
//!
//! Every identifier that ever enters the scheduler is remembered, so a second
//! declaration under the same name (two nesting paths synthesizing the same name, or
//! a synthesized name shadowing an original one) is rejected instead of silently
//! emitted twice.
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{GenError, Result};
use crate::schema::Schema;

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: BTreeMap<String, Schema>,
    scheduled: BTreeSet<String>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-insert the document's root schemas. Input order does not matter.
    pub fn seed(&mut self, schemas: impl IntoIterator<Item = Schema>) -> Result<()> {
        for schema in schemas {
            self.enqueue(schema)?;
        }
        Ok(())
    }

    pub fn enqueue(&mut self, schema: Schema) -> Result<()> {
        if !self.scheduled.insert(schema.id.clone()) {
            return Err(GenError::DuplicateDeclaration { id: schema.id });
        }
        tracing::trace!(id = %schema.id, "scheduled");
        self.pending.insert(schema.id.clone(), schema);
        Ok(())
    }

    /// Remove and return the pending schema with the smallest identifier.
    pub fn pop_min(&mut self) -> Option<Schema> {
        self.pending.pop_first().map(|(_, schema)| schema)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
