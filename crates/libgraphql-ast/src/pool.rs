use crate::Document;
use std::ops::Deref;
use std::ops::DerefMut;
use std::sync::Mutex;
use std::sync::MutexGuard;

const DEFAULT_MAX_IDLE: usize = 64;

/// A bounded free list of [`Document`]s.
///
/// [`DocumentPool::get`] hands out a previously released Document when one
/// is idle (its tables truncated, its allocations kept) and a fresh one
/// otherwise. Dropping the returned [`PooledDocument`] resets the Document
/// and gives it back; beyond `max_idle` idle Documents, released ones are
/// dropped instead.
///
/// The pool is `Sync`: independent threads may check Documents out at the
/// same time, but each Document is only ever used by its current holder.
#[derive(Debug)]
pub struct DocumentPool {
    idle: Mutex<Vec<Document>>,
    max_idle: usize,
    node_capacity: usize,
    input_capacity: usize,
}

impl DocumentPool {
    pub fn new() -> Self {
        Self::with_max_idle(DEFAULT_MAX_IDLE)
    }

    pub fn with_max_idle(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
            node_capacity: 0,
            input_capacity: 0,
        }
    }

    /// Capacity hints for Documents the pool has to allocate, see
    /// [`Document::with_capacity`].
    pub fn with_capacity_hint(mut self, nodes: usize, input_bytes: usize) -> Self {
        self.node_capacity = nodes;
        self.input_capacity = input_bytes;
        self
    }

    pub fn get(&self) -> PooledDocument<'_> {
        let doc = self.lock_idle().pop().unwrap_or_else(|| {
            Document::with_capacity(self.node_capacity, self.input_capacity)
        });
        PooledDocument {
            doc: Some(doc),
            pool: self,
        }
    }

    /// Number of Documents currently waiting to be reused.
    pub fn idle_count(&self) -> usize {
        self.lock_idle().len()
    }

    fn release(&self, mut doc: Document) {
        doc.reset();
        let mut idle = self.lock_idle();
        if idle.len() < self.max_idle {
            idle.push(doc);
        }
    }

    // Poisoning is ignored: every Document is reset before it is pushed.
    fn lock_idle(&self) -> MutexGuard<'_, Vec<Document>> {
        self.idle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for DocumentPool {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`Document`] checked out of a [`DocumentPool`]. Returned to the pool
/// on drop.
#[derive(Debug)]
pub struct PooledDocument<'pool> {
    doc: Option<Document>,
    pool: &'pool DocumentPool,
}

impl PooledDocument<'_> {
    /// Takes the Document out of the pool for good.
    pub fn detach(mut self) -> Document {
        self.doc.take().unwrap_or_default()
    }
}

impl Deref for PooledDocument<'_> {
    type Target = Document;

    fn deref(&self) -> &Document {
        // `doc` is only ever `None` after `detach()` or inside `drop()`,
        // both of which consume the guard.
        match &self.doc {
            Some(doc) => doc,
            None => unreachable!("PooledDocument used after release"),
        }
    }
}

impl DerefMut for PooledDocument<'_> {
    fn deref_mut(&mut self) -> &mut Document {
        match &mut self.doc {
            Some(doc) => doc,
            None => unreachable!("PooledDocument used after release"),
        }
    }
}

impl Drop for PooledDocument<'_> {
    fn drop(&mut self) {
        if let Some(doc) = self.doc.take() {
            self.pool.release(doc);
        }
    }
}
