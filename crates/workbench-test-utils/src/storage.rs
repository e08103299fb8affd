//! Preferences store with a write log.

use std::sync::Arc;

use parking_lot::Mutex;
use workbench_layout::{MemoryStorage, Storage, StorageError, StorageResult, StorageScope};

#[derive(Debug, Default)]
struct StorageRecord {
    values: MemoryStorage,
    writes: Vec<(String, f32)>,
    reject_writes: bool,
}

/// [`MemoryStorage`] behind a shared handle, logging every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingStorage {
    inner: Arc<Mutex<StorageRecord>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value as if persisted by an earlier session.
    pub fn seed(&self, key: &str, scope: StorageScope, value: f32) {
        let mut record = self.inner.lock();
        let values = std::mem::take(&mut record.values);
        record.values = values.with_number(key, scope, value);
    }

    /// Make every subsequent write fail.
    pub fn reject_writes(&self, reject: bool) {
        self.inner.lock().reject_writes = reject;
    }

    pub fn get(&self, key: &str, scope: StorageScope) -> Option<f32> {
        let value = self.inner.lock().values.get_number(key, scope, f32::NAN);
        (!value.is_nan()).then_some(value)
    }

    /// Every accepted write, in order.
    pub fn writes(&self) -> Vec<(String, f32)> {
        self.inner.lock().writes.clone()
    }

    /// The most recent accepted write to `key`.
    pub fn last_write(&self, key: &str) -> Option<f32> {
        self.inner
            .lock()
            .writes
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn clear_writes(&self) {
        self.inner.lock().writes.clear();
    }
}

impl Storage for RecordingStorage {
    fn get_number(&self, key: &str, scope: StorageScope, default: f32) -> f32 {
        self.inner.lock().values.get_number(key, scope, default)
    }

    fn set_number(&mut self, key: &str, scope: StorageScope, value: f32) -> StorageResult<()> {
        let mut record = self.inner.lock();
        if record.reject_writes {
            return Err(StorageError::Rejected {
                key: key.to_string(),
            });
        }
        record.values.set_number(key, scope, value)?;
        record.writes.push((key.to_string(), value));
        Ok(())
    }
}
