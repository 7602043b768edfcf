//! Hand-written port fakes for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::KeyValueError;
use crate::ports::{Clock, KeyValueStore};

/// Map-backed store with switchable failures.
#[derive(Default)]
pub struct MapStore {
    items: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `set_item` calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueStore for MapStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(KeyValueError::Io("read refused".to_string()));
        }
        Ok(self.raw(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KeyValueError::Io("disk full".to_string()));
        }
        self.put_raw(key, value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), KeyValueError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KeyValueError::Io("disk full".to_string()));
        }
        self.items.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Clock that advances one millisecond per reading.
pub struct StepClock {
    next_millis: Mutex<i64>,
}

impl StepClock {
    /// 2026-10-19T17:03:22Z
    pub const START_MILLIS: i64 = 1_792_429_402_000;

    pub fn new() -> Self {
        Self {
            next_millis: Mutex::new(Self::START_MILLIS),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Local> {
        let mut next = self.next_millis.lock().unwrap();
        let millis = *next;
        *next += 1;
        Utc.timestamp_millis_opt(millis)
            .unwrap()
            .with_timezone(&Local)
    }
}
