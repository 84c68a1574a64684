use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::{budget::RawRow, errors::Result};

use super::RowSource;

#[derive(Debug, Clone)]
struct CachedRows {
    loaded_at: DateTime<Utc>,
    rows: Arc<Vec<RawRow>>,
}

/// Time-boxed memoization of a row source.
///
/// The caller supplies the clock on every call; the cache never reads the
/// system time itself.
#[derive(Debug)]
pub struct SnapshotCache<S> {
    source: S,
    ttl: Duration,
    entry: Option<CachedRows>,
}

impl<S: RowSource> SnapshotCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|entry| entry.loaded_at)
    }

    /// A cached snapshot is fresh while younger than the TTL. A clock that
    /// moved backwards makes the snapshot stale.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match &self.entry {
            Some(entry) => {
                let age = now - entry.loaded_at;
                age >= Duration::zero() && age < self.ttl
            }
            None => false,
        }
    }

    /// Returns the cached rows, reloading from the source once they expire.
    ///
    /// A failed reload keeps the previous snapshot cached and returns the error.
    pub fn rows(&mut self, now: DateTime<Utc>) -> Result<Arc<Vec<RawRow>>> {
        if let Some(entry) = self.entry.as_ref().filter(|_| self.is_fresh(now)) {
            return Ok(Arc::clone(&entry.rows));
        }
        let rows = Arc::new(self.source.load()?);
        tracing::debug!(
            source = %self.source.describe(),
            rows = rows.len(),
            "budget snapshot reloaded"
        );
        self.entry = Some(CachedRows {
            loaded_at: now,
            rows: Arc::clone(&rows),
        });
        Ok(rows)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
