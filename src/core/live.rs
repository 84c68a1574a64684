use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

use crate::budget::PortfolioSummary;
use crate::core::services::SummaryService;
use crate::errors::Result;
use crate::storage::RowSource;

/// Converts a configured number of seconds, saturating at the largest
/// representable duration.
pub fn seconds_to_duration(seconds: u64) -> Duration {
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}

/// Caller-owned refresh timer: when the dashboard was last rebuilt and how
/// often it should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSchedule {
    pub interval: Duration,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl RefreshSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_refreshed_at: None,
        }
    }

    pub fn every_seconds(seconds: u64) -> Self {
        Self::new(seconds_to_duration(seconds))
    }

    /// Due when never refreshed, or once strictly more than `interval` has passed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_refreshed_at {
            Some(last) => now - last > self.interval,
            None => true,
        }
    }

    pub fn mark_refreshed(&mut self, now: DateTime<Utc>) {
        self.last_refreshed_at = Some(now);
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed_at
            .and_then(|last| last.checked_add_signed(self.interval))
    }

    /// Time left until the next refresh, zero when already due.
    pub fn wait_time(&self, now: DateTime<Utc>) -> Duration {
        if self.last_refreshed_at.is_none() {
            return Duration::zero();
        }
        match self.next_due() {
            Some(due) if due > now => due - now,
            Some(_) => Duration::zero(),
            None => self.interval,
        }
    }
}

/// Holds the summary currently on display and replaces it wholesale on refresh.
///
/// Readers get an `Arc` snapshot; a refresh builds the next summary without
/// holding the lock and swaps it in with a single write.
#[derive(Debug, Default)]
pub struct LiveDashboard {
    current: RwLock<Arc<PortfolioSummary>>,
}

impl LiveDashboard {
    pub fn new(initial: PortfolioSummary) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    pub fn current(&self) -> Arc<PortfolioSummary> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn replace(&self, next: PortfolioSummary) -> Arc<PortfolioSummary> {
        let next = Arc::new(next);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::clone(&next);
        next
    }

    /// Rebuilds from `source` and records the refresh on `schedule`.
    /// On failure the previous summary stays in place.
    pub fn refresh_from<S: RowSource + ?Sized>(
        &self,
        source: &S,
        schedule: &mut RefreshSchedule,
        now: DateTime<Utc>,
    ) -> Result<Arc<PortfolioSummary>> {
        let next = SummaryService::load(source)?;
        tracing::info!(
            source = %source.describe(),
            categories = next.categories.len(),
            "dashboard refreshed"
        );
        schedule.mark_refreshed(now);
        Ok(self.replace(next))
    }

    /// Refreshes only when the schedule says so; returns whether it did.
    pub fn refresh_if_due<S: RowSource + ?Sized>(
        &self,
        source: &S,
        schedule: &mut RefreshSchedule,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        if !schedule.is_due(now) {
            return Ok(false);
        }
        self.refresh_from(source, schedule, now)?;
        Ok(true)
    }
}
