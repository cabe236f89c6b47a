//! The fallback date used to fill fields a caller leaves unset.
//!
//! There is one process-wide shared default behind a lock, initialized to
//! `7/3/2005`. Construction reads a snapshot of it; nothing ever holds a live
//! reference. Callers that do not want the global can pass a [`DefaultDate`]
//! (or a [`DateConfig`]) of their own.

use crate::consts::{INITIAL_DEFAULT_DAY, INITIAL_DEFAULT_MONTH, INITIAL_DEFAULT_YEAR};
use crate::prelude::*;
use crate::types::ValidationPolicy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Fallback day/month/year. Fields are not validated: whatever is stored here
/// is copied as-is into instances that leave the field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}/{}/{}", day, month, year)]
pub struct DefaultDate {
    pub day:   i32,
    pub month: i32,
    pub year:  i32,
}

impl DefaultDate {
    /// The shared default as it is before the first call to [`set_default_date`]
    pub const INITIAL: Self = Self::new(
        INITIAL_DEFAULT_DAY,
        INITIAL_DEFAULT_MONTH,
        INITIAL_DEFAULT_YEAR,
    );

    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl Default for DefaultDate {
    fn default() -> Self {
        Self::INITIAL
    }
}

static SHARED_DEFAULT: RwLock<DefaultDate> = parking_lot::const_rwlock(DefaultDate::INITIAL);

/// Returns a copy of the current shared default.
pub fn shared_default() -> DefaultDate {
    *SHARED_DEFAULT.read()
}

/// Overwrites the shared default. No validation is performed, unlike the
/// per-instance setters.
pub fn set_default_date(day: i32, month: i32, year: i32) {
    let new = DefaultDate::new(day, month, year);
    let old = std::mem::replace(&mut *SHARED_DEFAULT.write(), new);
    tracing::debug!(%old, %new, "shared default date replaced");
}

/// Puts the shared default back to [`DefaultDate::INITIAL`].
pub fn reset_default_date() {
    *SHARED_DEFAULT.write() = DefaultDate::INITIAL;
    tracing::debug!(new = %DefaultDate::INITIAL, "shared default date reset");
}

/// Construction settings: where unset fields come from and what happens to
/// out-of-range explicit ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConfig {
    pub defaults: DefaultDate,
    #[serde(default)]
    pub policy:   ValidationPolicy,
}

impl DateConfig {
    pub const fn new(defaults: DefaultDate, policy: ValidationPolicy) -> Self {
        Self { defaults, policy }
    }

    /// Snapshot of the shared default with the given policy
    pub fn shared(policy: ValidationPolicy) -> Self {
        Self::new(shared_default(), policy)
    }
}

impl Default for DateConfig {
    fn default() -> Self {
        Self::shared(ValidationPolicy::default())
    }
}

/// Serializes tests that read or write the shared default and resets it.
#[cfg(test)]
pub(crate) fn lock_shared_default() -> parking_lot::MutexGuard<'static, ()> {
    static GUARD: parking_lot::Mutex<()> = parking_lot::const_mutex(());
    let guard = GUARD.lock();
    reset_default_date();
    guard
}
