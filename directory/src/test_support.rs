//! Test utilities for the directory crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`,
//! through the `test-support` feature).

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{NewUser, Role, UserId, UserStatus};

/// Instant every [`MutableClock`] built by [`MutableClock::at_fixture`]
/// starts from: 2024-03-01T12:00:00Z.
pub fn fixture_timestamp() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single() {
        Some(timestamp) => timestamp,
        None => panic!("fixture timestamp must be unambiguous"),
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Start the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Start the clock at [`fixture_timestamp`].
    pub fn at_fixture() -> Self {
        Self::new(fixture_timestamp())
    }

    /// Move the clock forward.
    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Build a user draft with predictable field values derived from `id`.
///
/// The display name is `User <id>`, the email `user<id>@company.com`, and the
/// department `Engineering`.
pub fn sample_user(id: u32, role: Role, status: UserStatus) -> NewUser {
    let join_date = match NaiveDate::from_ymd_opt(2022, 6, 10) {
        Some(date) => date,
        None => panic!("fixture join date must be valid"),
    };
    NewUser {
        id: UserId::new(id),
        display_name: format!("User {id}"),
        email: format!("user{id}@company.com"),
        role,
        department: "Engineering".to_owned(),
        join_date,
        last_active: fixture_timestamp(),
        status,
        notes: None,
    }
}
