//! Caller-owned greeting session.
//!
//! Every update returns a new `Session`; the previous value stays valid.
//! Users are kept in a persistent vector so snapshots share structure.

use chrono::{DateTime, Utc};
use im::Vector;
use itertools::Itertools;
use serde::Serialize;

use crate::greeting::welcome_message;
use crate::name::ValidatedName;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    started_at: DateTime<Utc>,
    greeting_count: u64,
    users: Vector<ValidatedName>,
    last_greeting: Option<String>,
    last_activity: DateTime<Utc>,
}

impl Session {
    pub fn start(at: DateTime<Utc>) -> Self {
        Self {
            started_at: at,
            greeting_count: 0,
            users: Vector::new(),
            last_greeting: None,
            last_activity: at,
        }
    }

    /// Record a greeting, producing the next session state.
    #[must_use]
    pub fn record(&self, name: ValidatedName, at: DateTime<Utc>) -> Self {
        let last_greeting = welcome_message(&name);
        let mut users = self.users.clone();
        users.push_back(name);

        Self {
            started_at: self.started_at,
            greeting_count: self.greeting_count.saturating_add(1),
            users,
            last_greeting: Some(last_greeting),
            last_activity: at,
        }
    }

    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub const fn greeting_count(&self) -> u64 {
        self.greeting_count
    }

    pub fn users(&self) -> impl Iterator<Item = &ValidatedName> {
        self.users.iter()
    }

    pub fn unique_users(&self) -> usize {
        self.users.iter().unique().count()
    }

    pub fn last_greeting(&self) -> Option<&str> {
        self.last_greeting.as_deref()
    }

    pub const fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }
}
