//! Core domain types for the exercise tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Users and their registration records
//! - Exercise entries and the per-user log that owns them
//! - Query parameters and the filtered log view returned to clients

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// User Types
// ============================================================================

/// A registered user
///
/// Created once on registration and never mutated. Usernames are not
/// required to be unique; the id is the identity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

// ============================================================================
// Exercise and Log Types
// ============================================================================

/// One logged workout entry, embedded in exactly one user's log
///
/// The date is stored as its display string ("Mon Jan 01 2023"); date
/// filtering reparses it with [`crate::filter::parse_display_date`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

/// Input for appending an exercise to a log
///
/// A missing date means "stamp with today's local date" at append time.
#[derive(Clone, Debug)]
pub struct NewExercise {
    pub description: String,
    pub duration: u32,
    pub date: Option<chrono::NaiveDate>,
}

/// A user's complete exercise log
///
/// One log per user, provisioned empty at registration. `count` tracks the
/// total number of entries ever appended and is incremented atomically with
/// each append; read-time filtering never changes it. Entries keep append
/// order and are never re-sorted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: Uuid,
    pub username: String,
    pub count: u64,
    pub entries: Vec<Exercise>,
}

impl ExerciseLog {
    /// Create an empty log for a freshly registered user
    pub fn empty(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            count: 0,
            entries: Vec::new(),
        }
    }
}

// ============================================================================
// Query and View Types
// ============================================================================

/// Parsed query parameters for a log read
///
/// Built from raw query strings via [`crate::filter::LogQuery::parse`]
/// so that malformed values surface as distinguished errors instead of
/// silently filtering everything out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
    pub limit: Option<i64>,
}

/// The filtered view of a log returned to clients
///
/// `count` is always the stored total from the log document, independent of
/// how many entries survive filtering and limiting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogView {
    pub id: Uuid,
    pub username: String,
    pub count: u64,
    pub log: Vec<Exercise>,
}
