//! User account record.
//!
//! # Invariants
//! - `username` is unique across the users table.
//! - `needs_onboarding` starts `true` and flips once onboarding is saved.

use super::fields::yes_no;
use serde::{Deserialize, Serialize};

/// One row of `users.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub username: String,
    /// Argon2 PHC string, or legacy plaintext from older data files.
    pub password: String,
    /// Stored as `first_time`; `yes` means the onboarding flow is pending.
    #[serde(rename = "first_time", with = "yes_no")]
    pub needs_onboarding: bool,
    #[serde(rename = "class")]
    pub class_name: String,
    pub board: String,
    pub stream: String,
    pub goal: String,
}

impl UserRecord {
    /// Fresh registration row: credentials only, onboarding pending.
    pub fn registered(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            needs_onboarding: true,
            ..Self::default()
        }
    }

    pub fn profile(&self) -> StudyProfile {
        StudyProfile {
            class_name: self.class_name.clone(),
            board: self.board.clone(),
            stream: self.stream.clone(),
            goal: self.goal.clone(),
        }
    }

    pub(crate) fn apply_profile(&mut self, profile: &StudyProfile) {
        self.class_name = profile.class_name.clone();
        self.board = profile.board.clone();
        self.stream = profile.stream.clone();
        self.goal = profile.goal.clone();
    }
}

/// Class/board/stream/goal selection made during onboarding or in settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudyProfile {
    pub class_name: String,
    pub board: String,
    pub stream: String,
    pub goal: String,
}

impl StudyProfile {
    pub fn new(
        class_name: impl Into<String>,
        board: impl Into<String>,
        stream: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            board: board.into(),
            stream: stream.into(),
            goal: goal.into(),
        }
    }

    /// Whether every field holds a non-blank value.
    pub fn is_complete(&self) -> bool {
        [&self.class_name, &self.board, &self.stream, &self.goal]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}
