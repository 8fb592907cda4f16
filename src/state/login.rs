//! Login form state and its submission-cycle transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `LoginState` lives for as long as the form is mounted. A submission
//! cycle is `begin_submit` followed by `settle`; the caller performs the
//! user lookup in between.
//!
//! INVARIANTS
//! ==========
//! - `loading` is set by `begin_submit` and cleared by `settle`, whatever the
//!   outcome.
//! - `error` is a latch: once a lookup fails it stays set for the lifetime of
//!   the state, including across later successful submissions.
//! - `user` only changes on a successful lookup.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::FetchError;
use crate::net::types::User;

pub const LABEL_IDLE: &str = "Login";
pub const LABEL_LOADING: &str = "please wait";

/// Where the form is in its most recent submission cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Handle for one submission cycle, numbered from 1 in submission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Submission(u64);

impl Submission {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    username: String,
    password: String,
    loading: bool,
    error: bool,
    user: User,
    last_outcome: Option<Phase>,
    submissions: u64,
}

impl LoginState {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> bool {
        self.error
    }

    /// The last fetched user, or `User::default()` before the first success.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Number of submissions started so far.
    #[must_use]
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Submit is reachable only when both fields are non-empty. Whitespace
    /// counts as content.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.loading { LABEL_LOADING } else { LABEL_IDLE }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else {
            self.last_outcome.unwrap_or(Phase::Idle)
        }
    }

    /// Start a submission cycle.
    ///
    /// Does not check `can_submit`: the button is the only gate. Calling this
    /// while a cycle is already pending starts an overlapping one.
    pub fn begin_submit(&mut self) -> Submission {
        self.submissions += 1;
        self.loading = true;
        let submission = Submission(self.submissions);
        tracing::debug!(seq = submission.seq(), "login submission started");
        submission
    }

    /// Apply the outcome of a lookup and end the cycle.
    pub fn settle(&mut self, submission: Submission, outcome: Result<User, FetchError>) {
        match outcome {
            Ok(user) => {
                tracing::info!(seq = submission.seq(), user_id = user.id, "login lookup succeeded");
                self.user = user;
                self.last_outcome = Some(Phase::Succeeded);
            }
            Err(e) => {
                tracing::warn!(seq = submission.seq(), error = %e, "login lookup failed");
                self.error = true;
                self.last_outcome = Some(Phase::Failed);
            }
        }
        self.loading = false;
    }
}
