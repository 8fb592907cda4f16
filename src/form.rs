//! Headless login form driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginForm` owns a mounted form's state and its user source. Input events
//! and submits are method calls; the rendered surface is read back with
//! `surface()`. The Leptos `LoginPage` applies the same `LoginState`
//! transitions through a signal and shares `MountGuard`.
//!
//! CONCURRENCY
//! ===========
//! `submit` does its synchronous part (loading on) before returning the
//! lookup future, so callers observe the pending state immediately. The
//! state lock is never held across the lookup await. Outcomes that arrive
//! after unmount are dropped.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::api::{FetchError, UserSource};
use crate::net::types::User;
use crate::pages::login::LoginSurface;
use crate::state::login::{LoginState, Submission};

/// Shared "still mounted" flag checked before a settled lookup touches state.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Idempotent.
    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand a settled lookup to `apply`, unless the view is gone.
///
/// Returns whether the outcome was applied.
pub fn apply_if_mounted(
    guard: &MountGuard,
    submission: Submission,
    outcome: Result<User, FetchError>,
    apply: impl FnOnce(Submission, Result<User, FetchError>),
) -> bool {
    if !guard.is_mounted() {
        tracing::debug!(seq = submission.seq(), "login form unmounted; dropping lookup outcome");
        return false;
    }
    apply(submission, outcome);
    true
}

/// The asynchronous half of a submission cycle: one lookup, then
/// [`apply_if_mounted`]. Shared by `LoginForm` and `LoginPage`.
pub async fn run_submission<S: UserSource + ?Sized>(
    source: &S,
    guard: &MountGuard,
    submission: Submission,
    apply: impl FnOnce(Submission, Result<User, FetchError>),
) -> bool {
    let outcome = source.fetch_user().await;
    apply_if_mounted(guard, submission, outcome, apply)
}

/// A mounted login form backed by a [`UserSource`].
///
/// Dropping the form unmounts it.
pub struct LoginForm<S> {
    state: Arc<Mutex<LoginState>>,
    source: Arc<S>,
    guard: MountGuard,
}

impl<S: UserSource + 'static> LoginForm<S> {
    pub fn new(source: S) -> Self {
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<S>) -> Self {
        Self {
            state: Arc::new(Mutex::new(LoginState::default())),
            source,
            guard: MountGuard::new(),
        }
    }

    pub fn input_username(&self, value: impl Into<String>) {
        let value = value.into();
        self.with_state(|s| s.set_username(value));
    }

    pub fn input_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.with_state(|s| s.set_password(value));
    }

    /// Activate the submit control.
    ///
    /// Loading is switched on before this returns. The returned future issues
    /// exactly one lookup and applies its outcome; spawn it or await it. Like
    /// the rendered button, this is gated only on field emptiness by the
    /// caller, not on `loading`, so calling it again while a lookup is pending
    /// starts a second one.
    pub fn submit(&self) -> impl Future<Output = ()> + 'static {
        let submission = self.with_state(LoginState::begin_submit);
        let state = Arc::clone(&self.state);
        let source = Arc::clone(&self.source);
        let guard = self.guard.clone();

        async move {
            run_submission(&*source, &guard, submission, |submission, outcome| {
                state
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .settle(submission, outcome);
            })
            .await;
        }
    }

    /// Remove the form from the view. Pending lookups settle into nothing.
    pub fn unmount(&self) {
        self.guard.unmount();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.guard.is_mounted()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> LoginState {
        self.with_state(|s| s.clone())
    }

    /// What the form currently renders.
    #[must_use]
    pub fn surface(&self) -> LoginSurface {
        self.with_state(|s| LoginSurface::from_state(s))
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut LoginState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl<S> Drop for LoginForm<S> {
    fn drop(&mut self) {
        self.guard.unmount();
    }
}
