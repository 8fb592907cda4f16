//! Login page: two credential inputs, a submit button, and an error line.
//!
//! Submitting looks up a fixed demo user and shows its name; the credentials
//! are only used to enable the button. `LoginSurface` is the same contract as
//! plain data, for the headless form and for tests.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::fmt;

use leptos::prelude::*;

use crate::form::MountGuard;
use crate::state::login::LoginState;

pub const USERNAME_PLACEHOLDER: &str = "username";
pub const PASSWORD_PLACEHOLDER: &str = "password";
pub const ERROR_TEST_ID: &str = "error";
pub const ERROR_MESSAGE: &str = "something went wrong";

/// CSS `visibility` for the error line. The element is always rendered.
pub fn error_visibility(error: bool) -> &'static str {
    if error { "visible" } else { "hidden" }
}

/// Text of the name display.
pub fn name_text(state: &LoginState) -> String {
    state.user().name.clone()
}

/// The button is the only submit gate.
pub fn button_disabled(state: &LoginState) -> bool {
    !state.can_submit()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = RwSignal::new(LoginState::default());
    let guard = MountGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.unmount());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !guard.is_mounted() {
            return;
        }
        let Some(submission) = state.try_update(LoginState::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                use crate::form::{apply_if_mounted, run_submission};
                use crate::net::api::{FetchError, HttpUserSource};
                use crate::net::types::User;
                use crate::state::login::Submission;

                // The browser has no process environment; only the built-in endpoint applies.
                let config = crate::config::LoginConfig::default();
                let apply = move |submission: Submission, outcome: Result<User, FetchError>| {
                    state.try_update(|s| s.settle(submission, outcome));
                };
                match HttpUserSource::from_config(&config) {
                    Ok(source) => {
                        run_submission(&source, &guard, submission, apply).await;
                    }
                    Err(e) => {
                        apply_if_mounted(&guard, submission, Err(e), apply);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
    };

    view! {
        <div class="container">
            <form class="login-form" on:submit=on_submit>
                <span class="login-user">{move || state.with(name_text)}</span>
                <input
                    class="login-input"
                    type={InputKind::Text.as_str()}
                    placeholder=USERNAME_PLACEHOLDER
                    prop:value=move || state.with(|s| s.username().to_owned())
                    on:input=move |ev| state.update(|s| s.set_username(event_target_value(&ev)))
                />
                <input
                    class="login-input"
                    type={InputKind::Password.as_str()}
                    placeholder=PASSWORD_PLACEHOLDER
                    prop:value=move || state.with(|s| s.password().to_owned())
                    on:input=move |ev| state.update(|s| s.set_password(event_target_value(&ev)))
                />
                <button
                    class="login-button"
                    type="submit"
                    disabled=move || state.with(button_disabled)
                >
                    {move || state.with(LoginState::button_label)}
                </button>
                <span
                    class="login-message"
                    data-testid=ERROR_TEST_ID
                    style:visibility=move || error_visibility(state.with(LoginState::error))
                >
                    {ERROR_MESSAGE}
                </span>
            </form>
        </div>
    }
}

// =============================================================================
// SURFACE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
}

impl InputKind {
    /// The `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSurface {
    pub kind: InputKind,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonSurface {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorSurface {
    pub test_id: &'static str,
    pub message: &'static str,
    pub visible: bool,
}

/// Snapshot of everything `LoginPage` renders for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSurface {
    /// Text of the name display; empty until a lookup succeeds.
    pub name: String,
    pub username: InputSurface,
    pub password: InputSurface,
    pub button: ButtonSurface,
    pub error: ErrorSurface,
}

impl LoginSurface {
    pub fn from_state(state: &LoginState) -> Self {
        Self {
            name: name_text(state),
            username: InputSurface {
                kind: InputKind::Text,
                placeholder: USERNAME_PLACEHOLDER,
                value: state.username().to_owned(),
            },
            password: InputSurface {
                kind: InputKind::Password,
                placeholder: PASSWORD_PLACEHOLDER,
                value: state.password().to_owned(),
            },
            button: ButtonSurface { label: state.button_label(), disabled: button_disabled(state) },
            error: ErrorSurface { test_id: ERROR_TEST_ID, message: ERROR_MESSAGE, visible: state.error() },
        }
    }

    /// First input whose placeholder contains `text`, ignoring case.
    pub fn by_placeholder(&self, text: &str) -> Option<&InputSurface> {
        let needle = text.to_lowercase();
        [&self.username, &self.password]
            .into_iter()
            .find(|input| input.placeholder.to_lowercase().contains(&needle))
    }

    /// The single button on the page.
    pub fn button(&self) -> &ButtonSurface {
        &self.button
    }

    pub fn by_test_id(&self, id: &str) -> Option<&ErrorSurface> {
        (self.error.test_id == id).then_some(&self.error)
    }

    /// Text of the first element whose whole text equals `text`. Hidden
    /// elements count; check `error.visible` for visibility.
    pub fn find_by_text(&self, text: &str) -> Option<&str> {
        if text.is_empty() {
            return None;
        }
        [self.name.as_str(), self.button.label, self.error.message]
            .into_iter()
            .find(|candidate| *candidate == text)
    }
}

impl fmt::Display for LoginSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name:     {}", self.name)?;
        writeln!(f, "username: {}", self.username.value)?;
        writeln!(f, "password: {}", "*".repeat(self.password.value.chars().count()))?;
        let state = if self.button.disabled { "disabled" } else { "enabled" };
        writeln!(f, "button:   [{}] ({state})", self.button.label)?;
        let visibility = error_visibility(self.error.visible);
        write!(f, "error:    {} ({visibility})", self.error.message)
    }
}
