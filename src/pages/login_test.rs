use super::*;

use crate::net::api::FetchError;
use crate::net::types::User;

fn surface_for(username: &str, password: &str) -> LoginSurface {
    let mut state = LoginState::default();
    state.set_username(username);
    state.set_password(password);
    LoginSurface::from_state(&state)
}

#[test]
fn error_visibility_maps_flag_to_css() {
    assert_eq!(error_visibility(false), "hidden");
    assert_eq!(error_visibility(true), "visible");
}

#[test]
fn input_kind_renders_type_attribute() {
    assert_eq!(InputKind::Text.as_str(), "text");
    assert_eq!(InputKind::Password.as_str(), "password");
}

#[test]
fn initial_surface_matches_rendering_contract() {
    let surface = LoginSurface::from_state(&LoginState::default());

    assert_eq!(surface.name, "");
    assert_eq!(surface.username.kind, InputKind::Text);
    assert_eq!(surface.username.value, "");
    assert_eq!(surface.password.kind, InputKind::Password);
    assert_eq!(surface.password.value, "");
    assert!(surface.button().disabled);
    assert_eq!(surface.button().label, "Login");
    assert!(!surface.error.visible);
    assert_eq!(surface.error.message, "something went wrong");
}

#[test]
fn by_placeholder_is_case_insensitive() {
    let surface = surface_for("alice", "secret");
    assert_eq!(surface.by_placeholder("USERNAME").unwrap().value, "alice");
    assert_eq!(surface.by_placeholder("Password").unwrap().value, "secret");
    assert!(surface.by_placeholder("email").is_none());
}

#[test]
fn by_test_id_finds_error_line_only() {
    let surface = surface_for("", "");
    let error = surface.by_test_id("error").unwrap();
    assert_eq!(error.test_id, ERROR_TEST_ID);
    assert!(surface.by_test_id("missing").is_none());
}

#[test]
fn button_enabled_only_with_both_fields() {
    assert!(surface_for("", "").button().disabled);
    assert!(surface_for("a", "").button().disabled);
    assert!(surface_for("", "b").button().disabled);
    assert!(!surface_for("a", "b").button().disabled);
}

#[test]
fn find_by_text_matches_whole_text() {
    let mut state = LoginState::default();
    let submission = state.begin_submit();
    state.settle(submission, Ok(User { id: 1, name: "John".to_owned() }));
    let surface = LoginSurface::from_state(&state);

    assert_eq!(surface.find_by_text("John"), Some("John"));
    assert_eq!(surface.find_by_text("Login"), Some("Login"));
    assert_eq!(surface.find_by_text("Jo"), None);
    assert_eq!(surface.find_by_text(""), None);
}

#[test]
fn hidden_error_is_still_in_the_tree() {
    let surface = surface_for("", "");
    assert_eq!(surface.find_by_text(ERROR_MESSAGE), Some(ERROR_MESSAGE));
    assert!(!surface.error.visible);
}

#[test]
fn failed_state_shows_error() {
    let mut state = LoginState::default();
    let submission = state.begin_submit();
    state.settle(submission, Err(FetchError::Status { status: 500 }));
    assert!(LoginSurface::from_state(&state).error.visible);
}

#[test]
fn display_masks_password() {
    let text = surface_for("alice", "secret").to_string();
    assert!(text.contains("username: alice"));
    assert!(text.contains("password: ******"));
    assert!(!text.contains("secret"));
    assert!(text.contains("button:   [Login] (enabled)"));
    assert!(text.contains("error:    something went wrong (hidden)"));
}

#[test]
fn surface_reads_the_same_helpers_as_the_page() {
    let mut state = LoginState::default();
    state.set_username("test");
    let submission = state.begin_submit();
    state.settle(submission, Err(FetchError::Request("reset".into())));

    let surface = LoginSurface::from_state(&state);
    assert_eq!(surface.name, name_text(&state));
    assert_eq!(surface.button.disabled, button_disabled(&state));
    assert_eq!(surface.button.label, state.button_label());
    assert_eq!(error_visibility(surface.error.visible), "visible");
    assert_eq!(surface.username.kind.as_str(), "text");
    assert_eq!(surface.password.kind.as_str(), "password");
}

#[test]
fn button_disabled_mirrors_can_submit() {
    let mut state = LoginState::default();
    assert!(button_disabled(&state));
    state.set_username("a");
    state.set_password("b");
    assert!(!button_disabled(&state));
}

#[cfg(feature = "ssr")]
#[test]
fn server_render_matches_initial_surface() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <LoginPage/> }.to_html());
    let surface = LoginSurface::from_state(&LoginState::default());

    assert!(html.contains(&format!(r#"type="{}""#, surface.username.kind.as_str())));
    assert!(html.contains(&format!(r#"type="{}""#, surface.password.kind.as_str())));
    assert!(html.contains(&format!(r#"placeholder="{USERNAME_PLACEHOLDER}""#)));
    assert!(html.contains(&format!(r#"placeholder="{PASSWORD_PLACEHOLDER}""#)));
    assert!(html.contains(&format!(r#"data-testid="{ERROR_TEST_ID}""#)));
    assert!(html.contains(ERROR_MESSAGE));
    assert!(html.contains(surface.button.label));
    assert!(html.contains(error_visibility(surface.error.visible)));
    assert!(html.contains("disabled"));
}
