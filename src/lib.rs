//! # login-form
//!
//! A single Leptos login form: username and password inputs, a submit button
//! with a loading label, and an error line. Submitting looks up a fixed demo
//! user over HTTP and displays its name.
//!
//! `pages::login::LoginPage` is the browser component. `form::LoginForm`
//! drives the same state headlessly (tests, the `login-form` binary).

pub mod config;
pub mod form;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: mount the login page over the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(pages::login::LoginPage);
}
