//! Application state for the login form.
//!
//! DESIGN
//! ======
//! State is a plain struct with explicit transitions so the same rules drive
//! the headless `LoginForm` and the Leptos `LoginPage` (which wraps it in an
//! `RwSignal`).

pub mod login;
