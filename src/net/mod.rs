//! Networking for the login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single user lookup the form issues on submit, and
//! `types` defines the record it returns.

pub mod api;
pub mod types;
