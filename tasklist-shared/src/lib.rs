#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Shared building blocks for the Tasklist client.
//!
//! Everything here is independent of the browser: wire models, the endpoint
//! table, the error taxonomy, the dashboard and auth state machines, and the
//! controllers that drive them through the [`api::TodoApi`] seam.

pub mod api;
pub mod config;
pub mod controllers;
pub mod edit;
pub mod errors;
pub mod models;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
