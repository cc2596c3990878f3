//! Client-side state machines.
//!
//! Both machines are plain values changed only through their transition
//! functions, so the browser layer and the tests drive them the same way.

pub mod auth;
pub mod dashboard;

pub use auth::{AuthEvent, AuthMode, AuthPhase};
pub use dashboard::{
    DashboardAction, DashboardState, DashboardStore, NO_SELECTION_HEADER, Ticket, Transition,
};
