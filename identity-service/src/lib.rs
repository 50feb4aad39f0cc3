//! Identity service core
//!
//! Registration, login, and token-based authorization over a persisted
//! user collection. HTTP dispatch and process bootstrap live in the
//! embedding application; this crate exposes the flows as plain outcomes.

pub mod config;
pub mod domain;
pub mod outbound;

pub use domain::user;
pub use outbound::repositories;
