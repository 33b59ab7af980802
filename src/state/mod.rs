//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the only application-wide state: the session lifecycle is
//! init-once at startup, mutate-on-action afterwards, and every consumer
//! reads it through the context signal rather than ambient globals.

pub mod auth;
