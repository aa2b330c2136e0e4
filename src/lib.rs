//! Prefixed-cookie session state for `tower` services.
//!
//! This crate provides a layer that inserts a [`Session`] into request extensions. Every
//! session key is persisted as its own cookie named `{prefix}{key}`: incoming cookies
//! matching the prefix are decoded into the session when the request arrives, and every
//! mutation is mirrored onto the response as a `Set-Cookie` immediately. Cookies outside
//! the prefix belong to other consumers and are never touched.
//!
//! Values round-trip through JSON: a cookie value that parses as JSON is exposed as a
//! structured [`serde_json::Value`], anything else is exposed as a plain string.
//!
//! # Security
//! Session values are stored in plaintext cookies. They are neither signed nor encrypted:
//! a client can read and edit every value it is sent. Never store secrets or any value the
//! client must not be able to forge (user IDs, roles, feature grants). For tamper-resistant
//! sessions, use a store that signs or encrypts its payload instead.

mod config;
mod error;
pub mod format;
pub mod layer;
mod store;

pub use tower_cookies::cookie::SameSite;

pub use crate::config::{DEFAULT_COOKIE_PREFIX, SessionConfig};
pub use crate::error::Error;
pub use crate::layer::SessionManagerLayer;
pub use crate::store::Session;
