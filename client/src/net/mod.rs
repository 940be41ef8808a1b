//! Identity-provider networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the provider contract, `provider` implements it against
//! the REST endpoints in `api` (with `oauth` for popup consent), `session`
//! fans out session changes, and `types` holds the wire schema.

pub mod api;
pub mod identity;
pub mod oauth;
pub mod provider;
pub mod session;
pub mod types;
