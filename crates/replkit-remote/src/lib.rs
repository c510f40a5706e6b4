//! # replkit-remote
//!
//! Client for the remote Repl GraphQL API. Used by the CLI to verify a token
//! and to create a remote Repl mirroring a locally materialized configuration.
//! The local scaffolding pipeline never depends on this crate.

pub mod client;
pub mod error;
pub mod types;

pub use client::{RemoteProvisioner, ReplitClient};
pub use error::{Error, Result};
pub use types::{CreateReplRequest, CurrentUser, RemoteRepl};
