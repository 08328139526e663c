//! External geocoding collaborator
//!
//! The core never talks to the network directly; it goes through the
//! `RemoteClient` trait, for which `HttpClient` is the real implementation.

pub mod client;
pub mod locate;

pub use client::{HttpClient, RemoteClient, RemoteResponse};
pub use locate::locate;
