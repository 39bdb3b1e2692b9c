//! Core components of the `peoplepa-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`PeopleClient`] and its builder.
//! - The primary [`PeopleError`] type.
//! - Endpoint descriptors and identifier kinds shared by every lookup.
//! - The [`Transport`] and [`PersonScraper`] seams.

/// The main client (`PeopleClient`), builder, and configuration.
pub mod client;
/// Endpoint descriptors (`Endpoint`) and identifier kinds.
pub mod endpoint;
/// The primary error type (`PeopleError`) for the crate.
pub mod error;
/// Service traits abstracting the transport and the person scraper.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::PeopleClient`
pub use client::{PeopleClient, PeopleClientBuilder};
pub use endpoint::{Endpoint, IdentifierKind, PEOPLE, PEOPLE_LOOKUP, PayloadEncoding};
pub use error::PeopleError;
pub use services::{BoxFuture, PersonScraper, Transport};
