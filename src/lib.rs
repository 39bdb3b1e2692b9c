//! peoplepa-rs: async client for the people-pa profile lookup API.
//!
//! Resolves an email address or a person ID to a [`Person`], one at a time or in
//! concurrent, failure-isolated batches. Requests are composed from named detail
//! levels held in a [`TemplateRegistry`].

pub mod core;
pub mod lookup;
pub mod person;
pub mod templates;

pub use crate::core::{
    Endpoint, IdentifierKind, PEOPLE, PEOPLE_LOOKUP, PayloadEncoding, PeopleClient,
    PeopleClientBuilder, PeopleError, PersonScraper, Transport,
};
pub use crate::core::endpoint::Verb;
pub use lookup::{
    BulkLookupBuilder, LookupBuilder, LookupOutcome, LookupResult, ResolvedRequest, bulk_lookup,
    compose, lookup, normalize_response,
};
pub use person::{
    PayloadScraper, Person, PersonEmail, PersonName, PersonPhoto, SourceId, scrape_payload,
};
pub use templates::{ParamValue, Params, TemplateRegistry, TemplateSet, params};

/// Installs a `tracing` fmt subscriber honouring `RUST_LOG`. Intended for examples and tests.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::{EnvFilter, fmt};
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
