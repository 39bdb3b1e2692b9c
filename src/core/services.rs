use crate::core::PeopleError;
use crate::lookup::ResolvedRequest;
use crate::person::Person;

/// A boxed, sendable future borrowed for `'a`.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// A trait for anything that can carry a resolved request to the people-pa API.
///
/// The transport owns the connection pool, TLS and the injection of session
/// credentials. It is shared by reference across concurrent lookups, so it is
/// only ever invoked, never mutated. It is implemented by [`PeopleClient`](crate::PeopleClient).
pub trait Transport: Send + Sync {
    /// Sends one request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns a `PeopleError` on network failure or a non-2xx status.
    fn send<'a>(&'a self, req: &'a ResolvedRequest) -> BoxFuture<'a, Result<String, PeopleError>>;
}

/// A trait for services that turn a raw profile payload into a [`Person`].
///
/// Implementations may issue further requests through the supplied transport
/// to enrich the entity. Each call produces a fresh, unshared `Person`.
pub trait PersonScraper: Send + Sync {
    /// Builds a person from the payload extracted out of a lookup response.
    ///
    /// # Errors
    ///
    /// Returns a `PeopleError` if the payload cannot be interpreted or an
    /// enrichment request fails.
    fn scrape<'a>(
        &'a self,
        transport: &'a dyn Transport,
        payload: serde_json::Value,
    ) -> BoxFuture<'a, Result<Person, PeopleError>>;
}
