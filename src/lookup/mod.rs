//! Single and bulk person lookups.
//!
//! Internals are split into:
//! - `compose`: merges a detail-level template with an identifier
//! - `exec`:    runs one request and normalizes the two response shapes
//! - `bulk`:    concurrent, order-preserving fan-out with per-item containment
//! - `wire`:    serde mapping of the response envelopes

mod bulk;
mod compose;
mod exec;
mod model;
mod wire;

pub use bulk::bulk_lookup;
pub use compose::{ResolvedRequest, compose};
pub use exec::{lookup, normalize_response};
pub use model::{LookupOutcome, LookupResult};

use crate::core::{IdentifierKind, PeopleClient, PeopleError};

/// A builder for looking up one person by email or by person ID.
///
/// # Example
///
/// ```no_run
/// # use peoplepa_rs::{LookupBuilder, PeopleClient, IdentifierKind};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PeopleClient::builder().api_key("AIza...").build()?;
/// let res = LookupBuilder::new(&client, IdentifierKind::Email, "someone@example.com")
///     .detail_level("max_details")
///     .fetch()
///     .await?;
/// if res.found {
///     println!("{}", res.person.person_id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct LookupBuilder<'a> {
    client: &'a PeopleClient,
    kind: IdentifierKind,
    identifier: String,
    detail_level: Option<String>,
}

impl<'a> LookupBuilder<'a> {
    /// Creates a new `LookupBuilder` for a given identifier.
    pub fn new(client: &'a PeopleClient, kind: IdentifierKind, identifier: impl Into<String>) -> Self {
        Self {
            client,
            kind,
            identifier: identifier.into(),
            detail_level: None,
        }
    }

    /// Picks the detail level. Defaults to the identifier kind's default level.
    #[must_use]
    pub fn detail_level(mut self, level: impl Into<String>) -> Self {
        self.detail_level = Some(level.into());
        self
    }

    /// Runs the lookup, keeping "not found" and failures apart.
    ///
    /// # Errors
    ///
    /// Returns `PeopleError::UnknownTemplate` for an unknown detail level, and any
    /// transport, decode or shape error from the request itself.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(kind = ?self.kind)))]
    pub async fn fetch_outcome(self) -> Result<LookupOutcome, PeopleError> {
        let level = self
            .detail_level
            .as_deref()
            .unwrap_or(self.kind.default_detail_level());
        let template = self.client.templates().resolve(self.kind, level)?;
        let req = compose(
            self.kind.endpoint(),
            template,
            self.kind.identifier_key(),
            &self.identifier,
        );
        lookup(self.client, self.client.scraper(), self.kind, &req).await
    }

    /// Runs the lookup.
    ///
    /// # Errors
    ///
    /// See [`LookupBuilder::fetch_outcome`].
    pub async fn fetch(self) -> Result<LookupResult, PeopleError> {
        self.fetch_outcome().await.map(LookupResult::from)
    }
}

/// A builder for looking up many identifiers of one kind concurrently.
///
/// Failures are contained per identifier; see [`bulk_lookup`].
pub struct BulkLookupBuilder<'a> {
    client: &'a PeopleClient,
    kind: IdentifierKind,
    identifiers: Vec<String>,
    detail_level: Option<String>,
    concurrency: Option<usize>,
}

impl<'a> BulkLookupBuilder<'a> {
    /// Creates a new, empty `BulkLookupBuilder`.
    pub fn new(client: &'a PeopleClient, kind: IdentifierKind) -> Self {
        Self {
            client,
            kind,
            identifiers: Vec::new(),
            detail_level: None,
            concurrency: client.concurrency(),
        }
    }

    /// Replaces the current list of identifiers.
    #[must_use]
    pub fn identifiers<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single identifier.
    #[must_use]
    pub fn add_identifier(mut self, id: impl Into<String>) -> Self {
        self.identifiers.push(id.into());
        self
    }

    /// Picks the detail level. Defaults to the identifier kind's default level.
    #[must_use]
    pub fn detail_level(mut self, level: impl Into<String>) -> Self {
        self.detail_level = Some(level.into());
        self
    }

    /// Caps the number of lookups in flight. Overrides the client setting.
    #[must_use]
    pub const fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = Some(limit);
        self
    }

    /// Runs all lookups and returns one result per identifier, in order.
    ///
    /// # Errors
    ///
    /// Returns `PeopleError::UnknownTemplate` for an unknown detail level. No other
    /// error escapes a bulk lookup.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(kind = ?self.kind, count = self.identifiers.len())))]
    pub async fn fetch(self) -> Result<Vec<LookupResult>, PeopleError> {
        let level = self
            .detail_level
            .as_deref()
            .unwrap_or(self.kind.default_detail_level());
        bulk_lookup(
            self.client,
            self.client.scraper(),
            self.client.templates(),
            &self.identifiers,
            self.kind,
            level,
            self.concurrency,
        )
        .await
    }
}

impl PeopleClient {
    /// Looks up a person by email at the default detail level (`just_gaia_id`).
    ///
    /// # Errors
    ///
    /// Returns any transport, decode or shape error from the request.
    pub async fn lookup_email(&self, email: &str) -> Result<LookupResult, PeopleError> {
        LookupBuilder::new(self, IdentifierKind::Email, email).fetch().await
    }

    /// Looks up a person by person ID at the default detail level (`just_name`).
    ///
    /// # Errors
    ///
    /// Returns any transport, decode or shape error from the request.
    pub async fn lookup_person_id(&self, person_id: &str) -> Result<LookupResult, PeopleError> {
        LookupBuilder::new(self, IdentifierKind::PersonId, person_id)
            .fetch()
            .await
    }

    /// Looks up many emails at the default detail level.
    ///
    /// # Errors
    ///
    /// Only fails if the default detail level was removed from a custom registry.
    pub async fn bulk_lookup_emails<I, S>(&self, emails: I) -> Result<Vec<LookupResult>, PeopleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BulkLookupBuilder::new(self, IdentifierKind::Email)
            .identifiers(emails)
            .fetch()
            .await
    }

    /// Looks up many person IDs at the default detail level.
    ///
    /// # Errors
    ///
    /// Only fails if the default detail level was removed from a custom registry.
    pub async fn bulk_lookup_person_ids<I, S>(
        &self,
        person_ids: I,
    ) -> Result<Vec<LookupResult>, PeopleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BulkLookupBuilder::new(self, IdentifierKind::PersonId)
            .identifiers(person_ids)
            .fetch()
            .await
    }
}
