//! Static descriptors for the two people-pa operations.

/// HTTP verb used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `GET`: all data rides in the query string.
    Get,
    /// `POST`: data rides in the body according to the [`PayloadEncoding`].
    Post,
}

impl Verb {
    pub(crate) fn as_method(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

/// How request parameters are carried in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// No body; parameters go into the query string.
    None,
    /// Parameters are sent as a JSON object.
    Json,
    /// Parameters are sent as `application/x-www-form-urlencoded`.
    Form,
}

/// An immutable description of one upstream operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Name used in errors, logs and fixture file names.
    pub name: &'static str,
    /// HTTP verb.
    pub verb: Verb,
    /// Path appended to the client base URL, keeping any base path prefix.
    pub path: &'static str,
    /// Payload encoding mode.
    pub payload: PayloadEncoding,
}

/// Lookup of a person by email address.
pub const PEOPLE_LOOKUP: Endpoint = Endpoint {
    name: "people_lookup",
    verb: Verb::Get,
    path: "/v2/people/lookup",
    payload: PayloadEncoding::None,
};

/// Lookup of a person by internal (gaia) ID.
pub const PEOPLE: Endpoint = Endpoint {
    name: "people",
    verb: Verb::Get,
    path: "/v2/people",
    payload: PayloadEncoding::None,
};

/// Which identifier a lookup is keyed by.
///
/// The kind selects the endpoint, the query parameter the identifier is bound to,
/// the default detail level and the response shape that comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// An email address, served by [`PEOPLE_LOOKUP`].
    Email,
    /// An opaque internal person ID, served by [`PEOPLE`].
    PersonId,
}

impl IdentifierKind {
    /// The endpoint serving this identifier kind.
    #[must_use]
    pub const fn endpoint(self) -> &'static Endpoint {
        match self {
            Self::Email => &PEOPLE_LOOKUP,
            Self::PersonId => &PEOPLE,
        }
    }

    /// The query parameter the identifier value is bound to.
    #[must_use]
    pub const fn identifier_key(self) -> &'static str {
        match self {
            Self::Email => "id",
            Self::PersonId => "person_id",
        }
    }

    /// The detail level used when the caller does not pick one.
    #[must_use]
    pub const fn default_detail_level(self) -> &'static str {
        match self {
            Self::Email => "just_gaia_id",
            Self::PersonId => "just_name",
        }
    }
}
