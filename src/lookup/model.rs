use serde::Serialize;

use crate::person::Person;

/// The outcome of a single lookup, before any batch-level containment.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The upstream returned a profile and it was scraped.
    Found(Person),
    /// The upstream reported no match, or returned an empty payload.
    NotFound,
}

/// A lookup result as returned to callers: a found flag plus the person.
///
/// `found == false` covers both an explicit upstream "not found" and an empty
/// payload. In bulk lookups it also covers a failed request; see
/// [`bulk_lookup`](crate::lookup::bulk_lookup).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupResult {
    /// Whether a profile was found.
    pub found: bool,
    /// The scraped profile, or an empty `Person` when nothing was found.
    pub person: Person,
}

impl LookupResult {
    /// A negative result carrying an empty person.
    #[must_use]
    pub fn not_found() -> Self {
        Self::default()
    }
}

impl From<LookupOutcome> for LookupResult {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found(person) => Self {
                found: true,
                person,
            },
            LookupOutcome::NotFound => Self::not_found(),
        }
    }
}
