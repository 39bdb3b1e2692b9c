use std::collections::BTreeMap;

use serde::Serialize;

/// A person profile, with each facet keyed by the container it came from
/// (`PROFILE`, `DOMAIN_PROFILE`, `CONTACT`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    /// The opaque person (gaia) ID. Empty for a person that was not found.
    pub person_id: String,
    /// The best display name the service picked across containers.
    pub best_display_name: Option<String>,
    /// Source identifiers per container.
    pub source_ids: BTreeMap<String, SourceId>,
    /// Names per container.
    pub names: BTreeMap<String, PersonName>,
    /// Email addresses per container.
    pub emails: BTreeMap<String, PersonEmail>,
    /// Profile photos per container.
    pub profile_photos: BTreeMap<String, PersonPhoto>,
    /// Cover photos per container.
    pub cover_photos: BTreeMap<String, PersonPhoto>,
    /// Apps the person is reachable in, per container.
    pub in_app_reachability: BTreeMap<String, Vec<String>>,
}

impl Person {
    /// `true` for the empty person returned alongside a negative result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Identity of the person within one container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceId {
    /// The container-local ID.
    pub id: Option<String>,
    /// Last update timestamp as reported upstream.
    pub last_updated: Option<String>,
}

/// A person's name as seen in one container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonName {
    /// Full display name.
    pub display_name: Option<String>,
    /// First name.
    pub given_name: Option<String>,
    /// Last name.
    pub family_name: Option<String>,
}

/// An email address as seen in one container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonEmail {
    /// The address.
    pub value: String,
}

/// A profile or cover photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonPhoto {
    /// The image URL.
    pub url: String,
    /// Whether this is the service's placeholder image.
    pub is_default: bool,
}
