//! Detail-level templates: named, complete parameter sets per endpoint.
//!
//! Each detail level is an independent parameter mapping, not a diff against
//! another level. Adding a level means authoring its full mapping.

mod builtin;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{IdentifierKind, PeopleError};

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A plain string.
    Str(String),
    /// A boolean, rendered as `true`/`false` in query strings.
    Bool(bool),
    /// An ordered list, rendered as one repeated key per element in query strings.
    List(Vec<String>),
}

impl ParamValue {
    /// Renders the value as one or more query-string values.
    pub fn query_values(&self) -> Vec<String> {
        match self {
            Self::Str(s) => vec![s.clone()],
            Self::Bool(b) => vec![b.to_string()],
            Self::List(items) => items.clone(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(items: [&str; N]) -> Self {
        Self::List(items.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// A (partial) parameter mapping.
pub type Params = BTreeMap<String, ParamValue>;

/// Builds a [`Params`] mapping from `(key, value)` pairs.
pub fn params<I, K>(entries: I) -> Params
where
    I: IntoIterator<Item = (K, ParamValue)>,
    K: Into<String>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// The detail levels available for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    levels: BTreeMap<String, Params>,
}

impl TemplateSet {
    /// Creates a template set.
    ///
    /// # Errors
    ///
    /// Returns `PeopleError::InvalidParams` if no detail level is given.
    pub fn new<I, S>(levels: I) -> Result<Self, PeopleError>
    where
        I: IntoIterator<Item = (S, Params)>,
        S: Into<String>,
    {
        let levels: BTreeMap<String, Params> =
            levels.into_iter().map(|(k, v)| (k.into(), v)).collect();
        if levels.is_empty() {
            return Err(PeopleError::InvalidParams(
                "a template set needs at least one detail level".into(),
            ));
        }
        Ok(Self { levels })
    }

    /// Looks up a detail level by name.
    pub fn get(&self, detail_level: &str) -> Option<&Params> {
        self.levels.get(detail_level)
    }

    /// The names of all detail levels, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }
}

/// Immutable registry holding one [`TemplateSet`] per endpoint.
///
/// The client owns a registry behind an `Arc`; a custom one can be injected with
/// [`PeopleClientBuilder::templates`](crate::PeopleClientBuilder::templates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    lookup: TemplateSet,
    people: TemplateSet,
}

impl TemplateRegistry {
    /// Creates a registry from the email-lookup and person-ID template sets.
    #[must_use]
    pub fn new(lookup: TemplateSet, people: TemplateSet) -> Self {
        Self { lookup, people }
    }

    /// The template set for an identifier kind.
    #[must_use]
    pub const fn set(&self, kind: IdentifierKind) -> &TemplateSet {
        match kind {
            IdentifierKind::Email => &self.lookup,
            IdentifierKind::PersonId => &self.people,
        }
    }

    /// Resolves a detail level to its parameter mapping.
    ///
    /// # Errors
    ///
    /// Returns `PeopleError::UnknownTemplate` if `detail_level` is not registered
    /// for the endpoint serving `kind`. There is no fallback to another level.
    pub fn resolve(&self, kind: IdentifierKind, detail_level: &str) -> Result<&Params, PeopleError> {
        self.set(kind)
            .get(detail_level)
            .ok_or_else(|| PeopleError::UnknownTemplate {
                endpoint: kind.endpoint().name.to_string(),
                template: detail_level.to_string(),
            })
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new(builtin::lookup_templates(), builtin::people_templates())
    }
}
