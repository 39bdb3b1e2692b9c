use crate::core::Endpoint;
use crate::templates::{ParamValue, Params};

/// The final parameter set for one lookup attempt against one endpoint.
///
/// Built by [`compose`] and consumed once by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    endpoint: &'static Endpoint,
    identifier_key: String,
    params: Params,
}

impl ResolvedRequest {
    /// The endpoint the request targets.
    #[must_use]
    pub const fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    /// The merged parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// The identifier value bound by [`compose`].
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self.params.get(&self.identifier_key)? {
            ParamValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Flattens the parameters into query pairs; list values repeat their key.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .flat_map(|(k, v)| v.query_values().into_iter().map(move |v| (k.clone(), v)))
            .collect()
    }
}

/// Merges a template with the identifier for one lookup.
///
/// The identifier is bound under `identifier_key` and always wins over a
/// same-named key in the template, so one template can be reused for any
/// number of identifiers. Values are not validated here.
#[must_use]
pub fn compose(
    endpoint: &'static Endpoint,
    template_params: &Params,
    identifier_key: &str,
    identifier_value: &str,
) -> ResolvedRequest {
    let mut params = template_params.clone();
    params.insert(
        identifier_key.to_string(),
        ParamValue::Str(identifier_value.to_string()),
    );
    ResolvedRequest {
        endpoint,
        identifier_key: identifier_key.to_string(),
        params,
    }
}
