use futures::stream::{self, StreamExt};

use crate::core::{IdentifierKind, PeopleError, PersonScraper, Transport};
use crate::lookup::{LookupResult, compose, lookup};
use crate::templates::TemplateRegistry;

/// Looks up many identifiers of one kind concurrently.
///
/// The detail level is resolved once, before any request is sent; an unknown
/// level fails the whole call. After that, every identifier is composed and
/// looked up on its own. A failure for one identifier (network, status, decode,
/// shape or scraper error) turns into [`LookupResult::not_found`] for that
/// identifier only, so callers cannot tell a failed lookup from a miss.
///
/// Lookups run as cooperative futures on the calling task. `concurrency` caps
/// how many are in flight; `None` dispatches all of them at once. The output has
/// one entry per identifier, in input order, whatever order responses arrive in.
///
/// # Errors
///
/// Returns `PeopleError::UnknownTemplate` if `detail_level` is not registered for `kind`.
pub async fn bulk_lookup<S>(
    transport: &dyn Transport,
    scraper: &dyn PersonScraper,
    templates: &TemplateRegistry,
    identifiers: &[S],
    kind: IdentifierKind,
    detail_level: &str,
    concurrency: Option<usize>,
) -> Result<Vec<LookupResult>, PeopleError>
where
    S: AsRef<str>,
{
    let template = templates.resolve(kind, detail_level)?;
    let endpoint = kind.endpoint();
    let limit = concurrency.unwrap_or(identifiers.len()).max(1);

    let results = stream::iter(identifiers.iter().map(|id| {
        let id = id.as_ref();
        async move {
            let req = compose(endpoint, template, kind.identifier_key(), id);
            match lookup(transport, scraper, kind, &req).await {
                Ok(outcome) => LookupResult::from(outcome),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(identifier = id, endpoint = endpoint.name, error = %e, "lookup failed, reporting not found");
                    if std::env::var("PP_DEBUG").ok().as_deref() == Some("1") {
                        eprintln!("PP_DEBUG: {} lookup for {id} failed ({e}); reporting not found.", endpoint.name);
                    }
                    LookupResult::not_found()
                }
            }
        }
    }))
    .buffered(limit)
    .collect::<Vec<_>>()
    .await;

    Ok(results)
}
