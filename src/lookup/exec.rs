use serde_json::Value;

use crate::core::{IdentifierKind, PeopleError, PersonScraper, Transport};
use crate::lookup::wire::{LookupEnvelope, PeopleEnvelope};
use crate::lookup::{LookupOutcome, ResolvedRequest};

const NOT_FOUND_STATUS: &str = "NOT_FOUND";

fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Extracts the raw person payload from a decoded response body.
///
/// Returns `Ok(None)` when the upstream has nothing for the identifier:
/// - email lookups: the body is empty (`{}`, `null`, ...);
/// - ID lookups: the first status record reads `NOT_FOUND`.
///
/// For email lookups the payload is the first value of the `people` mapping in
/// document order. More than one record is not expected; when it happens the
/// first one wins, which is inherited behaviour rather than a guarantee.
///
/// # Errors
///
/// Returns `PeopleError::Data` when the body does not have the expected shape.
pub fn normalize_response(kind: IdentifierKind, body: Value) -> Result<Option<Value>, PeopleError> {
    match kind {
        IdentifierKind::Email => {
            if is_falsy(&body) {
                return Ok(None);
            }
            let env: LookupEnvelope = serde_json::from_value(body)
                .map_err(|e| PeopleError::Data(format!("people lookup json shape: {e}")))?;
            env.people
                .into_iter()
                .next()
                .map(|(_, person)| Some(person))
                .ok_or_else(|| PeopleError::Data("people lookup returned no records".into()))
        }
        IdentifierKind::PersonId => {
            let env: PeopleEnvelope = serde_json::from_value(body)
                .map_err(|e| PeopleError::Data(format!("people json shape: {e}")))?;
            let first = env
                .person_response
                .into_iter()
                .next()
                .ok_or_else(|| PeopleError::Data("empty personResponse".into()))?;
            if first.status == NOT_FOUND_STATUS {
                return Ok(None);
            }
            first
                .person
                .map(Some)
                .ok_or_else(|| PeopleError::Data("personResponse entry has no person".into()))
        }
    }
}

/// Runs one resolved request and scrapes the result.
///
/// Transport, decode and shape errors are returned as-is; nothing is contained
/// here. The scraper is only invoked when a payload was found.
///
/// # Errors
///
/// Returns `PeopleError` if the request fails, the body is not JSON, the body has
/// an unexpected shape, or the scraper fails.
pub async fn lookup(
    transport: &dyn Transport,
    scraper: &dyn PersonScraper,
    kind: IdentifierKind,
    req: &ResolvedRequest,
) -> Result<LookupOutcome, PeopleError> {
    let body = transport.send(req).await?;
    let decoded: Value = serde_json::from_str(&body)?;

    match normalize_response(kind, decoded)? {
        None => Ok(LookupOutcome::NotFound),
        Some(payload) => {
            let person = scraper.scrape(transport, payload).await?;
            Ok(LookupOutcome::Found(person))
        }
    }
}
