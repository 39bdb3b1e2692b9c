//! Default scraper: maps the raw people-pa person payload onto [`Person`].

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::{BoxFuture, PeopleError, PersonScraper, Transport};

use super::model::{Person, PersonEmail, PersonName, PersonPhoto, SourceId};
use super::wire::{FieldMetadataNode, PersonNode};

const UNKNOWN_CONTAINER: &str = "UNKNOWN";

fn container_of(meta: FieldMetadataNode) -> String {
    meta.container
        .unwrap_or_else(|| UNKNOWN_CONTAINER.to_string())
}

/// Keeps the first entry seen for each container.
fn keep_first<T>(map: &mut BTreeMap<String, T>, container: String, value: T) {
    map.entry(container).or_insert(value);
}

/// Builds a [`Person`] from a raw payload without further requests.
///
/// # Errors
///
/// Returns `PeopleError::Data` if the payload is not a person object or has no `personId`.
pub fn scrape_payload(payload: Value) -> Result<Person, PeopleError> {
    let node: PersonNode = serde_json::from_value(payload)
        .map_err(|e| PeopleError::Data(format!("person payload parse: {e}")))?;

    let person_id = node
        .person_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| PeopleError::Data("person payload has no personId".into()))?;

    let mut person = Person {
        person_id,
        ..Person::default()
    };

    if let Some(meta) = node.metadata {
        person.best_display_name = meta.best_display_name.and_then(|b| b.display_name);
        for src in meta.identity_info.map(|i| i.source_ids).unwrap_or_default() {
            let container = src
                .container
                .unwrap_or_else(|| UNKNOWN_CONTAINER.to_string());
            keep_first(
                &mut person.source_ids,
                container,
                SourceId {
                    id: src.id,
                    last_updated: src.last_updated,
                },
            );
        }
    }

    for n in node.name {
        keep_first(
            &mut person.names,
            container_of(n.metadata),
            PersonName {
                display_name: n.display_name,
                given_name: n.given_name,
                family_name: n.family_name,
            },
        );
    }

    for e in node.email {
        if let Some(value) = e.value {
            keep_first(&mut person.emails, container_of(e.metadata), PersonEmail { value });
        }
    }

    for p in node.photo {
        if let Some(url) = p.url {
            keep_first(
                &mut person.profile_photos,
                container_of(p.metadata),
                PersonPhoto {
                    url,
                    is_default: p.is_default,
                },
            );
        }
    }

    for p in node.cover_photo {
        if let Some(url) = p.image_url {
            keep_first(
                &mut person.cover_photos,
                container_of(p.metadata),
                PersonPhoto {
                    url,
                    is_default: p.is_default,
                },
            );
        }
    }

    for r in node.in_app_reachability {
        if let Some(app) = r.app_type {
            person
                .in_app_reachability
                .entry(container_of(r.metadata))
                .or_default()
                .push(app);
        }
    }

    Ok(person)
}

/// The scraper a [`PeopleClient`](crate::PeopleClient) uses unless another one is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadScraper;

impl PersonScraper for PayloadScraper {
    fn scrape<'a>(
        &'a self,
        _transport: &'a dyn Transport,
        payload: Value,
    ) -> BoxFuture<'a, Result<Person, PeopleError>> {
        Box::pin(async move { scrape_payload(payload) })
    }
}
