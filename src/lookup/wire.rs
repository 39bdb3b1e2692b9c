use serde::Deserialize;
use serde_json::{Map, Value};

/// Email lookup: `{"people": {"<record id>": {...person}}}`.
#[derive(Deserialize)]
pub(crate) struct LookupEnvelope {
    pub(crate) people: Map<String, Value>,
}

/// ID lookup: `{"personResponse": [{"status": "...", "person": {...}}]}`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PeopleEnvelope {
    pub(crate) person_response: Vec<PersonResponseNode>,
}

#[derive(Deserialize)]
pub(crate) struct PersonResponseNode {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) person: Option<Value>,
}
