//! The detail levels shipped with the client.

use std::collections::BTreeMap;

use super::{Params, TemplateSet, params};

const MAX_DETAILS_EXTENSIONS: [&str; 2] = ["DYNAMITE_ADDITIONAL_DATA", "DYNAMITE_ORGANIZATION_INFO"];

const MAX_DETAILS_FIELDS: [&str; 10] = [
    "person.metadata.best_display_name",
    "person.photo",
    "person.cover_photo",
    "person.interaction_settings",
    "person.legacy_fields",
    "person.metadata",
    "person.name",
    "person.read_only_profile_info",
    "person.sort_keys",
    "person.email",
];

const MAX_DETAILS_CONTAINERS: [&str; 10] = [
    "AFFINITY",
    "PROFILE",
    "DOMAIN_PROFILE",
    "ACCOUNT",
    "EXTERNAL_ACCOUNT",
    "CIRCLE",
    "DOMAIN_CONTACT",
    "DEVICE_CONTACT",
    "GOOGLE_GROUP",
    "CONTACT",
];

const PROFILE_CONTAINERS: [&str; 2] = ["PROFILE", "DOMAIN_PROFILE"];

// Literal sets are non-empty, so `TemplateSet::new`'s check is skipped here.
fn set<const N: usize>(levels: [(&str, Params); N]) -> TemplateSet {
    TemplateSet {
        levels: levels
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub(super) fn lookup_templates() -> TemplateSet {
    set([
        (
            "just_gaia_id",
            params([
                ("type", "EMAIL".into()),
                ("match_type", "EXACT".into()),
                ("request_mask.include_field.paths", "person.metadata".into()),
                ("request_mask.include_container", PROFILE_CONTAINERS.into()),
            ]),
        ),
        (
            "just_name",
            params([
                ("type", "EMAIL".into()),
                ("match_type", "EXACT".into()),
                ("request_mask.include_field.paths", "person.name".into()),
                ("request_mask.include_container", PROFILE_CONTAINERS.into()),
                ("core_id_params.enable_private_names", true.into()),
            ]),
        ),
        (
            "max_details",
            params([
                ("type", "EMAIL".into()),
                ("match_type", "EXACT".into()),
                ("extension_set.extension_names", MAX_DETAILS_EXTENSIONS.into()),
                ("request_mask.include_field.paths", MAX_DETAILS_FIELDS.into()),
                ("request_mask.include_container", MAX_DETAILS_CONTAINERS.into()),
                ("core_id_params.enable_private_names", true.into()),
            ]),
        ),
    ])
}

pub(super) fn people_templates() -> TemplateSet {
    set([
        (
            "just_name",
            params([
                ("request_mask.include_field.paths", "person.name".into()),
                ("request_mask.include_container", PROFILE_CONTAINERS.into()),
                ("core_id_params.enable_private_names", true.into()),
            ]),
        ),
        (
            "max_details",
            params([
                ("extension_set.extension_names", MAX_DETAILS_EXTENSIONS.into()),
                ("request_mask.include_field.paths", MAX_DETAILS_FIELDS.into()),
                ("request_mask.include_container", MAX_DETAILS_CONTAINERS.into()),
                ("core_id_params.enable_private_names", true.into()),
            ]),
        ),
    ])
}
