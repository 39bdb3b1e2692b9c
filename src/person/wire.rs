use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersonNode {
    pub(crate) person_id: Option<String>,
    #[serde(default)]
    pub(crate) metadata: Option<PersonMetadataNode>,
    #[serde(default)]
    pub(crate) name: Vec<NameNode>,
    #[serde(default)]
    pub(crate) email: Vec<EmailNode>,
    #[serde(default)]
    pub(crate) photo: Vec<PhotoNode>,
    #[serde(default)]
    pub(crate) cover_photo: Vec<CoverPhotoNode>,
    #[serde(default)]
    pub(crate) in_app_reachability: Vec<ReachabilityNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersonMetadataNode {
    pub(crate) identity_info: Option<IdentityInfoNode>,
    pub(crate) best_display_name: Option<BestDisplayNameNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdentityInfoNode {
    #[serde(default)]
    pub(crate) source_ids: Vec<SourceIdNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SourceIdNode {
    pub(crate) container: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) last_updated: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BestDisplayNameNode {
    pub(crate) display_name: Option<String>,
}

/// Per-field metadata; only the container matters here.
#[derive(Deserialize, Default)]
pub(crate) struct FieldMetadataNode {
    pub(crate) container: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NameNode {
    #[serde(default)]
    pub(crate) metadata: FieldMetadataNode,
    pub(crate) display_name: Option<String>,
    pub(crate) given_name: Option<String>,
    pub(crate) family_name: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct EmailNode {
    #[serde(default)]
    pub(crate) metadata: FieldMetadataNode,
    pub(crate) value: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PhotoNode {
    #[serde(default)]
    pub(crate) metadata: FieldMetadataNode,
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) is_default: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoverPhotoNode {
    #[serde(default)]
    pub(crate) metadata: FieldMetadataNode,
    pub(crate) image_url: Option<String>,
    #[serde(default)]
    pub(crate) is_default: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReachabilityNode {
    #[serde(default)]
    pub(crate) metadata: FieldMetadataNode,
    pub(crate) app_type: Option<String>,
}
