//! References to other resources and delivery destinations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// Reference to a resource by kind, namespace and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct KReference {
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,
}

/// Where events go: a resource reference, a URI, or both.
///
/// When both are set the URI is resolved relative to the referenced
/// resource's address by whoever delivers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Destination {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<KReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<Url>,
}

impl Destination {
    pub fn is_empty(&self) -> bool {
        self.reference.is_none() && self.uri.is_none()
    }
}
