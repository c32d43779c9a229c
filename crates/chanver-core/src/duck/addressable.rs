//! Addressable status: where a resource can be reached.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// A resolved address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Addressable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

/// Status fragment exposing the resource's address, once known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AddressStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Addressable>,
}

impl AddressStatus {
    /// URL of the address, if one has been assigned.
    pub fn url(&self) -> Option<&Url> {
        self.address.as_ref().and_then(|a| a.url.as_ref())
    }
}
