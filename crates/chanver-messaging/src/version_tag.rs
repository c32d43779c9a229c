//! Typed access to the subscribable duck version annotation.
//!
//! Both Channel versions look alike, so an instance's shape alone does not
//! say which version last held its data faithfully. Every conversion
//! records that fact under [`SUBSCRIBABLE_DUCK_VERSION_ANNOTATION`]. This
//! module is the only code that reads or writes that key; one key, last
//! writer wins.

use chanver_core::defaults::{API_VERSION_V1, API_VERSION_V1BETA1, VERSION_V1, VERSION_V1BETA1};
use chanver_core::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use chanver_core::defaults::SUBSCRIBABLE_DUCK_VERSION_ANNOTATION;

/// Schema versions of the Channel family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DuckVersion {
    #[serde(rename = "v1beta1")]
    V1Beta1,
    #[serde(rename = "v1")]
    V1,
}

impl DuckVersion {
    pub const ALL: [DuckVersion; 2] = [DuckVersion::V1Beta1, DuckVersion::V1];

    /// Value stored in the annotation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1Beta1 => VERSION_V1BETA1,
            Self::V1 => VERSION_V1,
        }
    }

    /// Group-qualified API version, e.g. `messaging.knative.dev/v1`.
    pub fn api_version(&self) -> &'static str {
        match self {
            Self::V1Beta1 => API_VERSION_V1BETA1,
            Self::V1 => API_VERSION_V1,
        }
    }
}

impl fmt::Display for DuckVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuckVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            VERSION_V1BETA1 => Ok(Self::V1Beta1),
            VERSION_V1 => Ok(Self::V1),
            other => Err(format!("Unknown subscribable duck version: {}", other)),
        }
    }
}

/// Record `version` on `meta`, creating the annotation map if it is absent.
pub fn record(meta: &mut ObjectMeta, version: DuckVersion) {
    meta.annotations_mut().insert(
        SUBSCRIBABLE_DUCK_VERSION_ANNOTATION.to_string(),
        version.as_str().to_string(),
    );
}

/// The recorded version, if the annotation is present and well-formed.
pub fn recorded(meta: &ObjectMeta) -> Option<DuckVersion> {
    meta.annotation(SUBSCRIBABLE_DUCK_VERSION_ANNOTATION)
        .and_then(|v| v.parse().ok())
}
