//! Channel as of `messaging.knative.dev/v1beta1`.

use super::{ChannelVersion, Manifest};
use crate::duck::v1beta1::{ChannelableSpec, ChannelableStatus};
use crate::version_tag::DuckVersion;
use chanver_core::defaults::{API_VERSION_V1BETA1, CHANNEL_KIND};
use chanver_core::{KReference, ObjectMeta, TypeMeta};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

/// A channel: an addressable fan-out point that delivers events to its
/// subscribers through some backing implementation.
///
/// Serializes with `apiVersion` and `kind` set from [`Channel::API_VERSION`]
/// and [`Channel::KIND`]; both keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Channel {
    pub metadata: ObjectMeta,
    pub spec: ChannelSpec,
    pub status: ChannelStatus,
}

impl Channel {
    pub const API_VERSION: &'static str = API_VERSION_V1BETA1;
    pub const KIND: &'static str = CHANNEL_KIND;
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Manifest {
            api_version: Self::API_VERSION,
            kind: Self::KIND,
            metadata: &self.metadata,
            spec: &self.spec,
            status: &self.status,
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelSpec {
    /// Backing channel implementation to create. Immutable once set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_template: Option<ChannelTemplateSpec>,
    #[serde(flatten)]
    pub channelable: ChannelableSpec,
}

/// Kind and API version of the backing channel, plus its opaque spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChannelTemplateSpec {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChannelStatus {
    #[serde(flatten)]
    pub channelable: ChannelableStatus,
    /// The backing channel created from the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<KReference>,
}

impl ChannelVersion for Channel {
    const DUCK_VERSION: DuckVersion = DuckVersion::V1Beta1;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }

    fn subscriber_uids(&self) -> Vec<&str> {
        self.spec
            .channelable
            .subscribable
            .subscribers
            .iter()
            .map(|s| s.uid.as_str())
            .collect()
    }
}
