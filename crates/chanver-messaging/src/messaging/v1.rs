//! Channel as of `messaging.knative.dev/v1`.

use super::{ChannelVersion, Manifest};
use crate::duck::v1::{ChannelableSpec, ChannelableStatus, DeliverySpec};
use crate::version_tag::DuckVersion;
use chanver_core::defaults::{API_VERSION_V1, CHANNEL_KIND};
use chanver_core::{KReference, ObjectMeta, TypeMeta};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

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
    pub const API_VERSION: &'static str = API_VERSION_V1;
    pub const KIND: &'static str = CHANNEL_KIND;

    /// Channel-wide delivery policy, if set.
    pub fn delivery(&self) -> Option<&DeliverySpec> {
        self.spec.channelable.delivery.as_ref()
    }
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_template: Option<ChannelTemplateSpec>,
    #[serde(flatten)]
    pub channelable: ChannelableSpec,
}

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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<KReference>,
}

impl ChannelVersion for Channel {
    const DUCK_VERSION: DuckVersion = DuckVersion::V1;

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
