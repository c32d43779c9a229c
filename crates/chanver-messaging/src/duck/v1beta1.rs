//! Eventing duck types as of `v1beta1`.

use chanver_core::{AddressStatus, ConditionStatus, Destination, Status, Url};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Retry backoff strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackoffPolicyType {
    Fixed,
    Linear,
    Exponential,
}

/// How failed deliveries are retried and where they end up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliverySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_letter_sink: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_policy: Option<BackoffPolicyType>,
    /// ISO-8601 or Go-style duration, e.g. `5s`. Kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_delay: Option<String>,
}

/// One consumer attached to a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriberSpec {
    pub uid: String,
    pub generation: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_uri: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_uri: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliverySpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SubscribableSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subscribers: Vec<SubscriberSpec>,
}

/// Spec shared by channel implementations. There is no aggregate-level
/// delivery in this version; delivery is per subscriber only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChannelableSpec {
    #[serde(flatten)]
    pub subscribable: SubscribableSpec,
}

/// Delivery readiness of one subscriber, keyed by its UID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriberStatus {
    pub uid: String,
    pub observed_generation: i64,
    pub ready: ConditionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SubscribableStatus {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subscribers: Vec<SubscriberStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChannelableStatus {
    #[serde(flatten)]
    pub status: Status,
    #[serde(flatten)]
    pub address_status: AddressStatus,
    #[serde(flatten)]
    pub subscribable_status: SubscribableStatus,
}
