//! Field mapper between the `v1beta1` and `v1` eventing duck types.
//!
//! Every mapping copies by value: the produced value owns clones of the
//! source's strings and URLs, so later changes to the source never reach
//! an already-converted target.
//!
//! All mappings are lossless except `v1::ChannelableSpec` to
//! `v1beta1::ChannelableSpec`, which drops the channel-wide delivery policy.
//! See [`crate::loss`] for how that loss is reported.

use super::{v1, v1beta1};

// =============================================================================
// BACKOFF POLICY
// =============================================================================

impl From<v1beta1::BackoffPolicyType> for v1::BackoffPolicyType {
    fn from(policy: v1beta1::BackoffPolicyType) -> Self {
        match policy {
            v1beta1::BackoffPolicyType::Fixed => Self::Fixed,
            v1beta1::BackoffPolicyType::Linear => Self::Linear,
            v1beta1::BackoffPolicyType::Exponential => Self::Exponential,
        }
    }
}

impl From<v1::BackoffPolicyType> for v1beta1::BackoffPolicyType {
    fn from(policy: v1::BackoffPolicyType) -> Self {
        match policy {
            v1::BackoffPolicyType::Fixed => Self::Fixed,
            v1::BackoffPolicyType::Linear => Self::Linear,
            v1::BackoffPolicyType::Exponential => Self::Exponential,
        }
    }
}

// =============================================================================
// DELIVERY
// =============================================================================

impl From<&v1beta1::DeliverySpec> for v1::DeliverySpec {
    fn from(source: &v1beta1::DeliverySpec) -> Self {
        Self {
            dead_letter_sink: source.dead_letter_sink.clone(),
            retry: source.retry,
            backoff_policy: source.backoff_policy.map(Into::into),
            backoff_delay: source.backoff_delay.clone(),
        }
    }
}

impl From<&v1::DeliverySpec> for v1beta1::DeliverySpec {
    fn from(source: &v1::DeliverySpec) -> Self {
        Self {
            dead_letter_sink: source.dead_letter_sink.clone(),
            retry: source.retry,
            backoff_policy: source.backoff_policy.map(Into::into),
            backoff_delay: source.backoff_delay.clone(),
        }
    }
}

// =============================================================================
// SUBSCRIBERS
// =============================================================================

impl From<&v1beta1::SubscriberSpec> for v1::SubscriberSpec {
    fn from(source: &v1beta1::SubscriberSpec) -> Self {
        Self {
            uid: source.uid.clone(),
            generation: source.generation,
            subscriber_uri: source.subscriber_uri.clone(),
            reply_uri: source.reply_uri.clone(),
            delivery: source.delivery.as_ref().map(Into::into),
        }
    }
}

impl From<&v1::SubscriberSpec> for v1beta1::SubscriberSpec {
    fn from(source: &v1::SubscriberSpec) -> Self {
        Self {
            uid: source.uid.clone(),
            generation: source.generation,
            subscriber_uri: source.subscriber_uri.clone(),
            reply_uri: source.reply_uri.clone(),
            delivery: source.delivery.as_ref().map(Into::into),
        }
    }
}

impl From<&v1beta1::SubscribableSpec> for v1::SubscribableSpec {
    fn from(source: &v1beta1::SubscribableSpec) -> Self {
        Self {
            subscribers: source.subscribers.iter().map(Into::into).collect(),
        }
    }
}

impl From<&v1::SubscribableSpec> for v1beta1::SubscribableSpec {
    fn from(source: &v1::SubscribableSpec) -> Self {
        Self {
            subscribers: source.subscribers.iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// CHANNELABLE SPEC
// =============================================================================

impl From<&v1beta1::ChannelableSpec> for v1::ChannelableSpec {
    /// `v1beta1` has no channel-wide delivery, so the result has none.
    fn from(source: &v1beta1::ChannelableSpec) -> Self {
        Self {
            subscribable: (&source.subscribable).into(),
            delivery: None,
        }
    }
}

impl From<&v1::ChannelableSpec> for v1beta1::ChannelableSpec {
    /// Lossy: `source.delivery` has no destination in `v1beta1` and is
    /// dropped. Converting back to `v1` will not bring it back.
    fn from(source: &v1::ChannelableSpec) -> Self {
        Self {
            subscribable: (&source.subscribable).into(),
        }
    }
}

// =============================================================================
// STATUS
// =============================================================================

impl From<&v1beta1::SubscriberStatus> for v1::SubscriberStatus {
    fn from(source: &v1beta1::SubscriberStatus) -> Self {
        Self {
            uid: source.uid.clone(),
            observed_generation: source.observed_generation,
            ready: source.ready,
            message: source.message.clone(),
        }
    }
}

impl From<&v1::SubscriberStatus> for v1beta1::SubscriberStatus {
    fn from(source: &v1::SubscriberStatus) -> Self {
        Self {
            uid: source.uid.clone(),
            observed_generation: source.observed_generation,
            ready: source.ready,
            message: source.message.clone(),
        }
    }
}

impl From<&v1beta1::SubscribableStatus> for v1::SubscribableStatus {
    fn from(source: &v1beta1::SubscribableStatus) -> Self {
        Self {
            subscribers: source.subscribers.iter().map(Into::into).collect(),
        }
    }
}

impl From<&v1::SubscribableStatus> for v1beta1::SubscribableStatus {
    fn from(source: &v1::SubscribableStatus) -> Self {
        Self {
            subscribers: source.subscribers.iter().map(Into::into).collect(),
        }
    }
}

impl From<&v1beta1::ChannelableStatus> for v1::ChannelableStatus {
    fn from(source: &v1beta1::ChannelableStatus) -> Self {
        Self {
            status: source.status.clone(),
            address_status: source.address_status.clone(),
            subscribable_status: (&source.subscribable_status).into(),
        }
    }
}

impl From<&v1::ChannelableStatus> for v1beta1::ChannelableStatus {
    fn from(source: &v1::ChannelableStatus) -> Self {
        Self {
            status: source.status.clone(),
            address_status: source.address_status.clone(),
            subscribable_status: (&source.subscribable_status).into(),
        }
    }
}
