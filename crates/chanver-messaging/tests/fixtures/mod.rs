//! Channel fixtures shared by the conversion integration tests.
//!
//! Each version has a minimal fixture (identity only) and a full one with
//! every field populated. `v1_full` also carries a channel-wide delivery
//! policy, which `v1beta1` cannot hold; `v1_full_without_channel_delivery`
//! is the same channel minus that field.

#![allow(dead_code)]

use chanver_core::{
    AddressStatus, Addressable, Condition, ConditionStatus, Destination, KReference, ObjectMeta,
    Status, TypeMeta, Url,
};
use chanver_messaging::duck::{v1 as duck_v1, v1beta1 as duck_v1beta1};
use chanver_messaging::messaging::{v1, v1beta1};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub const NAME: &str = "channel-name";
pub const NAMESPACE: &str = "channel-ns";
pub const GENERATION: i64 = 17;

pub fn http(url: &str) -> Url {
    Url::parse(url).expect("fixture URL must parse")
}

fn metadata() -> ObjectMeta {
    ObjectMeta {
        generation: GENERATION,
        ..ObjectMeta::named(NAME, NAMESPACE)
    }
}

fn template() -> TypeMeta {
    TypeMeta::new("channelKind", "channelAPIVersion")
}

fn dead_letter_sink(uri: &str) -> Destination {
    Destination {
        reference: Some(KReference {
            kind: "dlKind".into(),
            namespace: "dlNamespace".into(),
            name: "dlName".into(),
            api_version: "dlAPIVersion".into(),
        }),
        uri: Some(http(uri)),
    }
}

fn status() -> Status {
    Status {
        observed_generation: 1,
        conditions: vec![Condition::new("Ready", ConditionStatus::True)],
        annotations: None,
    }
}

fn address_status() -> AddressStatus {
    AddressStatus {
        address: Some(Addressable {
            name: None,
            url: Some(http("http://addressstatus.example.com")),
        }),
    }
}

fn channel_reference() -> KReference {
    KReference {
        kind: "u-channel-kind".into(),
        namespace: "u-channel-namespace".into(),
        name: "u-channel-name".into(),
        api_version: "u-channel-apiversion".into(),
    }
}

pub fn beta_min() -> v1beta1::Channel {
    v1beta1::Channel {
        metadata: metadata(),
        ..v1beta1::Channel::default()
    }
}

pub fn v1_min() -> v1::Channel {
    v1::Channel {
        metadata: metadata(),
        ..v1::Channel::default()
    }
}

fn beta_delivery(uri: &str) -> duck_v1beta1::DeliverySpec {
    duck_v1beta1::DeliverySpec {
        dead_letter_sink: Some(dead_letter_sink(uri)),
        retry: Some(5),
        backoff_policy: Some(duck_v1beta1::BackoffPolicyType::Linear),
        backoff_delay: Some("5s".into()),
    }
}

fn v1_delivery(uri: &str) -> duck_v1::DeliverySpec {
    duck_v1::DeliverySpec {
        dead_letter_sink: Some(dead_letter_sink(uri)),
        retry: Some(5),
        backoff_policy: Some(duck_v1::BackoffPolicyType::Linear),
        backoff_delay: Some("5s".into()),
    }
}

pub fn beta_full() -> v1beta1::Channel {
    v1beta1::Channel {
        metadata: metadata(),
        spec: v1beta1::ChannelSpec {
            channel_template: Some(v1beta1::ChannelTemplateSpec {
                type_meta: template(),
                spec: None,
            }),
            channelable: duck_v1beta1::ChannelableSpec {
                subscribable: duck_v1beta1::SubscribableSpec {
                    subscribers: vec![duck_v1beta1::SubscriberSpec {
                        uid: "uid-1".into(),
                        generation: 7,
                        subscriber_uri: Some(http("http://subscriber.example.com")),
                        reply_uri: Some(http("http://reply.example.com")),
                        delivery: Some(beta_delivery("http://subscriber.dls.example.com")),
                    }],
                },
            },
        },
        status: v1beta1::ChannelStatus {
            channelable: duck_v1beta1::ChannelableStatus {
                status: status(),
                address_status: address_status(),
                subscribable_status: duck_v1beta1::SubscribableStatus {
                    subscribers: vec![duck_v1beta1::SubscriberStatus {
                        uid: "status-uid-1".into(),
                        observed_generation: 99,
                        ready: ConditionStatus::True,
                        message: Some("msg".into()),
                    }],
                },
            },
            channel: Some(channel_reference()),
        },
    }
}

pub fn v1_full() -> v1::Channel {
    let mut channel = v1_full_without_channel_delivery();
    channel.spec.channelable.delivery = Some(v1_delivery("http://dls"));
    channel
}

pub fn v1_full_without_channel_delivery() -> v1::Channel {
    v1::Channel {
        metadata: metadata(),
        spec: v1::ChannelSpec {
            channel_template: Some(v1::ChannelTemplateSpec {
                type_meta: template(),
                spec: None,
            }),
            channelable: duck_v1::ChannelableSpec {
                subscribable: duck_v1::SubscribableSpec {
                    subscribers: vec![duck_v1::SubscriberSpec {
                        uid: "uid-1".into(),
                        generation: 7,
                        subscriber_uri: Some(http("http://subscriber.example.com")),
                        reply_uri: Some(http("http://reply.example.com")),
                        delivery: Some(v1_delivery("http://subscriber.dls.example.com")),
                    }],
                },
                delivery: None,
            },
        },
        status: v1::ChannelStatus {
            channelable: duck_v1::ChannelableStatus {
                status: status(),
                address_status: address_status(),
                subscribable_status: duck_v1::SubscribableStatus {
                    subscribers: vec![duck_v1::SubscriberStatus {
                        uid: "status-uid-1".into(),
                        observed_generation: 99,
                        ready: ConditionStatus::True,
                        message: Some("msg".into()),
                    }],
                },
            },
            channel: Some(channel_reference()),
        },
    }
}

fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file)
}

/// Read and parse a JSON manifest from `tests/fixtures`.
pub fn load_json<T: DeserializeOwned>(file: &str) -> T {
    let path = fixture_path(file);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

/// Read and parse a YAML manifest from `tests/fixtures`.
pub fn load_yaml<T: DeserializeOwned>(file: &str) -> T {
    let path = fixture_path(file);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_yaml::from_str(&text)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}
