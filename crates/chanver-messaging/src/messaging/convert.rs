//! Field mapper for the Channel-level types.
//!
//! Builds on the duck mappings in [`crate::duck::convert`]. These produce a
//! fully populated target but do not touch the version annotation; the
//! conversion engine records that after mapping.

use super::{v1, v1beta1};

impl From<&v1beta1::ChannelTemplateSpec> for v1::ChannelTemplateSpec {
    fn from(source: &v1beta1::ChannelTemplateSpec) -> Self {
        Self {
            type_meta: source.type_meta.clone(),
            spec: source.spec.clone(),
        }
    }
}

impl From<&v1::ChannelTemplateSpec> for v1beta1::ChannelTemplateSpec {
    fn from(source: &v1::ChannelTemplateSpec) -> Self {
        Self {
            type_meta: source.type_meta.clone(),
            spec: source.spec.clone(),
        }
    }
}

impl From<&v1beta1::ChannelSpec> for v1::ChannelSpec {
    fn from(source: &v1beta1::ChannelSpec) -> Self {
        Self {
            channel_template: source.channel_template.as_ref().map(Into::into),
            channelable: (&source.channelable).into(),
        }
    }
}

impl From<&v1::ChannelSpec> for v1beta1::ChannelSpec {
    /// Lossy: drops `channelable.delivery`.
    fn from(source: &v1::ChannelSpec) -> Self {
        Self {
            channel_template: source.channel_template.as_ref().map(Into::into),
            channelable: (&source.channelable).into(),
        }
    }
}

impl From<&v1beta1::ChannelStatus> for v1::ChannelStatus {
    fn from(source: &v1beta1::ChannelStatus) -> Self {
        Self {
            channelable: (&source.channelable).into(),
            channel: source.channel.clone(),
        }
    }
}

impl From<&v1::ChannelStatus> for v1beta1::ChannelStatus {
    fn from(source: &v1::ChannelStatus) -> Self {
        Self {
            channelable: (&source.channelable).into(),
            channel: source.channel.clone(),
        }
    }
}

impl From<&v1beta1::Channel> for v1::Channel {
    fn from(source: &v1beta1::Channel) -> Self {
        Self {
            metadata: source.metadata.clone(),
            spec: (&source.spec).into(),
            status: (&source.status).into(),
        }
    }
}

impl From<&v1::Channel> for v1beta1::Channel {
    /// Lossy: drops the channel-wide delivery policy.
    fn from(source: &v1::Channel) -> Self {
        Self {
            metadata: source.metadata.clone(),
            spec: (&source.spec).into(),
            status: (&source.status).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanver_core::{KReference, ObjectMeta, TypeMeta};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_template_spec_payload_is_copied() {
        let source = v1beta1::ChannelTemplateSpec {
            type_meta: TypeMeta::new("InMemoryChannel", "messaging.knative.dev/v1"),
            spec: Some(json!({"delivery": {"retry": 3}})),
        };
        let target = v1::ChannelTemplateSpec::from(&source);
        assert_eq!(target.type_meta.kind, "InMemoryChannel");
        assert_eq!(target.spec, source.spec);
    }

    #[test]
    fn test_status_channel_reference_is_copied() {
        let source = v1::ChannelStatus {
            channel: Some(KReference {
                kind: "u-channel-kind".into(),
                namespace: "u-channel-namespace".into(),
                name: "u-channel-name".into(),
                api_version: "u-channel-apiversion".into(),
            }),
            ..v1::ChannelStatus::default()
        };
        let target = v1beta1::ChannelStatus::from(&source);
        assert_eq!(target.channel, source.channel);
    }

    #[test]
    fn test_channel_mapping_does_not_add_annotations() {
        let source = v1beta1::Channel {
            metadata: ObjectMeta::named("channel-name", "channel-ns"),
            ..v1beta1::Channel::default()
        };
        let target = v1::Channel::from(&source);
        assert!(target.metadata.annotations.is_none());
        assert_eq!(target.metadata, source.metadata);
    }
}
