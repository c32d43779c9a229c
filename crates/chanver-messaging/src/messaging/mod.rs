//! The Channel resource, one module per schema version.

pub mod convert;
pub mod v1;
pub mod v1beta1;

use crate::version_tag::DuckVersion;
use chanver_core::{Convertible, ObjectMeta};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Wire form of a Channel: its fields behind `apiVersion` and `kind`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a, Spec, Status> {
    api_version: &'static str,
    kind: &'static str,
    metadata: &'a ObjectMeta,
    spec: &'a Spec,
    status: &'a Status,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::v1beta1::Channel {}
    impl Sealed for super::v1::Channel {}
}

/// Operations common to every Channel version.
///
/// Sealed: the set of versions is closed, and each version converts only to
/// and from its peer.
pub trait ChannelVersion:
    sealed::Sealed
    + Convertible
    + Clone
    + Default
    + PartialEq
    + Serialize
    + DeserializeOwned
    + JsonSchema
{
    /// Version this type represents.
    const DUCK_VERSION: DuckVersion;

    fn metadata(&self) -> &ObjectMeta;

    fn metadata_mut(&mut self) -> &mut ObjectMeta;

    /// UIDs of the spec-level subscribers, in order.
    fn subscriber_uids(&self) -> Vec<&str>;
}
