//! JSON Schema for each Channel version.
//!
//! The storage layer publishes these as the validation schema of the
//! corresponding CRD version.

use crate::messaging::{v1, v1beta1};
use crate::version_tag::DuckVersion;
use schemars::schema::RootSchema;
use schemars::schema_for;

/// Root schema of the Channel type for `version`.
pub fn channel_schema(version: DuckVersion) -> RootSchema {
    match version {
        DuckVersion::V1Beta1 => schema_for!(v1beta1::Channel),
        DuckVersion::V1 => schema_for!(v1::Channel),
    }
}
