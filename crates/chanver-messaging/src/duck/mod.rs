//! Eventing duck types, one module per schema version.
//!
//! The shapes are the same in both versions except for the channelable
//! aggregate: only `v1` allows a delivery policy outside any single
//! subscriber entry. `convert` holds the field mapper between the two.

pub mod convert;
pub mod v1;
pub mod v1beta1;
