//! # chanver-core
//!
//! Core types, traits, and abstractions for the chanver conversion library.
//!
//! This crate provides the version-independent building blocks every
//! versioned resource shares: object metadata, the generic duck types,
//! the [`Convertible`] trait and its single error kind.

pub mod config;
pub mod context;
pub mod convertible;
pub mod defaults;
pub mod duck;
pub mod error;
pub mod logging;
pub mod meta;

// Re-export commonly used types at crate root
pub use config::ConversionConfig;
pub use context::Context;
pub use convertible::Convertible;
pub use duck::{
    AddressStatus, Addressable, Condition, ConditionSeverity, ConditionStatus, Destination,
    KReference, Status,
};
pub use error::{Error, Result};
pub use meta::{ObjectMeta, TypeMeta};
pub use url::Url;
