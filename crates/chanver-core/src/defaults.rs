//! Centralized default constants for chanver.
//!
//! **This module is the single source of truth** for shared identifiers.
//! Both crates reference these constants instead of repeating string
//! literals.

// =============================================================================
// API GROUPS
// =============================================================================

/// API group of the messaging resources.
pub const MESSAGING_GROUP: &str = "messaging.knative.dev";

/// Kind name of the Channel resource.
pub const CHANNEL_KIND: &str = "Channel";

// =============================================================================
// VERSIONS
// =============================================================================

/// Identifier of the older Channel schema.
pub const VERSION_V1BETA1: &str = "v1beta1";

/// Identifier of the newer Channel schema.
pub const VERSION_V1: &str = "v1";

/// Full API version of the older Channel schema.
pub const API_VERSION_V1BETA1: &str = "messaging.knative.dev/v1beta1";

/// Full API version of the newer Channel schema.
pub const API_VERSION_V1: &str = "messaging.knative.dev/v1";

// =============================================================================
// ANNOTATIONS
// =============================================================================

/// Reserved annotation recording which subscribable duck version an
/// instance was last expressed in. Values are [`VERSION_V1BETA1`] or
/// [`VERSION_V1`].
pub const SUBSCRIBABLE_DUCK_VERSION_ANNOTATION: &str = "messaging.knative.dev/subscribable";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Enables the WARN event emitted when a conversion drops data.
pub const ENV_WARN_ON_LOSS: &str = "CHANVER_WARN_ON_LOSS";

/// Enables TRACE events for every mapped subscriber.
pub const ENV_TRACE_SUBSCRIBERS: &str = "CHANVER_TRACE_SUBSCRIBERS";
