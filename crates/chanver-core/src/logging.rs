//! Structured logging schema and field name constants for chanver.
//!
//! Both crates use these constants for consistent structured logging fields,
//! so log aggregation can query conversions by standardized field names.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | A conversion discarded data on the documented lossy path |
//! | DEBUG | One event per completed conversion |
//! | TRACE | Per-subscriber mapping |
//!
//! Library code never installs a subscriber; that is the caller's job.

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID carried by the conversion [`Context`](crate::Context).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "conversion"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "channel", "field_mapper", "version_tag"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "convert_to", "convert_from"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// `metadata.name` of the resource being converted.
pub const RESOURCE_NAME: &str = "resource_name";

/// `metadata.namespace` of the resource being converted.
pub const NAMESPACE: &str = "namespace";

/// Version identifier the conversion reads from.
pub const SOURCE_VERSION: &str = "source_version";

/// Version identifier the conversion writes to.
pub const TARGET_VERSION: &str = "target_version";

/// UID of a subscriber entry.
pub const SUBSCRIBER_UID: &str = "subscriber_uid";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of subscriber entries carried across.
pub const SUBSCRIBER_COUNT: &str = "subscriber_count";

/// Number of distinct fields discarded by a conversion.
pub const LOSS_COUNT: &str = "loss_count";

// ─── Field values ──────────────────────────────────────────────────────────

/// Subsystem value used by every conversion event.
pub const SUBSYSTEM_CONVERSION: &str = "conversion";

/// Component value for whole-resource conversion events.
pub const COMPONENT_CHANNEL: &str = "channel";

/// Component value for per-field mapping events.
pub const COMPONENT_FIELD_MAPPER: &str = "field_mapper";
