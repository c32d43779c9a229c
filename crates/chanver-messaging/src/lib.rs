//! # chanver-messaging
//!
//! The messaging `Channel` resource in its `v1beta1` and `v1` schema
//! versions, and the engine that converts between them with round-trip
//! fidelity.
//!
//! Converting `v1beta1 -> v1 -> v1beta1` always reproduces the input, plus
//! the [subscribable duck annotation](version_tag). Converting
//! `v1 -> v1beta1 -> v1` does too, unless the `v1` channel sets a
//! channel-wide delivery policy: `v1beta1` has no place for it, so it is
//! dropped. [`loss::analyze_downgrade_impact`] reports that ahead of time.
//!
//! ```
//! use chanver_core::{Context, Convertible, ObjectMeta};
//! use chanver_messaging::messaging::{v1, v1beta1};
//! use chanver_messaging::version_tag::{recorded, DuckVersion};
//!
//! let ctx = Context::background();
//! let beta = v1beta1::Channel {
//!     metadata: ObjectMeta::named("channel-name", "channel-ns"),
//!     ..Default::default()
//! };
//!
//! let mut current = v1::Channel::default();
//! beta.convert_to(&ctx, &mut current)?;
//! assert_eq!(recorded(&current.metadata), Some(DuckVersion::V1));
//! # Ok::<(), chanver_core::Error>(())
//! ```

pub mod conversion;
pub mod duck;
pub mod loss;
pub mod messaging;
pub mod roundtrip;
pub mod schema;
pub mod version_tag;

pub use conversion::{convert_into, peer_mut, peer_ref};
pub use loss::{analyze_downgrade_impact, format_downgrade_message, DataLoss, DowngradeImpact};
pub use messaging::ChannelVersion;
pub use version_tag::{DuckVersion, SUBSCRIBABLE_DUCK_VERSION_ANNOTATION};
