//! Generic duck types shared by every resource version.
//!
//! A duck type is a shape many resources embed (a reference, a
//! destination, a status block). These are version-independent, so both
//! Channel versions embed the same Rust types and the field mapper copies
//! them by value.

pub mod addressable;
pub mod destination;
pub mod status;

pub use addressable::{AddressStatus, Addressable};
pub use destination::{Destination, KReference};
pub use status::{Condition, ConditionSeverity, ConditionStatus, Status};
