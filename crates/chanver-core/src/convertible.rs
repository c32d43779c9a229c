//! The conversion contract implemented by every versioned resource.

use crate::context::Context;
use crate::error::Result;
use std::any::Any;
use std::fmt;

/// A resource version that can be converted to and from the other members
/// of its version family.
///
/// Arguments are taken as trait objects so a caller holding "some version"
/// can convert without knowing which. Implementations resolve the argument's
/// concrete type first and return [`Error::TypeMismatch`](crate::Error) for
/// anything outside their family, before reading or writing any field.
///
/// After an error the target's state is unspecified; callers must discard
/// it rather than inspect it.
pub trait Convertible: fmt::Debug + Send + Sync + 'static {
    /// Populate `sink` from `self`.
    fn convert_to(&self, ctx: &Context, sink: &mut dyn Convertible) -> Result<()>;

    /// Populate `self` from `source`.
    fn convert_from(&mut self, ctx: &Context, source: &dyn Convertible) -> Result<()>;

    /// Concrete type name, reported in type mismatch errors.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
