//! Conversion engine for the Channel version family.
//!
//! Every call follows the same steps:
//!
//! 1. Downcast the `dyn Convertible` argument to the *other* Channel
//!    version. Anything else, including a Channel of the receiver's own
//!    version, is a type mismatch, reported before a single field is read
//!    or written.
//! 2. Map the source into a freshly built value of the target version
//!    (see [`crate::duck::convert`] and [`crate::messaging::convert`]).
//! 3. Replace the target wholesale and record the target's version in the
//!    subscribable duck annotation.

use crate::loss::analyze_downgrade_impact;
use crate::messaging::{v1, v1beta1, ChannelVersion};
use crate::version_tag;
use chanver_core::logging::{COMPONENT_CHANNEL, COMPONENT_FIELD_MAPPER, SUBSYSTEM_CONVERSION};
use chanver_core::{Context, Convertible, Error, Result};
use std::any::{self, Any};
use tracing::{debug, trace, warn};

/// Borrow `obj` as the peer version `P`.
pub fn peer_ref<P: ChannelVersion>(obj: &dyn Convertible) -> Result<&P> {
    obj.as_any()
        .downcast_ref::<P>()
        .ok_or_else(|| Error::type_mismatch(any::type_name::<P>(), obj.type_name()))
}

/// Mutably borrow `obj` as the peer version `P`.
pub fn peer_mut<P: ChannelVersion>(obj: &mut dyn Convertible) -> Result<&mut P> {
    let got = obj.type_name();
    obj.as_any_mut()
        .downcast_mut::<P>()
        .ok_or_else(|| Error::type_mismatch(any::type_name::<P>(), got))
}

/// Convert `source` into a new Channel of version `T`.
///
/// ```
/// use chanver_core::{Context, ObjectMeta};
/// use chanver_messaging::messaging::{v1, v1beta1};
///
/// let beta = v1beta1::Channel {
///     metadata: ObjectMeta::named("channel-name", "channel-ns"),
///     ..Default::default()
/// };
/// let current: v1::Channel = chanver_messaging::convert_into(&Context::background(), &beta)?;
/// assert_eq!(current.metadata.name, "channel-name");
/// # Ok::<(), chanver_core::Error>(())
/// ```
pub fn convert_into<T: ChannelVersion>(ctx: &Context, source: &dyn Convertible) -> Result<T> {
    let mut target = T::default();
    target.convert_from(ctx, source)?;
    Ok(target)
}

fn convert<S, T>(ctx: &Context, op: &'static str, source: &S, target: &mut T)
where
    S: ChannelVersion,
    T: ChannelVersion + for<'s> From<&'s S>,
{
    let subscriber_count = store(ctx, target, T::from(source));
    let metadata = source.metadata();

    debug!(
        subsystem = SUBSYSTEM_CONVERSION,
        component = COMPONENT_CHANNEL,
        op,
        request_id = ctx.request_id().unwrap_or_default(),
        resource_name = %metadata.name,
        namespace = %metadata.namespace,
        source_version = %S::DUCK_VERSION,
        target_version = %T::DUCK_VERSION,
        subscriber_count,
        "Converted channel"
    );
}

/// Replace `target` with `value` and tag it. Returns the subscriber count.
fn store<C: ChannelVersion>(ctx: &Context, target: &mut C, value: C) -> usize {
    *target = value;
    version_tag::record(target.metadata_mut(), C::DUCK_VERSION);

    let uids = target.subscriber_uids();
    if ctx.config().trace_subscribers {
        for uid in &uids {
            trace!(
                subsystem = SUBSYSTEM_CONVERSION,
                component = COMPONENT_FIELD_MAPPER,
                subscriber_uid = uid,
                target_version = %C::DUCK_VERSION,
                "Mapped subscriber"
            );
        }
    }
    uids.len()
}

fn report_loss(ctx: &Context, source: &v1::Channel) {
    if !ctx.config().warn_on_loss {
        return;
    }
    let impact = analyze_downgrade_impact(source);
    if impact.is_lossless() {
        return;
    }
    warn!(
        subsystem = SUBSYSTEM_CONVERSION,
        component = COMPONENT_CHANNEL,
        request_id = ctx.request_id().unwrap_or_default(),
        resource_name = %source.metadata.name,
        namespace = %source.metadata.namespace,
        loss_count = impact.data_loss.len(),
        summary = %impact.summary,
        "Channel conversion discarded data"
    );
}

impl Convertible for v1beta1::Channel {
    fn convert_to(&self, ctx: &Context, sink: &mut dyn Convertible) -> Result<()> {
        let sink: &mut v1::Channel = peer_mut(sink)?;
        convert(ctx, "convert_to", self, sink);
        Ok(())
    }

    fn convert_from(&mut self, ctx: &Context, source: &dyn Convertible) -> Result<()> {
        let source: &v1::Channel = peer_ref(source)?;
        report_loss(ctx, source);
        convert(ctx, "convert_from", source, self);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Convertible for v1::Channel {
    fn convert_to(&self, ctx: &Context, sink: &mut dyn Convertible) -> Result<()> {
        let sink: &mut v1beta1::Channel = peer_mut(sink)?;
        report_loss(ctx, self);
        convert(ctx, "convert_to", self, sink);
        Ok(())
    }

    fn convert_from(&mut self, ctx: &Context, source: &dyn Convertible) -> Result<()> {
        let source: &v1beta1::Channel = peer_ref(source)?;
        convert(ctx, "convert_from", source, self);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
