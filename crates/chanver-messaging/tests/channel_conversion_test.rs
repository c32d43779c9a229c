//! Round-trip conversion between the two Channel versions.
//!
//! Every lossless round trip must reproduce its input exactly, plus the
//! subscribable duck annotation naming the version it ended on.

mod fixtures;
mod helpers;

use chanver_core::{ConversionConfig, Context, Convertible};
use chanver_messaging::messaging::{v1, v1beta1};
use chanver_messaging::roundtrip::{expect_tagged, round_trip};
use chanver_messaging::version_tag::{recorded, DuckVersion, SUBSCRIBABLE_DUCK_VERSION_ANNOTATION};
use pretty_assertions::assert_eq;

fn ctx() -> Context {
    helpers::init_tracing();
    Context::background().with_request_id("channel-conversion-test")
}

// ========== V1BETA1 -> V1 -> V1BETA1 ==========

#[test]
fn test_round_trip_v1beta1_min() {
    let input = fixtures::beta_min();
    let got = round_trip::<_, v1::Channel>(&ctx(), &input).unwrap();
    assert_eq!(recorded(&got.metadata), Some(DuckVersion::V1Beta1));
}

#[test]
fn test_round_trip_v1beta1_full() {
    let input = fixtures::beta_full();
    let got = round_trip::<_, v1::Channel>(&ctx(), &input).unwrap();
    assert_eq!(got, expect_tagged(&input, DuckVersion::V1Beta1));
}

#[test]
fn test_v1beta1_full_upgrade_carries_every_field() {
    let mut current = v1::Channel::default();
    fixtures::beta_full().convert_to(&ctx(), &mut current).unwrap();

    assert_eq!(
        current,
        expect_tagged(&fixtures::v1_full_without_channel_delivery(), DuckVersion::V1)
    );
}

// ========== V1 -> V1BETA1 -> V1 ==========

#[test]
fn test_round_trip_v1_min() {
    let input = fixtures::v1_min();
    let got = round_trip::<_, v1beta1::Channel>(&ctx(), &input).unwrap();
    assert_eq!(recorded(&got.metadata), Some(DuckVersion::V1));
}

#[test]
fn test_round_trip_v1_full_without_channel_delivery() {
    let input = fixtures::v1_full_without_channel_delivery();
    let got = round_trip::<_, v1beta1::Channel>(&ctx(), &input).unwrap();
    assert_eq!(got, expect_tagged(&input, DuckVersion::V1));
}

#[test]
fn test_v1_downgrade_matches_v1beta1_fixture() {
    let mut beta = v1beta1::Channel::default();
    beta.convert_from(&ctx(), &fixtures::v1_full()).unwrap();

    assert_eq!(beta, expect_tagged(&fixtures::beta_full(), DuckVersion::V1Beta1));
}

// ========== ANNOTATION ==========

#[test]
fn test_tag_on_intermediate_names_intermediate_version() {
    let mut current = v1::Channel::default();
    fixtures::beta_min().convert_to(&ctx(), &mut current).unwrap();
    assert_eq!(
        current.metadata.annotation(SUBSCRIBABLE_DUCK_VERSION_ANNOTATION),
        Some("v1")
    );

    let mut beta = v1beta1::Channel::default();
    fixtures::v1_min().convert_to(&ctx(), &mut beta).unwrap();
    assert_eq!(
        beta.metadata.annotation(SUBSCRIBABLE_DUCK_VERSION_ANNOTATION),
        Some("v1beta1")
    );
}

#[test]
fn test_existing_annotations_survive() {
    let mut input = fixtures::beta_full();
    input
        .metadata
        .annotations_mut()
        .insert("example.com/owner".into(), "team-a".into());

    let got = round_trip::<_, v1::Channel>(&ctx(), &input).unwrap();
    assert_eq!(got.metadata.annotation("example.com/owner"), Some("team-a"));
    assert_eq!(got.metadata.annotations.as_ref().map(|a| a.len()), Some(2));
}

#[test]
fn test_stale_tag_is_overwritten() {
    let mut input = fixtures::beta_min();
    chanver_messaging::version_tag::record(&mut input.metadata, DuckVersion::V1);

    let mut current = v1::Channel::default();
    input.convert_to(&ctx(), &mut current).unwrap();
    let mut back = v1beta1::Channel::default();
    back.convert_from(&ctx(), &current).unwrap();

    assert_eq!(recorded(&back.metadata), Some(DuckVersion::V1Beta1));
    assert_eq!(back, expect_tagged(&fixtures::beta_min(), DuckVersion::V1Beta1));
}

// ========== DIRECTION EQUIVALENCE ==========

#[test]
fn test_convert_to_and_convert_from_agree() {
    let source = fixtures::beta_full();

    let mut pushed = v1::Channel::default();
    source.convert_to(&ctx(), &mut pushed).unwrap();

    let mut pulled = v1::Channel::default();
    pulled.convert_from(&ctx(), &source).unwrap();

    assert_eq!(pushed, pulled);
}

#[test]
fn test_quiet_config_emits_no_warn_or_trace_events() {
    let logs = helpers::CapturedLogs::default();
    let ctx = Context::new(ConversionConfig::quiet());
    let input = fixtures::v1_full();

    logs.capture(|| {
        let mut beta = v1beta1::Channel::default();
        input.convert_to(&ctx, &mut beta).unwrap();
        let mut back = v1::Channel::default();
        back.convert_from(&ctx, &beta).unwrap();
    });

    let output = logs.contents();
    assert!(output.contains("Converted channel"), "{}", output);
    assert!(!output.contains(" WARN "), "{}", output);
    assert!(!output.contains("TRACE"), "{}", output);
    assert!(!output.contains("Mapped subscriber"), "{}", output);
}
