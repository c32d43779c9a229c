//! Round-trip verification for test suites.
//!
//! Hand-written fixtures never carry the subscribable duck annotation, but
//! anything that has passed through a real conversion does. Comparisons
//! therefore run against [`expect_tagged`]`(fixture, origin version)`, not
//! against the fixture itself.
//!
//! ## Usage
//!
//! ```rust
//! use chanver_core::{Context, ObjectMeta};
//! use chanver_messaging::messaging::{v1, v1beta1};
//! use chanver_messaging::roundtrip::round_trip;
//!
//! let input = v1beta1::Channel {
//!     metadata: ObjectMeta::named("channel-name", "channel-ns"),
//!     ..Default::default()
//! };
//! let got = round_trip::<_, v1::Channel>(&Context::background(), &input).unwrap();
//! assert_eq!(got.metadata.name, "channel-name");
//! ```

use crate::messaging::ChannelVersion;
use crate::version_tag::{self, DuckVersion};
use chanver_core::{Context, Convertible};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a round trip did not reproduce its input.
#[derive(Debug, Error)]
pub enum RoundTripError {
    #[error("Conversion failed: {0}")]
    Convert(#[from] chanver_core::Error),

    #[error("Round trip mismatch (-want, +got):\n{diff}")]
    Mismatch { diff: String },
}

/// Clone of `fixture` carrying the annotation a conversion to `version`
/// writes. Creates the annotation map if the fixture has none.
pub fn expect_tagged<C: ChannelVersion>(fixture: &C, version: DuckVersion) -> C {
    let mut expected = fixture.clone();
    version_tag::record(expected.metadata_mut(), version);
    expected
}

/// Convert `input` to `I`, back to `C`, and compare against the tagged
/// input. Returns the converted-back value on success.
pub fn round_trip<C, I>(ctx: &Context, input: &C) -> Result<C, RoundTripError>
where
    C: ChannelVersion,
    I: Convertible + Default,
{
    let mut intermediate = I::default();
    input.convert_to(ctx, &mut intermediate)?;

    let mut got = C::default();
    got.convert_from(ctx, &intermediate)?;

    let want = expect_tagged(input, C::DUCK_VERSION);
    match diff(&want, &got) {
        None => Ok(got),
        Some(diff) => Err(RoundTripError::Mismatch { diff }),
    }
}

/// Line diff of the pretty JSON forms of `want` and `got`, or `None` when
/// they are equal.
pub fn diff<T: Serialize + PartialEq + fmt::Debug>(want: &T, got: &T) -> Option<String> {
    if want == got {
        return None;
    }

    let want_text = render(want);
    let got_text = render(got);
    let diff = similar::TextDiff::from_lines(&want_text, &got_text);
    let mut output = String::new();

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            similar::ChangeTag::Delete => "-",
            similar::ChangeTag::Insert => "+",
            similar::ChangeTag::Equal => " ",
        };
        output.push_str(&format!("{}{}", sign, change));
        if change.missing_newline() {
            output.push('\n');
        }
    }

    Some(output)
}

fn render<T: Serialize + fmt::Debug>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:#?}", value))
}
