//! Downgrade impact analysis: what a `v1` to `v1beta1` conversion drops.
//!
//! Converting to `v1beta1` is the one lossy direction. The engine runs this
//! analysis on every downgrade so the loss shows up in the logs, and
//! callers can run it up front to decide whether a downgrade is acceptable.

use crate::messaging::v1;
use crate::version_tag::DuckVersion;
use serde::{Deserialize, Serialize};

/// Analysis of what will be lost when expressing a `v1` Channel as `v1beta1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DowngradeImpact {
    pub source_version: DuckVersion,
    pub target_version: DuckVersion,
    pub data_loss: Vec<DataLoss>,
    pub summary: String,
}

impl DowngradeImpact {
    /// True when the downgrade round-trips without loss.
    pub fn is_lossless(&self) -> bool {
        self.data_loss.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataLoss {
    pub component: String,
    pub field: String,
    pub affected_count: usize,
    pub description: String,
    pub outcome: DataLossOutcome,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataLossOutcome {
    /// No slot in the target; a reverse conversion will not restore it.
    Discarded,
}

impl std::fmt::Display for DataLossOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discarded => write!(f, "will be discarded"),
        }
    }
}

/// A `v1` field with no `v1beta1` counterpart.
struct V1OnlyField {
    component: &'static str,
    field: &'static str,
    description: &'static str,
    count: fn(&v1::Channel) -> usize,
}

fn count_channel_delivery(channel: &v1::Channel) -> usize {
    usize::from(channel.delivery().is_some())
}

/// Registry of `v1` fields that `v1beta1` cannot represent.
const V1_ONLY_FIELDS: &[V1OnlyField] = &[V1OnlyField {
    component: "spec",
    field: "delivery",
    description: "channel-wide delivery policy has no v1beta1 equivalent",
    count: count_channel_delivery,
}];

/// Analyze the impact of converting `channel` to `v1beta1`.
pub fn analyze_downgrade_impact(channel: &v1::Channel) -> DowngradeImpact {
    let data_loss: Vec<DataLoss> = V1_ONLY_FIELDS
        .iter()
        .filter_map(|f| {
            let affected_count = (f.count)(channel);
            (affected_count > 0).then(|| DataLoss {
                component: f.component.to_string(),
                field: f.field.to_string(),
                affected_count,
                description: f.description.to_string(),
                outcome: DataLossOutcome::Discarded,
            })
        })
        .collect();

    let summary = if data_loss.is_empty() {
        "Conversion is lossless.".to_string()
    } else {
        let fields: Vec<String> = data_loss
            .iter()
            .map(|d| format!("{}.{}", d.component, d.field))
            .collect();
        format!(
            "Conversion will discard {} field(s): {}.",
            data_loss.len(),
            fields.join(", ")
        )
    };

    DowngradeImpact {
        source_version: DuckVersion::V1,
        target_version: DuckVersion::V1Beta1,
        data_loss,
        summary,
    }
}

/// Format a human-readable downgrade warning message.
pub fn format_downgrade_message(impact: &DowngradeImpact) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Converting Channel from {} to {}",
        impact.source_version, impact.target_version
    ));

    if impact.is_lossless() {
        lines.push("No data will be lost.".to_string());
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.push("Data that will be affected:".to_string());
    for loss in &impact.data_loss {
        lines.push(format!(
            "  • {}.{} ({} items) - {} - {}",
            loss.component, loss.field, loss.affected_count, loss.outcome, loss.description
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Converting back to {} will not restore these fields.",
        impact.source_version
    ));

    lines.join("\n")
}
