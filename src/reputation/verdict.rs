//! Verdicts derived from a file report.

use crate::output::TableRow;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Classification of one hash.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Every engine that looked at the file left it undetected.
    Clean,
    /// At least one engine reported something other than undetected.
    Flagged,
    /// No report: unknown hash, API error or malformed response.
    Unknown,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Clean => "clean",
            Verdict::Flagged => "flagged",
            Verdict::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Classify a file report by its `last_analysis_stats` counters.
///
/// Missing stats count as an empty map, which classifies as clean.
pub fn classify(report: Option<&Value>) -> Verdict {
    let Some(attributes) = report
        .and_then(|r| r.get("data"))
        .and_then(|d| d.get("attributes"))
    else {
        return Verdict::Unknown;
    };

    let (total, undetected) = match attributes
        .get("last_analysis_stats")
        .and_then(Value::as_object)
    {
        Some(stats) => (
            stats.values().filter_map(Value::as_u64).sum::<u64>(),
            stats
                .get("undetected")
                .and_then(Value::as_u64)
                .unwrap_or(0),
        ),
        None => (0, 0),
    };

    if total == undetected {
        Verdict::Clean
    } else {
        Verdict::Flagged
    }
}

/// One row of the lookup output table.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    pub hash: String,
    pub verdict: Verdict,
}

impl TableRow for LookupRow {
    const HEADERS: &'static [&'static str] = &["hash", "verdict"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_clean() {
        let report = json!({
            "data": {"attributes": {"last_analysis_stats": {
                "harmless": 0, "malicious": 0, "suspicious": 0, "undetected": 72
            }}}
        });
        assert_eq!(classify(Some(&report)), Verdict::Clean);
    }

    #[test]
    fn test_classify_flagged() {
        let report = json!({
            "data": {"attributes": {"last_analysis_stats": {
                "malicious": 3, "suspicious": 1, "undetected": 60, "type-unsupported": 4
            }}}
        });
        assert_eq!(classify(Some(&report)), Verdict::Flagged);
    }

    #[test]
    fn test_classify_unsupported_counts_as_flagged() {
        // anything outside `undetected` breaks the equality
        let report = json!({
            "data": {"attributes": {"last_analysis_stats": {"undetected": 10, "timeout": 1}}}
        });
        assert_eq!(classify(Some(&report)), Verdict::Flagged);
    }

    #[test]
    fn test_classify_missing_stats_is_clean() {
        let report = json!({"data": {"attributes": {}}});
        assert_eq!(classify(Some(&report)), Verdict::Clean);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify(None), Verdict::Unknown);
        assert_eq!(classify(Some(&json!({"error": {}}))), Verdict::Unknown);
        assert_eq!(classify(Some(&json!({"data": {}}))), Verdict::Unknown);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Flagged.to_string(), "flagged");
        assert_eq!(
            serde_json::to_string(&Verdict::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
