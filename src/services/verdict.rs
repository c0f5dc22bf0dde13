use crate::domain::models::{ArtifactCheck, CheckStatus, MetricValue, Verdict};
use sha2::{Digest, Sha256};

/// Approval needs an SBOM and an accuracy strictly above the threshold.
pub fn decide(accuracy: MetricValue, sbom: CheckStatus, threshold: f64) -> Verdict {
    let accuracy_ok = matches!(accuracy, MetricValue::Available(a) if a > threshold);
    if sbom == CheckStatus::Present && accuracy_ok {
        Verdict::Approved
    } else {
        Verdict::NeedsReview
    }
}

/// Reasons shown next to a `NEEDS_REVIEW` verdict. Empty when approved.
pub fn review_reasons(accuracy: MetricValue, sbom: CheckStatus, threshold: f64) -> Vec<String> {
    let mut reasons = Vec::new();
    if sbom != CheckStatus::Present {
        reasons.push("sbom".to_string());
    }
    match accuracy {
        MetricValue::Available(a) if a > threshold => {}
        MetricValue::Available(_) => reasons.push("accuracy_below_threshold".to_string()),
        MetricValue::NotAvailable => reasons.push("accuracy_not_available".to_string()),
    }
    reasons
}

/// SHA-256 over the decision-bearing inputs. Paths are left out so the value
/// does not depend on where the project is checked out.
pub fn fingerprint(
    accuracy: MetricValue,
    f1: MetricValue,
    checks: &[ArtifactCheck],
    verdict: Verdict,
    threshold: f64,
) -> String {
    let statuses: serde_json::Map<String, serde_json::Value> = checks
        .iter()
        .map(|c| (c.name.as_str().to_string(), serde_json::json!(c.status)))
        .collect();
    let canonical = serde_json::json!({
        "accuracy": accuracy.value(),
        "f1": f1.value(),
        "checks": statuses,
        "threshold": threshold,
        "verdict": verdict,
    });
    let mut hasher = Sha256::new();
    hasher.update(canonical.to_string().as_bytes());
    hex::encode(hasher.finalize())
}
