/// Accuracy must be strictly greater than this for approval.
pub const ACCURACY_THRESHOLD: f64 = 0.6;

pub const ACCURACY_KEYS: &[&str] = &["accuracy"];

/// Tried in order; the training stage writes `f1_score`.
pub const F1_KEYS: &[&str] = &["f1_score", "f1"];

pub const DEFAULT_METRICS_PATH: &str = "metrics.json";
pub const DEFAULT_SBOM_PATH: &str = "reports/sbom/bom.json";
pub const DEFAULT_FAIRNESS_PATH: &str = "reports/fairness/fairness_report.html";
pub const DEFAULT_QUALITY_PATH: &str = "reports/quality/giskard_report.html";
pub const DEFAULT_SECURITY_PATH: &str = "reports/security/garak_report.jsonl";
pub const DEFAULT_OUTPUT_PATH: &str = "reports/governance/credo_report.html";
pub const DEFAULT_MARKDOWN_OUTPUT_PATH: &str = "reports/governance/credo_report.md";
