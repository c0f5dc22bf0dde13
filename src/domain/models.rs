use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Outcome of reading the metrics document.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsLoad {
    Loaded(serde_json::Map<String, serde_json::Value>),
    Absent,
    Invalid(String),
}

impl MetricsLoad {
    pub fn entries(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            MetricsLoad::Loaded(map) => Some(map),
            MetricsLoad::Absent | MetricsLoad::Invalid(_) => None,
        }
    }

    pub fn source(&self) -> MetricsSource {
        match self {
            MetricsLoad::Loaded(_) => MetricsSource {
                status: "loaded".to_string(),
                detail: None,
            },
            MetricsLoad::Absent => MetricsSource {
                status: "missing".to_string(),
                detail: None,
            },
            MetricsLoad::Invalid(reason) => MetricsSource {
                status: "invalid".to_string(),
                detail: Some(reason.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSource {
    pub status: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Available(f64),
    NotAvailable,
}

impl MetricValue {
    pub fn value(self) -> Option<f64> {
        match self {
            MetricValue::Available(v) => Some(v),
            MetricValue::NotAvailable => None,
        }
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(MetricValue::NotAvailable, MetricValue::Available)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedMetric {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckName {
    Sbom,
    Fairness,
    Quality,
    Security,
}

impl CheckName {
    pub const ALL: [CheckName; 4] = [
        CheckName::Sbom,
        CheckName::Fairness,
        CheckName::Quality,
        CheckName::Security,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckName::Sbom => "sbom",
            CheckName::Fairness => "fairness",
            CheckName::Quality => "quality",
            CheckName::Security => "security",
        }
    }

    /// Scanner that produces the artifact, where it has a well-known name.
    pub fn tool(self) -> Option<&'static str> {
        match self {
            CheckName::Quality => Some("giskard"),
            CheckName::Security => Some("garak"),
            CheckName::Sbom | CheckName::Fairness => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Present,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactCheck {
    pub name: CheckName,
    pub path: String,
    pub status: CheckStatus,
    /// Link target as seen from the report's own directory.
    #[serde(skip)]
    pub href: String,
}

impl ArtifactCheck {
    pub fn is_present(&self) -> bool {
        self.status == CheckStatus::Present
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Approved,
    NeedsReview,
}

impl Verdict {
    pub fn code(self) -> &'static str {
        match self {
            Verdict::Approved => "APPROVED",
            Verdict::NeedsReview => "NEEDS_REVIEW",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GovernanceReport {
    pub accuracy: MetricValue,
    pub f1: MetricValue,
    pub extra_metrics: Vec<NamedMetric>,
    pub metrics_source: MetricsSource,
    pub checks: Vec<ArtifactCheck>,
    pub verdict: Verdict,
    pub review_reasons: Vec<String>,
    pub threshold: f64,
    pub fingerprint: String,
}

impl GovernanceReport {
    pub fn present_count(&self) -> usize {
        self.checks.iter().filter(|c| c.is_present()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.checks.len() - self.present_count()
    }
}

#[derive(Serialize)]
pub struct EvaluationSummary {
    pub verdict: Verdict,
    pub review_reasons: Vec<String>,
    pub accuracy: Option<f64>,
    pub f1: Option<f64>,
    pub metrics_source: MetricsSource,
    pub checks: Vec<ArtifactCheck>,
    pub present_count: usize,
    pub missing_count: usize,
    pub threshold: f64,
    pub fingerprint: String,
    pub report_path: Option<String>,
}

impl EvaluationSummary {
    pub fn from_report(report: &GovernanceReport, report_path: Option<String>) -> Self {
        EvaluationSummary {
            verdict: report.verdict,
            review_reasons: report.review_reasons.clone(),
            accuracy: report.accuracy.value(),
            f1: report.f1.value(),
            metrics_source: report.metrics_source.clone(),
            checks: report.checks.clone(),
            present_count: report.present_count(),
            missing_count: report.missing_count(),
            threshold: report.threshold,
            fingerprint: report.fingerprint.clone(),
            report_path,
        }
    }
}
