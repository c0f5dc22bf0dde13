use crate::domain::models::{CheckName, CheckStatus, GovernanceReport};
use crate::error::GovernanceError;
use crate::services::artifacts::probe_all;
use crate::services::config::GovernanceConfig;
use crate::services::metrics::{accuracy, extra_metrics, f1, load_metrics};
use crate::services::render::render;
use crate::services::storage::write_report;
use crate::services::verdict::{decide, fingerprint, review_reasons};

pub struct Evaluator {
    config: GovernanceConfig,
}

impl Evaluator {
    pub fn new(config: GovernanceConfig) -> Self {
        Evaluator { config }
    }

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    /// Reads inputs and decides. Never fails: missing or malformed inputs
    /// surface as "missing"/"not available" in the result.
    pub fn assess(&self) -> GovernanceReport {
        let load = load_metrics(&self.config.metrics_path);
        let accuracy = accuracy(&load);
        let f1 = f1(&load);
        let checks = probe_all(&self.config);

        let sbom = checks
            .iter()
            .find(|c| c.name == CheckName::Sbom)
            .map(|c| c.status)
            .unwrap_or(CheckStatus::Missing);
        let threshold = self.config.accuracy_threshold;
        let verdict = decide(accuracy, sbom, threshold);

        GovernanceReport {
            accuracy,
            f1,
            extra_metrics: extra_metrics(&load),
            metrics_source: load.source(),
            fingerprint: fingerprint(accuracy, f1, &checks, verdict, threshold),
            review_reasons: review_reasons(accuracy, sbom, threshold),
            checks,
            verdict,
            threshold,
        }
    }

    pub fn render(&self, report: &GovernanceReport) -> String {
        render(report, self.config.format, self.config.lang)
    }

    /// Assess, render and persist. Only writing the report can fail.
    pub fn evaluate(&self) -> Result<GovernanceReport, GovernanceError> {
        let report = self.assess();
        let body = self.render(&report);
        write_report(&self.config.output_path, &body)?;
        log::info!(
            "verdict {} ({} present, {} missing), report written to {}",
            report.verdict.code(),
            report.present_count(),
            report.missing_count(),
            self.config.output_path.display()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ReportFormat, ReportLang};
    use crate::domain::models::{MetricValue, Verdict};
    use crate::services::config::{ConfigFile, Overrides};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().expect("parent")).expect("mkdir");
        fs::write(p, "{}").expect("write");
    }

    fn metrics(root: &Path, body: &str) {
        fs::write(root.join("metrics.json"), body).expect("write metrics");
    }

    #[test]
    fn approved_with_sbom_and_good_accuracy() {
        let tmp = TempDir::new().expect("temp dir");
        metrics(tmp.path(), r#"{"accuracy": 0.85, "f1_score": 0.80}"#);
        touch(tmp.path(), "reports/sbom/bom.json");

        let ev = Evaluator::new(GovernanceConfig::with_root(tmp.path()));
        let report = ev.evaluate().expect("evaluate");

        assert_eq!(report.verdict, Verdict::Approved);
        assert_eq!(report.present_count(), 1);
        assert_eq!(report.missing_count(), 3);
        assert!(report.review_reasons.is_empty());

        let html = fs::read_to_string(&ev.config().output_path).expect("report written");
        assert!(html.contains("0.85"));
        assert!(html.contains("APPROVED"));
    }

    #[test]
    fn nothing_upstream_still_produces_a_report() {
        let tmp = TempDir::new().expect("temp dir");
        let ev = Evaluator::new(GovernanceConfig::with_root(tmp.path()));
        let report = ev.evaluate().expect("evaluate");

        assert_eq!(report.verdict, Verdict::NeedsReview);
        assert_eq!(report.accuracy, MetricValue::NotAvailable);
        assert_eq!(report.f1, MetricValue::NotAvailable);
        assert_eq!(report.missing_count(), 4);
        assert_eq!(report.metrics_source.status, "missing");

        let html = fs::read_to_string(&ev.config().output_path).expect("report written");
        assert!(html.contains("<td>accuracy</td><td>not available</td>"));
        assert!(html.contains("<td>F1</td><td>not available</td>"));
        assert!(html.contains("NEEDS_REVIEW"));
    }

    #[test]
    fn non_numeric_accuracy_needs_review() {
        let tmp = TempDir::new().expect("temp dir");
        metrics(tmp.path(), r#"{"accuracy": "excellent", "f1": 0.9}"#);
        touch(tmp.path(), "reports/sbom/bom.json");

        let report = Evaluator::new(GovernanceConfig::with_root(tmp.path())).assess();
        assert_eq!(report.verdict, Verdict::NeedsReview);
        assert_eq!(report.f1, MetricValue::Available(0.9));
        assert_eq!(report.review_reasons, vec!["accuracy_not_available"]);
    }

    #[test]
    fn missing_sbom_blocks_approval_regardless_of_accuracy() {
        let tmp = TempDir::new().expect("temp dir");
        metrics(tmp.path(), r#"{"accuracy": 0.99}"#);
        touch(tmp.path(), "reports/fairness/fairness_report.html");
        touch(tmp.path(), "reports/security/garak_report.jsonl");

        let report = Evaluator::new(GovernanceConfig::with_root(tmp.path())).assess();
        assert_eq!(report.present_count(), 2);
        assert_eq!(report.missing_count(), 2);
        assert_eq!(report.verdict, Verdict::NeedsReview);
        assert_eq!(
            report
                .checks
                .iter()
                .find(|c| c.name == CheckName::Quality)
                .map(|c| c.status),
            Some(CheckStatus::Missing)
        );
    }

    #[test]
    fn scan_report_links_resolve_from_written_report() {
        let tmp = TempDir::new().expect("temp dir");
        touch(tmp.path(), "reports/quality/giskard_report.html");
        touch(tmp.path(), "reports/fairness/fairness_report.html");

        let ev = Evaluator::new(GovernanceConfig::with_root(tmp.path()));
        ev.evaluate().expect("evaluate");
        let html = fs::read_to_string(&ev.config().output_path).expect("report written");
        let report_dir = ev.config().output_path.parent().expect("report dir");

        let hrefs: Vec<&str> = html
            .split("<a href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(hrefs.len(), 2);
        for href in hrefs {
            assert!(report_dir.join(href).exists(), "{href} does not resolve");
        }
    }

    #[test]
    fn rerun_is_byte_identical() {
        let tmp = TempDir::new().expect("temp dir");
        metrics(tmp.path(), r#"{"accuracy": 0.7, "f1_score": 0.65, "recall": 0.6}"#);
        touch(tmp.path(), "reports/sbom/bom.json");
        touch(tmp.path(), "reports/quality/giskard_report.html");

        let ev = Evaluator::new(GovernanceConfig::with_root(tmp.path()));
        let first_report = ev.evaluate().expect("first run");
        let first = fs::read(&ev.config().output_path).expect("read first");
        let second_report = ev.evaluate().expect("second run");
        let second = fs::read(&ev.config().output_path).expect("read second");

        assert_eq!(first, second);
        assert_eq!(first_report, second_report);
    }

    #[test]
    fn injected_paths_and_markdown_output() {
        let tmp = TempDir::new().expect("temp dir");
        let file: ConfigFile = toml::from_str(
            r#"[paths]
metrics = "ml/metrics.json"
sbom = "supply/sbom.spdx"
"#,
        )
        .expect("parse config");
        fs::create_dir_all(tmp.path().join("ml")).expect("mkdir");
        fs::write(tmp.path().join("ml/metrics.json"), r#"{"accuracy": 0.9}"#).expect("write");
        touch(tmp.path(), "supply/sbom.spdx");

        let overrides = Overrides {
            format: Some(ReportFormat::Markdown),
            lang: Some(ReportLang::En),
            output: None,
        };
        let cfg = GovernanceConfig::build(tmp.path().to_path_buf(), &file, &overrides);
        let ev = Evaluator::new(cfg);
        let report = ev.evaluate().expect("evaluate");

        assert_eq!(report.verdict, Verdict::Approved);
        let md = fs::read_to_string(tmp.path().join("reports/governance/credo_report.md"))
            .expect("markdown report");
        assert!(md.contains("| sbom | `supply/sbom.spdx` | present |"));
    }
}
