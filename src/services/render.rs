use crate::cli::{ReportFormat, ReportLang};
use crate::domain::models::{
    ArtifactCheck, CheckName, CheckStatus, GovernanceReport, MetricValue, Verdict,
};

/// User-facing strings for one report language.
pub struct Labels {
    pub lang_code: &'static str,
    pub title: &'static str,
    pub metrics_heading: &'static str,
    pub metric_col: &'static str,
    pub value_col: &'static str,
    pub accuracy: &'static str,
    pub f1: &'static str,
    pub not_available: &'static str,
    pub source_label: &'static str,
    pub source_loaded: &'static str,
    pub source_missing: &'static str,
    pub source_invalid: &'static str,
    pub checklist_heading: &'static str,
    pub check_col: &'static str,
    pub path_col: &'static str,
    pub status_col: &'static str,
    pub present: &'static str,
    pub missing: &'static str,
    pub verdict_heading: &'static str,
    pub approved: &'static str,
    pub needs_review: &'static str,
    pub policy_note: &'static str,
    pub reason_sbom: &'static str,
    pub reason_below: &'static str,
    pub reason_no_accuracy: &'static str,
    pub fingerprint: &'static str,
}

static EN: Labels = Labels {
    lang_code: "en",
    title: "Governance Report",
    metrics_heading: "Model Performance Metrics",
    metric_col: "Metric",
    value_col: "Value",
    accuracy: "accuracy",
    f1: "F1",
    not_available: "not available",
    source_label: "Metrics source",
    source_loaded: "loaded",
    source_missing: "missing",
    source_invalid: "invalid",
    checklist_heading: "Compliance Checklist",
    check_col: "Check",
    path_col: "Path",
    status_col: "Status",
    present: "present",
    missing: "missing",
    verdict_heading: "Decision",
    approved: "APPROVED",
    needs_review: "NEEDS_REVIEW",
    policy_note: "Approval requires an SBOM and an accuracy above",
    reason_sbom: "SBOM is missing",
    reason_below: "accuracy does not exceed the threshold",
    reason_no_accuracy: "accuracy is not available",
    fingerprint: "Input fingerprint",
};

static TR: Labels = Labels {
    lang_code: "tr",
    title: "Yönetişim Raporu",
    metrics_heading: "Model Performans Metrikleri",
    metric_col: "Metrik",
    value_col: "Değer",
    accuracy: "doğruluk",
    f1: "F1",
    not_available: "veri yok",
    source_label: "Metrik kaynağı",
    source_loaded: "yüklendi",
    source_missing: "bulunamadı",
    source_invalid: "geçersiz",
    checklist_heading: "Uyumluluk Kontrol Listesi",
    check_col: "Kontrol",
    path_col: "Yol",
    status_col: "Durum",
    present: "mevcut",
    missing: "eksik",
    verdict_heading: "Karar",
    approved: "ONAYLANDI",
    needs_review: "İNCELEME GEREKLİ",
    policy_note: "Onay için SBOM ve şu değerin üzerinde doğruluk gerekir:",
    reason_sbom: "SBOM eksik",
    reason_below: "doğruluk eşiği aşmıyor",
    reason_no_accuracy: "doğruluk verisi yok",
    fingerprint: "Girdi parmak izi",
};

pub fn labels(lang: ReportLang) -> &'static Labels {
    match lang {
        ReportLang::En => &EN,
        ReportLang::Tr => &TR,
    }
}

impl Labels {
    pub fn status(&self, status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Present => self.present,
            CheckStatus::Missing => self.missing,
        }
    }

    pub fn metric(&self, v: MetricValue) -> String {
        match v {
            MetricValue::Available(x) => x.to_string(),
            MetricValue::NotAvailable => self.not_available.to_string(),
        }
    }

    /// Localized label, followed by the canonical code when they differ.
    pub fn verdict(&self, verdict: Verdict) -> String {
        let label = match verdict {
            Verdict::Approved => self.approved,
            Verdict::NeedsReview => self.needs_review,
        };
        if label == verdict.code() {
            label.to_string()
        } else {
            format!("{} ({})", label, verdict.code())
        }
    }

    fn reason(&self, code: &str) -> String {
        match code {
            "sbom" => self.reason_sbom.to_string(),
            "accuracy_below_threshold" => self.reason_below.to_string(),
            "accuracy_not_available" => self.reason_no_accuracy.to_string(),
            other => other.to_string(),
        }
    }

    fn source(&self, report: &GovernanceReport) -> String {
        let status = match report.metrics_source.status.as_str() {
            "loaded" => self.source_loaded,
            "missing" => self.source_missing,
            _ => self.source_invalid,
        };
        match &report.metrics_source.detail {
            Some(d) => format!("{} ({})", status, d),
            None => status.to_string(),
        }
    }
}

fn check_title(name: CheckName) -> String {
    match name.tool() {
        Some(tool) => format!("{} ({})", name.as_str(), tool),
        None => name.as_str().to_string(),
    }
}

/// Fairness and quality scans are HTML documents worth linking to.
fn linkable(check: &ArtifactCheck) -> bool {
    check.is_present() && matches!(check.name, CheckName::Fairness | CheckName::Quality)
}

pub fn render(report: &GovernanceReport, format: ReportFormat, lang: ReportLang) -> String {
    match format {
        ReportFormat::Html => render_html(report, labels(lang)),
        ReportFormat::Markdown => render_markdown(report, labels(lang)),
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Backslash-escapes characters that Markdown would treat as markup.
fn escape_md(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '|' | '#') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Inline code span whose fence is longer than any backtick run inside `s`.
fn code_span(s: &str) -> String {
    let longest = s.split(|c| c != '`').map(str::len).max().unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    let pad = if s.starts_with('`') || s.ends_with('`') { " " } else { "" };
    format!("{fence}{pad}{s}{pad}{fence}")
}

fn md_link_target(href: &str) -> String {
    href.replace(' ', "%20")
        .replace('(', "%28")
        .replace(')', "%29")
}

pub fn render_html(report: &GovernanceReport, l: &Labels) -> String {
    let mut metric_rows = vec![
        format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            l.accuracy,
            escape_html(&l.metric(report.accuracy))
        ),
        format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            l.f1,
            escape_html(&l.metric(report.f1))
        ),
    ];
    for m in &report.extra_metrics {
        metric_rows.push(format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&m.name),
            m.value
        ));
    }

    let check_rows: Vec<String> = report
        .checks
        .iter()
        .map(|c| {
            let path = escape_html(&c.path);
            let path_cell = if linkable(c) {
                format!("<a href=\"{}\">{}</a>", escape_html(&c.href), path)
            } else {
                path
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>",
                escape_html(&check_title(c.name)),
                path_cell,
                match c.status {
                    CheckStatus::Present => "present",
                    CheckStatus::Missing => "missing",
                },
                l.status(c.status)
            )
        })
        .collect();

    let verdict_class = match report.verdict {
        Verdict::Approved => "approved",
        Verdict::NeedsReview => "needs-review",
    };
    let reasons = if report.review_reasons.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = report
            .review_reasons
            .iter()
            .map(|r| format!("<li>{}</li>", escape_html(&l.reason(r))))
            .collect();
        format!("\n        <ul>{}</ul>", items.join(""))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8" />
    <title>{title}</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        h1 {{ color: #2c3e50; }}
        table {{ border-collapse: collapse; width: 100%; margin-top: 10px; }}
        th, td {{ border: 1px solid #ccc; padding: 8px; text-align: left; }}
        th {{ background: #f4f6f8; }}
        .section {{ margin-bottom: 20px; }}
        .present {{ color: #1e7e34; }}
        .missing {{ color: #c0392b; }}
        .verdict {{ font-size: 1.4em; font-weight: bold; padding: 6px 12px; display: inline-block; }}
        .approved {{ color: #ffffff; background: #1e7e34; }}
        .needs-review {{ color: #ffffff; background: #d35400; }}
        .fingerprint {{ font-family: monospace; color: #7f8c8d; }}
    </style>
</head>
<body>
    <h1>{title}</h1>

    <div class="section">
        <h2>{metrics_heading}</h2>
        <table>
            <tr><th>{metric_col}</th><th>{value_col}</th></tr>
            {metric_rows}
        </table>
        <p>{source_label}: {source}</p>
    </div>

    <div class="section">
        <h2>{checklist_heading}</h2>
        <table>
            <tr><th>{check_col}</th><th>{path_col}</th><th>{status_col}</th></tr>
            {check_rows}
        </table>
    </div>

    <div class="section">
        <h2>{verdict_heading}</h2>
        <p class="verdict {verdict_class}">{verdict}</p>{reasons}
        <p>{policy_note} {threshold}.</p>
        <p class="fingerprint">{fingerprint_label}: {fingerprint}</p>
    </div>
</body>
</html>
"#,
        lang = l.lang_code,
        title = l.title,
        metrics_heading = l.metrics_heading,
        metric_col = l.metric_col,
        value_col = l.value_col,
        metric_rows = metric_rows.join("\n            "),
        source_label = l.source_label,
        source = escape_html(&l.source(report)),
        checklist_heading = l.checklist_heading,
        check_col = l.check_col,
        path_col = l.path_col,
        status_col = l.status_col,
        check_rows = check_rows.join("\n            "),
        verdict_heading = l.verdict_heading,
        verdict_class = verdict_class,
        verdict = escape_html(&l.verdict(report.verdict)),
        reasons = reasons,
        policy_note = l.policy_note,
        threshold = report.threshold,
        fingerprint_label = l.fingerprint,
        fingerprint = report.fingerprint,
    )
}

pub fn render_markdown(report: &GovernanceReport, l: &Labels) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", l.title));

    out.push_str(&format!("## {}\n\n", l.metrics_heading));
    out.push_str(&format!("| {} | {} |\n|---|---|\n", l.metric_col, l.value_col));
    out.push_str(&format!("| {} | {} |\n", l.accuracy, l.metric(report.accuracy)));
    out.push_str(&format!("| {} | {} |\n", l.f1, l.metric(report.f1)));
    for m in &report.extra_metrics {
        out.push_str(&format!("| {} | {} |\n", escape_md(&m.name), m.value));
    }
    out.push_str(&format!(
        "\n{}: {}\n\n",
        l.source_label,
        escape_md(&l.source(report))
    ));

    out.push_str(&format!("## {}\n\n", l.checklist_heading));
    out.push_str(&format!(
        "| {} | {} | {} |\n|---|---|---|\n",
        l.check_col, l.path_col, l.status_col
    ));
    for c in &report.checks {
        let path = if linkable(c) {
            format!("[{}]({})", escape_md(&c.path), md_link_target(&c.href))
        } else {
            code_span(&c.path)
        };
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            check_title(c.name),
            path,
            l.status(c.status)
        ));
    }

    out.push_str(&format!("\n## {}\n\n", l.verdict_heading));
    out.push_str(&format!("**{}**\n\n", l.verdict(report.verdict)));
    for r in &report.review_reasons {
        out.push_str(&format!("- {}\n", l.reason(r)));
    }
    if !report.review_reasons.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("{} {}.\n\n", l.policy_note, report.threshold));
    out.push_str(&format!("{}: `{}`\n", l.fingerprint, report.fingerprint));
    out
}
